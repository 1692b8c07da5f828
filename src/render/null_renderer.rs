use crate::error::ChartResult;
use crate::render::{DrawCommand, Renderer};

/// No-op rasterizer used by tests and headless runs.
///
/// It still validates every command so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_label_count: usize,
    pub passes: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, commands: &[DrawCommand]) -> ChartResult<()> {
        for command in commands {
            command.validate()?;
        }
        self.last_path_count = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Path(_)))
            .count();
        self.last_label_count = commands.len() - self.last_path_count;
        self.passes += 1;
        Ok(())
    }
}
