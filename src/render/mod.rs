mod command;
mod null_renderer;
mod primitives;

pub use command::{AreaFill, DrawCommand, Label, Path, PathElement};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LabelStyle, LineCap, LineJoin, Stroke, TextAlign};

use crate::error::ChartResult;

/// Contract implemented by any rasterizer backend.
///
/// Backends receive the fully materialized, ordered command list of one pass
/// so drawing code stays isolated from mapping and layout logic. Commands
/// must be drawn in slice order; later commands draw on top.
pub trait Renderer {
    fn render(&mut self, commands: &[DrawCommand]) -> ChartResult<()>;
}
