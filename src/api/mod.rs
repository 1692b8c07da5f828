mod cancel;
mod render_snapshot;
mod renderer_config;
mod series_renderer;

pub use cancel::CancelToken;
pub use render_snapshot::{
    RENDER_SNAPSHOT_JSON_SCHEMA_V1, RenderSnapshot, RenderSnapshotJsonContractV1,
};
pub use renderer_config::RendererConfig;
pub use series_renderer::{RenderReport, SeriesFailure, SeriesRenderer};
