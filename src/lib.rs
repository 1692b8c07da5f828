//! chart-series-render: headless series rendering core.
//!
//! Styled data series go in; an ordered list of backend-agnostic draw
//! commands (paths and value labels) comes out. Rasterizing those commands is
//! left to a [`render::Renderer`] implementation supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RendererConfig, SeriesRenderer};
pub use error::{ChartError, ChartResult, ConfigError, DomainError};
