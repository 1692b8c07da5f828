pub mod gradient;
pub mod label_layout;
pub mod path_builder;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod style;
pub mod types;
pub mod value_format;
pub mod value_mapper;

pub use gradient::{GradientRange, resolve_gradient};
pub use label_layout::{layout_labels, select_label_indices};
pub use path_builder::{BarLayout, build_path};
pub use scale::LinearScale;
pub use series::Series;
pub use style::{MonotonicPolicy, SeriesKind, SeriesStyle, SeriesStyleBuilder, Smoothing};
pub use types::{Axis, ChartBounds, DataPoint, ScreenPoint};
pub use value_format::{DecimalValueFormatter, DefaultValueFormatter, ValueFormatter};
pub use value_mapper::{AxisMapping, ValueMapper, map_points};
