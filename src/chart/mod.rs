pub mod render;
pub mod series;

pub use render::{render, ChartSpec};
pub use series::{ChartKind, ChartSeries, OTHER_LABEL};
