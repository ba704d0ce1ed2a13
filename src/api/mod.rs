//! Host-facing surface: params normalization and the chart controller.

mod accessibility;
mod chart_config;
mod controller;

pub use accessibility::{SCREEN_READER_CLASS, describe_for_screen_readers};
pub use chart_config::{ChartConfiguration, ChartKind, DEFAULT_FIGURE_DEFINITION, RawChartParams};
pub use controller::{CONTAINER_CLASS, ChartController, WRAPPER_CLASS};
