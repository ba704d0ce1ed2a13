//! category-chart: pie, bar, extended-bar and line charts for small
//! category/value data sets.
//!
//! [`ChartController`] sanitizes host params, picks a renderer through a
//! [`charts::RendererRegistry`], attaches it to a container element once and
//! relays resize notifications while the container is visible.

pub mod api;
pub mod charts;
pub mod core;
pub mod dom;
pub mod error;
pub mod events;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfiguration, ChartController, ChartKind, RawChartParams};
pub use error::{ChartError, ChartResult};
