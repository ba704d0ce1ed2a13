//! Chart renderers and the kind → renderer registry.
//!
//! Each built-in chart is a pure layout function from configuration and
//! viewport to a [`RenderFrame`]; [`SceneChart`] binds one to a wrapper
//! element.

pub mod bar;
pub mod extended_bar;
mod layout;
pub mod line;
pub mod pie;
mod registry;
mod scene_chart;

pub use registry::{RendererFactory, RendererRegistry};
pub use scene_chart::{LayoutFn, SceneChart, builtin_layout};

use crate::api::ChartKind;
use crate::render::RenderFrame;

/// Object drawing one chart kind into its wrapper element.
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;

    /// Re-lays out the chart for the wrapper's current size.
    fn resize(&mut self);

    /// Most recent layout.
    fn frame(&self) -> &RenderFrame;
}
