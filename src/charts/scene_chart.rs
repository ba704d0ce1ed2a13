use tracing::trace;

use crate::api::{ChartConfiguration, ChartKind};
use crate::core::Viewport;
use crate::dom::Element;
use crate::render::{RenderFrame, frame_to_svg};

use super::{ChartRenderer, bar, extended_bar, line, pie};

/// Pure layout step of a built-in chart.
pub type LayoutFn = fn(&ChartConfiguration, Viewport) -> RenderFrame;

/// Built-in renderer: lays out a frame from the wrapper's size and mirrors
/// it into the wrapper as a single `<svg>` child.
///
/// Layout runs once on construction and again on every `resize()`.
pub struct SceneChart {
    kind: ChartKind,
    config: ChartConfiguration,
    wrapper: Element,
    layout: LayoutFn,
    frame: RenderFrame,
    resize_count: usize,
}

impl SceneChart {
    #[must_use]
    pub fn new(kind: ChartKind, config: &ChartConfiguration, wrapper: &Element) -> Self {
        Self::with_layout(kind, config, wrapper, builtin_layout(kind))
    }

    #[must_use]
    pub fn with_layout(
        kind: ChartKind,
        config: &ChartConfiguration,
        wrapper: &Element,
        layout: LayoutFn,
    ) -> Self {
        let mut chart = Self {
            kind,
            config: config.clone(),
            wrapper: wrapper.clone(),
            layout,
            frame: RenderFrame::new(Viewport::default()),
            resize_count: 0,
        };
        chart.redraw();
        chart
    }

    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    fn redraw(&mut self) {
        let viewport = self.wrapper.viewport();
        self.frame = (self.layout)(&self.config, viewport);
        self.wrapper.clear_children();
        if !self.frame.is_empty() {
            self.wrapper.append_child(&frame_to_svg(&self.frame));
        }
        trace!(
            kind = %self.kind,
            width = viewport.width,
            height = viewport.height,
            primitives = self.frame.primitive_count(),
            "chart laid out"
        );
    }
}

impl std::fmt::Debug for SceneChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneChart")
            .field("kind", &self.kind)
            .field("viewport", &self.frame.viewport)
            .field("primitives", &self.frame.primitive_count())
            .field("resize_count", &self.resize_count)
            .finish()
    }
}

impl ChartRenderer for SceneChart {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn resize(&mut self) {
        self.resize_count += 1;
        self.redraw();
    }

    fn frame(&self) -> &RenderFrame {
        &self.frame
    }
}

/// Layout used by the default registry for `kind`.
#[must_use]
pub fn builtin_layout(kind: ChartKind) -> LayoutFn {
    match kind {
        ChartKind::Pie => pie::layout,
        ChartKind::Bar => bar::layout,
        ChartKind::ExtendedBar => extended_bar::layout,
        ChartKind::Line => line::layout,
    }
}
