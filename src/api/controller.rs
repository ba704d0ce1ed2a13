use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::charts::{ChartRenderer, RendererRegistry};
use crate::core::{Category, RawCategory, filter_data};
use crate::dom::Element;
use crate::error::{ChartError, ChartResult};
use crate::events::{Event, EventDispatcher, ListenerId, RESIZE_EVENT};
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfiguration, ChartKind, RawChartParams, describe_for_screen_readers};

/// Class added to every container the chart is attached to.
pub const CONTAINER_CLASS: &str = "chart-host";
/// Class of the element the renderer draws into.
pub const WRAPPER_CLASS: &str = "chart-canvas";

#[derive(Default)]
struct Attachment {
    wrapper: Option<Element>,
    chart: Option<Box<dyn ChartRenderer>>,
    container: Option<Element>,
}

/// Validates chart params, builds the matching renderer on first attach and
/// relays resize notifications into it while its container is visible.
///
/// ```
/// use category_chart::api::{ChartController, ChartKind, RawChartParams};
/// use category_chart::core::{RawCategory, Viewport};
/// use category_chart::dom::Element;
///
/// let params = RawChartParams::new()
///     .with_graph_mode("barChart")
///     .with_category(RawCategory::new(" Apples ", "3"));
/// let mut chart = ChartController::new(params);
/// assert_eq!(chart.kind(), ChartKind::Bar);
///
/// let container = Element::new("div").with_size(Viewport::new(400, 300));
/// chart.attach(&container);
/// assert!(chart.is_attached());
/// ```
pub struct ChartController {
    config: ChartConfiguration,
    kind: ChartKind,
    registry: RendererRegistry,
    events: EventDispatcher,
    attachment: Rc<RefCell<Attachment>>,
    resize_listener: Option<ListenerId>,
}

impl ChartController {
    /// Creates a controller backed by the built-in renderers.
    ///
    /// Never fails: malformed params are coerced or defaulted.
    #[must_use]
    pub fn new(params: RawChartParams) -> Self {
        Self::with_registry(params, RendererRegistry::new())
    }

    #[must_use]
    pub fn with_registry(params: RawChartParams, registry: RendererRegistry) -> Self {
        let config = ChartConfiguration::normalize(params);
        let kind = config.kind();
        debug!(
            %kind,
            categories = config.list_of_types.len(),
            "chart controller created"
        );
        Self {
            config,
            kind,
            registry,
            events: EventDispatcher::new(),
            attachment: Rc::new(RefCell::new(Attachment::default())),
            resize_listener: None,
        }
    }

    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self::new(RawChartParams::from_value(value))
    }

    /// Fails only when `input` is not valid JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(Self::new(RawChartParams::from_json_str(input)?))
    }

    /// See [`crate::core::filter_data`].
    #[must_use]
    pub fn filter_data(data_set: &[RawCategory]) -> Vec<Category> {
        filter_data(data_set)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfiguration {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Renders into `container`.
    ///
    /// The wrapper element and renderer are created on the first successful
    /// call and reused afterwards. Every call clears the container, moves the
    /// wrapper into it and appends a fresh screen-reader description.
    pub fn attach(&mut self, container: &Element) {
        let wrapper = self.ensure_wrapper();
        container.clear_children();
        container.add_class(CONTAINER_CLASS);
        container.append_child(&wrapper);
        self.ensure_chart(&wrapper);
        container.append_child(&describe_for_screen_readers(&self.config));
        self.attachment.borrow_mut().container = Some(container.clone());
        self.subscribe_resize();
        debug!(kind = %self.kind, "chart attached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.borrow().chart.is_some()
    }

    #[must_use]
    pub fn wrapper(&self) -> Option<Element> {
        self.attachment.borrow().wrapper.clone()
    }

    /// Container of the most recent `attach` call.
    #[must_use]
    pub fn container(&self) -> Option<Element> {
        self.attachment.borrow().container.clone()
    }

    /// Current layout of the renderer, if one exists.
    #[must_use]
    pub fn frame(&self) -> Option<RenderFrame> {
        self.attachment
            .borrow()
            .chart
            .as_ref()
            .map(|chart| chart.frame().clone())
    }

    /// Paints the current layout with a drawing backend.
    pub fn render_with<B: Renderer>(&self, backend: &mut B) -> ChartResult<()> {
        let attachment = self.attachment.borrow();
        let chart = attachment.chart.as_ref().ok_or(ChartError::NotAttached)?;
        backend.render(chart.frame())
    }

    pub fn on(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Event) + 'static,
    ) -> ListenerId {
        self.events.on(name, handler)
    }

    pub fn once(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Event) + 'static,
    ) -> ListenerId {
        self.events.once(name, handler)
    }

    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        self.events.off(name, id)
    }

    /// Fires `name` and returns how many handlers ran.
    pub fn trigger(&mut self, name: &str) -> usize {
        self.events.trigger(name)
    }

    /// Shorthand for `trigger(RESIZE_EVENT)`.
    pub fn resize(&mut self) -> usize {
        self.trigger(RESIZE_EVENT)
    }

    fn ensure_wrapper(&self) -> Element {
        let mut attachment = self.attachment.borrow_mut();
        attachment
            .wrapper
            .get_or_insert_with(|| {
                Element::new("div")
                    .with_class(WRAPPER_CLASS)
                    .with_class(self.kind.css_class())
            })
            .clone()
    }

    fn ensure_chart(&self, wrapper: &Element) {
        if self.attachment.borrow().chart.is_some() {
            return;
        }
        match self.registry.create(self.kind, &self.config, wrapper) {
            Ok(chart) => {
                debug!(kind = %self.kind, "chart renderer created");
                self.attachment.borrow_mut().chart = Some(chart);
            }
            Err(err) => {
                warn!(error = %err, "chart renderer unavailable; wrapper left empty");
            }
        }
    }

    fn subscribe_resize(&mut self) {
        if self.resize_listener.is_some() {
            return;
        }
        let weak_state = Rc::downgrade(&self.attachment);
        let id = self.events.on(RESIZE_EVENT, move |_event| {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            let Attachment {
                container, chart, ..
            } = &mut *state;
            if !container.as_ref().is_some_and(Element::is_visible) {
                trace!("container hidden; skipping chart resize");
                return;
            }
            if let Some(chart) = chart.as_mut() {
                trace!(kind = %chart.kind(), "forwarding resize");
                chart.resize();
            }
        });
        self.resize_listener = Some(id);
    }
}

impl fmt::Debug for ChartController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartController")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("events", &self.events)
            .field("attached", &self.is_attached())
            .finish()
    }
}
