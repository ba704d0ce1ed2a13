use std::cell::Cell;
use std::rc::Rc;

use category_chart::api::{
    CONTAINER_CLASS, ChartController, ChartKind, RawChartParams, SCREEN_READER_CLASS,
    WRAPPER_CLASS,
};
use category_chart::charts::{ChartRenderer, RendererRegistry, SceneChart};
use category_chart::core::{RawCategory, Viewport};
use category_chart::dom::Element;
use category_chart::render::{NullRenderer, RenderFrame};
use category_chart::ChartError;

fn counting_registry(kind: ChartKind, constructed: Rc<Cell<usize>>) -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    registry.register(kind, move |config, wrapper| {
        constructed.set(constructed.get() + 1);
        Box::new(SceneChart::new(kind, config, wrapper))
    });
    registry
}

fn sized_container() -> Element {
    Element::new("div").with_size(Viewport::new(480, 320))
}

#[test]
fn attach_twice_constructs_exactly_one_renderer() {
    let constructed = Rc::new(Cell::new(0));
    let params = RawChartParams::new().with_graph_mode("barChart");
    let registry = counting_registry(ChartKind::Bar, constructed.clone());
    let mut chart = ChartController::with_registry(params, registry);
    let container = sized_container();

    chart.attach(&container);
    chart.attach(&container);

    assert_eq!(constructed.get(), 1);
}

#[test]
fn renderer_is_not_built_before_first_attach() {
    let constructed = Rc::new(Cell::new(0));
    let chart = ChartController::with_registry(
        RawChartParams::new(),
        counting_registry(ChartKind::Pie, constructed.clone()),
    );

    assert_eq!(constructed.get(), 0);
    assert!(!chart.is_attached());
    assert!(chart.wrapper().is_none());
    assert!(chart.frame().is_none());
}

#[test]
fn attach_prepares_container_with_wrapper_then_description() {
    let mut chart = ChartController::new(RawChartParams::new().with_graph_mode("extendedBarChart"));
    let container = sized_container();
    container.append_child(&Element::new("p").with_text("stale content"));

    chart.attach(&container);

    assert!(container.has_class(CONTAINER_CLASS));
    let children = container.children();
    assert_eq!(children.len(), 2);
    let wrapper = chart.wrapper().expect("wrapper");
    assert!(children[0].ptr_eq(&wrapper));
    assert!(wrapper.has_class(WRAPPER_CLASS));
    assert!(wrapper.has_class("chart-extendedbar"));
    assert!(children[1].has_class(SCREEN_READER_CLASS));
    assert_eq!(children[1].attribute("role").as_deref(), Some("img"));
}

#[test]
fn reattaching_moves_the_same_wrapper_into_the_new_container() {
    let mut chart = ChartController::new(RawChartParams::new());
    let first = sized_container();
    let second = sized_container();

    chart.attach(&first);
    let wrapper = chart.wrapper().expect("wrapper");
    chart.attach(&second);

    assert!(chart.wrapper().expect("wrapper").ptr_eq(&wrapper));
    assert!(first.children().iter().all(|child| !child.ptr_eq(&wrapper)));
    assert!(second.children()[0].ptr_eq(&wrapper));
    assert!(chart.container().expect("container").ptr_eq(&second));
}

#[test]
fn reattaching_the_same_container_keeps_a_single_description_block() {
    let mut chart = ChartController::new(RawChartParams::new());
    let container = sized_container();

    chart.attach(&container);
    chart.attach(&container);
    chart.attach(&container);

    let children = container.children();
    assert_eq!(children.len(), 2);
    assert_eq!(
        children
            .iter()
            .filter(|child| child.attribute("role").as_deref() == Some("img"))
            .count(),
        1
    );
}

#[test]
fn built_in_renderer_draws_svg_into_the_wrapper() {
    let mut chart = ChartController::new(
        RawChartParams::new()
            .with_category(RawCategory::new("A", 1))
            .with_category(RawCategory::new("B", 3)),
    );
    let container = sized_container();

    chart.attach(&container);

    let wrapper = chart.wrapper().expect("wrapper");
    let svg = &wrapper.children()[0];
    assert_eq!(svg.tag(), "svg");
    assert_eq!(svg.attribute("width").as_deref(), Some("480"));
    let frame = chart.frame().expect("frame");
    assert_eq!(frame.wedges.len(), 2);
}

#[test]
fn render_with_backend_requires_attachment() {
    let mut chart = ChartController::new(RawChartParams::new().with_graph_mode("lineChart"));
    let mut backend = NullRenderer::default();

    let err = chart
        .render_with(&mut backend)
        .expect_err("unattached render must fail");
    assert!(matches!(err, ChartError::NotAttached));

    chart.attach(&sized_container());
    chart.render_with(&mut backend).expect("render");
    assert_eq!(backend.frames_rendered, 1);
    assert_eq!(backend.last_rect_count, 3);
    assert_eq!(backend.last_line_count, 3);
}

#[test]
fn missing_factory_leaves_wrapper_empty_and_retries_on_next_attach() {
    let mut registry = RendererRegistry::new();
    assert!(registry.unregister(ChartKind::Line));
    let params = RawChartParams::new().with_graph_mode("lineChart");
    let mut chart = ChartController::with_registry(params, registry);
    let container = sized_container();

    chart.attach(&container);

    assert!(!chart.is_attached());
    assert!(chart.wrapper().expect("wrapper").children().is_empty());
    assert_eq!(container.children().len(), 2);
    assert_eq!(chart.resize(), 1);
}

struct StaticChart {
    frame: RenderFrame,
}

impl ChartRenderer for StaticChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn resize(&mut self) {}

    fn frame(&self) -> &RenderFrame {
        &self.frame
    }
}

#[test]
fn registered_factory_receives_normalized_config_and_wrapper() {
    let seen = Rc::new(Cell::new((0usize, false)));
    let mut registry = RendererRegistry::empty();
    let seen_in_factory = seen.clone();
    registry.register(ChartKind::Pie, move |config, wrapper| {
        seen_in_factory.set((config.list_of_types.len(), wrapper.has_class("chart-pie")));
        Box::new(StaticChart {
            frame: RenderFrame::new(wrapper.viewport()),
        })
    });
    let mut chart = ChartController::with_registry(RawChartParams::new(), registry);

    chart.attach(&sized_container());

    assert_eq!(seen.get(), (3, true));
    assert!(chart.is_attached());
}
