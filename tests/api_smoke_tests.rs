use category_chart::api::{ChartController, ChartKind};
use category_chart::core::Viewport;
use category_chart::dom::Element;
use category_chart::render::NullRenderer;
use serde_json::json;

#[test]
fn controller_smoke_flow() {
    let _ = category_chart::telemetry::init_default_tracing();

    let mut chart = ChartController::from_value(json!({
        "graphMode": "extendedBarChart",
        "figureDefinition": "Rainfall per month",
        "chartText": "Rainfall",
        "xAxisText": "Month",
        "yAxisText": "mm",
        "listOfTypes": [
            { "text": "Jan", "value": "80.5", "color": "#3366cc", "fontColor": "#fff" },
            { "text": "Feb", "value": 62 },
            { "text": "  ", "value": 10 },
            { "text": "Mar" },
        ],
    }));
    assert_eq!(chart.kind(), ChartKind::ExtendedBar);
    assert_eq!(chart.config().list_of_types.len(), 2);

    let page = Element::new("body").with_size(Viewport::new(640, 480));
    let container = Element::new("div");
    page.append_child(&container);
    chart.attach(&container);
    assert!(chart.is_attached());

    container.set_size(Some(Viewport::new(320, 240)));
    assert_eq!(chart.resize(), 1);
    assert_eq!(
        chart.frame().expect("frame").viewport,
        Viewport::new(320, 240)
    );

    let mut backend = NullRenderer::default();
    chart.render_with(&mut backend).expect("render");
    assert_eq!(backend.last_rect_count, 2);

    let markup = container.to_html();
    assert!(markup.starts_with("<div class=\"chart-host\">"));
    assert!(markup.contains("<svg"));
    assert!(markup.contains("aria-label=\"Rainfall per month\""));
    assert!(markup.contains(">Jan: 80.5</div>"));
    assert!(markup.contains(">Feb: 62</div>"));
}

#[test]
fn tracing_installs_at_most_one_global_subscriber() {
    let _ = category_chart::telemetry::init_tracing_with_filter("category_chart=debug");
    assert!(!category_chart::telemetry::init_tracing_with_filter("category_chart=trace"));
}
