use std::f64::consts::PI;

use category_chart::ChartError;
use category_chart::core::Viewport;
use category_chart::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, WedgePrimitive, frame_to_svg,
};

fn sample_frame() -> RenderFrame {
    RenderFrame::new(Viewport::new(200, 100))
        .with_wedge(WedgePrimitive::new(50.0, 50.0, 40.0, -PI / 2.0, 0.0, Color::BLACK))
        .with_rect(RectPrimitive::new(10.0, 10.0, 20.0, 30.0, Color::WHITE).with_border(1.0, Color::BLACK))
        .with_line(LinePrimitive::new(0.0, 90.0, 200.0, 90.0, 1.0, Color::BLACK))
        .with_text(TextPrimitive::new(
            "A & B",
            100.0,
            5.0,
            12.0,
            Color::BLACK,
            TextHAlign::Center,
        ))
}

#[test]
fn css_hex_colors_parse_in_short_and_long_forms() {
    assert_eq!(Color::from_css_hex("#000"), Some(Color::BLACK));
    assert_eq!(Color::from_css_hex("#FFFFFF"), Some(Color::WHITE));
    assert_eq!(
        Color::from_css_hex("#ff000080").map(|color| color.to_css_hex()),
        Some("#ff000080".to_owned())
    );
    assert_eq!(Color::from_css_hex(" #fbb033 ").map(Color::to_css_hex), Some("#fbb033".to_owned()));
    assert_eq!(Color::from_css_hex("red"), None);
    assert_eq!(Color::from_css_hex("#12345"), None);
    assert_eq!(Color::from_css_hex("#ggg"), None);
}

#[test]
fn frame_validation_rejects_bad_geometry() {
    sample_frame().validate().expect("valid frame");

    let err = RenderFrame::new(Viewport::new(0, 10))
        .validate()
        .expect_err("empty viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));

    let bad_wedge = RenderFrame::new(Viewport::new(10, 10))
        .with_wedge(WedgePrimitive::new(5.0, 5.0, 4.0, 1.0, 0.0, Color::BLACK));
    assert!(matches!(bad_wedge.validate(), Err(ChartError::InvalidData(_))));

    let bad_rect = RenderFrame::new(Viewport::new(10, 10))
        .with_rect(RectPrimitive::new(0.0, 0.0, -1.0, 5.0, Color::BLACK));
    assert!(matches!(bad_rect.validate(), Err(ChartError::InvalidData(_))));

    let bad_color = RenderFrame::new(Viewport::new(10, 10)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        1.0,
        1.0,
        1.0,
        Color::rgb(2.0, 0.0, 0.0),
    ));
    assert!(matches!(bad_color.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn null_renderer_records_primitive_counts() {
    let mut renderer = NullRenderer::default();

    renderer.render(&sample_frame()).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_wedge_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn svg_projection_emits_one_node_per_primitive_in_paint_order() {
    let svg = frame_to_svg(&sample_frame());

    assert_eq!(svg.attribute("viewBox").as_deref(), Some("0 0 200 100"));
    let tags: Vec<String> = svg.children().iter().map(|child| child.tag()).collect();
    assert_eq!(tags, vec!["path", "rect", "line", "text"]);

    let path = &svg.children()[0];
    assert_eq!(path.attribute("d").as_deref(), Some("M50 50 L50 10 A40 40 0 0 1 90 50 Z"));
    let rect = &svg.children()[1];
    assert_eq!(rect.attribute("stroke").as_deref(), Some("#000000"));
    let text = &svg.children()[3];
    assert_eq!(text.attribute("text-anchor").as_deref(), Some("middle"));
    assert!(svg.to_html().contains(">A &amp; B</text>"));
}

#[test]
fn full_circle_wedge_becomes_svg_circle() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_wedge(WedgePrimitive::new(
        50.0,
        50.0,
        30.0,
        -PI / 2.0,
        -PI / 2.0 + 2.0 * PI,
        Color::WHITE,
    ));

    let svg = frame_to_svg(&frame);

    let circle = &svg.children()[0];
    assert_eq!(circle.tag(), "circle");
    assert_eq!(circle.attribute("r").as_deref(), Some("30"));
    assert_eq!(circle.attribute("fill").as_deref(), Some("#ffffff"));
}
