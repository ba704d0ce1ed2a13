use crate::dom::Element;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Mirrors a frame as an `<svg>` element tree, painted in frame order.
///
/// The svg is decorative (`aria-hidden`); the accessible description lives
/// beside it in the container.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> Element {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let svg = Element::new("svg")
        .with_attribute("xmlns", SVG_NAMESPACE)
        .with_attribute("width", width.to_string())
        .with_attribute("height", height.to_string())
        .with_attribute("viewBox", format!("0 0 {width} {height}"))
        .with_attribute("aria-hidden", "true");

    for wedge in &frame.wedges {
        svg.append_child(&wedge_element(*wedge));
    }
    for rect in &frame.rects {
        svg.append_child(&rect_element(*rect));
    }
    for line in &frame.lines {
        svg.append_child(&line_element(*line));
    }
    for text in &frame.texts {
        svg.append_child(&text_element(text));
    }
    svg
}

fn wedge_element(wedge: WedgePrimitive) -> Element {
    let element = if wedge.is_full_circle() {
        Element::new("circle")
            .with_attribute("cx", coord(wedge.cx))
            .with_attribute("cy", coord(wedge.cy))
            .with_attribute("r", coord(wedge.radius))
    } else {
        let (x1, y1) = point_on_circle(wedge, wedge.start_angle);
        let (x2, y2) = point_on_circle(wedge, wedge.end_angle);
        let large_arc = u8::from(wedge.sweep() > std::f64::consts::PI);
        let r = coord(wedge.radius);
        Element::new("path").with_attribute(
            "d",
            format!(
                "M{} {} L{} {} A{r} {r} 0 {large_arc} 1 {} {} Z",
                coord(wedge.cx),
                coord(wedge.cy),
                coord(x1),
                coord(y1),
                coord(x2),
                coord(y2),
            ),
        )
    };
    let element = element.with_attribute("fill", wedge.fill_color.to_css_hex());
    with_stroke(element, wedge.border_width, wedge.border_color.to_css_hex())
}

fn rect_element(rect: RectPrimitive) -> Element {
    let element = Element::new("rect")
        .with_attribute("x", coord(rect.x))
        .with_attribute("y", coord(rect.y))
        .with_attribute("width", coord(rect.width))
        .with_attribute("height", coord(rect.height))
        .with_attribute("fill", rect.fill_color.to_css_hex());
    with_stroke(element, rect.border_width, rect.border_color.to_css_hex())
}

fn line_element(line: LinePrimitive) -> Element {
    Element::new("line")
        .with_attribute("x1", coord(line.x1))
        .with_attribute("y1", coord(line.y1))
        .with_attribute("x2", coord(line.x2))
        .with_attribute("y2", coord(line.y2))
        .with_attribute("stroke", line.color.to_css_hex())
        .with_attribute("stroke-width", coord(line.stroke_width))
}

fn text_element(text: &TextPrimitive) -> Element {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    Element::new("text")
        .with_attribute("x", coord(text.x))
        .with_attribute("y", coord(text.y))
        .with_attribute("font-size", coord(text.font_size_px))
        .with_attribute("fill", text.color.to_css_hex())
        .with_attribute("text-anchor", anchor)
        .with_attribute("dominant-baseline", "hanging")
        .with_text(text.text.clone())
}

fn with_stroke(element: Element, width: f64, color: String) -> Element {
    if width > 0.0 {
        element
            .with_attribute("stroke", color)
            .with_attribute("stroke-width", coord(width))
    } else {
        element
    }
}

fn point_on_circle(wedge: WedgePrimitive, angle: f64) -> (f64, f64) {
    (
        wedge.cx + wedge.radius * angle.cos(),
        wedge.cy + wedge.radius * angle.sin(),
    )
}

/// Two decimals at most, without trailing zeros.
fn coord(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
