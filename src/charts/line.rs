use crate::api::ChartConfiguration;
use crate::core::{Viewport, format_value};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::bar::push_baseline;
use super::layout::{EDGE_PADDING_PX, LABEL_FONT_PX, PlotArea, ValueScale, category_fill};

const LINE_WIDTH_PX: f64 = 2.0;
const MARKER_SIZE_PX: f64 = 6.0;
const LABEL_GAP_PX: f64 = 4.0;

/// Points sit at the centers of equal slots and are joined in data-set
/// order. The stroke uses `lineColor` when parseable, else the first
/// category's fill.
#[must_use]
pub fn layout(config: &ChartConfiguration, viewport: Viewport) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let Some(first) = config.list_of_types.first() else {
        return frame;
    };
    let Some(plot) = PlotArea::inset(
        viewport.width_f64(),
        viewport.height_f64(),
        EDGE_PADDING_PX,
        LABEL_FONT_PX + LABEL_GAP_PX * 2.0 + MARKER_SIZE_PX / 2.0,
        EDGE_PADDING_PX,
        LABEL_FONT_PX + LABEL_GAP_PX * 2.0,
    ) else {
        return frame;
    };
    let scale = ValueScale::covering(&config.list_of_types);
    let stroke = config
        .line_color
        .as_deref()
        .and_then(Color::from_css_hex)
        .unwrap_or_else(|| category_fill(first, 0));

    push_baseline(&mut frame, plot, scale);

    let count = config.list_of_types.len();
    let points: Vec<(f64, f64)> = config
        .list_of_types
        .iter()
        .enumerate()
        .map(|(index, category)| {
            (
                plot.slot_center(index, count),
                scale.to_y(category.value, plot),
            )
        })
        .collect();

    for pair in points.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, LINE_WIDTH_PX, stroke));
    }

    for (index, (category, (x, y))) in config.list_of_types.iter().zip(&points).enumerate() {
        frame.rects.push(
            RectPrimitive::new(
                x - MARKER_SIZE_PX / 2.0,
                y - MARKER_SIZE_PX / 2.0,
                MARKER_SIZE_PX,
                MARKER_SIZE_PX,
                category_fill(category, index),
            )
            .with_border(1.0, stroke),
        );
        frame.texts.push(TextPrimitive::new(
            format_value(category.value),
            *x,
            y - MARKER_SIZE_PX / 2.0 - LABEL_GAP_PX - LABEL_FONT_PX,
            LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
        frame.texts.push(TextPrimitive::new(
            category.text.clone(),
            *x,
            plot.bottom() + LABEL_GAP_PX,
            LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }
    frame
}
