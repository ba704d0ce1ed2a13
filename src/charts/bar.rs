use crate::api::ChartConfiguration;
use crate::core::{Viewport, format_value};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::layout::{
    AXIS_COLOR, EDGE_PADDING_PX, LABEL_FONT_PX, PlotArea, ValueScale, category_fill,
    category_font,
};

const BAR_FILL_RATIO: f64 = 0.7;
const LABEL_GAP_PX: f64 = 4.0;

#[must_use]
pub fn layout(config: &ChartConfiguration, viewport: Viewport) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let Some(plot) = PlotArea::inset(
        viewport.width_f64(),
        viewport.height_f64(),
        EDGE_PADDING_PX,
        LABEL_FONT_PX + LABEL_GAP_PX * 2.0,
        EDGE_PADDING_PX,
        LABEL_FONT_PX + LABEL_GAP_PX * 2.0,
    ) else {
        return frame;
    };
    if config.list_of_types.is_empty() {
        return frame;
    }
    let scale = ValueScale::covering(&config.list_of_types);
    push_bars(&mut frame, config, plot, scale);
    push_baseline(&mut frame, plot, scale);
    frame
}

/// Bars grow from the zero baseline, one per equal-width slot, with the
/// value label inside the bar when it fits and above it otherwise, and the
/// category label under the plot.
pub(crate) fn push_bars(
    frame: &mut RenderFrame,
    config: &ChartConfiguration,
    plot: PlotArea,
    scale: ValueScale,
) {
    let count = config.list_of_types.len();
    let bar_width = plot.width / count as f64 * BAR_FILL_RATIO;
    let baseline_y = scale.to_y(0.0, plot);

    for (index, category) in config.list_of_types.iter().enumerate() {
        let center_x = plot.slot_center(index, count);
        let value_y = scale.to_y(category.value, plot);
        let top = value_y.min(baseline_y);
        let height = (value_y - baseline_y).abs();
        frame.rects.push(RectPrimitive::new(
            center_x - bar_width / 2.0,
            top,
            bar_width,
            height,
            category_fill(category, index),
        ));

        let (label_y, label_color) = if height >= LABEL_FONT_PX + LABEL_GAP_PX * 2.0 {
            (top + LABEL_GAP_PX, category_font(category))
        } else {
            (top - LABEL_FONT_PX - LABEL_GAP_PX, Color::BLACK)
        };
        frame.texts.push(TextPrimitive::new(
            format_value(category.value),
            center_x,
            label_y,
            LABEL_FONT_PX,
            label_color,
            TextHAlign::Center,
        ));
        frame.texts.push(TextPrimitive::new(
            category.text.clone(),
            center_x,
            plot.bottom() + LABEL_GAP_PX,
            LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }
}

pub(crate) fn push_baseline(frame: &mut RenderFrame, plot: PlotArea, scale: ValueScale) {
    let baseline_y = scale.to_y(0.0, plot);
    frame.lines.push(LinePrimitive::new(
        plot.left,
        baseline_y,
        plot.right(),
        baseline_y,
        1.0,
        AXIS_COLOR,
    ));
}
