use crate::api::ChartConfiguration;
use crate::core::Viewport;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::bar::{push_bars, push_baseline};
use super::layout::{
    AXIS_COLOR, EDGE_PADDING_PX, GRID_COLOR, LABEL_FONT_PX, PlotArea, TITLE_FONT_PX, ValueScale,
    tick_label,
};

const TICK_COUNT: usize = 5;
const TICK_LENGTH_PX: f64 = 4.0;
const TICK_LABEL_WIDTH_PX: f64 = 40.0;
const TITLE_GAP_PX: f64 = 6.0;

/// Bar layout inside an axis frame: value ticks with grid lines on the left,
/// plus optional chart title, x-axis title and y-axis title.
#[must_use]
pub fn layout(config: &ChartConfiguration, viewport: Viewport) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    if config.list_of_types.is_empty() {
        return frame;
    }
    let width = viewport.width_f64();
    let height = viewport.height_f64();

    let title_band = if config.chart_text.is_some() {
        TITLE_FONT_PX + TITLE_GAP_PX * 2.0
    } else {
        0.0
    };
    let y_title_band = if config.y_axis_text.is_some() {
        LABEL_FONT_PX + TITLE_GAP_PX
    } else {
        0.0
    };
    let x_title_band = if config.x_axis_text.is_some() {
        LABEL_FONT_PX + TITLE_GAP_PX
    } else {
        0.0
    };

    let Some(plot) = PlotArea::inset(
        width,
        height,
        EDGE_PADDING_PX + y_title_band + TICK_LABEL_WIDTH_PX + TICK_LENGTH_PX,
        EDGE_PADDING_PX + title_band + LABEL_FONT_PX,
        EDGE_PADDING_PX,
        EDGE_PADDING_PX + x_title_band + LABEL_FONT_PX + TITLE_GAP_PX,
    ) else {
        return frame;
    };
    let scale = ValueScale::covering(&config.list_of_types);

    for tick in scale.ticks(TICK_COUNT) {
        let y = scale.to_y(tick, plot);
        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            1.0,
            GRID_COLOR,
        ));
        frame.lines.push(LinePrimitive::new(
            plot.left - TICK_LENGTH_PX,
            y,
            plot.left,
            y,
            1.0,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            tick_label(tick),
            plot.left - TICK_LENGTH_PX - 2.0,
            y - LABEL_FONT_PX / 2.0,
            LABEL_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        1.0,
        AXIS_COLOR,
    ));

    push_bars(&mut frame, config, plot, scale);
    push_baseline(&mut frame, plot, scale);

    if let Some(title) = &config.chart_text {
        frame.texts.push(TextPrimitive::new(
            title.clone(),
            width / 2.0,
            EDGE_PADDING_PX + TITLE_GAP_PX,
            TITLE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }
    if let Some(x_title) = &config.x_axis_text {
        frame.texts.push(TextPrimitive::new(
            x_title.clone(),
            plot.left + plot.width / 2.0,
            height - EDGE_PADDING_PX - LABEL_FONT_PX,
            LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }
    if let Some(y_title) = &config.y_axis_text {
        frame.texts.push(TextPrimitive::new(
            y_title.clone(),
            EDGE_PADDING_PX,
            plot.top - LABEL_FONT_PX - TITLE_GAP_PX / 2.0,
            LABEL_FONT_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
    frame
}
