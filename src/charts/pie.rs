use std::f64::consts::{FRAC_PI_2, TAU};

use crate::api::ChartConfiguration;
use crate::core::Viewport;
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive};

use super::layout::{EDGE_PADDING_PX, LABEL_FONT_PX, category_fill, category_font};

const LABEL_RADIUS_RATIO: f64 = 0.65;
const SLICE_BORDER_PX: f64 = 1.0;

/// Wedges run clockwise from 12 o'clock, sized by each category's share of
/// the non-negative total. Categories with no share get no wedge or label.
#[must_use]
pub fn layout(config: &ChartConfiguration, viewport: Viewport) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let radius = viewport.width_f64().min(viewport.height_f64()) / 2.0 - EDGE_PADDING_PX;
    if !viewport.is_valid() || radius <= 0.0 {
        return frame;
    }
    let cx = viewport.width_f64() / 2.0;
    let cy = viewport.height_f64() / 2.0;

    // Values are scaled by the largest one so the total cannot overflow.
    let peak = config
        .list_of_types
        .iter()
        .map(|category| category.value)
        .fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return frame;
    }
    let total: f64 = config
        .list_of_types
        .iter()
        .map(|category| category.value.max(0.0) / peak)
        .sum();

    let mut start = -FRAC_PI_2;
    for (index, category) in config.list_of_types.iter().enumerate() {
        let share = category.value.max(0.0) / peak / total;
        if share <= 0.0 {
            continue;
        }
        let end = start + share * TAU;
        frame.wedges.push(
            WedgePrimitive::new(cx, cy, radius, start, end, category_fill(category, index))
                .with_border(SLICE_BORDER_PX, Color::WHITE),
        );

        let mid = (start + end) / 2.0;
        let label_radius = if share >= 1.0 { 0.0 } else { radius * LABEL_RADIUS_RATIO };
        frame.texts.push(TextPrimitive::new(
            category.text.clone(),
            cx + label_radius * mid.cos(),
            cy + label_radius * mid.sin() - LABEL_FONT_PX / 2.0,
            LABEL_FONT_PX,
            category_font(category),
            TextHAlign::Center,
        ));
        start = end;
    }
    frame
}
