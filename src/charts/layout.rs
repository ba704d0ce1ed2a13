use crate::core::{Category, format_value};
use crate::render::Color;

pub(crate) const LABEL_FONT_PX: f64 = 12.0;
pub(crate) const TITLE_FONT_PX: f64 = 16.0;
pub(crate) const EDGE_PADDING_PX: f64 = 8.0;

pub(crate) const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
pub(crate) const GRID_COLOR: Color = Color::rgb(0.85, 0.85, 0.85);

const PALETTE: [Color; 6] = [
    Color::rgb(0.984, 0.690, 0.200),
    Color::rgb(0.678, 0.847, 0.902),
    Color::rgb(0.565, 0.933, 0.565),
    Color::rgb(0.957, 0.502, 0.502),
    Color::rgb(0.729, 0.596, 0.882),
    Color::rgb(0.996, 0.859, 0.541),
];

/// Fill for the category at `index`: its own color when parseable,
/// otherwise a palette entry.
pub(crate) fn category_fill(category: &Category, index: usize) -> Color {
    category
        .color
        .as_deref()
        .and_then(Color::from_css_hex)
        .unwrap_or(PALETTE[index % PALETTE.len()])
}

pub(crate) fn category_font(category: &Category) -> Color {
    category
        .font_color
        .as_deref()
        .and_then(Color::from_css_hex)
        .unwrap_or(Color::BLACK)
}

/// Rectangle of the viewport reserved for data marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Insets a `width` × `height` surface; `None` when nothing is left.
    pub fn inset(
        width: f64,
        height: f64,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Option<Self> {
        let plot = Self {
            left,
            top,
            width: width - left - right,
            height: height - top - bottom,
        };
        (plot.width > 0.0 && plot.height > 0.0).then_some(plot)
    }

    pub fn right(self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Horizontal center of slot `index` out of `count` equal slots.
    pub fn slot_center(self, index: usize, count: usize) -> f64 {
        let slot = self.width / count as f64;
        self.left + slot * (index as f64 + 0.5)
    }
}

/// Linear value axis that always includes zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn covering(categories: &[Category]) -> Self {
        let (min, max) = categories
            .iter()
            .fold((0.0_f64, 0.0_f64), |(min, max), category| {
                (min.min(category.value), max.max(category.value))
            });
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    /// Differences are taken on halved bounds so spans wider than
    /// `f64::MAX` stay finite.
    pub fn to_y(self, value: f64, plot: PlotArea) -> f64 {
        let span = self.max / 2.0 - self.min / 2.0;
        plot.top + plot.height * ((self.max / 2.0 - value / 2.0) / span)
    }

    /// `count` evenly spaced values from `min` to `max` inclusive.
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let last = (count - 1) as f64;
        (0..count)
            .map(|i| {
                let t = i as f64 / last;
                self.min * (1.0 - t) + self.max * t
            })
            .collect()
    }
}

/// Tick label text rounded to four decimals.
pub(crate) fn tick_label(value: f64) -> String {
    if value.abs() >= 1e15 {
        return format_value(value);
    }
    format_value((value * 10_000.0).round() / 10_000.0)
}
