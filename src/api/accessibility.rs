use crate::dom::Element;

use super::ChartConfiguration;

/// Class that hides an element visually while keeping it readable by
/// assistive technology.
pub const SCREEN_READER_CLASS: &str = "hidden-but-read";

/// Builds the screen-reader description of a chart: a group labeled with the
/// figure definition holding one `"<text>: <value>"` line per category, in
/// data-set order.
#[must_use]
pub fn describe_for_screen_readers(config: &ChartConfiguration) -> Element {
    // role="img" since assistive support for role="figure" is poor.
    let group = Element::new("div")
        .with_class(SCREEN_READER_CLASS)
        .with_attribute("aria-label", config.figure_definition.clone())
        .with_attribute("role", "img");
    for category in &config.list_of_types {
        group.append_child(
            &Element::new("div")
                .with_class(SCREEN_READER_CLASS)
                .with_text(category.aria_line()),
        );
    }
    group
}
