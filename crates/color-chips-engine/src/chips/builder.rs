use crate::tree::{Node, Properties};

use super::style::BACKGROUND_COLOR;

/// Class carried by every chip wrapper.
pub const CHIP_CLASS: &str = "color-chip";

/// Builds the node that replaces one color literal: a wrapper `span` holding
/// an empty swatch `span` and the literal as text.
///
/// The swatch's `background-color` is appended after `chip_style` so no
/// configured declaration can shadow it.
pub fn build_chip(color: &str, wrapper_style: &str, chip_style: &str) -> Node {
    let swatch_style = if chip_style.is_empty() {
        format!("{BACKGROUND_COLOR}:{color}")
    } else {
        format!("{chip_style};{BACKGROUND_COLOR}:{color}")
    };

    let swatch = Node::element_with(
        "span",
        Properties::default().with_style(swatch_style),
        vec![],
    );

    Node::element_with(
        "span",
        Properties::default()
            .with_class(CHIP_CLASS)
            .with_style(wrapper_style),
        vec![swatch, Node::text(color)],
    )
}
