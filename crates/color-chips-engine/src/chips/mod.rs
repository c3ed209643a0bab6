//! # Color Chips
//!
//! Detects color literals (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`,
//! `rgba()`) in text nodes and replaces each with a chip: a small swatch plus
//! the literal itself.
//!
//! ## Modules
//!
//! - **`pattern`**: the color literal regex and `find_color_tokens()`
//! - **`escape`**: `EscapeTable`, hiding `:`-escaped literals behind placeholders
//! - **`style`**: `StyleMap`, `ChipOptions` and the resolved `ChipStyles`
//! - **`builder`**: `build_chip()` for the replacement node
//! - **`rewrite`**: the three pass tree rewrite and the `ColorChips` stage
//!
//! ## Escaping
//!
//! A literal written directly after `:` (or `\:` in markdown source) is left
//! as plain text and the marker is removed: `:#fff` renders as `#fff`.

pub mod builder;
pub mod escape;
pub mod pattern;
pub mod rewrite;
pub mod style;

pub use builder::{CHIP_CLASS, build_chip};
pub use escape::{ESCAPE_MARKER, EscapeTable};
pub use pattern::{ColorToken, find_color_tokens};
pub use rewrite::{ColorChips, rewrite};
pub use style::{ChipOptions, ChipStyles, StyleMap};
