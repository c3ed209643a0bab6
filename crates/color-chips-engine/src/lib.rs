//! # color-chips-engine
//!
//! Rewrites color literals in a document tree into visual chips.
//!
//! ```text
//! markdown source → markdown::to_tree → Pipeline [ColorChips, ...] → html::render
//! ```
//!
//! The rewriter itself ([`chips`]) only needs a [`tree::Node`]; the markdown
//! and HTML stages are conveniences for callers that start from text.

pub mod chips;
pub mod html;
pub mod markdown;
pub mod pipeline;
pub mod tree;

// Re-export key types for easier usage
pub use chips::{ChipOptions, ChipStyles, ColorChips, StyleMap, build_chip, rewrite};
pub use pipeline::{FnTransform, Pipeline, Transform};
pub use tree::{Node, Properties};

/// Markdown in, HTML out, with the color chip stage in between.
pub fn render_markdown(source: &str, options: &ChipOptions) -> String {
    let mut tree = markdown::to_tree(source);
    Pipeline::new()
        .with_stage(ColorChips::new(options))
        .run(&mut tree);
    html::render(&tree)
}
