use tracing::{debug, trace};

use crate::pipeline::Transform;
use crate::tree::{Node, visit_parents_mut, visit_text_mut};

use super::{
    builder::build_chip,
    escape::EscapeTable,
    pattern::find_color_tokens,
    style::{ChipOptions, ChipStyles},
};

/// The color chip stage. Holds the resolved styles so one instance can rewrite
/// any number of trees.
#[derive(Debug, Clone, Default)]
pub struct ColorChips {
    styles: ChipStyles,
}

impl ColorChips {
    pub fn new(options: &ChipOptions) -> Self {
        Self {
            styles: ChipStyles::resolve(options),
        }
    }

    pub fn styles(&self) -> &ChipStyles {
        &self.styles
    }

    pub fn rewrite(&self, tree: &mut Node) {
        rewrite(tree, &self.styles);
    }
}

impl Transform for ColorChips {
    fn name(&self) -> &str {
        "color-chips"
    }

    fn transform(&self, tree: &mut Node) {
        self.rewrite(tree);
    }
}

/// Replaces every unescaped color literal in the tree's text with a chip and
/// strips the marker from escaped ones.
///
/// Runs three passes. Order matters: escaped literals are hidden behind
/// placeholders before substitution, and put back only once every split is
/// done (a placeholder may end up in any of the text gaps).
pub fn rewrite(tree: &mut Node, styles: &ChipStyles) {
    let mut escapes = EscapeTable::new();

    visit_text_mut(tree, &mut |value: &mut String| {
        if value.is_empty() {
            return;
        }
        if let Some(protected) = escapes.protect(value) {
            *value = protected;
        }
    });

    let mut chips = 0;
    visit_parents_mut(tree, &mut |children: &mut Vec<Node>| {
        chips += splice_chips(children, styles);
    });

    if !escapes.is_empty() {
        visit_text_mut(tree, &mut |value: &mut String| {
            if let Some(restored) = escapes.restore(value) {
                *value = restored;
            }
        });
    }

    debug!(chips, escaped = escapes.len(), "color chip rewrite finished");
}

/// Replaces each text child holding color literals with its split form.
/// Returns the number of chips inserted.
///
/// Replacements are collected first and spliced from the back, so earlier
/// indices stay valid whatever the replacement lengths.
fn splice_chips(children: &mut Vec<Node>, styles: &ChipStyles) -> usize {
    let splices: Vec<(usize, Vec<Node>, usize)> = children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| {
            let (replacement, chips) = split_text(child.text_value()?, styles)?;
            Some((index, replacement, chips))
        })
        .collect();

    let mut total = 0;
    for (index, replacement, chips) in splices.into_iter().rev() {
        trace!(index, nodes = replacement.len(), chips, "splicing chips");
        children.splice(index..=index, replacement);
        total += chips;
    }
    total
}

/// Splits `value` into text gaps and chips, or `None` if it holds no literal.
/// Zero length gaps are dropped.
fn split_text(value: &str, styles: &ChipStyles) -> Option<(Vec<Node>, usize)> {
    if value.is_empty() {
        return None;
    }
    let tokens = find_color_tokens(value);
    if tokens.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut last = 0;
    for token in &tokens {
        if token.start > last {
            out.push(Node::text(&value[last..token.start]));
        }
        out.push(build_chip(token.literal, &styles.wrapper, &styles.chip));
        last = token.end;
    }
    if last < value.len() {
        out.push(Node::text(&value[last..]));
    }

    Some((out, tokens.len()))
}
