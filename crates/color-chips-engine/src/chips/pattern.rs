use std::sync::OnceLock;

use regex::Regex;

/// Recognised color literals, as leftmost-first alternatives.
///
/// Hex forms are tried shortest first and each must end on an ASCII word
/// boundary, so `#ffffff` is one six digit token rather than `#fff` plus stray
/// digits, while `#fff` followed by a non-ASCII letter still matches.
pub const COLOR_PATTERN: &str = concat!(
    r"#[0-9A-Fa-f]{3}(?-u:\b)",
    r"|#[0-9A-Fa-f]{4}(?-u:\b)",
    r"|#[0-9A-Fa-f]{6}(?-u:\b)",
    r"|#[0-9A-Fa-f]{8}(?-u:\b)",
    r"|rgb\(\s*[0-9]+\s*,\s*[0-9]+\s*,\s*[0-9]+\s*\)",
    r"|rgba\(\s*[0-9]+\s*,\s*[0-9]+\s*,\s*[0-9]+\s*,\s*(?:0|1|0?\.[0-9]+)\s*\)",
);

/// A color literal found in a text value, with byte offsets into that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken<'a> {
    pub start: usize,
    pub end: usize,
    pub literal: &'a str,
}

/// The compiled [`COLOR_PATTERN`], built once.
pub fn color_regex() -> &'static Regex {
    static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    COLOR_REGEX.get_or_init(|| Regex::new(COLOR_PATTERN).expect("Invalid color regex"))
}

/// Finds every color literal in `text`, left to right, without overlap.
pub fn find_color_tokens(text: &str) -> Vec<ColorToken<'_>> {
    color_regex()
        .find_iter(text)
        .map(|m| ColorToken {
            start: m.start(),
            end: m.end(),
            literal: m.as_str(),
        })
        .collect()
}
