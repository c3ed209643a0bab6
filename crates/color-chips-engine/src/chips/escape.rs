use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use uuid::Uuid;

use super::pattern::COLOR_PATTERN;

/// The character that opts a color literal out of chip generation.
pub const ESCAPE_MARKER: char = ':';

/// Opening sentinel of a placeholder. Private-use code points never appear in
/// prose by accident.
pub const PLACEHOLDER_OPEN: char = '\u{E000}';
pub const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// Marker (optionally written `\:` as in markdown source) directly followed by
/// a color literal. Group 1 is the bare literal.
fn escape_regex() -> &'static Regex {
    static ESCAPE_REGEX: OnceLock<Regex> = OnceLock::new();
    ESCAPE_REGEX.get_or_init(|| {
        let marker = regex::escape(&ESCAPE_MARKER.to_string());
        Regex::new(&format!(r"\\?{marker}({COLOR_PATTERN})")).expect("Invalid escape regex")
    })
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(&format!(
            "{PLACEHOLDER_OPEN}[0-9a-f]{{32}}{PLACEHOLDER_CLOSE}"
        ))
        .expect("Invalid placeholder regex")
    })
}

/// Placeholders handed out during one rewrite, mapped back to the escaped
/// color literal (marker stripped).
///
/// Each placeholder wraps a random v4 UUID, so it cannot collide with text an
/// author wrote, and it contains neither `#` nor `rgb` so the color pattern
/// never matches inside it.
#[derive(Debug, Default)]
pub struct EscapeTable {
    entries: HashMap<String, String>,
}

impl EscapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swaps every escaped literal in `text` for a fresh placeholder.
    ///
    /// Returns `None` if `text` holds no escaped literal.
    pub fn protect(&mut self, text: &str) -> Option<String> {
        let entries = &mut self.entries;
        let replaced = escape_regex().replace_all(text, |caps: &Captures<'_>| {
            let placeholder = new_placeholder();
            entries.insert(placeholder.clone(), caps[1].to_string());
            placeholder
        });
        match replaced {
            Cow::Borrowed(_) => None,
            Cow::Owned(protected) => Some(protected),
        }
    }

    /// Puts the recorded literal back in place of every placeholder in `text`.
    ///
    /// Restored literals are not rescanned. Returns `None` if `text` holds no
    /// placeholder from this table.
    pub fn restore(&self, text: &str) -> Option<String> {
        if self.entries.is_empty() || !text.contains(PLACEHOLDER_OPEN) {
            return None;
        }
        let mut hits = 0;
        let restored = placeholder_regex().replace_all(text, |caps: &Captures<'_>| {
            match self.entries.get(&caps[0]) {
                Some(literal) => {
                    hits += 1;
                    literal.clone()
                }
                None => caps[0].to_string(),
            }
        });
        if hits == 0 {
            return None;
        }
        Some(restored.into_owned())
    }
}

fn new_placeholder() -> String {
    format!(
        "{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}",
        Uuid::new_v4().simple()
    )
}
