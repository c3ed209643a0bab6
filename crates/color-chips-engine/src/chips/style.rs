use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Swatch property that always carries the matched literal.
pub const BACKGROUND_COLOR: &str = "background-color";

pub const DEFAULT_WRAPPER_STYLE: &[(&str, &str)] = &[
    ("display", "inline-flex"),
    ("align-items", "center"),
    ("margin-right", "12px"),
    ("font-family", "monospace"),
];

pub const DEFAULT_CHIP_STYLE: &[(&str, &str)] = &[
    ("display", "inline-block"),
    ("width", "10px"),
    ("height", "10px"),
    ("margin-right", "6px"),
    ("border", "1px solid rgba(255,255,255,0.2)"),
    ("border-radius", "2px"),
];

/// CSS declarations in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an existing value in place or appending.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(index).1)
    }

    /// Key-wise override: keys in `overrides` replace ours, new keys go last.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (property, value) in &overrides.declarations {
            self.set(property.as_str(), value.as_str());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `property:value` pairs joined with `;`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (property, value) in self.iter() {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS property names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut map = StyleMap::new();
                while let Some((property, value)) = access.next_entry::<String, String>()? {
                    map.set(property, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// Caller supplied style overrides. Unset maps mean "defaults only".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipOptions {
    #[serde(alias = "wrapper_style")]
    pub wrapper_style: StyleMap,
    #[serde(alias = "chip_style")]
    pub chip_style: StyleMap,
}

impl ChipOptions {
    pub fn with_wrapper_style(mut self, property: &str, value: &str) -> Self {
        self.wrapper_style.set(property, value);
        self
    }

    pub fn with_chip_style(mut self, property: &str, value: &str) -> Self {
        self.chip_style.set(property, value);
        self
    }
}

/// Style strings resolved once per run and shared by every chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipStyles {
    pub wrapper: String,
    /// Swatch declarations without `background-color`, which is per chip.
    pub chip: String,
}

impl ChipStyles {
    pub fn resolve(options: &ChipOptions) -> Self {
        let mut wrapper: StyleMap = DEFAULT_WRAPPER_STYLE.iter().copied().collect();
        wrapper.merge(&options.wrapper_style);

        let mut chip: StyleMap = DEFAULT_CHIP_STYLE.iter().copied().collect();
        chip.merge(&options.chip_style);
        chip.remove(BACKGROUND_COLOR);

        Self {
            wrapper: wrapper.to_css(),
            chip: chip.to_css(),
        }
    }
}

impl Default for ChipStyles {
    fn default() -> Self {
        Self::resolve(&ChipOptions::default())
    }
}
