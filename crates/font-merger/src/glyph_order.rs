//! Glyph order stored in the `public.glyphOrder` lib key.

use std::collections::HashMap;

use indexmap::IndexSet;
use norad::Font;
use plist::Value;

pub const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// An ordered set of glyph names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOrder {
    names: IndexSet<String>,
}

impl GlyphOrder {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// The font's effective glyph order: listed glyphs that exist, then
    /// unlisted glyphs alphabetically.
    pub fn from_font(font: &Font) -> Self {
        let layer = font.default_layer();
        let mut names: IndexSet<String> = font
            .lib
            .get(GLYPH_ORDER_KEY)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_string)
            .filter(|name| layer.contains_glyph(name))
            .map(str::to_string)
            .collect();

        let mut unlisted: Vec<String> = layer
            .iter()
            .map(|g| g.name().to_string())
            .filter(|name| !names.contains(name))
            .collect();
        unlisted.sort();
        names.extend(unlisted);

        Self { names }
    }

    /// This order followed by the names of `other` not already present.
    pub fn chain(&self, other: &GlyphOrder) -> Self {
        let mut names = self.names.clone();
        names.extend(other.names.iter().cloned());
        Self { names }
    }

    pub fn push(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Reorder the font's glyphs by this order and store the result.
    ///
    /// Glyphs missing from this order go last, alphabetically.
    pub fn sort_font(&self, font: &mut Font) {
        let mut current: Vec<String> = Self::from_font(font).names.into_iter().collect();
        let rank: HashMap<&str, usize> =
            self.names.iter().enumerate().map(|(i, name)| (name.as_str(), i)).collect();
        current.sort_by(|a, b| {
            let ka = rank.get(a.as_str()).copied().unwrap_or(usize::MAX);
            let kb = rank.get(b.as_str()).copied().unwrap_or(usize::MAX);
            ka.cmp(&kb).then_with(|| a.cmp(b))
        });
        Self::new(current).write(font);
    }

    /// Store this order in the font lib, replacing any previous value.
    pub fn write(&self, font: &mut Font) {
        let array = self.names.iter().map(|name| Value::String(name.clone())).collect();
        font.lib.insert(GLYPH_ORDER_KEY.to_string(), Value::Array(array));
    }
}
