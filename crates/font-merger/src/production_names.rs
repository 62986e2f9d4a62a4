//! Production glyph names stored in the `public.postscriptNames` lib key.

use indexmap::IndexMap;
use norad::Font;
use plist::{Dictionary, Value};

use crate::{glyph_order::GlyphOrder, types::Codepoint};

pub const POSTSCRIPT_NAMES_KEY: &str = "public.postscriptNames";

/// Working name to production name mapping, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionNames {
    names: IndexMap<String, String>,
}

impl ProductionNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names derived from the Unicode value of every encoded glyph, for the
    /// glyphs whose working name differs.
    pub fn for_font(font: &Font) -> Self {
        let layer = font.default_layer();
        let names = GlyphOrder::from_font(font)
            .iter()
            .filter_map(|name| {
                let glyph = layer.get_glyph(name)?;
                let codepoint = Codepoint::from(glyph.codepoints.iter().next()?);
                let production = codepoint.production_name();
                (production != name).then(|| (name.to_string(), production))
            })
            .collect();
        Self { names }
    }

    /// The mapping currently stored in the font lib.
    pub fn from_lib(font: &Font) -> Self {
        let names = font
            .lib
            .get(POSTSCRIPT_NAMES_KEY)
            .and_then(Value::as_dictionary)
            .into_iter()
            .flatten()
            .filter_map(|(working, production)| {
                Some((working.clone(), production.as_string()?.to_string()))
            })
            .collect();
        Self { names }
    }

    /// Add or overwrite entries.
    pub fn extend<'a>(&mut self, names: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.names
            .extend(names.into_iter().map(|(w, p)| (w.to_string(), p.to_string())));
    }

    pub fn get(&self, working: &str) -> Option<&str> {
        self.names.get(working).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(w, p)| (w.as_str(), p.as_str()))
    }

    /// Store the mapping in the font lib, replacing any previous value.
    pub fn write(&self, font: &mut Font) {
        let dict: Dictionary = self
            .names
            .iter()
            .map(|(w, p)| (w.clone(), Value::String(p.clone())))
            .collect();
        font.lib.insert(POSTSCRIPT_NAMES_KEY.to_string(), Value::Dictionary(dict));
    }
}

#[cfg(test)]
mod tests {
    use norad::Glyph;

    use super::*;

    fn encoded(name: &str, codepoint: char) -> Glyph {
        let mut glyph = Glyph::new(name);
        glyph.codepoints.insert(codepoint);
        glyph
    }

    #[test]
    fn test_for_font_skips_matching_and_unencoded() {
        let mut font = Font::new();
        let layer = font.default_layer_mut();
        layer.insert_glyph(encoded("arAlef", '\u{0627}'));
        layer.insert_glyph(encoded("uni0628", '\u{0628}'));
        layer.insert_glyph(Glyph::new("arAlef.fina"));
        layer.insert_glyph(encoded("arMath", '\u{1EE01}'));

        let names = ProductionNames::for_font(&font);
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("arAlef"), Some("uni0627"));
        assert_eq!(names.get("arMath"), Some("u01EE01"));
        assert_eq!(names.get("uni0628"), None);
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let mut font = Font::new();
        font.lib.insert(
            POSTSCRIPT_NAMES_KEY.to_string(),
            Value::Dictionary(
                [("stale".to_string(), Value::String("uni0000".to_string()))].into_iter().collect(),
            ),
        );

        let mut names = ProductionNames::new();
        names.extend([("arAlef", "uni0627")]);
        names.write(&mut font);

        let stored = ProductionNames::from_lib(&font);
        assert_eq!(stored, names);
        assert_eq!(stored.get("stale"), None);
    }

    #[test]
    fn test_extend_overwrites() {
        let mut names = ProductionNames::new();
        names.extend([("a", "uni0061"), ("b", "uni0062")]);
        names.extend([("a", "A")]);
        assert_eq!(names.iter().collect::<Vec<_>>(), [("a", "A"), ("b", "uni0062")]);
    }
}
