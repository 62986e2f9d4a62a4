//! Placeholder glyphs for codepoints the sources do not draw yet.
//!
//! Definitions are read from a plain text file, one glyph per line:
//!
//! ```text
//! # codepoint  base     marks...
//! 0756         arBeh    arTwoDotsVertical arTahSmall
//! ```
//!
//! Each mark is attached through its `_name` anchor to the matching `name`
//! anchor of the base, or of a mark placed before it.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use kurbo::{Affine, Point};
use log::{debug, info};
use norad::{Component, Glyph, Layer, Name};

use crate::{GlyphError, Result, from_affine, glyph_name, unicode_glyph_name};

#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub codepoint: char,
    pub base: String,
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    entries: Vec<Placeholder>,
}

impl Placeholders {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| GlyphError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let mut fields = content.split_whitespace();
            let (Some(code), Some(base)) = (fields.next(), fields.next()) else {
                return Err(GlyphError::PlaceholderSyntax {
                    line,
                    message: format!("expected a codepoint and a base glyph: '{content}'"),
                });
            };
            let codepoint = u32::from_str_radix(code.trim_start_matches("U+"), 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| GlyphError::PlaceholderSyntax {
                    line,
                    message: format!("invalid codepoint '{code}'"),
                })?;
            entries.push(Placeholder {
                codepoint,
                base: base.to_string(),
                marks: fields.map(str::to_string).collect(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.iter()
    }

    /// Add a glyph for every placeholder whose codepoint is not encoded yet.
    ///
    /// Returns the names of the new glyphs in definition order.
    pub fn build(&self, layer: &mut Layer) -> Result<Vec<Name>> {
        let encoded: HashSet<char> = layer.iter().flat_map(|g| g.codepoints.iter()).collect();
        let mut built = Vec::new();
        for placeholder in &self.entries {
            if encoded.contains(&placeholder.codepoint) {
                let code = u32::from(placeholder.codepoint);
                debug!("U+{code:04X} already encoded, skipping placeholder");
                continue;
            }
            let glyph = placeholder.compose(layer)?;
            built.push(glyph.name().clone());
            layer.insert_glyph(glyph);
        }
        if !built.is_empty() {
            info!("Added {} placeholder glyphs", built.len());
        }
        Ok(built)
    }
}

impl Placeholder {
    fn compose(&self, layer: &Layer) -> Result<Glyph> {
        let name = unicode_glyph_name(self.codepoint);
        if layer.contains_glyph(&name) {
            return Err(GlyphError::GlyphExists(name));
        }
        let base = layer
            .get_glyph(&self.base)
            .ok_or_else(|| GlyphError::MissingGlyph(self.base.clone()))?;

        // Attachment points available to the next mark.
        let mut attach: BTreeMap<String, Point> = anchors_of(base).collect();

        let mut glyph = Glyph::new(&name);
        glyph.width = base.width;
        glyph.codepoints.insert(self.codepoint);
        glyph.components.push(Component::new(
            glyph_name(&self.base)?,
            from_affine(Affine::IDENTITY),
            None,
        ));

        for mark_name in &self.marks {
            let mark = layer
                .get_glyph(mark_name.as_str())
                .ok_or_else(|| GlyphError::MissingGlyph(mark_name.clone()))?;
            let mark_anchors: BTreeMap<String, Point> = anchors_of(mark).collect();
            let (anchor, offset) = mark_anchors
                .iter()
                .filter_map(|(name, point)| {
                    let target = attach.get(name.strip_prefix('_')?)?;
                    Some((name.trim_start_matches('_').to_string(), *target - *point))
                })
                .next()
                .ok_or_else(|| GlyphError::NoMatchingAnchor {
                    base: self.base.clone(),
                    mark: mark_name.clone(),
                })?;

            glyph.components.push(Component::new(
                glyph_name(mark_name)?,
                from_affine(Affine::translate(offset)),
                None,
            ));
            if let Some(point) = mark_anchors.get(&anchor) {
                attach.insert(anchor, *point + offset);
            }
        }

        Ok(glyph)
    }
}

fn anchors_of(glyph: &Glyph) -> impl Iterator<Item = (String, Point)> + '_ {
    glyph
        .anchors
        .iter()
        .filter_map(|a| Some((a.name.as_ref()?.to_string(), Point::new(a.x, a.y))))
}
