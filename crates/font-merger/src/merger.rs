//! Main Merger implementation

use log::{debug, info};
use mada_glyph_ops::glyph_name;
use mada_goadb::GlyphOrderDb;
use norad::{Anchor, Font, Glyph};

use crate::{
    MergeError, Result, check_integrity, glyph_order::GlyphOrder, options::MergeOptions,
    production_names::ProductionNames,
};

/// Anchors added to the dotted circle above and below the Latin ones
const ABOVE_ANCHORS: (&str, &[&str]) = ("aboveLC", &["markAbove", "hamzaAbove"]);
const BELOW_ANCHORS: (&str, &[&str]) = ("belowLC", &["markBelow", "hamzaBelow"]);

/// What a merge did
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Arabic glyph order followed by the Latin one, taken before merging
    pub order: GlyphOrder,
    pub glyphs_added: usize,
    pub glyphs_encoded: usize,
    pub anchors_removed: usize,
    pub groups: usize,
    pub kerning_pairs: usize,
}

/// Merges a Latin font into an Arabic one
#[derive(Debug, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Create a new Merger with the given options
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Merge, check Unicode integrity and restore the original glyph order.
    pub fn merge(
        &self,
        arabic: &mut Font,
        latin: Font,
        goadb: &GlyphOrderDb,
    ) -> Result<MergeReport> {
        let report = self.merge_latin(arabic, latin, goadb)?;
        check_integrity(arabic)?;
        report.order.sort_font(arabic);
        Ok(report)
    }

    /// Copy the Latin glyphs, groups, kerning and vertical metrics into the
    /// Arabic font. Glyph order and integrity are left to the caller.
    pub fn merge_latin(
        &self,
        arabic: &mut Font,
        mut latin: Font,
        goadb: &GlyphOrderDb,
    ) -> Result<MergeReport> {
        let latin_order = GlyphOrder::from_font(&latin);
        let mut report = MergeReport {
            order: GlyphOrder::from_font(arabic).chain(&latin_order),
            ..Default::default()
        };

        report.glyphs_encoded = encode_from_goadb(&mut latin, goadb);
        self.fix_nbspace_width(&mut latin)?;

        let mut production = ProductionNames::from_lib(arabic);
        production.extend(goadb.production_names());
        production.write(arabic);

        let layer = latin.default_layer_mut();
        for name in latin_order.iter() {
            let Some(mut glyph) = layer.remove_glyph(name) else {
                continue;
            };
            report.anchors_removed += self.strip_spacing_mark_anchors(&mut glyph);
            self.add_dotted_circle_anchors(&mut glyph)?;

            let target = arabic.default_layer_mut();
            if target.contains_glyph(name) {
                return Err(MergeError::DuplicateGlyph(name.to_string()));
            }
            target.insert_glyph(glyph);
            report.glyphs_added += 1;
        }

        report.groups = latin.groups.len();
        arabic.groups.extend(latin.groups);
        report.kerning_pairs = latin.kerning.values().map(|pairs| pairs.len()).sum();
        for (first, pairs) in latin.kerning {
            arabic.kerning.entry(first).or_default().extend(pairs);
        }

        if let Some(x_height) = latin.font_info.x_height {
            arabic.font_info.x_height = Some(x_height);
        }
        if let Some(cap_height) = latin.font_info.cap_height {
            arabic.font_info.cap_height = Some(cap_height);
        }

        info!(
            "Merged {} Latin glyphs, {} groups, {} kerning pairs",
            report.glyphs_added, report.groups, report.kerning_pairs
        );
        Ok(report)
    }

    fn fix_nbspace_width(&self, latin: &mut Font) -> Result<()> {
        let layer = latin.default_layer_mut();
        let width = layer
            .get_glyph(&self.options.space)
            .ok_or_else(|| MergeError::MissingGlyph(self.options.space.clone()))?
            .width;
        let nbspace = layer
            .get_glyph_mut(&self.options.nbspace)
            .ok_or_else(|| MergeError::MissingGlyph(self.options.nbspace.clone()))?;
        if nbspace.width != width {
            info!("{}: width {} -> {width}", self.options.nbspace, nbspace.width);
            nbspace.width = width;
        }
        Ok(())
    }

    /// Spacing marks would be classified as marks if they kept anchors, and
    /// shapers zero the advance of marks.
    fn strip_spacing_mark_anchors(&self, glyph: &mut Glyph) -> usize {
        let Some(codepoint) = glyph.codepoints.iter().next() else {
            return 0;
        };
        if glyph.anchors.is_empty() || !self.options.is_spacing_mark(codepoint) {
            return 0;
        }
        let removed = glyph.anchors.len();
        debug!("{}: removed {removed} anchors from spacing mark", glyph.name());
        glyph.anchors.clear();
        removed
    }

    fn add_dotted_circle_anchors(&self, glyph: &mut Glyph) -> Result<()> {
        if glyph.codepoints.iter().next() != Some(self.options.dotted_circle) {
            return Ok(());
        }
        let offset = self.options.anchor_offset;
        let mut added = Vec::new();
        for anchor in &glyph.anchors {
            let (names, dy) = match anchor.name.as_deref() {
                Some(name) if name == ABOVE_ANCHORS.0 => (ABOVE_ANCHORS.1, offset),
                Some(name) if name == BELOW_ANCHORS.0 => (BELOW_ANCHORS.1, -offset),
                _ => continue,
            };
            for name in names {
                let name = glyph_name(name)?;
                added.push(Anchor::new(anchor.x, anchor.y + dy, Some(name), None, None));
            }
        }
        debug!("{}: added {} Arabic mark anchors", glyph.name(), added.len());
        glyph.anchors.extend(added);
        Ok(())
    }
}

/// Replace the Unicode values of glyphs listed with an encoding.
fn encode_from_goadb(latin: &mut Font, goadb: &GlyphOrderDb) -> usize {
    let layer = latin.default_layer_mut();
    let mut count = 0;
    for (working, codepoints) in goadb.encodings() {
        if let Some(glyph) = layer.get_glyph_mut(working) {
            glyph.codepoints.clear();
            for codepoint in codepoints {
                glyph.codepoints.insert(*codepoint);
            }
            count += 1;
        }
    }
    count
}
