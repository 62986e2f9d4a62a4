//! Glyphs derived from other glyphs through a component transform.

use kurbo::{Affine, Vec2};
use log::info;
use norad::{Component, Glyph, Layer, Name};

use crate::{
    GlyphError, Result, glyph_name,
    metrics::{left_margin, move_glyph, right_margin, set_left_margin, set_right_margin},
    outline::glyph_bounds,
    transform::{from_affine, horizontal_flip, rotation},
    unicode_glyph_name,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    /// Counter-clockwise rotation in degrees.
    Rotate(f64),
    FlipHorizontal,
}

impl Transformation {
    pub fn affine(self) -> Affine {
        match self {
            Self::Rotate(degrees) => rotation(degrees),
            Self::FlipHorizontal => horizontal_flip(),
        }
    }
}

/// Recipe for an encoded glyph made of one transformed component.
#[derive(Debug, Clone, Copy)]
pub struct TransformedGlyph {
    pub codepoint: char,
    pub source: &'static str,
    pub transformation: Transformation,
    /// Move the result vertically so its bottom matches this glyph's bottom.
    pub align_bottom_with: Option<&'static str>,
}

/// Arabic comma, semicolon and question mark drawn from their Latin
/// counterparts so the designs stay in step.
pub const ARABIC_PUNCTUATION: &[TransformedGlyph] = &[
    TransformedGlyph {
        codepoint: '\u{060C}',
        source: "comma",
        transformation: Transformation::Rotate(180.0),
        align_bottom_with: Some("colon"),
    },
    TransformedGlyph {
        codepoint: '\u{061B}',
        source: "semicolon",
        transformation: Transformation::Rotate(180.0),
        align_bottom_with: Some("colon"),
    },
    TransformedGlyph {
        codepoint: '\u{061F}',
        source: "question",
        transformation: Transformation::FlipHorizontal,
        align_bottom_with: None,
    },
];

impl TransformedGlyph {
    pub fn glyph_name(&self) -> String {
        unicode_glyph_name(self.codepoint)
    }

    /// Build the glyph into `layer` and return its name.
    ///
    /// The side bearings are mirrored from the source glyph.
    pub fn build(&self, layer: &mut Layer) -> Result<Name> {
        let name = glyph_name(&self.glyph_name())?;
        if layer.contains_glyph(&name) {
            return Err(GlyphError::GlyphExists(name.to_string()));
        }

        let source = layer
            .get_glyph(self.source)
            .ok_or_else(|| GlyphError::MissingGlyph(self.source.to_string()))?;
        let source_left = left_margin(layer, source)?;
        let source_right = right_margin(layer, source)?;

        let reference_bottom = match self.align_bottom_with {
            Some(reference) => {
                let glyph = layer
                    .get_glyph(reference)
                    .ok_or_else(|| GlyphError::MissingGlyph(reference.to_string()))?;
                glyph_bounds(layer, glyph)?.map(|b| b.y0)
            }
            None => None,
        };

        let mut glyph = Glyph::new(&name);
        glyph.codepoints.insert(self.codepoint);
        glyph.components.push(Component::new(
            glyph_name(self.source)?,
            from_affine(self.transformation.affine()),
            None,
        ));

        if let Some(bottom) = reference_bottom
            && let Some(bounds) = glyph_bounds(layer, &glyph)?
        {
            move_glyph(&mut glyph, Vec2::new(0.0, bottom - bounds.y0));
        }
        layer.insert_glyph(glyph);

        if let Some(value) = source_right {
            set_left_margin(layer, &name, value)?;
        }
        if let Some(value) = source_left {
            set_right_margin(layer, &name, value)?;
        }

        info!("Built {name} from {} ({:?})", self.source, self.transformation);
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use norad::Font;

    use super::*;
    use crate::test_utils::{glyph, rect};

    fn latin_punctuation() -> Font {
        let mut font = Font::new();
        let layer = font.default_layer_mut();
        // A comma sitting below the baseline, asymmetric side bearings.
        layer.insert_glyph(glyph("comma", 250.0, vec![rect(40.0, -150.0, 170.0, 110.0)]));
        layer.insert_glyph(glyph(
            "semicolon",
            260.0,
            vec![rect(50.0, -150.0, 180.0, 110.0), rect(60.0, 350.0, 170.0, 460.0)],
        ));
        layer.insert_glyph(glyph(
            "colon",
            240.0,
            vec![rect(60.0, -10.0, 170.0, 100.0), rect(60.0, 350.0, 170.0, 460.0)],
        ));
        layer.insert_glyph(glyph("question", 500.0, vec![rect(50.0, -10.0, 420.0, 700.0)]));
        font
    }

    #[test]
    fn test_arabic_comma_is_rotated_and_aligned() {
        let mut font = latin_punctuation();
        let layer = font.default_layer_mut();

        let name = ARABIC_PUNCTUATION[0].build(layer).unwrap();
        assert_eq!(name.to_string(), "uni060C");

        let comma = layer.get_glyph("uni060C").unwrap();
        assert_eq!(comma.codepoints.iter().collect::<Vec<_>>(), ['\u{060C}']);
        assert_eq!(comma.components.len(), 1);
        assert_eq!(comma.components[0].transform.x_scale, -1.0);
        assert_eq!(comma.components[0].transform.y_scale, -1.0);

        let bounds = glyph_bounds(layer, comma).unwrap().unwrap();
        // Bottom aligned with the colon.
        assert_eq!(bounds.y0, -10.0);
        // Side bearings swapped: source left 40 / right 80.
        assert_eq!(bounds.x0, 80.0);
        assert_eq!(comma.width - bounds.x1, 40.0);
        assert_eq!(comma.width, 250.0);
    }

    #[test]
    fn test_arabic_question_mark_is_flipped() {
        let mut font = latin_punctuation();
        let layer = font.default_layer_mut();

        ARABIC_PUNCTUATION[2].build(layer).unwrap();

        let question = layer.get_glyph("uni061F").unwrap();
        let bounds = glyph_bounds(layer, question).unwrap().unwrap();
        assert_eq!(bounds.y0, -10.0);
        assert_eq!(bounds.x0, 80.0);
        assert_eq!(question.width - bounds.x1, 50.0);
    }

    #[test]
    fn test_all_punctuation_builds() {
        let mut font = latin_punctuation();
        let layer = font.default_layer_mut();
        let names: Vec<String> = ARABIC_PUNCTUATION
            .iter()
            .map(|recipe| recipe.build(layer).unwrap().to_string())
            .collect();
        assert_eq!(names, ["uni060C", "uni061B", "uni061F"]);
    }

    #[test]
    fn test_existing_target_is_an_error() {
        let mut font = latin_punctuation();
        let layer = font.default_layer_mut();
        layer.insert_glyph(glyph("uni060C", 250.0, vec![]));
        let err = ARABIC_PUNCTUATION[0].build(layer).unwrap_err();
        assert!(matches!(err, GlyphError::GlyphExists(name) if name == "uni060C"));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let mut font = Font::new();
        let err = ARABIC_PUNCTUATION[2].build(font.default_layer_mut()).unwrap_err();
        assert!(matches!(err, GlyphError::MissingGlyph(name) if name == "question"));
    }
}
