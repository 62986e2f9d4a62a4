//! Glyph-level operations on UFO layers.
//!
//! Geometry (outlines, bounds, side bearings), anchor propagation through
//! components, and synthesis of glyphs derived from existing ones.

mod anchors;
mod derive;
mod error;
mod metrics;
mod outline;
mod placeholders;
mod transform;

pub use anchors::propagate_anchors;
pub use derive::{ARABIC_PUNCTUATION, Transformation, TransformedGlyph};
pub use error::{GlyphError, Result};
pub use metrics::{left_margin, move_glyph, right_margin, set_left_margin, set_right_margin};
pub use outline::{contour_path, glyph_bounds, glyph_path};
pub use placeholders::{Placeholder, Placeholders};
pub use transform::{from_affine, horizontal_flip, rotation, to_affine};

use norad::Name;

/// Glyph name for a codepoint: `uniXXXX` below U+FFFF, `uXXXXXX` from it on.
pub fn unicode_glyph_name(codepoint: char) -> String {
    let value = u32::from(codepoint);
    if value < 0xFFFF { format!("uni{value:04X}") } else { format!("u{value:06X}") }
}

/// Validate a glyph name string.
pub fn glyph_name(name: &str) -> Result<Name> {
    Name::new(name).map_err(|_| GlyphError::InvalidName(name.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_glyph_name() {
        assert_eq!(unicode_glyph_name('\u{060C}'), "uni060C");
        assert_eq!(unicode_glyph_name('A'), "uni0041");
        assert_eq!(unicode_glyph_name('\u{FFFD}'), "uniFFFD");
        assert_eq!(unicode_glyph_name('\u{FFFF}'), "u00FFFF");
        assert_eq!(unicode_glyph_name('\u{1EE00}'), "u01EE00");
    }

    #[test]
    fn test_glyph_name_rejects_empty() {
        assert!(glyph_name("arAlef.isol").is_ok());
        assert!(matches!(glyph_name(""), Err(GlyphError::InvalidName(_))));
    }
}
