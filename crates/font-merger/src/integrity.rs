//! Unicode sanity checks on a merged font.

use std::collections::BTreeMap;

use log::debug;
use norad::Font;

use crate::{MergeError, Result, types::Codepoint};

/// Fail if a glyph has several Unicode values or two glyphs share one.
///
/// Interpolation tools drop the encoding of multi-Unicode glyphs, so both
/// cases would silently lose characters downstream.
pub fn check_integrity(font: &Font) -> Result<()> {
    let layer = font.default_layer();

    let mut multiple: Vec<String> = layer
        .iter()
        .filter(|g| g.codepoints.len() > 1)
        .map(|g| g.name().to_string())
        .collect();
    if !multiple.is_empty() {
        multiple.sort();
        return Err(MergeError::MultipleUnicodes(multiple));
    }

    let mut owners: BTreeMap<Codepoint, usize> = BTreeMap::new();
    for codepoint in layer.iter().flat_map(|g| g.codepoints.iter()) {
        *owners.entry(Codepoint::from(codepoint)).or_default() += 1;
    }
    let duplicates: Vec<String> = owners
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(codepoint, count)| {
            debug!("{codepoint} is mapped by {count} glyphs");
            codepoint.hex()
        })
        .collect();
    if !duplicates.is_empty() {
        return Err(MergeError::DuplicateUnicodes(duplicates));
    }

    debug!("{} codepoints, no duplicates", owners.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use norad::Glyph;

    use super::*;

    fn font_with(glyphs: &[(&str, &[char])]) -> Font {
        let mut font = Font::new();
        for (name, codepoints) in glyphs {
            let mut glyph = Glyph::new(name);
            for c in *codepoints {
                glyph.codepoints.insert(*c);
            }
            font.default_layer_mut().insert_glyph(glyph);
        }
        font
    }

    #[test]
    fn test_clean_font_passes() {
        let font = font_with(&[("alef", &['\u{0627}']), ("A", &['A']), ("alef.fina", &[])]);
        assert!(check_integrity(&font).is_ok());
    }

    #[test]
    fn test_multiple_unicodes() {
        let font = font_with(&[("space", &[' ', '\u{00A0}']), ("A", &['A'])]);
        let err = check_integrity(&font).unwrap_err();
        assert!(matches!(&err, MergeError::MultipleUnicodes(names) if names == &["space"]));
    }

    #[test]
    fn test_duplicate_unicodes_are_sorted_hex() {
        let font = font_with(&[
            ("uni0661", &['\u{0661}']),
            ("one.ar", &['\u{0661}']),
            ("A", &['A']),
            ("A.alt", &['A']),
        ]);
        let err = check_integrity(&font).unwrap_err();
        match &err {
            MergeError::DuplicateUnicodes(values) => assert_eq!(values, &["0041", "0661"]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.to_string(), "Duplicate unicodes: 0041, 0661");
    }
}
