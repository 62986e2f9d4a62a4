//! Glyph Order and Alias Database (GOADB) parsing.
//!
//! A GOADB maps the working glyph names used in sources to the production
//! names written into binary fonts, and optionally assigns Unicode values:
//!
//! ```text
//! # production   working     unicode
//! uni00A0        nbspace     uni00A0
//! A              A           uni0041
//! f_f            f_f
//! ```

mod error;

use std::{fs::read_to_string, path::Path};

use indexmap::IndexMap;
use log::debug;

pub use error::{GoadbError, Result};

/// One record of the database.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GoadbEntry {
    production: String,
    working: String,
    codepoints: Vec<char>,
    line: usize,
}

/// Parsed database, keyed by working name in file order.
#[derive(Debug, Clone, Default)]
pub struct GlyphOrderDb {
    entries: IndexMap<String, GoadbEntry>,
}

impl GlyphOrderDb {
    /// Read and parse a GOADB file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_to_string(path)
            .map_err(|source| GoadbError::Io { path: path.to_path_buf(), source })?;
        let db = Self::parse(&text)?;
        debug!("Parsed {} GOADB records from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut entries: IndexMap<String, GoadbEntry> = IndexMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content.split_whitespace().collect();
            let (production, working, unicodes) = match fields.as_slice() {
                [production, working] => (*production, *working, None),
                [production, working, unicodes] => (*production, *working, Some(*unicodes)),
                _ => {
                    return Err(GoadbError::MalformedLine {
                        line,
                        fields: fields.len(),
                        content: content.to_string(),
                    });
                }
            };

            let codepoints = match unicodes {
                Some(list) => list
                    .split(',')
                    .map(|value| {
                        parse_unicode(value).ok_or_else(|| GoadbError::InvalidUnicode {
                            line,
                            value: value.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                None => Vec::new(),
            };

            if let Some(existing) = entries.get(working) {
                return Err(GoadbError::DuplicateWorkingName {
                    line,
                    name: working.to_string(),
                    first: existing.line,
                });
            }

            entries.insert(
                working.to_string(),
                GoadbEntry {
                    production: production.to_string(),
                    working: working.to_string(),
                    codepoints,
                    line,
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unicode values assigned to a working name, if the record has any.
    pub fn encoding(&self, working: &str) -> Option<&[char]> {
        self.entries
            .get(working)
            .map(|e| e.codepoints.as_slice())
            .filter(|cps| !cps.is_empty())
    }

    /// All `(working name, unicode values)` pairs for encoded records.
    pub fn encodings(&self) -> impl Iterator<Item = (&str, &[char])> {
        self.entries
            .values()
            .filter(|e| !e.codepoints.is_empty())
            .map(|e| (e.working.as_str(), e.codepoints.as_slice()))
    }

    pub fn production_name(&self, working: &str) -> Option<&str> {
        self.entries.get(working).map(|e| e.production.as_str())
    }

    /// All `(working name, production name)` pairs in file order.
    pub fn production_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.values().map(|e| (e.working.as_str(), e.production.as_str()))
    }

    /// Working names in file order.
    pub fn glyph_order(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Parse `uniXXXX` or `uXXXX`..`uXXXXXX`.
fn parse_unicode(value: &str) -> Option<char> {
    let hex = if let Some(hex) = value.strip_prefix("uni") {
        (hex.len() == 4).then_some(hex)?
    } else if let Some(hex) = value.strip_prefix('u') {
        (4..=6).contains(&hex.len()).then_some(hex)?
    } else {
        return None;
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Source Sans excerpt
.notdef   .notdef
space     space       uni0020
uni00A0   nbspace     uni00A0   # no-break space
A         A           uni0041
f_f       f_f
u1D400    mathbfA     u1D400
";

    #[test]
    fn test_parse_sample() {
        let db = GlyphOrderDb::parse(SAMPLE).unwrap();
        assert_eq!(db.len(), 6);
        assert_eq!(db.encoding("nbspace"), Some(&['\u{a0}'][..]));
        assert_eq!(db.encoding("mathbfA"), Some(&['\u{1d400}'][..]));
        assert_eq!(db.encoding("f_f"), None);
        assert_eq!(db.production_name("nbspace"), Some("uni00A0"));
        assert_eq!(db.production_name("missing"), None);
    }

    #[test]
    fn test_glyph_order_follows_file() {
        let db = GlyphOrderDb::parse(SAMPLE).unwrap();
        let order: Vec<&str> = db.glyph_order().collect();
        assert_eq!(order, [".notdef", "space", "nbspace", "A", "f_f", "mathbfA"]);
    }

    #[test]
    fn test_encodings_skip_unencoded() {
        let db = GlyphOrderDb::parse(SAMPLE).unwrap();
        let names: Vec<&str> = db.encodings().map(|(name, _)| name).collect();
        assert_eq!(names, ["space", "nbspace", "A", "mathbfA"]);
    }

    #[test]
    fn test_multiple_unicodes() {
        let db = GlyphOrderDb::parse("space space uni0020,uni00A0\n").unwrap();
        assert_eq!(db.encoding("space"), Some(&[' ', '\u{a0}'][..]));
    }

    #[test]
    fn test_malformed_line() {
        let err = GlyphOrderDb::parse("A A uni0041 extra\n").unwrap_err();
        assert!(matches!(err, GoadbError::MalformedLine { line: 1, fields: 4, .. }));

        let err = GlyphOrderDb::parse("\n\nlonely\n").unwrap_err();
        assert!(matches!(err, GoadbError::MalformedLine { line: 3, fields: 1, .. }));
    }

    #[test]
    fn test_invalid_unicode() {
        for bad in ["uni41", "uniZZZZ", "uD800", "u110000", "U+0041", "u1234567"] {
            let text = format!("A A {bad}\n");
            assert!(
                matches!(GlyphOrderDb::parse(&text), Err(GoadbError::InvalidUnicode { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_duplicate_working_name() {
        let err = GlyphOrderDb::parse("A A uni0041\nA.alt A\n").unwrap_err();
        assert!(matches!(err, GoadbError::DuplicateWorkingName { line: 2, first: 1, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GlyphOrderDb::load("/nonexistent/GlyphOrderAndAliasDB").unwrap_err();
        assert!(matches!(err, GoadbError::Io { .. }));
    }
}
