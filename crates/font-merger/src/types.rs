//! Domain-specific newtypes

use std::fmt::{Display, Formatter, Result};

use mada_glyph_ops::unicode_glyph_name;

/// A Unicode codepoint
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub char);

impl Codepoint {
    /// The `uniXXXX` / `uXXXXXX` name a glyph mapped from this codepoint is
    /// given in the compiled font.
    pub fn production_name(self) -> String {
        unicode_glyph_name(self.0)
    }

    /// Bare hex form used in diagnostics, e.g. `0627`.
    pub fn hex(self) -> String {
        format!("{:04X}", u32::from(self.0))
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl Display for Codepoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "U+{}", self.hex())
    }
}
