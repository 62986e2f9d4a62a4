use std::result;

use mada_glyph_ops::GlyphError;
use mada_goadb::GoadbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error(transparent)]
    Goadb(#[from] GoadbError),

    #[error(transparent)]
    Glyph(#[from] GlyphError),

    #[error("required glyph '{0}' not found in the Latin font")]
    MissingGlyph(String),

    #[error("glyph '{0}' exists in both fonts")]
    DuplicateGlyph(String),

    #[error("glyphs with more than one Unicode value: {}", .0.join(", "))]
    MultipleUnicodes(Vec<String>),

    #[error("Duplicate unicodes: {}", .0.join(", "))]
    DuplicateUnicodes(Vec<String>),
}

pub type Result<T> = result::Result<T, MergeError>;
