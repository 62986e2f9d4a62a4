use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("glyph '{0}' not found")]
    MissingGlyph(String),

    #[error("glyph '{0}' already exists")]
    GlyphExists(String),

    #[error("component cycle through glyph '{0}'")]
    ComponentCycle(String),

    #[error("invalid glyph name '{0}'")]
    InvalidName(String),

    #[error("mark '{mark}' has no anchor matching base '{base}'")]
    NoMatchingAnchor { base: String, mark: String },

    #[error("placeholder line {line}: {message}")]
    PlaceholderSyntax { line: usize, message: String },

    #[error("failed to read '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = result::Result<T, GlyphError>;
