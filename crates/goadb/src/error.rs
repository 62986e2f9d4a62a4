use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoadbError {
    #[error("failed to read GOADB '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("line {line}: expected 2 or 3 fields, got {fields}: '{content}'")]
    MalformedLine { line: usize, fields: usize, content: String },

    #[error("line {line}: invalid Unicode value '{value}'")]
    InvalidUnicode { line: usize, value: String },

    #[error("line {line}: working name '{name}' already listed on line {first}")]
    DuplicateWorkingName { line: usize, name: String, first: usize },
}

pub type Result<T> = result::Result<T, GoadbError>;
