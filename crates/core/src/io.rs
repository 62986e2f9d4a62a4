//! UFO and text file I/O.

use std::{
    fs::{create_dir_all, read_to_string},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use log::{debug, info};
use norad::Font;

use crate::config::GOADB_FILENAME;

pub fn load_ufo(path: impl AsRef<Path>) -> Result<Font> {
    let path = path.as_ref();
    let font =
        Font::load(path).with_context(|| format!("Failed to load UFO: {}", path.display()))?;
    debug!("Loaded {} ({} glyphs)", path.display(), font.default_layer().len());
    Ok(font)
}

/// Load two UFOs concurrently.
pub fn load_pair(first: &Path, second: &Path) -> Result<(Font, Font)> {
    let (first, second) = rayon::join(|| load_ufo(first), || load_ufo(second));
    Ok((first?, second?))
}

/// Write the font, replacing an existing UFO at `path`.
pub fn save_ufo(font: &Font, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !path.is_dir() {
        bail!("Output path exists and is not a directory: {}", path.display());
    } else if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    font.save(path).with_context(|| format!("Failed to write UFO: {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

pub fn read_feature_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    read_to_string(path)
        .with_context(|| format!("Failed to read feature file: {}", path.display()))
}

/// The GOADB shipped with the Latin sources, one level above the directory
/// holding the Latin UFO.
pub fn default_goadb_path(latin: &Path) -> PathBuf {
    latin.parent().unwrap_or_else(|| Path::new("")).join("..").join(GOADB_FILENAME)
}
