//! Integrity check of an existing UFO.

use std::path::Path;

use anyhow::{Context, Result};
use mada_font_merger::{GlyphOrder, check_integrity};

use crate::io::load_ufo;

/// Load a UFO and verify its Unicode assignments.
pub fn check(path: &Path) -> Result<()> {
    let font = load_ufo(path)?;
    check_integrity(&font).with_context(|| format!("{} failed the check", path.display()))?;

    let layer = font.default_layer();
    let encoded = layer.iter().filter(|g| !g.codepoints.is_empty()).count();
    let order = GlyphOrder::from_font(&font);
    println!("{}: {} glyphs, {encoded} encoded, OK", path.display(), order.len());
    Ok(())
}
