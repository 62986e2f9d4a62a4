//! Feature text stored in the combined UFO.

use anyhow::{Context, Result};
use mada_glyph_ops::glyph_bounds;
use norad::{Font, Layer};

use crate::config::{FINAL_YEH, LANGUAGE_SYSTEMS, LANGUAGE_SYSTEMS_PLACEHOLDER, TATWEEL};

/// Shared feature text with the language systems filled in.
pub fn prepare_feature_text(shared: &str) -> String {
    shared.replace(LANGUAGE_SYSTEMS_PLACEHOLDER, LANGUAGE_SYSTEMS)
}

/// `ss01` lowers the final Yeh so it does not rise above the connecting
/// stroke; the shift is the tatweel's top minus the Yeh's top.
pub fn style_set_feature(layer: &Layer) -> Result<String> {
    let top = |name: &str| -> Result<f64> {
        let glyph = layer.get_glyph(name).with_context(|| format!("Glyph not found: {name}"))?;
        let bounds =
            glyph_bounds(layer, glyph)?.with_context(|| format!("Glyph is empty: {name}"))?;
        Ok(bounds.y1)
    };
    let delta = (top(TATWEEL)? - top(FINAL_YEH)?).trunc() as i64;

    Ok(format!("\nfeature ss01 {{\n    pos {FINAL_YEH} <0 {delta} 0 0>;\n}} ss01;\n"))
}

/// Append the shared feature text and the generated features to the font.
pub fn append_features(font: &mut Font, shared: &str) -> Result<()> {
    let ss01 = style_set_feature(font.default_layer())?;
    font.features.push_str(&prepare_feature_text(shared));
    font.features.push_str(&ss01);
    Ok(())
}
