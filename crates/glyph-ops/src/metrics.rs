//! Side bearings and glyph moves.
//!
//! Margins follow the defcon convention: the left margin is `xMin`, the right
//! margin is `width - xMax`, and an empty glyph has neither.

use kurbo::Vec2;
use norad::{Glyph, Layer};

use crate::{GlyphError, Result, outline::glyph_bounds};

pub fn left_margin(layer: &Layer, glyph: &Glyph) -> Result<Option<f64>> {
    Ok(glyph_bounds(layer, glyph)?.map(|b| b.x0))
}

pub fn right_margin(layer: &Layer, glyph: &Glyph) -> Result<Option<f64>> {
    Ok(glyph_bounds(layer, glyph)?.map(|b| glyph.width - b.x1))
}

/// Translate outlines, component offsets and anchors. The advance is kept.
pub fn move_glyph(glyph: &mut Glyph, delta: Vec2) {
    for point in glyph.contours.iter_mut().flat_map(|c| c.points.iter_mut()) {
        point.x += delta.x;
        point.y += delta.y;
    }
    for component in &mut glyph.components {
        component.transform.x_offset += delta.x;
        component.transform.y_offset += delta.y;
    }
    for anchor in &mut glyph.anchors {
        anchor.x += delta.x;
        anchor.y += delta.y;
    }
}

/// Shift the glyph so its left margin becomes `value`, growing the advance
/// by the same amount.
pub fn set_left_margin(layer: &mut Layer, name: &str, value: f64) -> Result<()> {
    let glyph = layer.get_glyph(name).ok_or_else(|| GlyphError::MissingGlyph(name.into()))?;
    let Some(bounds) = glyph_bounds(layer, glyph)? else {
        return Ok(());
    };
    let diff = value - bounds.x0;
    if diff == 0.0 {
        return Ok(());
    }
    if let Some(glyph) = layer.get_glyph_mut(name) {
        move_glyph(glyph, Vec2::new(diff, 0.0));
        glyph.width += diff;
    }
    Ok(())
}

/// Set the advance so the right margin becomes `value`.
pub fn set_right_margin(layer: &mut Layer, name: &str, value: f64) -> Result<()> {
    let glyph = layer.get_glyph(name).ok_or_else(|| GlyphError::MissingGlyph(name.into()))?;
    let Some(bounds) = glyph_bounds(layer, glyph)? else {
        return Ok(());
    };
    if let Some(glyph) = layer.get_glyph_mut(name) {
        glyph.width = bounds.x1 + value;
    }
    Ok(())
}
