//! Conversion between UFO component transforms and `kurbo` affines.
//!
//! Both use the fontTools coefficient order `(xx, xy, yx, yy, dx, dy)`.

use kurbo::Affine;
use norad::AffineTransform;

/// Coefficients this close to an integer are written as that integer.
const SNAP_EPSILON: f64 = 1e-9;

pub fn to_affine(transform: &AffineTransform) -> Affine {
    Affine::new([
        transform.x_scale,
        transform.xy_scale,
        transform.yx_scale,
        transform.y_scale,
        transform.x_offset,
        transform.y_offset,
    ])
}

pub fn from_affine(affine: Affine) -> AffineTransform {
    let [x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset] = affine.as_coeffs().map(snap);
    AffineTransform { x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset }
}

/// Counter-clockwise rotation about the origin.
pub fn rotation(degrees: f64) -> Affine {
    Affine::rotate(degrees.to_radians())
}

pub fn horizontal_flip() -> Affine {
    Affine::scale_non_uniform(-1.0, 1.0)
}

fn snap(value: f64) -> f64 {
    let rounded = value.round();
    // Adding zero turns -0.0 into 0.0.
    if (value - rounded).abs() < SNAP_EPSILON { rounded + 0.0 } else { value }
}
