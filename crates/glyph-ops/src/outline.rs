//! Outline conversion and bounds.

use kurbo::{Affine, BezPath, Point, Rect, Shape};
use log::warn;
use norad::{Contour, Glyph, Layer, PointType};

use crate::{GlyphError, Result, transform::to_affine};

/// Convert a UFO contour to a path.
///
/// A contour starting with a `move` point is open. Otherwise it is closed and
/// the first on-curve point's segment type closes the loop back to it.
pub fn contour_path(contour: &Contour) -> BezPath {
    let mut path = BezPath::new();
    let points = &contour.points;
    if points.is_empty() {
        return path;
    }

    let Some(start) = points.iter().position(|p| p.typ != PointType::OffCurve) else {
        // All off-curve: a TrueType loop with implied on-curve points only.
        let offcurves: Vec<Point> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
        let last = offcurves[offcurves.len() - 1];
        let origin = last.midpoint(offcurves[0]);
        path.move_to(origin);
        push_segment(&mut path, &PointType::QCurve, &offcurves, origin);
        path.close_path();
        return path;
    };

    let first = &points[start];
    let first_pt = Point::new(first.x, first.y);
    let closed = first.typ != PointType::Move;
    path.move_to(first_pt);

    let mut pending: Vec<Point> = Vec::new();
    for point in points[start + 1..].iter().chain(&points[..start]) {
        let pt = Point::new(point.x, point.y);
        match point.typ {
            PointType::OffCurve => pending.push(pt),
            PointType::Move => {
                // Stray move inside a contour starts a new subpath.
                pending.clear();
                path.move_to(pt);
            }
            ref typ => {
                push_segment(&mut path, typ, &pending, pt);
                pending.clear();
            }
        }
    }

    if closed {
        push_segment(&mut path, &first.typ, &pending, first_pt);
        path.close_path();
    }
    path
}

fn push_segment(path: &mut BezPath, typ: &PointType, offcurves: &[Point], end: Point) {
    match (typ, offcurves) {
        (_, []) => path.line_to(end),
        (PointType::Curve, [cp]) => path.quad_to(*cp, end),
        (PointType::Curve, [cp1, .., cp2]) => path.curve_to(*cp1, *cp2, end),
        (PointType::QCurve, _) => {
            for (i, cp) in offcurves.iter().enumerate() {
                let seg_end = offcurves.get(i + 1).map_or(end, |next| cp.midpoint(*next));
                path.quad_to(*cp, seg_end);
            }
        }
        // Off-curves before a line or move are malformed; keep the on-curve.
        _ => path.line_to(end),
    }
}

/// The glyph's full outline, including components resolved through `layer`.
///
/// Components referencing glyphs missing from the layer are skipped.
pub fn glyph_path(layer: &Layer, glyph: &Glyph) -> Result<BezPath> {
    let mut path = BezPath::new();
    let mut stack = Vec::new();
    collect_path(layer, glyph, Affine::IDENTITY, &mut stack, &mut path)?;
    Ok(path)
}

fn collect_path(
    layer: &Layer,
    glyph: &Glyph,
    transform: Affine,
    stack: &mut Vec<String>,
    out: &mut BezPath,
) -> Result<()> {
    let name = glyph.name().to_string();
    if stack.contains(&name) {
        return Err(GlyphError::ComponentCycle(name));
    }
    stack.push(name);

    for contour in &glyph.contours {
        let mut path = contour_path(contour);
        path.apply_affine(transform);
        out.extend(path.elements().iter().copied());
    }

    for component in &glyph.components {
        match layer.get_glyph(&component.base) {
            Some(base) => {
                let nested = transform * to_affine(&component.transform);
                collect_path(layer, base, nested, stack, out)?;
            }
            None => warn!("{}: component base '{}' not found", glyph.name(), component.base),
        }
    }

    stack.pop();
    Ok(())
}

/// Exact bounds of the glyph outline, `None` for an empty glyph.
pub fn glyph_bounds(layer: &Layer, glyph: &Glyph) -> Result<Option<Rect>> {
    let path = glyph_path(layer, glyph)?;
    if path.elements().is_empty() {
        return Ok(None);
    }
    Ok(Some(path.bounding_box()))
}
