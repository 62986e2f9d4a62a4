//! Anchor propagation from components to composite glyphs.
//!
//! A composite built from a base letter and marks inherits the base's anchors
//! (moved through the component transform), and any mark that can itself carry
//! further marks (it has both `_top` and `top`) replaces the inherited anchor
//! with its own. This mirrors what glyph editors do on export.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use kurbo::Point;
use log::{debug, warn};
use norad::{Anchor, Component, Layer};

use crate::{Result, glyph_name, transform::to_affine};

#[derive(Debug, Clone)]
struct NamedPoint {
    name: String,
    point: Point,
}

/// Anchors of every glyph after propagation, resolved depth-first.
struct Propagator<'a> {
    layer: &'a Layer,
    resolved: HashMap<String, Vec<NamedPoint>>,
    added: HashMap<String, Vec<NamedPoint>>,
    visiting: HashSet<String>,
}

impl<'a> Propagator<'a> {
    fn new(layer: &'a Layer) -> Self {
        Self {
            layer,
            resolved: HashMap::new(),
            added: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    fn resolve(&mut self, name: &str) -> Vec<NamedPoint> {
        if let Some(anchors) = self.resolved.get(name) {
            return anchors.clone();
        }
        let layer = self.layer;
        let Some(glyph) = layer.get_glyph(name) else {
            return Vec::new();
        };

        let own: Vec<NamedPoint> = glyph
            .anchors
            .iter()
            .filter_map(|a| {
                let name = a.name.as_ref()?.to_string();
                Some(NamedPoint { name, point: Point::new(a.x, a.y) })
            })
            .collect();

        if glyph.components.is_empty() {
            self.resolved.insert(name.to_string(), own.clone());
            return own;
        }
        if !self.visiting.insert(name.to_string()) {
            warn!("{name}: component cycle, anchors not propagated");
            return own;
        }

        let mut bases: Vec<(&Component, Vec<NamedPoint>)> = Vec::new();
        let mut marks: Vec<(&Component, Vec<NamedPoint>)> = Vec::new();
        let mut anchor_names: BTreeSet<String> = BTreeSet::new();

        for component in &glyph.components {
            let anchors = self.resolve(&component.base);
            if anchors.iter().any(|a| a.name.starts_with('_')) {
                marks.push((component, anchors));
            } else {
                anchor_names.extend(anchors.iter().map(|a| a.name.clone()));
                bases.push((component, anchors));
            }
        }

        let mut to_add: BTreeMap<String, Point> = BTreeMap::new();
        for anchor_name in &anchor_names {
            // Skip names the composite already has, including ligature
            // variants such as "top_1" for "top".
            if own.iter().any(|a| a.name.starts_with(anchor_name.as_str())) {
                continue;
            }
            let carriers: Vec<(&Component, Point)> = bases
                .iter()
                .filter_map(|(component, anchors)| {
                    anchors
                        .iter()
                        .find(|a| &a.name == anchor_name)
                        .map(|a| (*component, a.point))
                })
                .collect();
            match carriers.as_slice() {
                [] => {}
                [(component, point)] => {
                    to_add.insert(anchor_name.clone(), to_affine(&component.transform) * *point);
                }
                many => {
                    for (i, (component, point)) in many.iter().enumerate() {
                        to_add.insert(
                            format!("{anchor_name}_{}", i + 1),
                            to_affine(&component.transform) * *point,
                        );
                    }
                }
            }
        }

        for (component, anchors) in &marks {
            let transform = to_affine(&component.transform);
            for anchor in anchors {
                let mark_name = format!("_{}", anchor.name);
                if to_add.contains_key(&anchor.name) && anchors.iter().any(|a| a.name == mark_name)
                {
                    to_add.insert(anchor.name.clone(), transform * anchor.point);
                }
            }
        }

        self.visiting.remove(name);

        let added: Vec<NamedPoint> =
            to_add.into_iter().map(|(name, point)| NamedPoint { name, point }).collect();
        let mut all = own;
        all.extend(added.iter().cloned());
        if !added.is_empty() {
            self.added.insert(name.to_string(), added);
        }
        self.resolved.insert(name.to_string(), all.clone());
        all
    }
}

/// Propagate anchors through components for every glyph in the layer.
///
/// Returns the number of glyphs that received new anchors.
pub fn propagate_anchors(layer: &mut Layer) -> Result<usize> {
    let names: Vec<String> = layer.iter().map(|g| g.name().to_string()).collect();

    let added = {
        let mut propagator = Propagator::new(layer);
        for name in &names {
            propagator.resolve(name);
        }
        propagator.added
    };

    for (name, anchors) in &added {
        let Some(glyph) = layer.get_glyph_mut(name) else { continue };
        for anchor in anchors {
            let anchor_name = glyph_name(&anchor.name)?;
            let (x, y) = (anchor.point.x, anchor.point.y);
            glyph.anchors.push(Anchor::new(x, y, Some(anchor_name), None, None));
        }
        debug!("{name}: propagated {} anchors", anchors.len());
    }

    Ok(added.len())
}

#[cfg(test)]
mod tests {
    use kurbo::Affine;
    use norad::{AffineTransform, Font, Glyph};

    use super::*;
    use crate::{
        from_affine,
        test_utils::{anchor, anchor_names, glyph, rect},
    };

    fn component(base: &str, dx: f64, dy: f64) -> Component {
        Component::new(
            glyph_name(base).unwrap(),
            from_affine(Affine::translate((dx, dy))),
            None,
        )
    }

    fn anchor_at(glyph: &Glyph, name: &str) -> (f64, f64) {
        let a = glyph
            .anchors
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("{} has no anchor {name}", glyph.name()));
        (a.x, a.y)
    }

    fn sample_font() -> Font {
        let mut font = Font::new();
        let layer = font.default_layer_mut();

        let mut beh = glyph("arBeh", 600.0, vec![rect(0.0, 0.0, 600.0, 200.0)]);
        beh.anchors.push(anchor("markAbove", 300.0, 400.0));
        beh.anchors.push(anchor("markBelow", 300.0, -100.0));
        layer.insert_glyph(beh);

        let mut dot = glyph("arDot", 0.0, vec![rect(-50.0, -50.0, 50.0, 50.0)]);
        dot.anchors.push(anchor("_markBelow", 0.0, 50.0));
        layer.insert_glyph(dot);

        let mut hamza = glyph("arHamza", 0.0, vec![rect(-80.0, 0.0, 80.0, 160.0)]);
        hamza.anchors.push(anchor("_markAbove", 0.0, 0.0));
        hamza.anchors.push(anchor("markAbove", 0.0, 260.0));
        layer.insert_glyph(hamza);

        font
    }

    #[test]
    fn test_base_anchors_are_inherited() {
        let mut font = sample_font();
        let mut composite = glyph("uni0628", 600.0, vec![]);
        composite.components.push(component("arBeh", 0.0, 0.0));
        composite.components.push(component("arDot", 300.0, -150.0));
        font.default_layer_mut().insert_glyph(composite);

        let changed = propagate_anchors(font.default_layer_mut()).unwrap();
        assert_eq!(changed, 1);

        let beh = font.default_layer().get_glyph("uni0628").unwrap();
        assert_eq!(anchor_names(beh), ["markAbove", "markBelow"]);
        assert_eq!(anchor_at(beh, "markAbove"), (300.0, 400.0));
    }

    #[test]
    fn test_mark_with_both_anchors_replaces_inherited() {
        let mut font = sample_font();
        let mut composite = glyph("uni0623", 600.0, vec![]);
        composite.components.push(component("arBeh", 10.0, 0.0));
        composite.components.push(component("arHamza", 310.0, 400.0));
        font.default_layer_mut().insert_glyph(composite);

        propagate_anchors(font.default_layer_mut()).unwrap();

        let composite = font.default_layer().get_glyph("uni0623").unwrap();
        // Base anchor (300, 400) moved by (10, 0), then replaced by the hamza's
        // own markAbove at (0, 260) moved by (310, 400).
        assert_eq!(anchor_at(composite, "markAbove"), (310.0, 660.0));
        assert_eq!(anchor_at(composite, "markBelow"), (310.0, -100.0));
    }

    #[test]
    fn test_existing_anchor_is_kept() {
        let mut font = sample_font();
        let mut composite = glyph("arBeh.alt", 600.0, vec![]);
        composite.anchors.push(anchor("markAbove", 0.0, 999.0));
        composite.components.push(component("arBeh", 0.0, 0.0));
        font.default_layer_mut().insert_glyph(composite);

        propagate_anchors(font.default_layer_mut()).unwrap();

        let composite = font.default_layer().get_glyph("arBeh.alt").unwrap();
        assert_eq!(anchor_names(composite), ["markAbove", "markBelow"]);
        assert_eq!(anchor_at(composite, "markAbove"), (0.0, 999.0));
    }

    #[test]
    fn test_ligature_anchors_are_numbered() {
        let mut font = sample_font();
        let mut liga = glyph("arBeh_arBeh", 1200.0, vec![]);
        liga.components.push(component("arBeh", 0.0, 0.0));
        liga.components.push(component("arBeh", 600.0, 0.0));
        font.default_layer_mut().insert_glyph(liga);

        propagate_anchors(font.default_layer_mut()).unwrap();

        let liga = font.default_layer().get_glyph("arBeh_arBeh").unwrap();
        assert_eq!(
            anchor_names(liga),
            ["markAbove_1", "markAbove_2", "markBelow_1", "markBelow_2"]
        );
        assert_eq!(anchor_at(liga, "markAbove_2"), (900.0, 400.0));
    }

    #[test]
    fn test_nested_composites_resolve_depth_first() {
        let mut font = sample_font();
        let layer = font.default_layer_mut();
        // Inserted before its base composite to exercise recursion.
        let mut outer = glyph("uni0628.fina", 600.0, vec![]);
        outer.components.push(component("uni0628", 0.0, 0.0));
        layer.insert_glyph(outer);
        let mut inner = glyph("uni0628", 600.0, vec![]);
        inner.components.push(component("arBeh", 0.0, 0.0));
        layer.insert_glyph(inner);

        assert_eq!(propagate_anchors(layer).unwrap(), 2);

        let outer = font.default_layer().get_glyph("uni0628.fina").unwrap();
        assert_eq!(anchor_names(outer), ["markAbove", "markBelow"]);
    }

    #[test]
    fn test_transform_applies_to_anchors() {
        let mut font = sample_font();
        let mut flipped = glyph("arBeh.flip", 600.0, vec![]);
        flipped.components.push(Component::new(
            glyph_name("arBeh").unwrap(),
            AffineTransform {
                x_scale: -1.0,
                xy_scale: 0.0,
                yx_scale: 0.0,
                y_scale: 1.0,
                x_offset: 600.0,
                y_offset: 0.0,
            },
            None,
        ));
        font.default_layer_mut().insert_glyph(flipped);

        propagate_anchors(font.default_layer_mut()).unwrap();

        let flipped = font.default_layer().get_glyph("arBeh.flip").unwrap();
        assert_eq!(anchor_at(flipped, "markAbove"), (300.0, 400.0));
    }

    #[test]
    fn test_glyphs_without_components_untouched() {
        let mut font = sample_font();
        assert_eq!(propagate_anchors(font.default_layer_mut()).unwrap(), 0);
        let beh = font.default_layer().get_glyph("arBeh").unwrap();
        assert_eq!(beh.anchors.len(), 2);
    }
}
