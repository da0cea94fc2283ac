//! Engraving label placement
//!
//! Each disc can carry its nominal size as a small engraved label. The label
//! is centered horizontally and sits above the disc center at an offset that
//! depends on the placement mode. Labels whose font would overflow the disc
//! are dropped, and a batch-wide pre-flight lists which sizes will lose
//! their label so the caller can warn before generating anything.

use crate::sizing::size_disc;
use padkit_core::{MaterialKind, PadSpec, Point};
use padkit_settings::{EngravingLocation, EngravingMode, EngravingSettings, SizingConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Labels need `font_size < radius * OVERSIZE_RATIO` to be engraved
const OVERSIZE_RATIO: f64 = 0.8;

/// Stand-in hole radius (mm) for centered labels on discs without a hole
const PHANTOM_HOLE_RADIUS: f64 = 1.75;

/// Baseline shift, as a fraction of the font size, that centers glyphs on the anchor line
const BASELINE_SHIFT: f64 = 0.35;

/// A label to engrave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngravingMark {
    pub text: String,
    /// Baseline anchor; text is centered horizontally on it
    pub anchor: Point,
    pub font_size: f64,
}

/// True when a label of `font_size` would not fit on a disc of `radius`
pub fn is_oversized(font_size: f64, radius: f64) -> bool {
    font_size >= radius * OVERSIZE_RATIO
}

/// Label anchor for a disc, or `None` when the label is too large
///
/// `hole_radius` is 0 for discs without a center hole.
pub fn placement(
    center: Point,
    radius: f64,
    hole_radius: f64,
    location: EngravingLocation,
    font_size: f64,
) -> Option<Point> {
    if is_oversized(font_size, radius) {
        return None;
    }

    let offset = match location.mode {
        EngravingMode::FromOutside => radius - location.value,
        EngravingMode::FromInside => hole_radius + location.value,
        EngravingMode::Centered => {
            let effective_hole = if hole_radius > 0.0 {
                hole_radius
            } else {
                PHANTOM_HOLE_RADIUS
            };
            (radius + effective_hole) / 2.0
        }
    };

    Some(Point::new(
        center.x,
        center.y - offset + font_size * BASELINE_SHIFT,
    ))
}

/// Label text for a nominal size: one decimal, trailing zeros dropped
///
/// `42.0` engraves as `42`, `16.5` as `16.5`.
pub fn engraving_label(pad_size: f64) -> String {
    let text = format!("{:.1}", pad_size);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Build the full mark for a disc
pub fn engraving_mark(
    pad_size: f64,
    center: Point,
    radius: f64,
    hole_radius: f64,
    location: EngravingLocation,
    font_size: f64,
) -> Option<EngravingMark> {
    placement(center, radius, hole_radius, location, font_size).map(|anchor| EngravingMark {
        text: engraving_label(pad_size),
        anchor,
        font_size,
    })
}

/// Pre-flight: pad sizes whose labels will be dropped, grouped by material
///
/// Only discs that would be engraved at all are considered, so star discs
/// follow the dart switch and circles follow the standard switch. Sizes are
/// sorted and de-duplicated; materials with nothing oversized are omitted.
pub fn oversized_engravings(
    pads: &[PadSpec],
    materials: &[MaterialKind],
    sizing: &SizingConfig,
    engraving: &EngravingSettings,
) -> BTreeMap<MaterialKind, Vec<f64>> {
    let mut report = BTreeMap::new();

    for &material in materials {
        let font_size = engraving.font_size_for(material);
        let mut sizes: Vec<f64> = pads
            .iter()
            .filter(|pad| {
                let disc = size_disc(pad.size, material, sizing);
                engraving.location_for(material, disc.is_dart).is_some()
                    && is_oversized(font_size, disc.radius())
            })
            .map(|pad| pad.size)
            .collect();

        if sizes.is_empty() {
            continue;
        }
        sizes.sort_by(f64::total_cmp);
        sizes.dedup();
        report.insert(material, sizes);
    }

    report
}
