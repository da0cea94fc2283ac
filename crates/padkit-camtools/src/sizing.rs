//! Disc sizing rules
//!
//! Maps a nominal pad size and a material to the diameter that is actually
//! cut. Every function here is pure; the star/circle decision is made once,
//! when the [`Disc`] is built, so packing and engraving never re-derive it.

use crate::wrap_curve::back_wrap;
use padkit_core::{MaterialKind, PadSpec};
use padkit_settings::SizingConfig;
use serde::{Deserialize, Serialize};

/// A disc to cut, derived from one pad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Nominal pad size the disc was derived from (mm)
    pub source_size: f64,
    /// Cut diameter (mm); for stars this is the tip-to-tip diameter
    pub diameter: f64,
    /// Rendered as a star instead of a circle
    pub is_dart: bool,
}

impl Disc {
    /// Outer radius, used for packing even when the outline is a star
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Round to the nearest 0.5, halves going up
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}

/// Cut diameter (mm) for a pad of `pad_size` in `material`
pub fn disc_diameter(pad_size: f64, material: MaterialKind, config: &SizingConfig) -> f64 {
    match material {
        MaterialKind::Felt => pad_size - config.felt_offset,
        MaterialKind::Card => pad_size - (config.felt_offset + config.card_to_felt_offset),
        MaterialKind::ExactSize => pad_size,
        MaterialKind::Leather => leather_diameter(pad_size, config),
    }
}

fn leather_diameter(pad_size: f64, config: &SizingConfig) -> f64 {
    let bonus = if config.darts.applies_to(pad_size) {
        config.darts.wrap_bonus
    } else {
        0.0
    };
    let wrap = back_wrap(pad_size, config.leather_wrap_multiplier, bonus);
    round_to_half(pad_size + 2.0 * (config.felt_thickness_mm() + wrap))
}

/// Whether a pad in `material` is rendered as a star
pub fn is_dart(pad_size: f64, material: MaterialKind, config: &SizingConfig) -> bool {
    material == MaterialKind::Leather && config.darts.applies_to(pad_size)
}

/// Build the disc for one pad
pub fn size_disc(pad_size: f64, material: MaterialKind, config: &SizingConfig) -> Disc {
    Disc {
        source_size: pad_size,
        diameter: disc_diameter(pad_size, material, config),
        is_dart: is_dart(pad_size, material, config),
    }
}

/// Expand a pad list into one disc per requested piece, in list order
pub fn expand_discs(pads: &[PadSpec], material: MaterialKind, config: &SizingConfig) -> Vec<Disc> {
    pads.iter()
        .flat_map(|pad| {
            let disc = size_disc(pad.size, material, config);
            std::iter::repeat(disc).take(pad.quantity as usize)
        })
        .collect()
}

/// Center hole rule, evaluated on the nominal pad size
pub fn has_center_hole(pad_size: f64, hole_diameter: f64, min_hole_size: f64) -> bool {
    hole_diameter > 0.0 && pad_size >= min_hole_size
}
