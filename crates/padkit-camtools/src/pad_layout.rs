//! Pad layout maker
//!
//! Ties the sizing, packing, star and engraving tools together for one
//! material at a time. A [`PadLayoutMaker`] owns a validated settings
//! snapshot; every call builds a fresh result from it.

use crate::engraving::{engraving_mark, oversized_engravings, EngravingMark};
use crate::error::{LayoutError, LayoutResult};
use crate::packing::{FitReport, PackItem, PackingEngine};
use crate::sink::LayoutSink;
use crate::sizing::{expand_discs, has_center_hole, Disc};
use crate::star_outline::{star_path, star_point_count, star_radii, StarPath};
use padkit_core::{MaterialKind, PadSpec, Point};
use padkit_settings::PadSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outline of a placed disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OutlinePath {
    Circle { center: Point, radius: f64 },
    Star(StarPath),
}

/// A disc with its position on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedDisc {
    pub disc: Disc,
    pub center: Point,
    pub radius: f64,
}

/// Center hole circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleCircle {
    pub center: Point,
    pub radius: f64,
}

/// Everything cut or engraved for one placed disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutDisc {
    pub placed: PlacedDisc,
    pub outline: OutlinePath,
    pub hole: Option<HoleCircle>,
    pub engraving: Option<EngravingMark>,
}

/// Layout of one material on one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLayout {
    pub material: MaterialKind,
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Placed discs, largest first
    pub discs: Vec<LaidOutDisc>,
    /// Discs that found no room
    pub overflow: Vec<Disc>,
}

impl MaterialLayout {
    pub fn fits(&self) -> bool {
        self.overflow.is_empty()
    }
}

/// Builds per-material layouts from a validated settings snapshot
#[derive(Debug, Clone)]
pub struct PadLayoutMaker {
    settings: PadSettings,
    engine: PackingEngine,
}

impl PadLayoutMaker {
    /// Validate `settings` and prepare a packer for its sheet
    pub fn new(settings: PadSettings) -> LayoutResult<Self> {
        settings.validate()?;
        let engine = PackingEngine::new(settings.sheet.width_mm(), settings.sheet.height_mm());
        Ok(Self { settings, engine })
    }

    pub fn settings(&self) -> &PadSettings {
        &self.settings
    }

    /// Sheet width and height in mm
    pub fn sheet_size(&self) -> (f64, f64) {
        (self.engine.width(), self.engine.height())
    }

    fn discs(&self, pads: &[PadSpec], material: MaterialKind) -> LayoutResult<Vec<Disc>> {
        for pad in pads {
            pad.validate()?;
        }
        Ok(expand_discs(pads, material, &self.settings.sizing))
    }

    fn pack_items(discs: &[Disc]) -> Vec<PackItem> {
        discs
            .iter()
            .enumerate()
            .map(|(id, disc)| PackItem {
                id,
                diameter: disc.diameter,
            })
            .collect()
    }

    /// Would every disc for `material` fit on the sheet?
    pub fn check_fit(&self, pads: &[PadSpec], material: MaterialKind) -> LayoutResult<FitReport> {
        let discs = self.discs(pads, material)?;
        Ok(self.engine.check_fit(&Self::pack_items(&discs)))
    }

    /// First material in `materials` that does not fit, with its report
    pub fn check_all_fit(
        &self,
        pads: &[PadSpec],
        materials: &[MaterialKind],
    ) -> LayoutResult<Option<(MaterialKind, FitReport)>> {
        for &material in materials {
            let report = self.check_fit(pads, material)?;
            if !report.fits() {
                return Ok(Some((material, report)));
            }
        }
        Ok(None)
    }

    /// Pad sizes whose labels will be dropped, by material
    ///
    /// Empty when engraving is switched off.
    pub fn oversized_engravings(
        &self,
        pads: &[PadSpec],
        materials: &[MaterialKind],
    ) -> BTreeMap<MaterialKind, Vec<f64>> {
        if !self.settings.engraving.enabled {
            return BTreeMap::new();
        }
        oversized_engravings(
            pads,
            materials,
            &self.settings.sizing,
            &self.settings.engraving,
        )
    }

    /// Size, pack and render every disc for `material`
    pub fn generate(&self, pads: &[PadSpec], material: MaterialKind) -> LayoutResult<MaterialLayout> {
        let discs = self.discs(pads, material)?;
        let outcome = self.engine.pack(&Self::pack_items(&discs));

        let laid_out: Vec<LaidOutDisc> = outcome
            .placements()
            .iter()
            .map(|placement| {
                self.lay_out(
                    material,
                    PlacedDisc {
                        disc: discs[placement.id],
                        center: placement.center,
                        radius: placement.radius,
                    },
                )
            })
            .collect();
        let overflow: Vec<Disc> = outcome.overflow().iter().map(|o| discs[o.id]).collect();

        let stars = laid_out
            .iter()
            .filter(|d| matches!(d.outline, OutlinePath::Star(_)))
            .count();
        let labels = laid_out.iter().filter(|d| d.engraving.is_some()).count();
        debug!(
            "{} layout: {} discs ({} stars, {} labels), {} overflow",
            material,
            laid_out.len(),
            stars,
            labels,
            overflow.len()
        );

        let (sheet_width, sheet_height) = self.sheet_size();
        Ok(MaterialLayout {
            material,
            sheet_width,
            sheet_height,
            discs: laid_out,
            overflow,
        })
    }

    fn lay_out(&self, material: MaterialKind, placed: PlacedDisc) -> LaidOutDisc {
        let sizing = &self.settings.sizing;
        let engraving = &self.settings.engraving;
        let disc = placed.disc;

        let outline = if disc.is_dart {
            let radii = star_radii(disc.source_size, placed.radius, sizing);
            let points = star_point_count(radii.inner, sizing.darts.frequency_multiplier);
            OutlinePath::Star(star_path(
                placed.center,
                radii.outer,
                radii.inner,
                points,
                sizing.darts.shape_factor,
            ))
        } else {
            OutlinePath::Circle {
                center: placed.center,
                radius: placed.radius,
            }
        };

        let hole_diameter = self.settings.hole.diameter();
        let hole = has_center_hole(disc.source_size, hole_diameter, sizing.min_hole_size).then(
            || HoleCircle {
                center: placed.center,
                radius: hole_diameter / 2.0,
            },
        );
        let hole_radius = hole.map_or(0.0, |h| h.radius);

        let engraving = engraving
            .location_for(material, disc.is_dart)
            .and_then(|location| {
                engraving_mark(
                    disc.source_size,
                    placed.center,
                    placed.radius,
                    hole_radius,
                    location,
                    engraving.font_size_for(material),
                )
            });

        LaidOutDisc {
            placed,
            outline,
            hole,
            engraving,
        }
    }

    /// Send a finished layout to `sink` using the material's layer colours
    pub fn emit(&self, layout: &MaterialLayout, sink: &mut dyn LayoutSink) -> LayoutResult<()> {
        let colors = self.settings.layer_colors.get(layout.material);

        sink.begin_sheet(layout.material, layout.sheet_width, layout.sheet_height)
            .map_err(LayoutError::Sink)?;
        for disc in &layout.discs {
            sink.outline(&disc.outline, &colors.outline)
                .map_err(LayoutError::Sink)?;
            if let Some(hole) = &disc.hole {
                sink.center_hole(hole.center, hole.radius, &colors.center_hole)
                    .map_err(LayoutError::Sink)?;
            }
            if let Some(mark) = &disc.engraving {
                sink.engraving(mark, &colors.engraving)
                    .map_err(LayoutError::Sink)?;
            }
        }
        sink.finish_sheet().map_err(LayoutError::Sink)?;

        info!(
            "Emitted {} sheet with {} discs",
            layout.material,
            layout.discs.len()
        );
        Ok(())
    }
}
