//! Sheet packing engine
//!
//! Deterministic greedy placement of discs on a rectangular sheet:
//!
//! 1. Discs are sorted by diameter, largest first. Equal diameters keep
//!    their request order.
//! 2. For each disc, top-left anchors are scanned on a 1 mm grid, row by row
//!    from `(spacing, spacing)`, while the disc still fits inside the sheet
//!    minus `spacing` on every edge.
//! 3. The first anchor whose disc keeps at least `spacing` from every disc
//!    already placed wins.
//!
//! Discs that find no anchor are reported as overflow; the scan carries on
//! with the remaining discs so every overflowing disc is named. The
//! feasibility check and the real layout share one implementation, so they
//! always agree.
//!
//! Cost is O(discs x grid cells x placed discs). That is fine for the tens to
//! low hundreds of discs on a hobby laser sheet, and it is not optimal
//! nesting.

use padkit_core::Point;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default clearance (mm) between discs and to the sheet edge
pub const DEFAULT_SPACING: f64 = 1.0;

/// Anchor grid step (mm)
pub const GRID_STEP: f64 = 1.0;

/// A disc to place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackItem {
    /// Caller-chosen identifier, echoed back in placements and overflow
    pub id: usize,
    /// Outer diameter (mm)
    pub diameter: f64,
}

/// Where a disc ended up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: usize,
    pub center: Point,
    pub radius: f64,
}

/// A disc that found no room on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overflow {
    pub id: usize,
    pub diameter: f64,
}

/// Result of a packing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PackOutcome {
    /// Every disc was placed
    Fits(Vec<Placement>),
    /// Some discs did not fit; `placed` holds the ones that did
    Overflow {
        placed: Vec<Placement>,
        overflow: Vec<Overflow>,
    },
}

impl PackOutcome {
    pub fn fits(&self) -> bool {
        matches!(self, Self::Fits(_))
    }

    /// Placed discs, in placement order (largest first)
    pub fn placements(&self) -> &[Placement] {
        match self {
            Self::Fits(placed) => placed,
            Self::Overflow { placed, .. } => placed,
        }
    }

    /// Discs that did not fit, in placement order
    pub fn overflow(&self) -> &[Overflow] {
        match self {
            Self::Fits(_) => &[],
            Self::Overflow { overflow, .. } => overflow,
        }
    }
}

/// Verdict of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub placed: usize,
    pub overflow: Vec<Overflow>,
}

impl FitReport {
    pub fn fits(&self) -> bool {
        self.overflow.is_empty()
    }
}

/// Greedy grid-scan packer for a single sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingEngine {
    width: f64,
    height: f64,
    spacing: f64,
}

impl PackingEngine {
    /// Packer for a `width` x `height` mm sheet with the default 1 mm spacing
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_spacing(width, height, DEFAULT_SPACING)
    }

    /// Packer with an explicit spacing; negative or non-finite spacing is treated as 0
    ///
    /// A non-finite sheet dimension is treated as 0, so nothing fits.
    pub fn with_spacing(width: f64, height: f64, spacing: f64) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            width: finite_or_zero(width),
            height: finite_or_zero(height),
            spacing: finite_or_zero(spacing).max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Place every item, reporting any that do not fit
    pub fn pack(&self, items: &[PackItem]) -> PackOutcome {
        let (placed, overflow) = self.run(items);
        if overflow.is_empty() {
            PackOutcome::Fits(placed)
        } else {
            PackOutcome::Overflow { placed, overflow }
        }
    }

    /// Run the same placement as [`PackingEngine::pack`] and keep only the verdict
    pub fn check_fit(&self, items: &[PackItem]) -> FitReport {
        let (placed, overflow) = self.run(items);
        FitReport {
            placed: placed.len(),
            overflow,
        }
    }

    fn run(&self, items: &[PackItem]) -> (Vec<Placement>, Vec<Overflow>) {
        let mut order: Vec<PackItem> = items.to_vec();
        // Stable: equal diameters keep request order
        order.sort_by(|a, b| b.diameter.total_cmp(&a.diameter));

        let mut placed: Vec<Placement> = Vec::with_capacity(order.len());
        let mut overflow = Vec::new();

        for item in order {
            match self.find_spot(item.diameter, &placed) {
                Some(center) => placed.push(Placement {
                    id: item.id,
                    center,
                    radius: item.diameter / 2.0,
                }),
                None => overflow.push(Overflow {
                    id: item.id,
                    diameter: item.diameter,
                }),
            }
        }

        if overflow.is_empty() {
            debug!(
                "Packed {} discs on {:.1} x {:.1} mm sheet",
                placed.len(),
                self.width,
                self.height
            );
        } else {
            warn!(
                "{} of {} discs did not fit on {:.1} x {:.1} mm sheet",
                overflow.len(),
                items.len(),
                self.width,
                self.height
            );
        }

        (placed, overflow)
    }

    fn find_spot(&self, diameter: f64, placed: &[Placement]) -> Option<Point> {
        if !(diameter.is_finite() && diameter > 0.0) {
            return None;
        }
        let r = diameter / 2.0;
        let s = self.spacing;

        let max_col = last_anchor(self.width, diameter, s)?;
        let max_row = last_anchor(self.height, diameter, s)?;

        for row in 0..=max_row {
            let y = s + row as f64 * GRID_STEP;
            if !(y + diameter + s <= self.height) {
                return None;
            }
            for col in 0..=max_col {
                let x = s + col as f64 * GRID_STEP;
                if !(x + diameter + s <= self.width) {
                    break;
                }
                let center = Point::new(x + r, y + r);
                let collides = placed.iter().any(|p| {
                    let min = r + p.radius + s;
                    center.distance_squared(&p.center) < min * min
                });
                if !collides {
                    return Some(center);
                }
            }
        }
        None
    }
}

/// Index of the last grid anchor along an edge of length `extent`, or `None`
/// when the disc does not fit along that edge at all
fn last_anchor(extent: f64, diameter: f64, spacing: f64) -> Option<u64> {
    let room = extent - diameter - 2.0 * spacing;
    if !(room >= 0.0) {
        return None;
    }
    // Saturating cast; the in-loop bounds check still decides the last anchor
    Some((room / GRID_STEP).floor() as u64)
}
