//! Star ("dart") outline generator
//!
//! Small leather covers are cut as a scalloped flower instead of a circle so
//! the wrap can fold over the pad edge without bunching. The outline is a
//! polar curve whose radius swings between a valley radius (`inner_r`, the
//! minimum leather needed to seat the felt) and a tip radius (`outer_r`, the
//! boosted leather radius):
//!
//! ```text
//! r(θ) = avg + amplitude * sign(c) * |c|^power,  c = cos(n θ)
//! power = 1 - 0.9 * shape_factor
//! ```
//!
//! `shape_factor` 0 gives sine lobes; 1 gives flattened, square-ish lobes.

use padkit_core::Point;
use padkit_settings::SizingConfig;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

/// Arc length (mm) of valley circumference per lobe at frequency 1.0
const LOBE_PITCH: f64 = 3.5;

/// Fewest lobes a star may have
const MIN_POINTS: u32 = 12;

/// Fewest samples taken around the outline
const MIN_STEPS: usize = 64;

/// Samples per lobe
const STEPS_PER_POINT: usize = 8;

/// Gap kept between valley and tip when the radii are inconsistent
const DEGENERATE_GAP: f64 = 0.2;

/// Valley and tip radii for one star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarRadii {
    pub inner: f64,
    pub outer: f64,
    /// `inner` had to be pulled below `outer`
    pub clamped: bool,
}

/// Closed star outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarPath {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub num_points: u32,
    /// Samples in angular order starting at θ = 0; the path closes back to the first
    pub vertices: Vec<Point>,
}

impl StarPath {
    /// Always true: the last vertex connects back to the first
    pub fn is_closed(&self) -> bool {
        true
    }

    /// SVG path data (`M x y L x y ... Z`) with three decimals
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::with_capacity(self.vertices.len() * 20);
        for (i, v) in self.vertices.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            data.push_str(&format!("{} {:.3} {:.3}", command, v.x, v.y));
        }
        data.push_str(" Z");
        data
    }
}

fn clamp_inner_radius(inner_r: f64, outer_r: f64) -> (f64, bool) {
    if inner_r >= outer_r {
        warn!(
            "Star valley radius {:.3} reaches tip radius {:.3}; clamping to {:.3}. Check leather sizing settings.",
            inner_r,
            outer_r,
            outer_r - DEGENERATE_GAP
        );
        (outer_r - DEGENERATE_GAP, true)
    } else {
        (inner_r, false)
    }
}

/// Valley and tip radii for a star-shaped leather disc
///
/// The valley sits at the felt disc's radius plus felt thickness plus the
/// dart overwrap. `outer_r` is the boosted leather radius from sizing.
pub fn star_radii(pad_size: f64, outer_r: f64, config: &SizingConfig) -> StarRadii {
    let felt_r = (pad_size - config.felt_offset) / 2.0;
    let inner_r = felt_r + config.felt_thickness_mm() + config.darts.overwrap;
    let (inner, clamped) = clamp_inner_radius(inner_r, outer_r);
    StarRadii {
        inner,
        outer: outer_r,
        clamped,
    }
}

/// Number of lobes for a star with valley radius `inner_r`
///
/// Roughly one lobe per 3.5 mm of valley circumference, scaled by
/// `frequency_multiplier`, never fewer than 12 and always even.
pub fn star_point_count(inner_r: f64, frequency_multiplier: f64) -> u32 {
    let raw = ((2.0 * PI * inner_r / LOBE_PITCH) * frequency_multiplier).round();
    let mut count = if raw.is_finite() && raw > MIN_POINTS as f64 {
        raw as u32
    } else {
        MIN_POINTS
    };
    if count % 2 != 0 {
        count += 1;
    }
    count
}

/// Sample the closed star outline
pub fn star_path(
    center: Point,
    outer_r: f64,
    inner_r: f64,
    num_points: u32,
    shape_factor: f64,
) -> StarPath {
    let (inner_r, _) = clamp_inner_radius(inner_r, outer_r);
    let shape_factor = shape_factor.clamp(0.0, 1.0);

    let avg_r = (outer_r + inner_r) / 2.0;
    let amplitude = (outer_r - inner_r) / 2.0;
    let power = 1.0 - 0.9 * shape_factor;

    let steps = (num_points as usize * STEPS_PER_POINT).max(MIN_STEPS);
    let angle_step = 2.0 * PI / steps as f64;

    let vertices = (0..steps)
        .map(|i| {
            let theta = i as f64 * angle_step;
            let raw = (num_points as f64 * theta).cos();
            let shaped = if raw >= 0.0 { 1.0 } else { -1.0 } * raw.abs().powf(power);
            let r = avg_r + amplitude * shaped;
            Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect();

    StarPath {
        center,
        outer_radius: outer_r,
        inner_radius: inner_r,
        num_points,
        vertices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius_at(path: &StarPath, index: usize) -> f64 {
        path.vertices[index].distance_to(&path.center)
    }

    #[test]
    fn test_point_count_even_and_bounded() {
        for tenth in 0..400 {
            let inner = tenth as f64 / 10.0;
            for freq in [0.25, 0.5, 1.0, 1.7, 3.0] {
                let n = star_point_count(inner, freq);
                assert!(n >= 12, "n={n} for inner={inner}, freq={freq}");
                assert_eq!(n % 2, 0, "odd n={n} for inner={inner}, freq={freq}");
            }
        }
    }

    #[test]
    fn test_point_count_rounds() {
        // 2π * 10.8 / 3.5 = 19.39 -> 19 -> 20
        assert_eq!(star_point_count(10.8, 1.0), 20);
        // 2π * 20 / 3.5 = 35.90 -> 36
        assert_eq!(star_point_count(20.0, 1.0), 36);
        assert_eq!(star_point_count(f64::NAN, 1.0), 12);
    }

    #[test]
    fn test_sample_count() {
        let path = star_path(Point::default(), 12.0, 10.0, 12, 0.0);
        assert_eq!(path.vertices.len(), 96);
        let path = star_path(Point::default(), 12.0, 10.0, 4, 0.0);
        assert_eq!(path.vertices.len(), 64);
    }

    #[test]
    fn test_sine_lobes_stay_in_band() {
        let center = Point::new(30.0, 40.0);
        let path = star_path(center, 12.75, 10.8, 20, 0.0);
        let avg = (12.75 + 10.8) / 2.0;
        let amplitude = (12.75 - 10.8) / 2.0;
        for v in &path.vertices {
            let r = v.distance_to(&center);
            assert!((r - avg).abs() <= amplitude + 1e-9);
        }
        // θ = 0 is a tip
        assert!((radius_at(&path, 0) - 12.75).abs() < 1e-9);
        // Half a lobe later (4 of 8 samples) is a valley
        assert!((radius_at(&path, 4) - 10.8).abs() < 1e-9);
    }

    #[test]
    fn test_square_lobes_are_flattened() {
        let sine = star_path(Point::default(), 12.0, 10.0, 12, 0.0);
        let square = star_path(Point::default(), 12.0, 10.0, 12, 1.0);
        // One sample into a lobe: cos(π/4) = 0.7071 vs 0.7071^0.1 = 0.9659
        let expected_sine = 11.0 + 1.0 * std::f64::consts::FRAC_1_SQRT_2;
        let expected_square = 11.0 + 1.0 * std::f64::consts::FRAC_1_SQRT_2.powf(0.1);
        assert!((radius_at(&sine, 1) - expected_sine).abs() < 1e-9);
        assert!((radius_at(&square, 1) - expected_square).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_radii_clamped() {
        let path = star_path(Point::default(), 10.0, 11.0, 12, 0.0);
        assert!((path.inner_radius - 9.8).abs() < 1e-12);

        let radii = star_radii(15.0, 5.0, &SizingConfig::default());
        assert!(radii.clamped);
        assert!((radii.inner - 4.8).abs() < 1e-12);
    }

    #[test]
    fn test_star_radii_from_sizing() {
        // felt radius 7.125 + thickness 3.175 + overwrap 0.5
        let radii = star_radii(15.0, 12.75, &SizingConfig::default());
        assert!(!radii.clamped);
        assert!((radii.inner - 10.8).abs() < 1e-9);
        assert_eq!(radii.outer, 12.75);
    }

    #[test]
    fn test_svg_path_data() {
        let path = star_path(Point::new(10.0, 10.0), 2.0, 1.0, 12, 0.0);
        let data = path.to_svg_path_data();
        assert!(data.starts_with("M 12.000 10.000 L "));
        assert!(data.ends_with(" Z"));
        assert_eq!(data.matches(" L ").count(), path.vertices.len() - 1);
        assert!(path.is_closed());
    }
}
