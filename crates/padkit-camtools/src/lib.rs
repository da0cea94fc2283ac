//! # PadKit CAM Tools
//!
//! Geometry and layout for cutting woodwind pad components on a laser.
//!
//! ## Tools Included
//!
//! - **Sizing**: Nominal pad size to cut diameter per material, with the leather back-wrap curve
//! - **Star Outline**: Scalloped outlines for small leather covers
//! - **Packing**: Greedy grid-scan placement of discs on a sheet
//! - **Engraving**: Size label text, anchor placement and the oversized pre-flight
//! - **Pad Layout Maker**: Per-material layouts and emission to an output sink

pub mod engraving;
pub mod error;
pub mod packing;
pub mod pad_layout;
pub mod sink;
pub mod sizing;
pub mod star_outline;
pub mod wrap_curve;

pub use engraving::{engraving_label, engraving_mark, oversized_engravings, EngravingMark};
pub use error::{LayoutError, LayoutResult};
pub use packing::{FitReport, Overflow, PackItem, PackOutcome, PackingEngine, Placement};
pub use pad_layout::{
    HoleCircle, LaidOutDisc, MaterialLayout, OutlinePath, PadLayoutMaker, PlacedDisc,
};
pub use sink::{LayoutSink, RecordingSink, ShapeRecord, SheetRecord};
pub use sizing::{disc_diameter, expand_discs, has_center_hole, round_to_half, size_disc, Disc};
pub use star_outline::{star_path, star_point_count, star_radii, StarPath, StarRadii};
pub use wrap_curve::back_wrap;
