//! Data models for pads, materials and sheet coordinates
//!
//! This module provides:
//! - 2D points in sheet coordinates (millimetres, origin top-left, y down)
//! - Nominal pad specifications (size and quantity)
//! - The closed set of cut materials
//! - Pad list parsing

pub mod pad_list;

use crate::error::{ConfigError, PadError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use pad_list::{parse_pad_line, parse_pad_list, parse_pad_list_strict};

/// A point on the sheet, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, growing rightward
    pub x: f64,
    /// Vertical position, growing downward
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Cut material
///
/// Each material has its own sizing formula and output layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Felt disc, cut slightly under the nominal size
    Felt,
    /// Card backing, cut under the felt
    Card,
    /// Leather cover, cut over-size to wrap the pad
    Leather,
    /// Cut exactly at the nominal size
    ExactSize,
}

impl MaterialKind {
    /// Every material, in output order
    pub const ALL: [MaterialKind; 4] = [
        MaterialKind::Felt,
        MaterialKind::Card,
        MaterialKind::Leather,
        MaterialKind::ExactSize,
    ];

    /// Stable machine name (`felt`, `card`, `leather`, `exact_size`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Felt => "felt",
            Self::Card => "card",
            Self::Leather => "leather",
            Self::ExactSize => "exact_size",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Felt => write!(f, "Felt"),
            Self::Card => write!(f, "Card"),
            Self::Leather => write!(f, "Leather"),
            Self::ExactSize => write!(f, "Exact size"),
        }
    }
}

impl FromStr for MaterialKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "felt" => Ok(Self::Felt),
            "card" => Ok(Self::Card),
            "leather" => Ok(Self::Leather),
            "exact_size" | "exact" => Ok(Self::ExactSize),
            _ => Err(ConfigError::UnknownMaterial(s.to_string())),
        }
    }
}

/// Largest quantity a single pad entry may request
pub const MAX_PAD_QUANTITY: u32 = 10_000;

/// A nominal pad size and how many discs of it to cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadSpec {
    /// Nominal pad diameter (mm)
    pub size: f64,
    /// Number of discs to cut, `1..=MAX_PAD_QUANTITY`
    #[serde(alias = "qty")]
    pub quantity: u32,
}

impl PadSpec {
    /// Create a validated pad specification
    pub fn new(size: f64, quantity: u32) -> Result<Self, PadError> {
        let spec = Self { size, quantity };
        spec.validate()?;
        Ok(spec)
    }

    /// Check size is positive and finite and quantity is in `1..=MAX_PAD_QUANTITY`
    pub fn validate(&self) -> Result<(), PadError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PadError::InvalidSize(self.size));
        }
        if self.quantity == 0 {
            return Err(PadError::ZeroQuantity { size: self.size });
        }
        if self.quantity > MAX_PAD_QUANTITY {
            return Err(PadError::QuantityTooLarge {
                size: self.size,
                quantity: self.quantity,
                max: MAX_PAD_QUANTITY,
            });
        }
        Ok(())
    }
}

/// Total number of discs a pad list expands to
pub fn total_quantity(pads: &[PadSpec]) -> usize {
    pads.iter().map(|p| p.quantity as usize).sum()
}
