//! Engraving label settings
//!
//! Size labels are engraved on each disc unless switched off. Standard discs
//! use the per-material location; star-shaped leather discs have their own
//! switch and location because the usable area sits between the valleys,
//! not at the rim.

use crate::materials::PerMaterial;
use padkit_core::{ConfigError, MaterialKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the label baseline is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngravingMode {
    /// `value` mm inward from the disc rim
    FromOutside,
    /// `value` mm outward from the center hole (or center)
    FromInside,
    /// Midway between rim and hole; `value` is ignored
    Centered,
}

impl fmt::Display for EngravingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromOutside => write!(f, "from outside"),
            Self::FromInside => write!(f, "from inside"),
            Self::Centered => write!(f, "centered"),
        }
    }
}

/// Label placement rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngravingLocation {
    pub mode: EngravingMode,
    #[serde(default)]
    pub value: f64,
}

impl EngravingLocation {
    pub fn new(mode: EngravingMode, value: f64) -> Self {
        Self { mode, value }
    }

    pub fn centered() -> Self {
        Self::new(EngravingMode::Centered, 0.0)
    }
}

/// Engraving settings for all materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngravingSettings {
    /// Engrave labels on standard (circular) discs
    pub enabled: bool,
    /// Label font size (mm) per material
    pub font_size: PerMaterial<f64>,
    /// Label placement per material, for circular discs
    pub location: PerMaterial<EngravingLocation>,
    /// Engrave labels on star-shaped discs
    pub dart_enabled: bool,
    /// Label placement for star-shaped discs
    pub dart_location: EngravingLocation,
}

impl Default for EngravingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            font_size: PerMaterial::uniform(2.0),
            location: PerMaterial {
                felt: EngravingLocation::centered(),
                card: EngravingLocation::centered(),
                leather: EngravingLocation::new(EngravingMode::FromOutside, 1.0),
                exact_size: EngravingLocation::centered(),
            },
            dart_enabled: true,
            dart_location: EngravingLocation::new(EngravingMode::FromOutside, 2.5),
        }
    }
}

impl EngravingSettings {
    /// Font size for `material`
    pub fn font_size_for(&self, material: MaterialKind) -> f64 {
        *self.font_size.get(material)
    }

    /// Placement rule for a disc, or `None` when that kind of disc is not engraved
    pub fn location_for(&self, material: MaterialKind, is_dart: bool) -> Option<EngravingLocation> {
        if is_dart {
            self.dart_enabled.then_some(self.dart_location)
        } else {
            self.enabled.then(|| *self.location.get(material))
        }
    }

    /// Validate font sizes and location offsets
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (material, size) in self.font_size.iter() {
            ConfigError::check_positive(&format!("engraving_font_size.{}", material.as_str()), *size)?;
        }
        for (material, location) in self.location.iter() {
            ConfigError::check_non_negative(
                &format!("engraving_location.{}", material.as_str()),
                location.value,
            )?;
        }
        ConfigError::check_non_negative("dart_engraving_location", self.dart_location.value)?;
        Ok(())
    }
}
