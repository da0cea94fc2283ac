//! Configuration file handling for PadKit
//!
//! A [`PadSettings`] value is the complete, immutable snapshot a layout run
//! works from. Settings files may be JSON or TOML; every section is optional
//! and falls back to the defaults below.
//!
//! Sections:
//! - `sizing` - material offsets, wrap multiplier, felt thickness, darts
//! - `engraving` - label switches, font sizes and placement
//! - `layer_colors` - per-material stroke colours
//! - `sheet` - sheet width/height and their unit
//! - `hole` - center hole diameter selection

use crate::engraving::EngravingSettings;
use crate::error::{SettingsError, SettingsResult};
use crate::layers::{validate_layer_colors, LayerColors};
use crate::materials::PerMaterial;
use crate::sizing::SizingConfig;
use padkit_core::{ConfigError, LinearUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Center hole selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleOption {
    /// No center hole
    None,
    /// 3.5 mm hole
    #[serde(rename = "3.5mm")]
    Standard3_5,
    /// 3.0 mm hole
    #[serde(rename = "3.0mm")]
    Standard3_0,
    /// Custom hole diameter in mm
    Custom(f64),
}

impl Default for HoleOption {
    fn default() -> Self {
        Self::Standard3_5
    }
}

impl HoleOption {
    /// Hole diameter in millimetres, 0 for no hole
    pub fn diameter(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Standard3_5 => 3.5,
            Self::Standard3_0 => 3.0,
            Self::Custom(d) => *d,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Self::Custom(d) = self {
            ConfigError::check_non_negative("custom_hole_size", *d)?;
        }
        Ok(())
    }
}

/// Sheet size in user units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub width: f64,
    pub height: f64,
    pub unit: LinearUnit,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            width: 13.5,
            height: 10.0,
            unit: LinearUnit::Inches,
        }
    }
}

impl SheetSettings {
    /// Sheet width in millimetres
    pub fn width_mm(&self) -> f64 {
        self.unit.to_mm(self.width)
    }

    /// Sheet height in millimetres
    pub fn height_mm(&self) -> f64 {
        self.unit.to_mm(self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("sheet_width", self.width)?;
        ConfigError::check_positive("sheet_height", self.height)?;
        Ok(())
    }
}

/// Complete settings snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadSettings {
    pub hole: HoleOption,
    pub sizing: SizingConfig,
    pub engraving: EngravingSettings,
    pub layer_colors: PerMaterial<LayerColors>,
    pub sheet: SheetSettings,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self {
            hole: HoleOption::default(),
            sizing: SizingConfig::default(),
            engraving: EngravingSettings::default(),
            layer_colors: PerMaterial::default(),
            sheet: SheetSettings::default(),
        }
    }
}

impl PadSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a `.json` or `.toml` file and validate them
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sizing.validate()?;
        self.engraving.validate()?;
        validate_layer_colors(&self.layer_colors)?;
        self.sheet.validate()?;
        self.hole.validate()?;
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
