//! Sizing parameters
//!
//! The scalar offsets and dart/star parameters that turn a nominal pad size
//! into a cut diameter. A `SizingConfig` is an immutable snapshot: build it,
//! call [`SizingConfig::validate`] (the loaders and layout tools do this for
//! you), then pass it by reference.

use padkit_core::{ConfigError, LinearUnit};
use serde::{Deserialize, Serialize};

/// Parameters controlling star-shaped ("dart") leather covers for small pads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DartSettings {
    /// Render small leather pads as stars
    pub enabled: bool,
    /// Pads strictly below this nominal size (mm) become stars
    pub threshold: f64,
    /// Clearance (mm) added beyond felt edge + thickness for the star valleys
    pub overwrap: f64,
    /// Extra base wrap (mm, before multiplier) given to star tips
    pub wrap_bonus: f64,
    /// Scales the number of lobes around the circumference
    pub frequency_multiplier: f64,
    /// 0.0 = sine lobes, 1.0 = flattened, square-ish lobes
    pub shape_factor: f64,
}

impl Default for DartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 18.0,
            overwrap: 0.5,
            wrap_bonus: 0.75,
            frequency_multiplier: 1.0,
            shape_factor: 0.0,
        }
    }
}

impl DartSettings {
    /// Validate dart parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("dart_threshold", self.threshold)?;
        ConfigError::check_non_negative("dart_overwrap", self.overwrap)?;
        ConfigError::check_non_negative("dart_wrap_bonus", self.wrap_bonus)?;
        ConfigError::check_positive("dart_frequency_multiplier", self.frequency_multiplier)?;
        ConfigError::check_range("dart_shape_factor", self.shape_factor, 0.0, 1.0)?;
        Ok(())
    }

    /// Whether a pad of `pad_size` falls in the star regime
    pub fn applies_to(&self, pad_size: f64) -> bool {
        self.enabled && pad_size < self.threshold
    }
}

/// Material sizing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// Felt disc is cut this much (mm) under the nominal size
    pub felt_offset: f64,
    /// Card disc is cut this much (mm) under the felt disc
    pub card_to_felt_offset: f64,
    /// Multiplier applied to the leather back-wrap allowance
    pub leather_wrap_multiplier: f64,
    /// Felt thickness, in `felt_thickness_unit`
    pub felt_thickness: f64,
    /// Unit of `felt_thickness`
    pub felt_thickness_unit: LinearUnit,
    /// Pads below this nominal size (mm) never get a center hole
    pub min_hole_size: f64,
    /// Star-shaped leather parameters
    pub darts: DartSettings,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            felt_offset: 0.75,
            card_to_felt_offset: 2.0,
            leather_wrap_multiplier: 1.0,
            felt_thickness: 3.175,
            felt_thickness_unit: LinearUnit::Millimeters,
            min_hole_size: 16.5,
            darts: DartSettings::default(),
        }
    }
}

impl SizingConfig {
    /// Felt thickness normalised to millimetres
    pub fn felt_thickness_mm(&self) -> f64 {
        self.felt_thickness_unit.to_mm(self.felt_thickness)
    }

    /// Validate all sizing parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("felt_offset", self.felt_offset)?;
        ConfigError::check_non_negative("card_to_felt_offset", self.card_to_felt_offset)?;
        ConfigError::check_non_negative("leather_wrap_multiplier", self.leather_wrap_multiplier)?;
        ConfigError::check_non_negative("felt_thickness", self.felt_thickness)?;
        ConfigError::check_non_negative("min_hole_size", self.min_hole_size)?;
        self.darts.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SizingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_felt_thickness_in_inches() {
        let config = SizingConfig {
            felt_thickness: 0.125,
            felt_thickness_unit: LinearUnit::Inches,
            ..Default::default()
        };
        assert!((config.felt_thickness_mm() - 3.175).abs() < 1e-9);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let config = SizingConfig {
            felt_offset: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { ref name, .. }) if name == "felt_offset"
        ));
    }

    #[test]
    fn test_dart_parameters_rejected() {
        let mut config = SizingConfig::default();
        config.darts.frequency_multiplier = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { .. })
        ));

        let mut config = SizingConfig::default();
        config.darts.shape_factor = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_dart_regime() {
        let darts = DartSettings::default();
        assert!(darts.applies_to(15.0));
        assert!(!darts.applies_to(18.0));

        let disabled = DartSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(!disabled.applies_to(15.0));
    }
}
