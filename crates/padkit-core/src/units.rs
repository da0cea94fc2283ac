//! Unit conversion utilities
//!
//! Everything inside the layout core is expressed in millimetres. Sheet sizes
//! and felt thickness arrive in whatever unit the user works in and are
//! normalised here before they reach the sizing or packing code.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Millimetres per centimetre
pub const MM_PER_CM: f64 = 10.0;

/// Linear measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinearUnit {
    /// Millimetres
    #[serde(rename = "mm")]
    Millimeters,
    /// Centimetres
    #[serde(rename = "cm")]
    Centimeters,
    /// Inches
    #[serde(rename = "in")]
    Inches,
}

impl Default for LinearUnit {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl LinearUnit {
    /// Convert `value` expressed in this unit to millimetres
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Millimeters => value,
            Self::Centimeters => value * MM_PER_CM,
            Self::Inches => value * MM_PER_INCH,
        }
    }

    /// Convert `value_mm` to this unit
    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Millimeters => value_mm,
            Self::Centimeters => value_mm / MM_PER_CM,
            Self::Inches => value_mm / MM_PER_INCH,
        }
    }

    /// Short unit suffix
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for LinearUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "metric" => Ok(Self::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}

/// Format a millimetre length for display in `unit`
///
/// * `value_mm` - Value in millimetres
/// * `unit` - Target unit
pub fn format_length(value_mm: f64, unit: LinearUnit) -> String {
    format!("{:.3} {}", unit.from_mm(value_mm), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_mm() {
        assert_eq!(LinearUnit::Millimeters.to_mm(12.5), 12.5);
        assert_eq!(LinearUnit::Centimeters.to_mm(1.5), 15.0);
        assert!((LinearUnit::Inches.to_mm(13.5) - 342.9).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let mm = LinearUnit::Inches.to_mm(10.0);
        assert!((LinearUnit::Inches.from_mm(mm) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse() {
        assert_eq!("in".parse::<LinearUnit>(), Ok(LinearUnit::Inches));
        assert_eq!("CM".parse::<LinearUnit>(), Ok(LinearUnit::Centimeters));
        assert_eq!(" mm ".parse::<LinearUnit>(), Ok(LinearUnit::Millimeters));
        assert!(matches!(
            "ft".parse::<LinearUnit>(),
            Err(ConfigError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(25.4, LinearUnit::Inches), "1.000 in");
        assert_eq!(format_length(3.175, LinearUnit::Millimeters), "3.175 mm");
    }
}
