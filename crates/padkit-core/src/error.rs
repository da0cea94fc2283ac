//! Error handling for PadKit
//!
//! Provides the error types shared by every crate in the workspace:
//! - Configuration errors (unknown selectors, out-of-range parameters)
//! - Pad list errors (malformed size/quantity input)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Packing overflow and oversized engravings are deliberately *not* errors;
//! they are reported as ordinary values by the layout tools.

use thiserror::Error;

/// Configuration error type
///
/// Raised when a settings snapshot or selector is rejected before any
/// layout work begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Material selector does not name a known material
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Length unit selector is not recognised
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// A value that must be zero or greater was negative
    #[error("Parameter '{name}' must not be negative (got {value})")]
    Negative {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A value that must be strictly positive was zero or negative
    #[error("Parameter '{name}' must be greater than zero (got {value})")]
    NotPositive {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A value fell outside its allowed closed range
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// A value was NaN or infinite
    #[error("Parameter '{name}' must be a finite number")]
    NotFinite {
        /// The parameter name.
        name: String,
    },

    /// Layer colour is not a `#RRGGBB` hex string
    #[error("Invalid colour for '{name}': {value}")]
    InvalidColor {
        /// The layer name.
        name: String,
        /// The rejected colour string.
        value: String,
    },
}

impl ConfigError {
    /// Reject `value` unless it is finite and `>= 0`.
    pub fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: name.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ConfigError::Negative {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Reject `value` unless it is finite and `> 0`.
    pub fn check_positive(name: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: name.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Reject `value` unless it lies in `[min, max]`.
    pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite {
                name: name.to_string(),
            });
        }
        if value < min || value > max {
            return Err(ConfigError::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// Pad list error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PadError {
    /// A pad list line could not be parsed
    #[error("Invalid pad entry on line {line_number}: '{line}' ({reason})")]
    InvalidLine {
        /// One-based line number.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// Pad size is not a positive finite number
    #[error("Invalid pad size: {0}")]
    InvalidSize(f64),

    /// Pad quantity is zero
    #[error("Pad quantity must be at least 1 (size {size})")]
    ZeroQuantity {
        /// Nominal size of the pad with the bad quantity.
        size: f64,
    },

    /// Pad quantity exceeds the per-entry limit
    #[error("Pad quantity {quantity} for size {size} exceeds the limit of {max}")]
    QuantityTooLarge {
        /// Nominal size of the pad with the bad quantity.
        size: f64,
        /// The rejected quantity.
        quantity: u32,
        /// Largest accepted quantity.
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownMaterial("cork".to_string());
        assert_eq!(err.to_string(), "Unknown material: cork");

        let err = ConfigError::OutOfRange {
            name: "dart_shape_factor".to_string(),
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'dart_shape_factor' out of range: 1.5 (valid: 0..1)"
        );
    }

    #[test]
    fn test_checks() {
        assert!(ConfigError::check_non_negative("felt_offset", 0.0).is_ok());
        assert!(matches!(
            ConfigError::check_non_negative("felt_offset", -0.1),
            Err(ConfigError::Negative { .. })
        ));
        assert!(matches!(
            ConfigError::check_positive("dart_frequency_multiplier", 0.0),
            Err(ConfigError::NotPositive { .. })
        ));
        assert!(matches!(
            ConfigError::check_positive("x", f64::NAN),
            Err(ConfigError::NotFinite { .. })
        ));
        assert!(ConfigError::check_range("s", 1.0, 0.0, 1.0).is_ok());
        assert!(ConfigError::check_range("s", -0.01, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_pad_error_display() {
        let err = PadError::ZeroQuantity { size: 12.0 };
        assert_eq!(err.to_string(), "Pad quantity must be at least 1 (size 12)");

        let err = PadError::QuantityTooLarge {
            size: 42.0,
            quantity: 4_000_000_000,
            max: 10_000,
        };
        assert_eq!(
            err.to_string(),
            "Pad quantity 4000000000 for size 42 exceeds the limit of 10000"
        );
    }
}
