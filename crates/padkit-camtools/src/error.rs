//! Error types for the layout tools.
//!
//! A layout run only fails for bad input: an invalid settings snapshot, an
//! invalid pad entry, or a sink that could not accept the finished shapes.
//! Sheets that are too small are not errors; see [`crate::packing::PackOutcome`].

use padkit_core::{ConfigError, PadError};
use thiserror::Error;

/// Errors that can occur during a layout run.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The settings snapshot failed validation.
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),

    /// A pad entry is not usable.
    #[error("Invalid pad: {0}")]
    Pad(#[from] PadError),

    /// The output sink rejected a shape.
    #[error("Output sink failed: {0}")]
    Sink(#[source] anyhow::Error),
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
