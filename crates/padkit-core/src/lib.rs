//! # PadKit Core
//!
//! Core types and utilities for PadKit.
//! Provides the pad list model, the closed set of cut materials, linear unit
//! handling and the error taxonomy shared by the settings and layout crates.

pub mod data;
pub mod error;
pub mod units;

pub use data::{
    parse_pad_line, parse_pad_list, parse_pad_list_strict, total_quantity, MaterialKind,
    PadSpec, Point, MAX_PAD_QUANTITY,
};

pub use error::{ConfigError, PadError};

pub use units::{format_length, LinearUnit, MM_PER_CM, MM_PER_INCH};
