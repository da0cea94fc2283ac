//! PadKit Settings Crate
//!
//! Holds the settings snapshot a layout run works from: material sizing
//! parameters, engraving rules, layer colours, sheet size and hole option.
//! Settings load from JSON or TOML and are validated before use.

pub mod config;
pub mod engraving;
pub mod error;
pub mod layers;
pub mod materials;
pub mod sizing;

pub use config::{HoleOption, PadSettings, SheetSettings};
pub use engraving::{EngravingLocation, EngravingMode, EngravingSettings};
pub use error::{SettingsError, SettingsResult};
pub use layers::{default_layer_colors, validate_layer_colors, LayerColors};
pub use materials::PerMaterial;
pub use sizing::{DartSettings, SizingConfig};
