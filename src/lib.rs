//! # PadKit
//!
//! Cut files for woodwind pad making: felt, card and leather discs sized
//! from a list of nominal pad diameters, nested on a laser sheet, with
//! optional center holes and engraved size labels.
//!
//! ## Architecture
//!
//! PadKit is organized as a workspace with multiple crates:
//!
//! 1. **padkit-core** - Pad list model, materials, units, error taxonomy
//! 2. **padkit-settings** - Settings snapshot, defaults, JSON/TOML files
//! 3. **padkit-camtools** - Sizing, star outlines, packing, engraving, layout
//! 4. **padkit** - Job files and the command line tool

pub mod job;

pub use padkit_core::{
    parse_pad_list, parse_pad_list_strict, ConfigError, LinearUnit, MaterialKind, PadError,
    PadSpec, Point,
};

pub use padkit_settings::{
    DartSettings, EngravingLocation, EngravingMode, EngravingSettings, HoleOption, LayerColors,
    PadSettings, PerMaterial, SettingsError, SheetSettings, SizingConfig,
};

pub use padkit_camtools::{
    FitReport, LayoutError, LayoutSink, MaterialLayout, OutlinePath, PackOutcome, PackingEngine,
    PadLayoutMaker, RecordingSink, SheetRecord,
};

pub use job::{Job, JobFile, PadInput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so stdout stays free for JSON output. The level
/// comes from `RUST_LOG`, falling back to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
