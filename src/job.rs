//! Job files
//!
//! A job names the pads to cut, the materials to cut them from and the sheet
//! they go on. Jobs are JSON or TOML, picked by extension:
//!
//! ```toml
//! pads = """
//! 42x4
//! 16.5x2
//! """
//! materials = ["felt", "card", "leather"]
//! hole = "3.5mm"
//!
//! [sheet]
//! width = 300
//! height = 200
//! unit = "mm"
//! ```
//!
//! `pads` may also be a list of `{ size, quantity }` tables. A `settings`
//! table carries any section of the settings file and is applied first;
//! `sheet` and `hole` override it.

use anyhow::{bail, Context, Result};
use padkit_core::{parse_pad_list_strict, MaterialKind, PadSpec};
use padkit_settings::{HoleOption, PadSettings, SheetSettings};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Pad list as written in a job file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PadInput {
    /// One `SIZExQTY` entry per line
    Lines(String),
    List(Vec<PadSpec>),
}

impl PadInput {
    pub fn into_pads(self) -> Result<Vec<PadSpec>> {
        let pads = match self {
            Self::Lines(text) => parse_pad_list_strict(&text)?,
            Self::List(pads) => {
                for pad in &pads {
                    pad.validate()?;
                }
                pads
            }
        };
        Ok(pads)
    }
}

fn default_materials() -> Vec<MaterialKind> {
    vec![MaterialKind::Felt, MaterialKind::Card, MaterialKind::Leather]
}

/// Job file as written on disk
#[derive(Debug, Clone, Deserialize)]
pub struct JobFile {
    pub pads: PadInput,
    #[serde(default = "default_materials")]
    pub materials: Vec<MaterialKind>,
    pub sheet: Option<SheetSettings>,
    pub hole: Option<HoleOption>,
    pub settings: Option<PadSettings>,
}

/// A parsed, checked job
#[derive(Debug, Clone)]
pub struct Job {
    pub pads: Vec<PadSpec>,
    pub materials: Vec<MaterialKind>,
    pub settings: PadSettings,
}

impl Job {
    /// Read a job file; `base` supplies settings the job does not carry inline
    pub fn load(path: &Path, base: Option<PadSettings>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;

        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());
        let file: JobFile = match ext.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON job file {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML job file {}", path.display()))?,
            other => bail!(
                "Unsupported job file format: {} (expected .json or .toml)",
                other.unwrap_or("<none>")
            ),
        };

        let job = Self::from_file(file, base)?;
        debug!(
            "Loaded job {}: {} pad sizes, {} materials",
            path.display(),
            job.pads.len(),
            job.materials.len()
        );
        Ok(job)
    }

    pub fn from_file(file: JobFile, base: Option<PadSettings>) -> Result<Self> {
        let pads = file.pads.into_pads().context("Invalid pad list")?;
        if pads.is_empty() {
            bail!("No valid pad sizes entered");
        }
        if file.materials.is_empty() {
            bail!("No materials selected");
        }

        let mut settings = file.settings.or(base).unwrap_or_default();
        if let Some(sheet) = file.sheet {
            settings.sheet = sheet;
        }
        if let Some(hole) = file.hole {
            settings.hole = hole;
        }
        settings.validate().context("Invalid settings")?;

        let mut seen = BTreeSet::new();
        let mut materials = file.materials;
        materials.retain(|material| seen.insert(*material));

        Ok(Self {
            pads,
            materials,
            settings,
        })
    }
}
