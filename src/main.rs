//! padkit - pad cutting layouts from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use padkit::job::Job;
use padkit::{init_logging, PadLayoutMaker, PadSettings, RecordingSink, BUILD_DATE, VERSION};
use padkit_camtools::engraving_label;
use padkit_core::format_length;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "padkit")]
#[command(about = "Sizing, star outlines and sheet nesting for pad cutting", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (.json or .toml) used when the job carries no settings table
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every material fits and report labels that will be dropped
    Check {
        /// Job file (.json or .toml)
        job: PathBuf,
    },
    /// Lay out every material and print the shapes as JSON
    Layout {
        /// Job file (.json or .toml)
        job: PathBuf,
        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a settings file with every default filled in
    Defaults {
        /// Output file (format determined by extension: .json, .toml)
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    init_logging()?;
    let cli = Cli::parse();
    info!("padkit {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Commands::Check { job } => {
            let job = load_job(&job, cli.settings.as_deref())?;
            check(&job)
        }
        Commands::Layout { job, output } => {
            let job = load_job(&job, cli.settings.as_deref())?;
            layout(&job, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Defaults { path } => {
            PadSettings::default()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default settings to {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_job(path: &Path, settings: Option<&Path>) -> Result<Job> {
    let base = settings
        .map(|p| {
            PadSettings::load_from_file(p)
                .with_context(|| format!("Failed to load settings from {}", p.display()))
        })
        .transpose()?;
    Job::load(path, base)
}

fn report_oversized(maker: &PadLayoutMaker, job: &Job) {
    for (material, sizes) in maker.oversized_engravings(&job.pads, &job.materials) {
        let sizes: Vec<String> = sizes.iter().map(|&s| engraving_label(s)).collect();
        warn!(
            "Font too large to engrave {} pads: {}",
            material,
            sizes.join(", ")
        );
    }
}

fn check(job: &Job) -> Result<ExitCode> {
    let maker = PadLayoutMaker::new(job.settings.clone())?;
    report_oversized(&maker, job);

    let (width, height) = maker.sheet_size();
    let unit = job.settings.sheet.unit;

    let mut all_fit = true;
    for &material in &job.materials {
        let report = maker.check_fit(&job.pads, material)?;
        if report.fits() {
            println!("{}: all {} discs fit", material, report.placed);
        } else {
            all_fit = false;
            let sizes: Vec<String> = report
                .overflow
                .iter()
                .map(|o| format!("{:.2}", o.diameter))
                .collect();
            println!(
                "{}: {} discs placed, {} do not fit on {} x {} ({} mm)",
                material,
                report.placed,
                report.overflow.len(),
                format_length(width, unit),
                format_length(height, unit),
                sizes.join(", ")
            );
        }
    }

    Ok(if all_fit {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn layout(job: &Job, output: Option<&Path>) -> Result<()> {
    let maker = PadLayoutMaker::new(job.settings.clone())?;
    report_oversized(&maker, job);

    if let Some((material, report)) = maker.check_all_fit(&job.pads, &job.materials)? {
        bail!(
            "Could not fit all {} pieces on the sheet ({} left over)",
            material,
            report.overflow.len()
        );
    }

    let mut sink = RecordingSink::new();
    for &material in &job.materials {
        let layout = maker.generate(&job.pads, material)?;
        maker.emit(&layout, &mut sink)?;
    }

    let json = sink.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} sheets to {}", sink.sheets().len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
