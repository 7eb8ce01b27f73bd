//! logokit CLI - one-shot transforms for the logo assets in `public/logos/`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logokit::{
    crop_logo, remove_background, slice_logos, CropConfig, RecolorConfig, SliceConfig,
};

/// One-shot transforms for the logo images under `public/logos/`.
#[derive(Parser, Debug)]
#[command(name = "logokit")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Make the near-white background of `logo_main_user.png` transparent.
    Transparent,

    /// Slice `original.png` into a 3x3 grid of `logo_ref_{1..9}.png`.
    Slice,

    /// Drop the bottom quarter of `logo_ref_3.png` and trim it to its content.
    Crop,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("logokit={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(args.command) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Transparent => {
            let config = RecolorConfig::default();
            let report = remove_background(&config).with_context(|| {
                format!("Failed to remove background of {}", config.input.display())
            })?;

            println!(
                "Saved transparent logo to {} ({} pixels cleared)",
                report.output.display(),
                report.cleared
            );
        }
        Command::Slice => {
            let config = SliceConfig::default();
            let report = slice_logos(&config)
                .with_context(|| format!("Failed to slice {}", config.input.display()))?;

            for path in &report.outputs {
                println!("Saved {}", path.display());
            }
        }
        Command::Crop => {
            let config = CropConfig::default();
            let report = crop_logo(&config)
                .with_context(|| format!("Failed to crop {}", config.input.display()))?;

            println!(
                "Saved {} ({}x{})",
                report.output.display(),
                report.width,
                report.height
            );
        }
    }

    Ok(())
}
