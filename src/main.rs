//! `maskoccupancy` CLI - Encode a mask image into a distance matrix.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maskoccupancy::{Config, Pipeline, ScanStrategy};

/// Encode a blocked/free mask image into a Euclidean distance matrix (CSV).
#[derive(Parser, Debug)]
#[command(name = "maskoccupancy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input mask image path.
    #[arg(value_name = "INPUT", default_value = "mask.png")]
    input: PathBuf,

    /// Output CSV path.
    #[arg(value_name = "OUTPUT", default_value = "maskOccupancy.csv")]
    output: PathBuf,

    /// Digits after the decimal point in the output.
    #[arg(short, long, default_value = "6", value_name = "INT")]
    precision: usize,

    /// How free pixels search for the nearest blocked pixel.
    #[arg(long, value_enum, default_value_t = StrategyArg::Obstacles)]
    strategy: StrategyArg,

    /// Encode columns on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Number of worker threads (defaults to one per core).
    #[arg(short = 'j', long, value_name = "INT")]
    threads: Option<usize>,

    /// Exit with a failure status when encoding fails.
    #[arg(long)]
    strict: bool,

    /// Hide the progress bar.
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Rescan the whole mask for every free pixel.
    Exhaustive,
    /// Collect blocked pixels once, then measure against that list.
    Obstacles,
}

impl From<StrategyArg> for ScanStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => Self::Exhaustive,
            StrategyArg::Obstacles => Self::Obstacles,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("maskoccupancy={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        // Failures exit 0 unless --strict; the matrix is simply not written.
        if args.strict {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        strategy: args.strategy.into(),
        parallel: !args.sequential,
        threads: args.threads,
        precision: args.precision,
        show_progress: !args.quiet,
    };

    let pipeline = Pipeline::new(config).context("Failed to initialize pipeline")?;

    let field = pipeline
        .process(&args.input, &args.output)
        .context("Failed to encode mask")?;

    println!(
        "Encoded {} -> {} ({}x{})",
        args.input.display(),
        args.output.display(),
        field.width(),
        field.height()
    );

    Ok(())
}
