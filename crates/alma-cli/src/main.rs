//! alma - Soulmate Probability Estimator CLI
//!
//! Usage:
//!   alma estimate                     # Interactive form
//!   alma estimate --age 25 --location Urban
//!   alma inspect                      # Show artifact metadata
//!   alma validate model.alma          # Check artifact integrity

use almagemela::serialization::DEFAULT_ARTIFACT_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod form;
mod output;

use commands::{estimate, inspect, validate};
use error::Result;

/// alma - Soulmate Probability Estimator
///
/// Estimate your chances of meeting your soulmate from a lifestyle
/// profile, using a pre-trained .alma model artifact.
#[derive(Parser)]
#[command(name = "alma")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate soulmate probability from a lifestyle profile
    Estimate {
        /// Path to .alma model artifact
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_ARTIFACT_PATH)]
        model: PathBuf,

        #[command(flatten)]
        profile: estimate::ProfileArgs,
    },

    /// Inspect artifact metadata and coefficients
    Inspect {
        /// Path to .alma model artifact
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_ARTIFACT_PATH)]
        model: PathBuf,
    },

    /// Validate artifact integrity
    Validate {
        /// Path to .alma model artifact
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_ARTIFACT_PATH)]
        model: PathBuf,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Estimate { model, profile } => estimate::run(&model, profile, cli.quiet),
        Commands::Inspect { model } => inspect::run(&model),
        Commands::Validate { model } => validate::run(&model),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
