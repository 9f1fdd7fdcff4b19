//! pmjgen - Command Line Generator for Progressive Sample Sequences
//!
//! This is the operational entry point for the sampler_core library.
//!
//! # Commands
//!
//! - `pmjgen generate --kind pmj --count 256` - Generate and write points
//! - `pmjgen validate --kind pmj --count 4096` - Run the grid and stratum checks
//! - `pmjgen check` - Print domain constants and generator limits
//!
//! # Configuration
//!
//! Values are resolved from CLI flags, then `PMJGEN_SEED` / `PMJGEN_LOG_LEVEL`,
//! then `pmjgen.toml`, then built-in defaults. `RUST_LOG` overrides the log
//! level when set.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel, PmjConfig};

/// Progressive Jittered / Multi-Jittered sample sequence generator
#[derive(Parser)]
#[command(name = "pmjgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (ignored if absent)
    #[arg(short, long, global = true, default_value = "pmjgen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sequence and write its points
    Generate {
        /// Sequence kind (uniform, pj, pmj)
        #[arg(short, long)]
        kind: Option<String>,

        /// Number of points
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// PRNG seed
        #[arg(short, long)]
        seed: Option<u32>,

        /// Output format (csv, json, table)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write [0, 1) floats instead of fixed-point integers
        #[arg(short, long)]
        unit: bool,
    },

    /// Check grid and stratum invariants at every complete level
    Validate {
        /// Sequence kind (pj, pmj)
        #[arg(short, long)]
        kind: Option<String>,

        /// Number of points
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// PRNG seed
        #[arg(short, long)]
        seed: Option<u32>,
    },

    /// Print domain constants and generator limits
    Check,
}

impl Commands {
    fn cli_args(&self, config_file: Option<PathBuf>) -> CliArgs {
        match self {
            Commands::Generate {
                kind,
                count,
                seed,
                format,
                ..
            } => CliArgs {
                config_file,
                seed: *seed,
                count: *count,
                kind: kind.clone(),
                format: format.clone(),
                log_level: None,
            },
            Commands::Validate { kind, count, seed } => CliArgs {
                config_file,
                seed: *seed,
                count: *count,
                kind: kind.clone(),
                ..Default::default()
            },
            Commands::Check => CliArgs {
                config_file,
                ..Default::default()
            },
        }
    }
}

fn init_tracing(config: &PmjConfig, verbose: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    // Logs go to stderr so point output on stdout stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_file = cli.config.exists().then(|| cli.config.clone());
    let config = build_config(&cli.command.cli_args(config_file.clone()))?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    match &config_file {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No configuration file at {}", cli.config.display()),
    }

    match cli.command {
        Commands::Generate { output, unit, .. } => {
            commands::generate::run(&config, output.as_deref(), unit)
        }
        Commands::Validate { .. } => commands::validate::run(&config),
        Commands::Check => commands::check::run(),
    }
}
