//! Generate command implementation
//!
//! Generates a sequence and writes its points to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::info;

use super::generate_points;
use crate::config::PmjConfig;
use crate::output::write_points;
use crate::Result;

/// Run the generate command
pub fn run(config: &PmjConfig, output: Option<&Path>, unit: bool) -> Result<()> {
    info!("Starting generation...");
    info!("  Kind: {}", config.kind);
    info!("  Count: {}", config.count);
    info!("  Seed: {}", config.seed);
    info!("  Output format: {}", config.format);

    let points = generate_points(config.kind, config.seed, config.count)?;

    match output {
        Some(path) => {
            info!("Writing {} points to {}", points.len(), path.display());
            let file = BufWriter::new(File::create(path)?);
            write_points(file, &points, config.format, unit)?;
        }
        None => {
            let stdout = io::stdout();
            write_points(stdout.lock(), &points, config.format, unit)?;
        }
    }

    info!("Generation complete");
    Ok(())
}
