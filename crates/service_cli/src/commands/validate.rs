//! Validate command implementation
//!
//! Regenerates a PJ or PMJ sequence and runs the invariant checks at every
//! complete level.

use sampler_core::validate::{check_levels, InvariantReport};
use sampler_core::SequenceKind;
use tracing::{info, warn};

use super::generate_points;
use crate::config::PmjConfig;
use crate::{CliError, Result};

/// Run the validate command
pub fn run(config: &PmjConfig) -> Result<()> {
    let reports = collect_reports(config)?;

    for report in &reports {
        if report.passed() {
            println!("PASS  {}", report);
        } else {
            println!("FAIL  {}", report);
        }
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        warn!("{} of {} checks failed", failed, reports.len());
        return Err(CliError::ValidationFailed {
            failed,
            total: reports.len(),
        });
    }

    info!("All {} checks passed", reports.len());
    Ok(())
}

/// Generates the configured sequence and returns one report per check.
pub fn collect_reports(config: &PmjConfig) -> Result<Vec<InvariantReport>> {
    if config.kind == SequenceKind::Uniform {
        return Err(CliError::InvalidArgument(
            "uniform sequences carry no invariants. Supported: pj, pmj".to_string(),
        ));
    }

    info!(
        "Validating {} with seed {} up to {} points",
        config.kind, config.seed, config.count
    );
    let points = generate_points(config.kind, config.seed, config.count)?;
    Ok(check_levels(config.kind, &points))
}
