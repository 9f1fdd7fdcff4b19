//! Check command implementation
//!
//! Prints the fixed-point domain constants and per-generator limits.

use sampler_core::domain::RESOLUTION_BITS;
use sampler_core::{SequenceKind, DEFAULT_SEED, DOMAIN_SIZE};
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking sampler configuration...");

    println!("Domain size L:     {} (2^{})", DOMAIN_SIZE, RESOLUTION_BITS);
    println!("Default seed:      {}", DEFAULT_SEED);
    for kind in SequenceKind::ALL {
        match kind {
            SequenceKind::Uniform => println!("Max count {:<8} unbounded", kind.as_str()),
            _ => println!("Max count {:<8} {}", kind.as_str(), kind.max_count()),
        }
    }

    info!("Check complete");
    Ok(())
}
