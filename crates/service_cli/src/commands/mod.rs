//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod generate;
pub mod validate;

use sampler_core::{
    FixedPoint2, JitteredSequence, MultiJitteredSequence, ProgressiveSequence, SequenceKind,
    UniformSequence,
};
use tracing::debug;

use crate::Result;

/// Generates the first `count` points of `kind` from `seed`.
pub fn generate_points(kind: SequenceKind, seed: u32, count: usize) -> Result<Vec<FixedPoint2>> {
    match kind {
        SequenceKind::Uniform => grow(UniformSequence::with_seed(seed), count),
        SequenceKind::Jittered => grow(JitteredSequence::with_seed(seed), count),
        SequenceKind::MultiJittered => grow(MultiJitteredSequence::with_seed(seed), count),
    }
}

fn grow<S: ProgressiveSequence>(mut sequence: S, count: usize) -> Result<Vec<FixedPoint2>> {
    sequence.extend(count)?;
    debug!(
        "{} seed {}: {} points ({} generated)",
        sequence.name(),
        sequence.seed(),
        sequence.size(),
        sequence.generated()
    );
    Ok(sequence.points().to_vec())
}
