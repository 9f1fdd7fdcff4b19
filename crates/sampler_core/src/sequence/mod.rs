//! # Progressive Sample Sequences
//!
//! Three generators share the [`ProgressiveSequence`] surface:
//!
//! - [`UniformSequence`]: independent uniform points, the comparison baseline
//! - [`JitteredSequence`]: Progressive Jittered (PJ); at every level `4^k`
//!   each grid cell holds one point per quadrant
//! - [`MultiJitteredSequence`]: Progressive Multi-Jittered (PMJ); PJ plus one
//!   point per 1D stratum along each axis at every level `4^k` and `2·4^k`
//!
//! ## Growth Model
//!
//! PJ and PMJ grow in quadrupling rounds `N -> 4N`. A request for `M` points
//! materialises the next power of 4 at or above `M` and exposes the first `M`
//! points. Further requests reuse the materialised points before drawing any
//! new randomness, so the output is a pure function of `(seed, M)`.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::{JitteredSequence, ProgressiveSequence};
//!
//! let mut pj = JitteredSequence::with_seed(7);
//! pj.extend(10).unwrap();
//! assert_eq!(pj.size(), 10);
//! assert_eq!(pj.generated(), 16);
//! ```

mod jittered;
mod multi_jittered;
mod store;
mod strata;
mod uniform;

pub use jittered::{JitteredSequence, JITTERED_MAX_COUNT};
pub use multi_jittered::{MultiJitteredSequence, MULTI_JITTERED_MAX_COUNT};
pub use uniform::UniformSequence;

use std::fmt;
use std::str::FromStr;

use crate::domain::{next_power_of_four, FixedPoint2, UnitPoint2};
use crate::error::SequenceError;

/// Common surface of every progressive generator.
///
/// # Lifecycle
///
/// 1. Construct with a seed (default `1`), or call [`set_seed`](Self::set_seed)
///    before the first [`extend`](Self::extend)
/// 2. Call [`extend`](Self::extend) with increasing counts
/// 3. Read [`points`](Self::points); earlier points never change
/// 4. [`clear`](Self::clear) to start over from the seed's initial state
pub trait ProgressiveSequence {
    /// Short identifier (`"uniform"`, `"pj"`, `"pmj"`).
    fn name(&self) -> &'static str;

    /// Seed the sequence generates from.
    fn seed(&self) -> u32;

    /// Changes the seed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::SeedAfterGeneration`] if points already exist
    /// and `seed` differs from the current one.
    fn set_seed(&mut self, seed: u32) -> Result<(), SequenceError>;

    /// Empties the point store and resets the PRNG to the seed's initial state.
    fn clear(&mut self);

    /// Grows the sequence so that `size() >= count`.
    ///
    /// Idempotent when `count <= size()`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ResolutionExceeded`] when `count` cannot be
    /// represented on the fixed-point domain, or
    /// [`SequenceError::StorageExhausted`] when the points cannot be
    /// allocated; either way the sequence is left unchanged.
    fn extend(&mut self, count: usize) -> Result<(), SequenceError>;

    /// Read-only ordered view of the first `size()` points.
    fn points(&self) -> &[FixedPoint2];

    /// Number of points materialised, possibly beyond `size()`.
    fn generated(&self) -> usize;

    /// Logical number of points.
    fn size(&self) -> usize {
        self.points().len()
    }

    /// Points converted to `[0, 1)` floats.
    fn points_01(
        &self,
    ) -> std::iter::Map<std::slice::Iter<'_, FixedPoint2>, fn(&FixedPoint2) -> UnitPoint2> {
        let convert: fn(&FixedPoint2) -> UnitPoint2 = |p| p.to01();
        self.points().iter().map(convert)
    }
}

/// Generator selector.
///
/// # Examples
///
/// ```
/// use sampler_core::SequenceKind;
///
/// let kind: SequenceKind = "pmj".parse().unwrap();
/// assert_eq!(kind, SequenceKind::MultiJittered);
/// assert_eq!(kind.to_string(), "pmj");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    /// [`UniformSequence`].
    #[cfg_attr(feature = "serde", serde(rename = "uniform", alias = "random"))]
    Uniform,
    /// [`JitteredSequence`].
    #[cfg_attr(feature = "serde", serde(rename = "pj", alias = "jittered"))]
    Jittered,
    /// [`MultiJitteredSequence`].
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "pmj", alias = "multi-jittered"))]
    MultiJittered,
}

impl SequenceKind {
    /// All kinds.
    pub const ALL: [SequenceKind; 3] = [
        SequenceKind::Uniform,
        SequenceKind::Jittered,
        SequenceKind::MultiJittered,
    ];

    /// Short identifier, identical to the generator's [`ProgressiveSequence::name`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::Uniform => "uniform",
            SequenceKind::Jittered => "pj",
            SequenceKind::MultiJittered => "pmj",
        }
    }

    /// Largest count the generator accepts.
    pub fn max_count(&self) -> usize {
        match self {
            SequenceKind::Uniform => usize::MAX,
            SequenceKind::Jittered => JITTERED_MAX_COUNT,
            SequenceKind::MultiJittered => MULTI_JITTERED_MAX_COUNT,
        }
    }
}

impl FromStr for SequenceKind {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Ok(SequenceKind::Uniform),
            "pj" | "jittered" => Ok(SequenceKind::Jittered),
            "pmj" | "multi-jittered" | "multijittered" => Ok(SequenceKind::MultiJittered),
            _ => Err(SequenceError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Power-of-4 level covering `count`, or an error above `limit`.
pub(crate) fn target_level(count: usize, limit: usize) -> Result<usize, SequenceError> {
    match next_power_of_four(count) {
        Some(level) if level <= limit => Ok(level),
        _ => Err(SequenceError::ResolutionExceeded {
            requested: count,
            limit,
        }),
    }
}
