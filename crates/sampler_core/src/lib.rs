//! # sampler_core: Progressive 2D Sample Sequences
//!
//! ## Layer 1 (Kernel) Role
//!
//! sampler_core is the bottom layer of the workspace, providing:
//! - A seeded PRNG capability (`rng`)
//! - The fixed-point coordinate domain `[0, 2^23)` (`domain`)
//! - Three progressive generators (`sequence`):
//!   - [`UniformSequence`]: independent uniform baseline
//!   - [`JitteredSequence`]: Progressive Jittered (PJ)
//!   - [`MultiJitteredSequence`]: Progressive Multi-Jittered (PMJ)
//! - Grid and stratum invariant checkers (`validate`)
//! - Error types: [`SequenceError`] (`error`)
//!
//! ## Progressive Growth
//!
//! Every generator grows by calling [`ProgressiveSequence::extend`] with an
//! increasing target count. Points that have already been produced never
//! change, so a prefix of a longer sequence is itself a valid sequence.
//!
//! ## Fixed-Point Domain
//!
//! PJ and PMJ operate on integers in `[0, L)` with `L = 2^23`. Stratum and
//! quadrant membership tests are exact integer divisions; conversion to
//! `[0, 1)` floats only happens on output via [`to01`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::{MultiJitteredSequence, ProgressiveSequence};
//!
//! let mut pmj = MultiJitteredSequence::new();
//! pmj.extend(16).unwrap();
//! assert_eq!(pmj.size(), 16);
//!
//! // Growing further keeps the first 16 points untouched
//! let prefix = pmj.points().to_vec();
//! pmj.extend(64).unwrap();
//! assert_eq!(&pmj.points()[..16], prefix.as_slice());
//!
//! for p in pmj.points_01() {
//!     assert!(p.x >= 0.0 && p.x < 1.0);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for points and `SequenceKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod domain;
pub mod error;
pub mod rng;
pub mod sequence;
pub mod validate;

pub use domain::{to01, Axis, FixedPoint2, UnitPoint2, DOMAIN_SIZE};
pub use error::SequenceError;
pub use rng::{DefaultRng, SampleRng, SequenceRng, DEFAULT_SEED};
pub use sequence::{
    JitteredSequence, MultiJitteredSequence, ProgressiveSequence, SequenceKind, UniformSequence,
};
