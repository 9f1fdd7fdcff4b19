//! Error types for sequence generation.
//!
//! This module provides [`SequenceError`], the single error type returned by
//! every fallible operation on a progressive sequence.

use thiserror::Error;

use crate::domain::Axis;

/// Categorised sequence generation errors.
///
/// # Variants
/// - `ResolutionExceeded`: the requested count cannot be stratified on the
///   fixed-point domain
/// - `SeedAfterGeneration`: the seed was changed after points were produced
/// - `PlacementExhausted`: stratified rejection sampling hit its attempt cap
/// - `UnknownKind`: a sequence kind name could not be parsed
/// - `InvalidCheckCount`: an invariant check was requested at a count that is
///   not a checkable level
/// - `StorageExhausted`: the point store could not grow to the requested size
///
/// # Examples
/// ```
/// use sampler_core::SequenceError;
///
/// let err = SequenceError::ResolutionExceeded { requested: 1 << 23, limit: 1 << 22 };
/// assert!(err
///     .to_string()
///     .starts_with("requested sample count exceeds fixed-point domain resolution"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested count needs strata narrower than the fixed-point domain allows.
    #[error(
        "requested sample count exceeds fixed-point domain resolution (requested: {requested}, limit: {limit})"
    )]
    ResolutionExceeded {
        /// Sample count passed to `extend`
        requested: usize,
        /// Largest count this generator can produce
        limit: usize,
    },

    /// `set_seed` was called after generation began without a `clear`.
    #[error(
        "cannot change seed after generation has begun (current seed: {current}); call clear() first"
    )]
    SeedAfterGeneration {
        /// Seed the sequence is currently generating from
        current: u32,
    },

    /// Rejection sampling failed to find a free stratum.
    ///
    /// Indicates a broken occupancy invariant rather than bad luck.
    #[error("stratified placement exhausted {attempts} attempts on the {axis} axis")]
    PlacementExhausted {
        /// Axis being placed
        axis: Axis,
        /// Number of candidates drawn before giving up
        attempts: usize,
    },

    /// Unrecognised sequence kind name.
    #[error("unknown sequence kind '{0}'. Supported: uniform, pj, pmj")]
    UnknownKind(String),

    /// Invariant check requested at a count that is not a checkable level.
    #[error("cannot check invariant at count {count} (available points: {available})")]
    InvalidCheckCount {
        /// Requested level
        count: usize,
        /// Points available to check
        available: usize,
    },

    /// Point storage for the requested count could not be allocated.
    #[error("cannot allocate storage for {requested} points")]
    StorageExhausted {
        /// Total point count the store tried to hold
        requested: usize,
    },
}
