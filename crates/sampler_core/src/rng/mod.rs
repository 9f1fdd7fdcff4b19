//! # Random Number Generation Infrastructure
//!
//! This module provides the PRNG capability that every progressive sequence
//! draws from.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: identical seeds produce bit-identical streams
//! - **Ownership**: each sequence owns its generator; there is no shared or
//!   global generator state
//! - **Static dispatch**: sequences are generic over [`SampleRng`]; no
//!   `Box<dyn Trait>` on the hot path
//!
//! ## Module Structure
//!
//! - [`prng`]: the [`SampleRng`] capability and [`SequenceRng`] wrapper
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{DefaultRng, SampleRng};
//!
//! let mut rng = DefaultRng::from_seed(1);
//! let u = rng.uniform_float();
//! assert!((0.0..1.0).contains(&u));
//!
//! let first = rng.uniform_int();
//! rng.reseed(1);
//! rng.uniform_float();
//! assert_eq!(rng.uniform_int(), first);
//! ```
//!
//! ## Cross-Implementation Reproducibility
//!
//! The default algorithm is Xoshiro128** seeded through SplitMix64
//! (`rand_xoshiro`'s `seed_from_u64`). Output is deterministic within this
//! crate; matching another implementation bit-for-bit requires the same
//! algorithm *and* the same seeding and float conversion.

pub mod prng;

pub use prng::{DefaultRng, SampleRng, SequenceRng, DEFAULT_SEED};

#[cfg(test)]
mod tests;
