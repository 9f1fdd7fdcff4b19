//! Independent uniform baseline.

use super::store::PointStore;
use super::ProgressiveSequence;
use crate::domain::FixedPoint2;
use crate::error::SequenceError;
use crate::rng::{DefaultRng, SampleRng, DEFAULT_SEED};

/// Independent uniform points on the fixed-point domain.
///
/// Each point draws `x` then `y` as `uniform_int() mod L`. No
/// stratification; kept as a reference for comparing PJ and PMJ. The only
/// failure is [`SequenceError::StorageExhausted`] for counts that cannot be
/// allocated.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{ProgressiveSequence, UniformSequence};
///
/// let mut seq = UniformSequence::new();
/// seq.extend(3).unwrap();
/// assert_eq!(seq.size(), 3);
/// assert_eq!(seq.generated(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UniformSequence<R = DefaultRng> {
    store: PointStore<R>,
}

impl UniformSequence<DefaultRng> {
    /// Creates an empty sequence with the default seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates an empty sequence with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_rng(DefaultRng::from_seed(seed))
    }
}

impl<R: SampleRng> UniformSequence<R> {
    /// Creates an empty sequence drawing from `rng`.
    ///
    /// `rng` should be freshly seeded; `clear` resets it to `rng.seed()`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: PointStore::new(rng),
        }
    }
}

impl<R: SampleRng> Default for UniformSequence<R> {
    fn default() -> Self {
        Self::with_rng(R::from_seed(DEFAULT_SEED))
    }
}

impl<R: SampleRng> ProgressiveSequence for UniformSequence<R> {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn seed(&self) -> u32 {
        self.store.seed()
    }

    fn set_seed(&mut self, seed: u32) -> Result<(), SequenceError> {
        self.store.set_seed(seed)
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn extend(&mut self, count: usize) -> Result<(), SequenceError> {
        if count > self.store.generated() {
            self.store.reserve_level(count)?;
            while self.store.generated() < count {
                let p = self.store.random_point();
                self.store.points.push(p);
            }
        }
        self.store.settle(count);
        Ok(())
    }

    fn points(&self) -> &[FixedPoint2] {
        self.store.view()
    }

    fn generated(&self) -> usize {
        self.store.generated()
    }
}
