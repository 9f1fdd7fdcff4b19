//! Point storage and seed lifecycle shared by all generators.

use crate::domain::{FixedPoint2, DOMAIN_SIZE};
use crate::error::SequenceError;
use crate::rng::SampleRng;

/// Append-only point store with its owning PRNG.
///
/// `points` holds every materialised point; `logical` is the prefix length
/// exposed to callers and never shrinks until [`clear`](Self::clear).
#[derive(Clone, Debug)]
pub(crate) struct PointStore<R> {
    pub(crate) rng: R,
    pub(crate) points: Vec<FixedPoint2>,
    logical: usize,
}

impl<R: SampleRng> PointStore<R> {
    pub(crate) fn new(rng: R) -> Self {
        Self {
            rng,
            points: Vec::new(),
            logical: 0,
        }
    }

    pub(crate) fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub(crate) fn set_seed(&mut self, seed: u32) -> Result<(), SequenceError> {
        if seed == self.rng.seed() {
            return Ok(());
        }
        if !self.points.is_empty() {
            return Err(SequenceError::SeedAfterGeneration {
                current: self.rng.seed(),
            });
        }
        self.rng.reseed(seed);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.logical = 0;
        let seed = self.rng.seed();
        self.rng.reseed(seed);
    }

    #[inline]
    pub(crate) fn view(&self) -> &[FixedPoint2] {
        &self.points[..self.logical]
    }

    #[inline]
    pub(crate) fn generated(&self) -> usize {
        self.points.len()
    }

    /// Raises the logical size to `count`, bounded by what exists.
    pub(crate) fn settle(&mut self, count: usize) {
        self.logical = self.logical.max(count.min(self.points.len()));
    }

    /// Reserves capacity for `level` points in total.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StorageExhausted`] on capacity overflow or allocation
    /// failure; the store is left unchanged.
    pub(crate) fn reserve_level(&mut self, level: usize) -> Result<(), SequenceError> {
        self.points
            .try_reserve(level.saturating_sub(self.points.len()))
            .map_err(|_| SequenceError::StorageExhausted { requested: level })
    }

    /// Uniform point on the whole domain, `x` drawn first.
    pub(crate) fn random_point(&mut self) -> FixedPoint2 {
        let x = self.rng.uniform_int() % DOMAIN_SIZE;
        let y = self.rng.uniform_int() % DOMAIN_SIZE;
        FixedPoint2::new(x, y)
    }

    /// Uniform point in the square `[origin, origin + half)²`.
    pub(crate) fn jitter(&mut self, origin: FixedPoint2, half: u32) -> FixedPoint2 {
        let x = origin.x + self.rng.uniform_int() % half;
        let y = origin.y + self.rng.uniform_int() % half;
        FixedPoint2::new(x, y)
    }
}
