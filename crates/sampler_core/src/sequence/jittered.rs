//! Progressive Jittered (PJ) sequence.
//!
//! Each round quadruples the point count. For every parent point the round
//! places three children in the cell quadrants the parent does not occupy:
//! the diagonal quadrant first, then an adjacent quadrant picked by a coin
//! flip, then the remaining one. Children are jittered uniformly inside
//! their quadrant with no rejection.

use tracing::debug;

use super::store::PointStore;
use super::{target_level, ProgressiveSequence};
use crate::domain::{CellGeometry, ChildQuadrants, FixedPoint2};
use crate::error::SequenceError;
use crate::rng::{DefaultRng, SampleRng, DEFAULT_SEED};

/// Largest count a [`JitteredSequence`] accepts.
///
/// The last round must still have quadrants at least one unit wide, which
/// bounds the grid side at `L`, i.e. `L²` points.
#[cfg(target_pointer_width = "64")]
pub const JITTERED_MAX_COUNT: usize = 1 << 46;

/// Largest count a [`JitteredSequence`] accepts.
#[cfg(not(target_pointer_width = "64"))]
pub const JITTERED_MAX_COUNT: usize = 1 << 30;

/// Progressive Jittered sequence on the fixed-point domain.
///
/// # Invariant
///
/// After `extend(4^k)`, partitioning the domain into a `2^k × 2^k` grid puts
/// exactly one point in each cell.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{JitteredSequence, ProgressiveSequence};
///
/// let mut pj = JitteredSequence::new();
/// pj.extend(4).unwrap();
///
/// let mut quadrants: Vec<(bool, bool)> = pj
///     .points_01()
///     .map(|p| (p.x < 0.5, p.y < 0.5))
///     .collect();
/// quadrants.sort();
/// assert_eq!(
///     quadrants,
///     vec![(false, false), (false, true), (true, false), (true, true)]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct JitteredSequence<R = DefaultRng> {
    store: PointStore<R>,
}

impl JitteredSequence<DefaultRng> {
    /// Creates an empty sequence with the default seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates an empty sequence with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_rng(DefaultRng::from_seed(seed))
    }
}

impl<R: SampleRng> JitteredSequence<R> {
    /// Creates an empty sequence drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: PointStore::new(rng),
        }
    }

    /// Runs one subdivision round `level -> 4 * level`.
    fn subdivide(&mut self, level: usize) -> Result<(), SequenceError> {
        let geometry =
            CellGeometry::for_level(level).ok_or(SequenceError::ResolutionExceeded {
                requested: level * 4,
                limit: JITTERED_MAX_COUNT,
            })?;
        let half = geometry.half_size();

        self.store.points.resize(level * 4, FixedPoint2::default());
        for s in 0..level {
            let cell = geometry.locate(self.store.points[s]);

            let diagonal = cell.quadrant.opposite();
            let diagonal_point = self
                .store
                .jitter(geometry.quadrant_origin(cell.i, cell.j, diagonal), half);

            let flip_x = self.store.rng.uniform_float() < 0.5;
            let children = ChildQuadrants::for_parent(cell.quadrant, flip_x);
            let adjacent_point = self.store.jitter(
                geometry.quadrant_origin(cell.i, cell.j, children.adjacent),
                half,
            );
            let remaining_point = self.store.jitter(
                geometry.quadrant_origin(cell.i, cell.j, children.remaining),
                half,
            );

            self.store.points[level + s] = diagonal_point;
            self.store.points[2 * level + s] = adjacent_point;
            self.store.points[3 * level + s] = remaining_point;
        }
        Ok(())
    }
}

impl<R: SampleRng> Default for JitteredSequence<R> {
    fn default() -> Self {
        Self::with_rng(R::from_seed(DEFAULT_SEED))
    }
}

impl<R: SampleRng> ProgressiveSequence for JitteredSequence<R> {
    fn name(&self) -> &'static str {
        "pj"
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
        if count <= self.store.generated() {
            self.store.settle(count);
            return Ok(());
        }
        let target = target_level(count, JITTERED_MAX_COUNT)?;
        self.store.reserve_level(target)?;

        if self.store.points.is_empty() {
            let first = self.store.random_point();
            self.store.points.push(first);
        }

        let mut level = self.store.generated();
        while level < count {
            self.subdivide(level)?;
            debug!("pj generated: {} -> {}", level, level * 4);
            level *= 4;
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
