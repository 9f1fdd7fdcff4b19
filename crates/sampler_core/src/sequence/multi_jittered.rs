//! Progressive Multi-Jittered (PMJ) sequence.
//!
//! PMJ uses the PJ subdivision and adds a global 1D constraint: at every
//! level `4^k` and `2·4^k`, no two points share an x-stratum or a
//! y-stratum of width `L / N`.
//!
//! Each quadrupling round `N -> 4N` runs in two sub-rounds because the
//! stratum resolution changes half way:
//!
//! ```text
//! diagonal sub-round      rebuild strata at 2N from N points
//!                         place each parent's diagonal child      N  -> 2N
//! non-diagonal sub-round  rebuild strata at 4N from 2N points
//!                         place adjacent and remaining children   2N -> 4N
//! ```
//!
//! Children are placed by rejection: a candidate is drawn uniformly in the
//! child's quadrant and redrawn until its stratum is free. Each quadrant
//! spans a disjoint run of strata with exactly as many free slots as
//! children headed there, so every draw eventually succeeds.

use tracing::{debug, trace, warn};

use super::store::PointStore;
use super::strata::Occupancy;
use super::{target_level, ProgressiveSequence};
use crate::domain::{Axis, CellGeometry, ChildQuadrants, FixedPoint2, DOMAIN_SIZE};
use crate::error::SequenceError;
use crate::rng::{DefaultRng, SampleRng, DEFAULT_SEED};

/// Largest count a [`MultiJitteredSequence`] accepts.
///
/// The finest strata of the last round are `L / count` wide; they must stay
/// at least two units wide.
pub const MULTI_JITTERED_MAX_COUNT: usize = (DOMAIN_SIZE / 2) as usize;

/// Progressive Multi-Jittered sequence on the fixed-point domain.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{MultiJitteredSequence, ProgressiveSequence, DOMAIN_SIZE};
/// use std::collections::HashSet;
///
/// let mut pmj = MultiJitteredSequence::new();
/// pmj.extend(16).unwrap();
///
/// let width = DOMAIN_SIZE / 16;
/// let xs: HashSet<u32> = pmj.points().iter().map(|p| p.x / width).collect();
/// let ys: HashSet<u32> = pmj.points().iter().map(|p| p.y / width).collect();
/// assert_eq!(xs.len(), 16);
/// assert_eq!(ys.len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct MultiJitteredSequence<R = DefaultRng> {
    store: PointStore<R>,
    occupancy: Occupancy,
}

impl MultiJitteredSequence<DefaultRng> {
    /// Creates an empty sequence with the default seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates an empty sequence with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self::with_rng(DefaultRng::from_seed(seed))
    }
}

impl<R: SampleRng> MultiJitteredSequence<R> {
    /// Creates an empty sequence drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            store: PointStore::new(rng),
            occupancy: Occupancy::default(),
        }
    }

    /// Places a point in the quadrant at `origin`, one free stratum per axis.
    fn place(&mut self, origin: FixedPoint2, half: u32) -> Result<FixedPoint2, SequenceError> {
        let x = self
            .occupancy
            .draw_free(&mut self.store.rng, Axis::X, origin.x, half)?;
        let y = self
            .occupancy
            .draw_free(&mut self.store.rng, Axis::Y, origin.y, half)?;
        Ok(FixedPoint2::new(x, y))
    }

    /// Runs one quadrupling round `level -> 4 * level`.
    fn refine(&mut self, level: usize) -> Result<(), SequenceError> {
        let geometry =
            CellGeometry::for_level(level).ok_or(SequenceError::ResolutionExceeded {
                requested: level * 4,
                limit: MULTI_JITTERED_MAX_COUNT,
            })?;
        let half = geometry.half_size();

        // Diagonal sub-round: N -> 2N at stratum resolution 2N
        self.occupancy.rebuild(&self.store.points[..level]);
        trace!(
            "pmj strata rebuilt: resolution {}, width {}",
            self.occupancy.resolution(),
            self.occupancy.width()
        );
        for s in 0..level {
            let cell = geometry.locate(self.store.points[s]);
            let origin = geometry.quadrant_origin(cell.i, cell.j, cell.quadrant.opposite());
            let child = self.place(origin, half)?;
            self.store.points.push(child);
        }
        debug_assert_eq!(self.occupancy.occupied(Axis::X), 2 * level);

        // Non-diagonal sub-round: 2N -> 4N at stratum resolution 4N
        self.occupancy.rebuild(&self.store.points[..2 * level]);
        trace!(
            "pmj strata rebuilt: resolution {}, width {}",
            self.occupancy.resolution(),
            self.occupancy.width()
        );
        self.store.points.resize(4 * level, FixedPoint2::default());
        for s in 0..level {
            let cell = geometry.locate(self.store.points[s]);
            let flip_x = self.store.rng.uniform_float() < 0.5;
            let children = ChildQuadrants::for_parent(cell.quadrant, flip_x);

            let adjacent =
                self.place(geometry.quadrant_origin(cell.i, cell.j, children.adjacent), half)?;
            let remaining =
                self.place(geometry.quadrant_origin(cell.i, cell.j, children.remaining), half)?;

            self.store.points[2 * level + s] = adjacent;
            self.store.points[3 * level + s] = remaining;
        }
        debug_assert_eq!(self.occupancy.occupied(Axis::Y), 4 * level);
        Ok(())
    }
}

impl<R: SampleRng> Default for MultiJitteredSequence<R> {
    fn default() -> Self {
        Self::with_rng(R::from_seed(DEFAULT_SEED))
    }
}

impl<R: SampleRng> ProgressiveSequence for MultiJitteredSequence<R> {
    fn name(&self) -> &'static str {
        "pmj"
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
        let target = target_level(count, MULTI_JITTERED_MAX_COUNT)?;
        self.store.reserve_level(target)?;

        if self.store.points.is_empty() {
            let first = self.store.random_point();
            self.store.points.push(first);
        }

        let mut level = self.store.generated();
        while level < count {
            if let Err(err) = self.refine(level) {
                warn!("pmj round {} -> {} failed: {}", level, level * 4, err);
                self.store.points.truncate(level);
                return Err(err);
            }
            debug!("pmj generated: {} -> {}", level, level * 4);
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
