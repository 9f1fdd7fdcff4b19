//! Per-axis stratum occupancy for PMJ sub-rounds.
//!
//! A bitmap of resolution `R` splits `[0, L)` into `R` strata of width
//! `L / R`. Bitmaps are rebuilt from the existing points at the start of
//! every sub-round because the resolution doubles between sub-rounds.

use crate::domain::{Axis, FixedPoint2, DOMAIN_SIZE};
use crate::error::SequenceError;
use crate::rng::SampleRng;

/// Attempts allowed per stratum spanned by the draw range.
const ATTEMPTS_PER_STRATUM: usize = 64;

/// Lower bound on attempts for narrow draw ranges.
const MIN_PLACEMENT_ATTEMPTS: usize = 1024;

/// Occupied strata along both axes.
#[derive(Clone, Debug)]
pub(crate) struct Occupancy {
    x: Vec<bool>,
    y: Vec<bool>,
    width: u32,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            width: DOMAIN_SIZE,
        }
    }
}

impl Occupancy {
    /// Clears both bitmaps, sizes them to `2 * points.len()` strata and marks
    /// the strata of every point.
    pub(crate) fn rebuild(&mut self, points: &[FixedPoint2]) {
        debug_assert!(!points.is_empty());
        let resolution = points.len() * 2;
        debug_assert!(resolution <= DOMAIN_SIZE as usize);
        self.width = DOMAIN_SIZE / resolution as u32;

        self.x.clear();
        self.x.resize(resolution, false);
        self.y.clear();
        self.y.resize(resolution, false);

        for p in points {
            let xi = self.stratum(p.x);
            let yi = self.stratum(p.y);
            self.x[xi] = true;
            self.y[yi] = true;
        }
    }

    /// Current number of strata per axis.
    #[inline]
    pub(crate) fn resolution(&self) -> usize {
        self.x.len()
    }

    /// Width of one stratum.
    #[inline]
    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn stratum(&self, coord: u32) -> usize {
        (coord / self.width) as usize
    }

    #[inline]
    fn bitmap_mut(&mut self, axis: Axis) -> &mut [bool] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Number of occupied strata along `axis`.
    pub(crate) fn occupied(&self, axis: Axis) -> usize {
        let bitmap = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        bitmap.iter().filter(|&&b| b).count()
    }

    /// Marks the stratum of `coord`; returns `false` if it was already taken.
    pub(crate) fn claim(&mut self, axis: Axis, coord: u32) -> bool {
        let index = self.stratum(coord);
        let slot = &mut self.bitmap_mut(axis)[index];
        if *slot {
            false
        } else {
            *slot = true;
            true
        }
    }

    /// Draws `base + uniform_int() mod span` until the candidate lands in a
    /// free stratum, then claims it.
    ///
    /// # Errors
    ///
    /// [`SequenceError::PlacementExhausted`] once the attempt cap is reached.
    pub(crate) fn draw_free<R: SampleRng>(
        &mut self,
        rng: &mut R,
        axis: Axis,
        base: u32,
        span: u32,
    ) -> Result<u32, SequenceError> {
        let strata = (span / self.width).max(1) as usize;
        let attempts = strata
            .saturating_mul(ATTEMPTS_PER_STRATUM)
            .max(MIN_PLACEMENT_ATTEMPTS);

        for _ in 0..attempts {
            let candidate = base + rng.uniform_int() % span;
            if self.claim(axis, candidate) {
                return Ok(candidate);
            }
        }
        Err(SequenceError::PlacementExhausted { axis, attempts })
    }
}
