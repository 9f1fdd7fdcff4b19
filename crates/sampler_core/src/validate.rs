//! Grid and stratum invariant checks.
//!
//! These functions inspect a prefix of a point set and report every place
//! where the PJ or PMJ invariant is broken. They are used by the test suite
//! and by the `validate` CLI command.
//!
//! - [`check_grid`]: at `N = 4^k`, every cell of the `2^k × 2^k` grid holds
//!   exactly one point (equivalently, every cell of the previous level holds
//!   one point per quadrant)
//! - [`check_strata`]: at a power-of-2 count `N`, every x-stratum and every
//!   y-stratum of width `L / N` holds exactly one point
//! - [`check_levels`]: runs the relevant checks at every complete level

use std::fmt;

use crate::domain::{grid_side, is_power_of_four, Axis, FixedPoint2, DOMAIN_SIZE};
use crate::error::SequenceError;
use crate::sequence::SequenceKind;

/// Which invariant a report refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invariant {
    /// One point per grid cell at a power-of-4 level.
    Grid,
    /// One point per 1D stratum on both axes.
    Strata,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::Grid => write!(f, "grid"),
            Invariant::Strata => write!(f, "strata"),
        }
    }
}

/// A single invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A grid cell does not hold exactly one point.
    Cell {
        /// Column index
        i: usize,
        /// Row index
        j: usize,
        /// Points found in the cell
        count: usize,
    },
    /// A stratum does not hold exactly one point.
    Stratum {
        /// Axis of the stratum
        axis: Axis,
        /// Stratum index
        index: usize,
        /// Points found in the stratum
        count: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Cell { i, j, count } => {
                write!(f, "cell ({}, {}) holds {} points", i, j, count)
            }
            Violation::Stratum { axis, index, count } => {
                write!(f, "{}-stratum {} holds {} points", axis, index, count)
            }
        }
    }
}

/// Outcome of one invariant check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantReport {
    /// Invariant checked.
    pub invariant: Invariant,
    /// Prefix length checked.
    pub count: usize,
    /// Every violation found, empty when the invariant holds.
    pub violations: Vec<Violation>,
}

impl InvariantReport {
    /// Returns `true` when no violation was found.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for InvariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "{} @ {}: ok", self.invariant, self.count)
        } else {
            write!(
                f,
                "{} @ {}: {} violation(s), first: {}",
                self.invariant,
                self.count,
                self.violations.len(),
                self.violations[0]
            )
        }
    }
}

/// Checks that `points[..count]` puts one point in each cell of the
/// `sqrt(count)²` grid.
///
/// # Errors
///
/// [`SequenceError::InvalidCheckCount`] if `count` is not a power of 4 or
/// exceeds `points.len()`.
pub fn check_grid(points: &[FixedPoint2], count: usize) -> Result<InvariantReport, SequenceError> {
    if !is_power_of_four(count) || count > points.len() || count > max_checkable() {
        return Err(SequenceError::InvalidCheckCount {
            count,
            available: points.len(),
        });
    }
    let side = grid_side(count);
    let cell = DOMAIN_SIZE as usize / side;

    let mut counts = vec![0usize; count];
    for p in &points[..count] {
        let i = p.x as usize / cell;
        let j = p.y as usize / cell;
        counts[j * side + i] += 1;
    }

    let violations = counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c != 1)
        .map(|(index, &c)| Violation::Cell {
            i: index % side,
            j: index / side,
            count: c,
        })
        .collect();

    Ok(InvariantReport {
        invariant: Invariant::Grid,
        count,
        violations,
    })
}

/// Checks that `points[..count]` puts one point in each x-stratum and each
/// y-stratum of width `L / count`.
///
/// # Errors
///
/// [`SequenceError::InvalidCheckCount`] if `count` is not a power of 2,
/// exceeds `points.len()` or exceeds `L`.
pub fn check_strata(
    points: &[FixedPoint2],
    count: usize,
) -> Result<InvariantReport, SequenceError> {
    if !count.is_power_of_two() || count > points.len() || count > max_checkable() {
        return Err(SequenceError::InvalidCheckCount {
            count,
            available: points.len(),
        });
    }
    let width = DOMAIN_SIZE as usize / count;

    let mut violations = Vec::new();
    for axis in [Axis::X, Axis::Y] {
        let mut counts = vec![0usize; count];
        for p in &points[..count] {
            counts[p.coord(axis) as usize / width] += 1;
        }
        violations.extend(
            counts
                .iter()
                .enumerate()
                .filter(|(_, &c)| c != 1)
                .map(|(index, &c)| Violation::Stratum {
                    axis,
                    index,
                    count: c,
                }),
        );
    }

    Ok(InvariantReport {
        invariant: Invariant::Strata,
        count,
        violations,
    })
}

/// Runs the invariant checks that apply to `kind` at every complete level
/// up to `points.len()`.
///
/// - PJ: grid check at every `4^k`
/// - PMJ: grid check at every `4^k`, strata check at every `4^k` and `2·4^k`
/// - Uniform: no invariants, returns an empty list
pub fn check_levels(kind: SequenceKind, points: &[FixedPoint2]) -> Vec<InvariantReport> {
    let mut reports = Vec::new();
    if kind == SequenceKind::Uniform {
        return reports;
    }

    let limit = points.len().min(max_checkable());
    let mut count = 1usize;
    while count <= limit {
        if is_power_of_four(count) {
            if let Ok(report) = check_grid(points, count) {
                reports.push(report);
            }
        }
        if kind == SequenceKind::MultiJittered {
            if let Ok(report) = check_strata(points, count) {
                reports.push(report);
            }
        }
        match count.checked_mul(2) {
            Some(next) => count = next,
            None => break,
        }
    }
    reports
}

#[inline]
fn max_checkable() -> usize {
    DOMAIN_SIZE as usize
}
