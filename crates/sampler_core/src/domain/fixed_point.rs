//! Fixed-point point types and level arithmetic.

use std::fmt;

/// Number of bits in a fixed-point coordinate.
pub const RESOLUTION_BITS: u32 = 23;

/// Size `L` of the fixed-point domain; coordinates lie in `[0, L)`.
///
/// `L` fits exactly in an `f32` mantissa, so [`to01`] is lossless.
pub const DOMAIN_SIZE: u32 = 1 << RESOLUTION_BITS;

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A sample point on the fixed-point domain `[0, L)²`.
///
/// # Examples
/// ```
/// use sampler_core::{FixedPoint2, DOMAIN_SIZE};
///
/// let p = FixedPoint2::new(DOMAIN_SIZE / 2, DOMAIN_SIZE / 4);
/// let u = p.to01();
/// assert_eq!(u.x, 0.5);
/// assert_eq!(u.y, 0.25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPoint2 {
    /// Horizontal coordinate in `[0, L)`.
    pub x: u32,
    /// Vertical coordinate in `[0, L)`.
    pub y: u32,
}

impl FixedPoint2 {
    /// Creates a point from raw fixed-point coordinates.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis`.
    #[inline]
    pub fn coord(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Converts to `[0, 1)` floats for display.
    #[inline]
    pub fn to01(self) -> UnitPoint2 {
        to01(self)
    }
}

/// A sample point in the unit square `[0, 1)²`.
///
/// Only produced as an output format; never fed back into generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPoint2 {
    /// Horizontal coordinate in `[0, 1)`.
    pub x: f32,
    /// Vertical coordinate in `[0, 1)`.
    pub y: f32,
}

/// Divides fixed-point coordinates by `L`, yielding `[0, 1)` floats.
#[inline]
pub fn to01(point: FixedPoint2) -> UnitPoint2 {
    let scale = 1.0 / DOMAIN_SIZE as f32;
    UnitPoint2 {
        x: point.x as f32 * scale,
        y: point.y as f32 * scale,
    }
}

/// Returns the smallest power of 4 that is `>= count`, or `None` on overflow.
///
/// `next_power_of_four(0)` is `1`.
pub fn next_power_of_four(count: usize) -> Option<usize> {
    let mut level = 1usize;
    while level < count {
        level = level.checked_mul(4)?;
    }
    Some(level)
}

/// Returns `true` if `n` is `4^k` for some `k >= 0`.
#[inline]
pub fn is_power_of_four(n: usize) -> bool {
    n.is_power_of_two() && n.trailing_zeros() % 2 == 0
}

/// Grid side `sqrt(level)` of a power-of-4 level.
#[inline]
pub fn grid_side(level: usize) -> usize {
    debug_assert!(is_power_of_four(level));
    1 << (level.trailing_zeros() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_domain_size() {
        assert_eq!(DOMAIN_SIZE, 8_388_608);
    }

    #[test]
    fn test_to01_bounds() {
        let origin = to01(FixedPoint2::new(0, 0));
        assert_eq!(origin, UnitPoint2 { x: 0.0, y: 0.0 });

        let last = to01(FixedPoint2::new(DOMAIN_SIZE - 1, DOMAIN_SIZE - 1));
        assert!(last.x < 1.0);
        assert!(last.y < 1.0);
        assert_relative_eq!(last.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_to01_is_exact() {
        for x in [1u32, 3, 1 << 10, (1 << 22) + 1, DOMAIN_SIZE - 1] {
            let u = to01(FixedPoint2::new(x, 0));
            assert_eq!((u.x * DOMAIN_SIZE as f32) as u32, x);
        }
    }

    #[test]
    fn test_next_power_of_four() {
        assert_eq!(next_power_of_four(0), Some(1));
        assert_eq!(next_power_of_four(1), Some(1));
        assert_eq!(next_power_of_four(2), Some(4));
        assert_eq!(next_power_of_four(4), Some(4));
        assert_eq!(next_power_of_four(5), Some(16));
        assert_eq!(next_power_of_four(17), Some(64));
        assert_eq!(next_power_of_four(usize::MAX), None);
    }

    #[test]
    fn test_is_power_of_four() {
        assert!(is_power_of_four(1));
        assert!(is_power_of_four(4));
        assert!(is_power_of_four(1024));
        assert!(!is_power_of_four(0));
        assert!(!is_power_of_four(2));
        assert!(!is_power_of_four(8));
        assert!(!is_power_of_four(12));
    }

    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(1), 1);
        assert_eq!(grid_side(4), 2);
        assert_eq!(grid_side(16), 4);
        assert_eq!(grid_side(1 << 20), 1 << 10);
    }

    #[test]
    fn test_coord_and_axis_display() {
        let p = FixedPoint2::new(3, 9);
        assert_eq!(p.coord(Axis::X), 3);
        assert_eq!(p.coord(Axis::Y), 9);
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
