//! Grid cell geometry and quadrant selection.
//!
//! At a complete level `N = 4^k` the domain is an `n×n` grid (`n = 2^k`).
//! Each cell splits into four quadrants of side `L / 2n`; a refinement round
//! gives every parent point one child in each quadrant it does not occupy.

use super::fixed_point::{grid_side, FixedPoint2, DOMAIN_SIZE};

/// One of the four quadrants of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x` in the low half, `y` in the low half.
    LowerLeft,
    /// `x` in the high half, `y` in the low half.
    LowerRight,
    /// `x` in the low half, `y` in the high half.
    UpperLeft,
    /// `x` in the high half, `y` in the high half.
    UpperRight,
}

impl Quadrant {
    /// All four quadrants.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
    ];

    /// Builds a quadrant from per-axis "high half" flags.
    #[inline]
    pub fn from_halves(x_high: bool, y_high: bool) -> Self {
        match (x_high, y_high) {
            (false, false) => Quadrant::LowerLeft,
            (true, false) => Quadrant::LowerRight,
            (false, true) => Quadrant::UpperLeft,
            (true, true) => Quadrant::UpperRight,
        }
    }

    /// Per-axis half offsets `(x, y)`, each `0` or `1`.
    #[inline]
    pub fn halves(self) -> (u32, u32) {
        match self {
            Quadrant::LowerLeft => (0, 0),
            Quadrant::LowerRight => (1, 0),
            Quadrant::UpperLeft => (0, 1),
            Quadrant::UpperRight => (1, 1),
        }
    }

    /// The diagonally opposite quadrant.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Quadrant::LowerLeft => Quadrant::UpperRight,
            Quadrant::LowerRight => Quadrant::UpperLeft,
            Quadrant::UpperLeft => Quadrant::LowerRight,
            Quadrant::UpperRight => Quadrant::LowerLeft,
        }
    }

    /// The horizontally adjacent quadrant.
    #[inline]
    pub fn flip_x(self) -> Self {
        match self {
            Quadrant::LowerLeft => Quadrant::LowerRight,
            Quadrant::LowerRight => Quadrant::LowerLeft,
            Quadrant::UpperLeft => Quadrant::UpperRight,
            Quadrant::UpperRight => Quadrant::UpperLeft,
        }
    }

    /// The vertically adjacent quadrant.
    #[inline]
    pub fn flip_y(self) -> Self {
        match self {
            Quadrant::LowerLeft => Quadrant::UpperLeft,
            Quadrant::LowerRight => Quadrant::UpperRight,
            Quadrant::UpperLeft => Quadrant::LowerLeft,
            Quadrant::UpperRight => Quadrant::LowerRight,
        }
    }
}

/// The three quadrants assigned to a parent's children, in generation order.
///
/// ```text
/// +---+---+      +---+---+      +---+---+
/// | o |   |      | o | a |      | o | a |
/// +---+---+  ->  +---+---+  ->  +---+---+
/// |   | d |      | a | d |      | r | d |
/// +---+---+      +---+---+      +---+---+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildQuadrants {
    /// Quadrant opposite the parent.
    pub diagonal: Quadrant,
    /// Diagonal quadrant with one axis flipped.
    pub adjacent: Quadrant,
    /// The last unused quadrant.
    pub remaining: Quadrant,
}

impl ChildQuadrants {
    /// Selects children for a parent in `parent`.
    ///
    /// `flip_x` chooses which axis of the diagonal quadrant flips to give
    /// the adjacent child; the remaining child flips the other axis.
    pub fn for_parent(parent: Quadrant, flip_x: bool) -> Self {
        let diagonal = parent.opposite();
        let (adjacent, remaining) = if flip_x {
            (diagonal.flip_x(), diagonal.flip_y())
        } else {
            (diagonal.flip_y(), diagonal.flip_x())
        };
        Self {
            diagonal,
            adjacent,
            remaining,
        }
    }
}

/// Cell layout of a complete level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    side: u32,
    cell: u32,
    half: u32,
}

/// A point's cell and quadrant within a [`CellGeometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLocation {
    /// Column index in `[0, n)`.
    pub i: u32,
    /// Row index in `[0, n)`.
    pub j: u32,
    /// Quadrant of the cell the point lies in.
    pub quadrant: Quadrant,
}

impl CellGeometry {
    /// Geometry for a power-of-4 `level`.
    ///
    /// Returns `None` when the half-cell would be narrower than one
    /// fixed-point unit.
    pub fn for_level(level: usize) -> Option<Self> {
        let side = grid_side(level) as u64;
        if side * 2 > DOMAIN_SIZE as u64 {
            return None;
        }
        let side = side as u32;
        let cell = DOMAIN_SIZE / side;
        Some(Self {
            side,
            cell,
            half: cell / 2,
        })
    }

    /// Grid side `n`.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Cell width `L / n`.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell
    }

    /// Quadrant width `L / 2n`.
    #[inline]
    pub fn half_size(&self) -> u32 {
        self.half
    }

    /// Finds the cell and quadrant containing `point`.
    ///
    /// Indices are clamped to the valid range.
    pub fn locate(&self, point: FixedPoint2) -> CellLocation {
        let i = (point.x / self.cell).min(self.side - 1);
        let j = (point.y / self.cell).min(self.side - 1);
        let x_half = ((point.x - i * self.cell) / self.half).min(1);
        let y_half = ((point.y - j * self.cell) / self.half).min(1);
        CellLocation {
            i,
            j,
            quadrant: Quadrant::from_halves(x_half == 1, y_half == 1),
        }
    }

    /// Lower corner of `quadrant` in cell `(i, j)`.
    pub fn quadrant_origin(&self, i: u32, j: u32, quadrant: Quadrant) -> FixedPoint2 {
        let (xh, yh) = quadrant.halves();
        FixedPoint2::new(i * self.cell + xh * self.half, j * self.cell + yh * self.half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opposite_is_involution() {
        for q in Quadrant::ALL {
            assert_eq!(q.opposite().opposite(), q);
            assert_ne!(q.opposite(), q);
        }
    }

    #[test]
    fn test_flips_are_involutions() {
        for q in Quadrant::ALL {
            assert_eq!(q.flip_x().flip_x(), q);
            assert_eq!(q.flip_y().flip_y(), q);
            assert_eq!(q.flip_x().flip_y(), q.opposite());
        }
    }

    #[test]
    fn test_halves_roundtrip() {
        for q in Quadrant::ALL {
            let (x, y) = q.halves();
            assert_eq!(Quadrant::from_halves(x == 1, y == 1), q);
        }
    }

    #[test]
    fn test_children_cover_remaining_quadrants() {
        for parent in Quadrant::ALL {
            for flip_x in [false, true] {
                let c = ChildQuadrants::for_parent(parent, flip_x);
                let all: HashSet<Quadrant> = [parent, c.diagonal, c.adjacent, c.remaining]
                    .into_iter()
                    .collect();
                assert_eq!(all.len(), 4, "parent {:?} flip_x {}", parent, flip_x);
                assert_eq!(c.diagonal, parent.opposite());
            }
        }
    }

    #[test]
    fn test_adjacent_choice_follows_coin() {
        let c = ChildQuadrants::for_parent(Quadrant::LowerLeft, true);
        assert_eq!(c.diagonal, Quadrant::UpperRight);
        assert_eq!(c.adjacent, Quadrant::UpperLeft);
        assert_eq!(c.remaining, Quadrant::LowerRight);

        let c = ChildQuadrants::for_parent(Quadrant::LowerLeft, false);
        assert_eq!(c.adjacent, Quadrant::LowerRight);
        assert_eq!(c.remaining, Quadrant::UpperLeft);
    }

    #[test]
    fn test_geometry_for_level() {
        let g = CellGeometry::for_level(1).unwrap();
        assert_eq!(g.side(), 1);
        assert_eq!(g.cell_size(), DOMAIN_SIZE);
        assert_eq!(g.half_size(), DOMAIN_SIZE / 2);

        let g = CellGeometry::for_level(16).unwrap();
        assert_eq!(g.side(), 4);
        assert_eq!(g.cell_size(), DOMAIN_SIZE / 4);
        assert_eq!(g.half_size(), DOMAIN_SIZE / 8);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_geometry_rejects_subunit_half_cell() {
        // n = 2^22 gives a half-cell of exactly one unit
        assert!(CellGeometry::for_level(1 << 44).is_some());
        assert!(CellGeometry::for_level(1 << 46).is_none());
    }

    #[test]
    fn test_locate_and_origin() {
        let g = CellGeometry::for_level(4).unwrap();
        let half = g.half_size();
        let p = FixedPoint2::new(g.cell_size() + half + 5, 3);
        let loc = g.locate(p);
        assert_eq!((loc.i, loc.j), (1, 0));
        assert_eq!(loc.quadrant, Quadrant::LowerRight);

        let origin = g.quadrant_origin(loc.i, loc.j, loc.quadrant);
        assert_eq!(origin, FixedPoint2::new(g.cell_size() + half, 0));
    }

    #[test]
    fn test_locate_clamps_last_coordinate() {
        let g = CellGeometry::for_level(64).unwrap();
        let loc = g.locate(FixedPoint2::new(DOMAIN_SIZE - 1, DOMAIN_SIZE - 1));
        assert_eq!(loc.i, g.side() - 1);
        assert_eq!(loc.j, g.side() - 1);
        assert_eq!(loc.quadrant, Quadrant::UpperRight);
    }
}
