//! # Fixed-Point Coordinate Domain
//!
//! All PJ/PMJ generation happens on integer coordinates in `[0, L)` with
//! `L = 2^23`. Working on integers keeps quadrant and stratum membership
//! tests exact; floats would round at cell boundaries and break the
//! one-point-per-stratum invariant.
//!
//! ## Module Structure
//!
//! - [`fixed_point`]: point types, `L`, `[0, 1)` conversion and level arithmetic
//! - [`cell`]: grid cell geometry and the quadrant selection table

pub mod cell;
pub mod fixed_point;

pub use cell::{CellGeometry, CellLocation, ChildQuadrants, Quadrant};
pub use fixed_point::{
    grid_side, is_power_of_four, next_power_of_four, to01, Axis, FixedPoint2, UnitPoint2,
    DOMAIN_SIZE, RESOLUTION_BITS,
};
