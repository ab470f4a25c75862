//! Robust polygon predicates over possibly-duplicated vertex rings.
//!
//! A vertex sequence is interpreted as a closed ring (the edge from the last
//! point back to the first is implicit). Sequences may contain consecutive
//! epsilon-equal points; the robust predicate variants collapse such runs
//! into one logical vertex via [`RobustRingCursor`], so they can be written
//! exactly like their naive counterparts.

pub mod classify;
pub mod cursor;
pub mod normalize;
pub mod orient;
mod poly;

pub use classify::{point_in_edge, point_in_poly_even_odd, point_in_poly_non_zero};
pub use cursor::{RingCursor, RingWalk, RobustRingCursor};
pub use normalize::normalize;
pub use orient::{
    ensure_ccw, is_convex, orientation, signed_area, signed_area_centered, which_side,
};
pub use poly::Polygon;

use serde::{Deserialize, Serialize};

/// Winding sense of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Counter-clockwise (positive signed area).
    Ccw,
    /// Fewer than three distinct vertices, or no net turning.
    Degenerate,
    /// Clockwise (negative signed area).
    Cw,
}

impl Orientation {
    /// +1 for counter-clockwise, -1 for clockwise, 0 for degenerate.
    pub fn signum(&self) -> i8 {
        match self {
            Orientation::Ccw => 1,
            Orientation::Degenerate => 0,
            Orientation::Cw => -1,
        }
    }
}

/// Classification of a point against a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSide {
    Left,
    Middle,
    Right,
}

/// Classification of a point relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointInPoly {
    Inside,
    Outside,
    /// On the boundary; only reported by the extended algorithms.
    On,
}

/// Which point-in-polygon rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindingRule {
    /// Crossing-number rule: odd number of ray crossings means inside.
    EvenOdd,
    /// Winding-number rule: nonzero signed winding means inside.
    NonZero,
}
