pub mod clothoid;
pub mod curves;
pub mod numeric;
pub mod polygon;

// Re-export key types at crate root for convenience.
pub use clothoid::Clothoid;
pub use curves::{Arc2d, Circle2d, Curve2, CurveEval, Line2d};
pub use polygon::{LineSide, Orientation, PointInPoly, Polygon, WindingRule};
