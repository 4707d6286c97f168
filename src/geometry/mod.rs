pub mod curve;
pub mod pline;

pub use curve::{CircularArc, CubicBezier, Curve2, LineSegment, RationalCubicBezier};
pub use pline::{curves_from_points, Pline, PlineVertex};
