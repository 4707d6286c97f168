//! Intersection of planar curves: line segments, circular arcs and
//! (rational) cubic Béziers.
//!
//! ```
//! use curvix::{intersect, Curve2, IntersectOptions, Point2};
//!
//! let a = Curve2::line(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0))?;
//! let b = Curve2::line(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0))?;
//! let hits = intersect(&a, &b, &IntersectOptions::default());
//! assert_eq!(hits.points().count(), 1);
//! # Ok::<(), curvix::CurvixError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{CurvixError, Result};
pub use geometry::{Curve2, Pline, PlineVertex};
pub use math::Point2;
pub use operations::intersect::{
    CurveCurveIntersections, IntersectOptions, IntersectionItem, IntersectionOverlap,
    IntersectionPoint,
};
pub use operations::query::{CurveCurveIntersect, PointOnCurve};

/// Evaluates `curve` at `t`, clamped to `[0, 1]`.
#[must_use]
pub fn eval_point(curve: &Curve2, t: f64) -> Point2 {
    PointOnCurve::new(*curve, t).execute()
}

/// Intersects two curves.
///
/// Never fails. See [`CurveCurveIntersections`] for how singular inputs and
/// approximate results are reported.
#[must_use]
pub fn intersect(curve0: &Curve2, curve1: &Curve2, options: &IntersectOptions) -> CurveCurveIntersections {
    CurveCurveIntersect::new(*curve0, *curve1)
        .with_options(*options)
        .execute()
}
