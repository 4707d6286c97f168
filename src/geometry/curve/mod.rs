mod arc;
mod cubic;
mod line;
mod rational;

pub use arc::CircularArc;
pub use cubic::CubicBezier;
pub use line::LineSegment;
pub use rational::RationalCubicBezier;

use crate::error::{GeometryError, Result};
use crate::math::{Box2, Point2};

/// A bounded planar curve parameterized over `t ∈ [0, 1]`.
///
/// The set of kinds is closed; solvers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve2 {
    Line(LineSegment),
    Arc(CircularArc),
    Cubic(CubicBezier),
    RationalCubic(RationalCubicBezier),
}

/// Clamps a curve parameter to `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_param(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

impl Curve2 {
    /// Creates a validated line segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is singular.
    pub fn line(a: Point2, b: Point2) -> Result<Self> {
        Self::Line(LineSegment::new(a, b)).validated()
    }

    /// Creates a validated circular arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is singular.
    pub fn arc(center: Point2, radius: f64, start_angle: f64, delta: f64) -> Result<Self> {
        Self::Arc(CircularArc::new(center, radius, start_angle, delta)).validated()
    }

    /// Creates a validated full circle, as used for vias and round pads.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive and finite.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Self::Arc(CircularArc::circle(center, radius)).validated()
    }

    /// Creates a validated cubic Bézier.
    ///
    /// # Errors
    ///
    /// Returns an error if a control point is not finite.
    pub fn cubic(points: [Point2; 4]) -> Result<Self> {
        Self::Cubic(CubicBezier::new(points)).validated()
    }

    /// Creates a validated rational cubic Bézier.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not finite or a weight is (near) zero.
    pub fn rational_cubic(points: [Point2; 4], weights: [f64; 4]) -> Result<Self> {
        Self::RationalCubic(RationalCubicBezier::new(points, weights)).validated()
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Checks the well-formedness predicate of the curve.
    ///
    /// # Errors
    ///
    /// Returns the reason the curve is singular.
    pub fn validate(&self) -> std::result::Result<(), GeometryError> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Cubic(cubic) => cubic.validate(),
            Self::RationalCubic(rational) => rational.validate(),
        }
    }

    /// Whether the curve fails its well-formedness predicate.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.validate().is_err()
    }

    /// Short name of the curve kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Cubic(_) => "cubic",
            Self::RationalCubic(_) => "rational-cubic",
        }
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let t = clamp_param(t);
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
            Self::Cubic(cubic) => cubic.point_at(t),
            Self::RationalCubic(rational) => rational.point_at(t),
        }
    }

    /// Point at `t = 0`.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// Point at `t = 1`.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }

    /// Bounding box of the whole curve.
    #[must_use]
    pub fn bounds(&self) -> Box2 {
        self.bounds_in(0.0, 1.0)
    }

    /// Bounding box of the piece of the curve over `[t_lo, t_hi]`.
    ///
    /// Exact for lines and arcs, the sub-curve control polygon for cubics.
    #[must_use]
    pub fn bounds_in(&self, t_lo: f64, t_hi: f64) -> Box2 {
        let (lo, hi) = {
            let (a, b) = (clamp_param(t_lo), clamp_param(t_hi));
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        match self {
            Self::Line(line) => line.bounds_in(lo, hi),
            Self::Arc(arc) => arc.bounds_in(lo, hi),
            Self::Cubic(cubic) => cubic.bounds_in(lo, hi),
            Self::RationalCubic(rational) => rational.bounds_in(lo, hi),
        }
    }
}

impl From<LineSegment> for Curve2 {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<CircularArc> for Curve2 {
    fn from(arc: CircularArc) -> Self {
        Self::Arc(arc)
    }
}

impl From<CubicBezier> for Curve2 {
    fn from(cubic: CubicBezier) -> Self {
        Self::Cubic(cubic)
    }
}

impl From<RationalCubicBezier> for Curve2 {
    fn from(rational: RationalCubicBezier) -> Self {
        Self::RationalCubic(rational)
    }
}
