use crate::geometry::curve::Curve2;
use crate::math::Point2;

/// Evaluates a point on a curve at a given parameter.
pub struct PointOnCurve {
    curve: Curve2,
    t: f64,
}

impl PointOnCurve {
    /// Creates a new `PointOnCurve` query.
    #[must_use]
    pub fn new(curve: Curve2, t: f64) -> Self {
        Self { curve, t }
    }

    /// Executes the query, returning the 2D point.
    ///
    /// The parameter is clamped to `[0, 1]`, so the query never fails.
    #[must_use]
    pub fn execute(&self) -> Point2 {
        self.curve.point_at(self.t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn evaluates_each_kind() {
        let line = Curve2::line(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0)).unwrap();
        assert_abs_diff_eq!(PointOnCurve::new(line, 0.25).execute(), Point2::new(1.0, 0.5));

        let arc = Curve2::arc(Point2::new(1.0, 1.0), 2.0, 0.0, PI).unwrap();
        assert_abs_diff_eq!(
            PointOnCurve::new(arc, 0.5).execute(),
            Point2::new(1.0, 3.0),
            epsilon = 1e-12
        );

        let cubic = Curve2::cubic([
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(
            PointOnCurve::new(cubic, 0.5).execute(),
            Point2::new(2.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn out_of_range_parameters_clamp() {
        let line = Curve2::line(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0)).unwrap();
        assert_eq!(PointOnCurve::new(line, 2.0).execute(), Point2::new(4.0, 2.0));
        assert_eq!(PointOnCurve::new(line, f64::NEG_INFINITY).execute(), Point2::new(0.0, 0.0));
    }
}
