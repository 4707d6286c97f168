use crate::error::GeometryError;
use crate::math::{is_finite_point, lerp_point, Box2, Point2, Vector2, TOLERANCE};

/// A bounded line segment from `a` (t = 0) to `b` (t = 1).
///
/// The parametric form is: `P(t) = a + t * (b - a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Point2,
    pub b: Point2,
}

impl LineSegment {
    /// Creates a new segment. Use [`LineSegment::validate`] to check it.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the (non-normalized) direction `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b - self.a
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Evaluates the segment at `t` without clamping.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        lerp_point(&self.a, &self.b, t)
    }

    /// Parameter of the orthogonal projection of `p` onto the infinite line.
    #[must_use]
    pub fn project(&self, p: &Point2) -> f64 {
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return 0.0;
        }
        (p - self.a).dot(&d) / len_sq
    }

    /// Bounding box of the sub-segment `[t_lo, t_hi]`.
    #[must_use]
    pub fn bounds_in(&self, t_lo: f64, t_hi: f64) -> Box2 {
        Box2::from_points(&[self.point_at(t_lo), self.point_at(t_hi)])
    }

    /// Checks that the segment has finite end points and non-zero length.
    ///
    /// # Errors
    ///
    /// Returns an error describing why the segment is singular.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !is_finite_point(&self.a) || !is_finite_point(&self.b) {
            return Err(GeometryError::NonFinite("line end point"));
        }
        if self.length() < TOLERANCE {
            return Err(GeometryError::Degenerate("line segment has zero length".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_projection() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let mid = line.point_at(0.5);
        assert!((mid.x - 2.0).abs() < TOLERANCE);
        assert!((line.project(&Point2::new(1.0, 7.0)) - 0.25).abs() < TOLERANCE);
        assert!((line.project(&Point2::new(-4.0, 1.0)) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_length_is_degenerate() {
        let line = LineSegment::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert!(matches!(line.validate(), Err(GeometryError::Degenerate(_))));
    }

    #[test]
    fn nan_end_point_is_rejected() {
        let line = LineSegment::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0));
        assert_eq!(line.validate(), Err(GeometryError::NonFinite("line end point")));
    }

    #[test]
    fn sub_segment_bounds() {
        let line = LineSegment::new(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0));
        let bb = line.bounds_in(0.2, 0.6);
        assert!((bb.min.x - 2.0).abs() < TOLERANCE);
        assert!((bb.max.x - 6.0).abs() < TOLERANCE);
        assert!((bb.min.y - 4.0).abs() < TOLERANCE);
        assert!((bb.max.y - 8.0).abs() < TOLERANCE);
    }
}
