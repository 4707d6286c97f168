use std::f64::consts::TAU;

use crate::error::GeometryError;
use crate::math::arc_2d::{arc_bounds, arc_point_at};
use crate::math::{is_finite_point, AngleInterval, Box2, Point2, TOLERANCE};

/// A circular arc in the plane.
///
/// `P(t) = center + radius * (cos θ, sin θ)` with `θ = start_angle + delta * t`.
/// The sign of `delta` gives the direction (positive is counter-clockwise);
/// `|delta| ≈ 2π` is a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub delta: f64,
}

impl CircularArc {
    /// Creates a new arc. Use [`CircularArc::validate`] to check it.
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, delta: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            delta,
        }
    }

    /// Creates a full counter-clockwise circle starting at angle 0.
    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::new(center, radius, 0.0, TAU)
    }

    /// Evaluates the arc at `t` without clamping.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.delta, t)
    }

    /// The angular interval covered by the arc.
    #[must_use]
    pub fn interval(&self) -> AngleInterval {
        AngleInterval::from_arc(self.start_angle, self.delta)
    }

    /// Converts a distance tolerance on the circle into an angular one.
    #[must_use]
    pub fn angular_tolerance(&self, distance: f64) -> f64 {
        (distance / self.radius).max(TOLERANCE)
    }

    /// Bounding box of the sub-arc `[t_lo, t_hi]`.
    #[must_use]
    pub fn bounds_in(&self, t_lo: f64, t_hi: f64) -> Box2 {
        arc_bounds(
            &self.center,
            self.radius,
            self.start_angle,
            self.delta,
            t_lo,
            t_hi,
        )
    }

    /// Checks the radius and sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, the radius is not
    /// positive, or the sweep is (near) zero or winds past a full turn.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !is_finite_point(&self.center) {
            return Err(GeometryError::NonFinite("arc center"));
        }
        if !self.radius.is_finite() || !self.start_angle.is_finite() || !self.delta.is_finite() {
            return Err(GeometryError::NonFinite("arc radius or angles"));
        }
        if self.radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()));
        }
        if self.delta.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep is zero".into()));
        }
        if self.delta.abs() > TAU + TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "arc sweep {} exceeds a full turn",
                self.delta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn evaluate_ccw_and_cw() {
        let ccw = CircularArc::new(Point2::new(1.0, 0.0), 2.0, 0.0, PI);
        let top = ccw.point_at(0.5);
        assert!((top.x - 1.0).abs() < TOLERANCE && (top.y - 2.0).abs() < TOLERANCE);

        let cw = CircularArc::new(Point2::new(1.0, 0.0), 2.0, 0.0, -PI);
        let bottom = cw.point_at(0.5);
        assert!((bottom.x - 1.0).abs() < TOLERANCE && (bottom.y + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn validate_rejects_bad_radius_and_sweep() {
        let c = Point2::new(0.0, 0.0);
        assert!(CircularArc::new(c, 0.0, 0.0, PI).validate().is_err());
        assert!(CircularArc::new(c, -1.0, 0.0, PI).validate().is_err());
        assert!(CircularArc::new(c, f64::INFINITY, 0.0, PI).validate().is_err());
        assert!(CircularArc::new(c, 1.0, 0.0, 0.0).validate().is_err());
        assert!(CircularArc::new(c, 1.0, 0.0, FRAC_PI_2).validate().is_ok());
    }

    #[test]
    fn validate_accepts_one_turn_and_rejects_more() {
        let c = Point2::new(0.0, 0.0);
        assert!(CircularArc::circle(c, 1.0).validate().is_ok());
        assert!(CircularArc::new(c, 1.0, 0.3, -TAU).validate().is_ok());
        assert!(CircularArc::new(c, 1.0, 0.0, TAU + 0.5 * TOLERANCE).validate().is_ok());
        assert!(matches!(
            CircularArc::new(c, 1.0, 0.0, 3.0 * PI).validate(),
            Err(GeometryError::Degenerate(_))
        ));
        assert!(CircularArc::new(c, 1.0, 1.0, -2.5 * PI).validate().is_err());
    }

    #[test]
    fn angular_tolerance_scales_with_radius() {
        let arc = CircularArc::circle(Point2::new(0.0, 0.0), 100.0);
        assert!((arc.angular_tolerance(1.0) - 0.01).abs() < TOLERANCE);
        assert!(arc.angular_tolerance(0.0) >= TOLERANCE);
    }
}
