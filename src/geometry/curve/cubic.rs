use std::ops::{Add, Mul};

use crate::error::GeometryError;
use crate::math::{is_finite_point, Box2, Point2};

/// A cubic Bézier curve given by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub points: [Point2; 4],
}

/// Splits a cubic control polygon at `t` with De Casteljau's algorithm.
///
/// Works on anything that mixes linearly: 2D coordinates or homogeneous
/// `(w·x, w·y, w)` triples.
pub(crate) fn de_casteljau<T>(p: &[T; 4], t: f64) -> ([T; 4], [T; 4])
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let mix = |a: T, b: T| a * (1.0 - t) + b * t;
    let p01 = mix(p[0], p[1]);
    let p12 = mix(p[1], p[2]);
    let p23 = mix(p[2], p[3]);
    let p012 = mix(p01, p12);
    let p123 = mix(p12, p23);
    let p0123 = mix(p012, p123);
    ([p[0], p01, p012, p0123], [p0123, p123, p23, p[3]])
}

/// Control polygon of the sub-curve over `[t_lo, t_hi]` (with `t_lo <= t_hi`).
pub(crate) fn sub_polygon<T>(p: &[T; 4], t_lo: f64, t_hi: f64) -> [T; 4]
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let (left, _) = de_casteljau(p, t_hi);
    if t_hi <= 0.0 {
        return [left[0]; 4];
    }
    let (_, right) = de_casteljau(&left, t_lo / t_hi);
    right
}

impl CubicBezier {
    /// Creates a new cubic. Use [`CubicBezier::validate`] to check it.
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self { points }
    }

    fn coords(&self) -> [crate::math::Vector2; 4] {
        self.points.map(|p| p.coords)
    }

    /// Evaluates the curve at `t` without clamping.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let (left, _) = de_casteljau(&self.coords(), t);
        Point2::from(left[3])
    }

    /// The sub-curve over `[t_lo, t_hi]`, reparameterized to `[0, 1]`.
    #[must_use]
    pub fn segment(&self, t_lo: f64, t_hi: f64) -> Self {
        Self::new(sub_polygon(&self.coords(), t_lo, t_hi).map(Point2::from))
    }

    /// Bounding box of the control polygon, which contains the curve.
    #[must_use]
    pub fn control_bounds(&self) -> Box2 {
        Box2::from_points(&self.points)
    }

    /// Bounding box of the sub-curve `[t_lo, t_hi]` from its control polygon.
    #[must_use]
    pub fn bounds_in(&self, t_lo: f64, t_hi: f64) -> Box2 {
        self.segment(t_lo, t_hi).control_bounds()
    }

    /// Checks that every control point is finite.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for a NaN or infinite coordinate.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.points.iter().all(is_finite_point) {
            Ok(())
        } else {
            Err(GeometryError::NonFinite("cubic control point"))
        }
    }
}
