use crate::error::GeometryError;
use crate::math::{is_finite_point, Box2, Point2, Vector3, TOLERANCE};

use super::cubic::{de_casteljau, sub_polygon};

/// A rational cubic Bézier curve: four control points with one weight each.
///
/// Evaluated in homogeneous coordinates `(w·x, w·y, w)`; conic sections
/// such as elliptical arcs are represented exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalCubicBezier {
    pub points: [Point2; 4],
    pub weights: [f64; 4],
}

/// Samples used to bound a sub-curve whose weights change sign.
const COARSE_BOUND_SAMPLES: u32 = 5;

impl RationalCubicBezier {
    /// Creates a new rational cubic. Use [`RationalCubicBezier::validate`] to check it.
    #[must_use]
    pub fn new(points: [Point2; 4], weights: [f64; 4]) -> Self {
        Self { points, weights }
    }

    fn homogeneous(&self) -> [Vector3; 4] {
        std::array::from_fn(|i| {
            let w = self.weights[i];
            Vector3::new(self.points[i].x * w, self.points[i].y * w, w)
        })
    }

    fn project(h: &Vector3) -> Option<Point2> {
        (h.z.abs() >= TOLERANCE).then(|| Point2::new(h.x / h.z, h.y / h.z))
    }

    /// Evaluates the curve at `t` without clamping.
    ///
    /// Returns the origin where the interpolated weight vanishes.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let (left, _) = de_casteljau(&self.homogeneous(), t);
        Self::project(&left[3]).unwrap_or_else(Point2::origin)
    }

    /// Whether all weights share one sign, in which case the curve lies in
    /// the convex hull of its control points.
    #[must_use]
    pub fn has_uniform_weight_sign(&self) -> bool {
        self.weights.iter().all(|w| *w > 0.0) || self.weights.iter().all(|w| *w < 0.0)
    }

    /// The sub-curve over `[t_lo, t_hi]`, reparameterized to `[0, 1]`.
    ///
    /// Returns `None` if a resulting weight vanishes.
    #[must_use]
    pub fn segment(&self, t_lo: f64, t_hi: f64) -> Option<Self> {
        let h = sub_polygon(&self.homogeneous(), t_lo, t_hi);
        let mut points = [Point2::origin(); 4];
        for (dst, src) in points.iter_mut().zip(h.iter()) {
            *dst = Self::project(src)?;
        }
        Some(Self::new(points, h.map(|v| v.z)))
    }

    /// Bounding box of the sub-curve `[t_lo, t_hi]`.
    ///
    /// Uses the sub-curve's control polygon when the weights share one sign
    /// and coarse sampling otherwise.
    #[must_use]
    pub fn bounds_in(&self, t_lo: f64, t_hi: f64) -> Box2 {
        if self.has_uniform_weight_sign() {
            if let Some(seg) = self.segment(t_lo, t_hi) {
                return Box2::from_points(&seg.points);
            }
        }
        let last = f64::from(COARSE_BOUND_SAMPLES - 1);
        let samples: Vec<Point2> = (0..COARSE_BOUND_SAMPLES)
            .map(|i| self.point_at(t_lo + (t_hi - t_lo) * f64::from(i) / last))
            .collect();
        Box2::from_points(&samples)
    }

    /// Checks that every control point and weight is finite and every weight is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] or [`GeometryError::ZeroWeight`].
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.points.iter().all(is_finite_point) {
            return Err(GeometryError::NonFinite("rational cubic control point"));
        }
        if !self.weights.iter().all(|w| w.is_finite()) {
            return Err(GeometryError::NonFinite("rational cubic weight"));
        }
        if let Some(index) = self.weights.iter().position(|w| w.abs() < TOLERANCE) {
            return Err(GeometryError::ZeroWeight { index });
        }
        Ok(())
    }
}
