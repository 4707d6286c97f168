use crate::geometry::curve::Curve2;

use super::Polyline;

/// Flattens a curve into a polyline with uniformly spaced parameters.
///
/// A line is already flat and always yields its single exact chord.
pub struct TessellateCurve {
    curve: Curve2,
    segments: usize,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: Curve2, segments: usize) -> Self {
        Self { curve, segments }
    }

    /// Executes the tessellation, returning a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let segments = match self.curve {
            Curve2::Line(_) => 1,
            _ => self.segments.max(1),
        };
        let (points, params) = (0..=segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / segments as f64;
                (self.curve.point_at(t), t)
            })
            .unzip();
        Polyline { points, params }
    }
}
