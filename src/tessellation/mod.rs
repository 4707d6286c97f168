mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::geometry::curve::LineSegment;
use crate::math::{Point2, TOLERANCE};

/// Parameters controlling how finely curves are flattened.
#[derive(Debug, Clone, Copy)]
pub struct FlattenParams {
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
    /// Segment count used when the tolerance is zero.
    pub zero_tolerance_segments: usize,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            min_segments: 16,
            max_segments: 256,
            zero_tolerance_segments: 64,
        }
    }
}

impl FlattenParams {
    /// Segment count for a distance tolerance: `ceil(1/ε)·2`, clamped.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn segment_count(&self, tolerance: f64) -> usize {
        if tolerance <= 0.0 || tolerance.is_nan() {
            return self.zero_tolerance_segments;
        }
        let (min, max) = (self.min_segments as f64, self.max_segments as f64);
        ((1.0 / tolerance).ceil() * 2.0).max(min).min(max) as usize
    }
}

/// A polyline approximation of a curve.
///
/// `params[i]` is the curve parameter of `points[i]`.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Curve parameter of each vertex, ascending.
    pub params: Vec<f64>,
}

/// One polyline edge together with the curve parameters of its ends.
#[derive(Debug, Clone, Copy)]
pub struct Chord {
    pub segment: LineSegment,
    pub t_lo: f64,
    pub t_hi: f64,
}

impl Polyline {
    /// Number of chords.
    #[must_use]
    pub fn chord_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterates over the chords, skipping zero-length ones.
    pub fn chords(&self) -> impl Iterator<Item = Chord> + '_ {
        self.points
            .windows(2)
            .zip(self.params.windows(2))
            .filter_map(|(pts, ts)| {
                let segment = LineSegment::new(pts[0], pts[1]);
                (segment.length() >= TOLERANCE).then_some(Chord {
                    segment,
                    t_lo: ts[0],
                    t_hi: ts[1],
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_formula() {
        let params = FlattenParams::default();
        assert_eq!(params.segment_count(0.0), 64);
        assert_eq!(params.segment_count(-1.0), 64);
        assert_eq!(params.segment_count(1.0), 16);
        assert_eq!(params.segment_count(0.02), 100);
        assert_eq!(params.segment_count(1e-6), 256);
        assert_eq!(params.segment_count(1e-300), 256);
    }

    #[test]
    fn chords_skip_degenerate_edges() {
        let poly = Polyline {
            points: vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
            ],
            params: vec![0.0, 0.5, 1.0],
        };
        assert_eq!(poly.chord_count(), 2);
        let chords: Vec<Chord> = poly.chords().collect();
        assert_eq!(chords.len(), 1);
        assert!((chords[0].t_lo - 0.5).abs() < f64::EPSILON);
    }
}
