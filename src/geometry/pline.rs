use crate::error::{CurvixError, GeometryError, Result, ShapeError};
use crate::math::arc_2d::arc_from_bulge;
use crate::math::Point2;

use super::curve::{CircularArc, Curve2, LineSegment};

/// Bulges smaller than this are treated as straight segments.
const STRAIGHT_BULGE: f64 = 1e-12;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    /// The vertex position.
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments, such as a
/// board outline or a copper track.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed polylines, the last vertex
/// connects back to the first.
#[derive(Debug, Clone)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let vertices = points
            .iter()
            .map(|p| PlineVertex::line(p.x, p.y))
            .collect();
        Self { vertices, closed }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Converts every segment into a validated [`Curve2`], in order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::TooFewPoints`] when there is no segment, and
    /// [`ShapeError::InvalidSegment`] for the first singular segment.
    pub fn to_curves(&self) -> Result<Vec<Curve2>> {
        let n = self.vertices.len();
        let seg_count = self.segment_count();
        if seg_count == 0 {
            return Err(ShapeError::TooFewPoints { count: n }.into());
        }

        (0..seg_count)
            .map(|index| {
                let v0 = &self.vertices[index];
                let v1 = &self.vertices[(index + 1) % n];
                segment_curve(v0, v1)
                    .and_then(|curve| curve.validate().map(|()| curve))
                    .map_err(|source| CurvixError::from(ShapeError::InvalidSegment { index, source }))
            })
            .collect()
    }
}

fn segment_curve(v0: &PlineVertex, v1: &PlineVertex) -> std::result::Result<Curve2, GeometryError> {
    let (p0, p1) = (v0.point(), v1.point());
    if v0.bulge.abs() < STRAIGHT_BULGE {
        return Ok(LineSegment::new(p0, p1).into());
    }
    let (center, radius, start_angle, sweep) = arc_from_bulge(&p0, &p1, v0.bulge)
        .ok_or_else(|| GeometryError::Degenerate("arc segment has no chord".into()))?;
    Ok(CircularArc::new(center, radius, start_angle, sweep).into())
}

/// Converts an open polyline of `N` points into `N − 1` line curves.
///
/// # Errors
///
/// Returns an error for fewer than two points or a repeated point.
pub fn curves_from_points(points: &[Point2]) -> Result<Vec<Curve2>> {
    Pline::from_points(points, false).to_curves()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn from_points_creates_line_only() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let pline = Pline::from_points(&pts, false);
        assert_eq!(pline.vertices.len(), 3);
        assert_eq!(pline.segment_count(), 2);
        assert_eq!(Pline::from_points(&pts, true).segment_count(), 3);
    }

    #[test]
    fn closed_square_to_lines() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let curves = Pline::from_points(&pts, true).to_curves().unwrap();
        assert_eq!(curves.len(), 4);
        assert_eq!(curves[3].end_point(), Point2::new(0.0, 0.0));
        assert!(curves.iter().all(|c| matches!(c, Curve2::Line(_))));
    }

    #[test]
    fn bulge_becomes_semicircle() {
        let pline = Pline {
            vertices: vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(2.0, 0.0)],
            closed: false,
        };
        let curves = pline.to_curves().unwrap();
        let Curve2::Arc(arc) = curves[0] else {
            panic!("expected arc, got {:?}", curves[0]);
        };
        assert_abs_diff_eq!(arc.radius, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curves[0].start_point(), Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(curves[0].end_point(), Point2::new(2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn too_few_points() {
        let err = curves_from_points(&[Point2::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, CurvixError::Shape(ShapeError::TooFewPoints { count: 1 })));
    }

    #[test]
    fn repeated_point_reports_segment_index() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        let err = curves_from_points(&pts).unwrap_err();
        assert!(matches!(
            err,
            CurvixError::Shape(ShapeError::InvalidSegment { index: 1, .. })
        ));
    }

    #[test]
    fn arc_on_repeated_point_is_rejected() {
        let pline = Pline {
            vertices: vec![PlineVertex::new(1.0, 1.0, 0.5), PlineVertex::line(1.0, 1.0)],
            closed: false,
        };
        assert!(pline.to_curves().is_err());
    }
}
