use tracing::{debug, trace};

use crate::geometry::curve::Curve2;
use crate::operations::intersect::analytic::{arc_arc, line_arc, line_line};
use crate::operations::intersect::flatten::flatten_pair;
use crate::operations::intersect::merge::merge_items;
use crate::operations::intersect::subdivide::subdivide_pair;
use crate::operations::intersect::{CurveCurveIntersections, IntersectOptions, IntersectionItem};

/// Computes intersections between two curves.
pub struct CurveCurveIntersect {
    curve0: Curve2,
    curve1: Curve2,
    options: IntersectOptions,
}

impl CurveCurveIntersect {
    /// Creates a new `CurveCurveIntersect` query with default options.
    #[must_use]
    pub fn new(curve0: Curve2, curve1: Curve2) -> Self {
        Self {
            curve0,
            curve1,
            options: IntersectOptions::default(),
        }
    }

    /// Replaces the tolerances and caps.
    #[must_use]
    pub fn with_options(mut self, options: IntersectOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the query.
    ///
    /// Never fails: singular inputs are reported through the
    /// `is_singularity*` flags with no items.
    #[must_use]
    pub fn execute(&self) -> CurveCurveIntersections {
        let options = self.options.sanitized();
        let (c0, c1) = (&self.curve0, &self.curve1);

        let singular0 = c0.validate().err();
        let singular1 = c1.validate().err();
        if singular0.is_some() || singular1.is_some() {
            debug!(
                curve0 = c0.kind_name(),
                curve1 = c1.kind_name(),
                reason0 = ?singular0,
                reason1 = ?singular1,
                "singular input, skipping intersection"
            );
            return CurveCurveIntersections {
                is_singularity0: singular0.is_some(),
                is_singularity1: singular1.is_some(),
                items: Vec::new(),
            };
        }

        let accept = options.accept_distance();
        let items = match (c0, c1) {
            (Curve2::Line(l0), Curve2::Line(l1)) => {
                trace!("line-line");
                merge_items(c0, c1, line_line(l0, l1, accept), accept)
            }
            (Curve2::Line(line), Curve2::Arc(arc)) => {
                trace!("line-arc");
                let raw = line_arc(line, arc, accept).into_iter().map(IntersectionItem::from).collect();
                merge_items(c0, c1, raw, accept)
            }
            (Curve2::Arc(arc), Curve2::Line(line)) => {
                trace!("arc-line");
                let raw = line_arc(line, arc, accept)
                    .into_iter()
                    .map(|p| IntersectionItem::from(p).swapped())
                    .collect();
                merge_items(c0, c1, raw, accept)
            }
            (Curve2::Arc(a0), Curve2::Arc(a1)) => {
                trace!("arc-arc");
                merge_items(c0, c1, arc_arc(a0, a1, accept), accept)
            }
            _ => self.approximate(&options),
        };

        CurveCurveIntersections {
            is_singularity0: false,
            is_singularity1: false,
            items,
        }
    }

    /// Flattening first, subdivision when flattening finds nothing.
    fn approximate(&self, options: &IntersectOptions) -> Vec<IntersectionItem> {
        let (c0, c1) = (&self.curve0, &self.curve1);
        let accept = options.accept_distance();

        let raw = flatten_pair(c0, c1, options).into_iter().map(IntersectionItem::from).collect();
        let merged = merge_items(c0, c1, raw, accept);
        if !merged.is_empty() {
            trace!(count = merged.len(), "flattening");
            return merged;
        }

        let raw = subdivide_pair(c0, c1, options).into_iter().map(IntersectionItem::from).collect();
        let merged = merge_items(c0, c1, raw, accept);
        trace!(count = merged.len(), "subdivision");
        merged
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::geometry::curve::LineSegment;
    use crate::math::Point2;

    #[test]
    fn singular_inputs_set_flags() {
        let bad: Curve2 = LineSegment::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)).into();
        let good = Curve2::line(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)).unwrap();

        let r = CurveCurveIntersect::new(bad, good).execute();
        assert!(r.is_singularity0 && !r.is_singularity1 && r.is_empty());
        let r = CurveCurveIntersect::new(good, bad).execute();
        assert!(!r.is_singularity0 && r.is_singularity1 && r.is_empty());
        let r = CurveCurveIntersect::new(bad, bad).execute();
        assert!(r.is_singularity0 && r.is_singularity1);
    }

    #[test]
    fn arc_line_swaps_parameters() {
        let arc = Curve2::arc(Point2::new(0.0, 0.0), 5.0, 0.0, PI).unwrap();
        let line = Curve2::line(Point2::new(0.0, -1.0), Point2::new(0.0, 9.0)).unwrap();
        let r = CurveCurveIntersect::new(arc, line).execute();
        let points: Vec<_> = r.points().collect();
        assert_eq!(points.len(), 1, "r={r:?}");
        assert!((points[0].t0 - 0.5).abs() < 1e-9);
        assert!((points[0].t1 - 0.6).abs() < 1e-9);
    }

    #[test]
    fn negative_epsilon_behaves_as_zero() {
        let l0 = Curve2::line(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0)).unwrap();
        let l1 = Curve2::line(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0)).unwrap();
        let r = CurveCurveIntersect::new(l0, l1)
            .with_options(IntersectOptions::new(-1.0))
            .execute();
        assert_eq!(r.len(), 1);
    }
}
