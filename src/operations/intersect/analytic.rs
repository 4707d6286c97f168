//! Closed-form solvers for pairs of lines and circular arcs.
//!
//! `eps` is the distance tolerance. It doubles as the parameter slack on a
//! line and is converted to an angular slack on an arc.

use crate::geometry::curve::{CircularArc, LineSegment};
use crate::math::intersect_2d::{circle_circle_points, line_circle_params, line_line_params};
use crate::math::{Point2, TOLERANCE};

use super::{IntersectionItem, IntersectionOverlap, IntersectionPoint};

fn in_unit_range(t: f64, slack: f64) -> bool {
    t >= -slack && t <= 1.0 + slack
}

fn angle_of(center: &Point2, p: &Point2) -> f64 {
    let v = p - center;
    v.y.atan2(v.x)
}

/// Intersects two line segments.
///
/// Collinear segments yield one overlap, or a single sampled point when
/// their common part collapses.
#[must_use]
pub fn line_line(l0: &LineSegment, l1: &LineSegment, eps: f64) -> Vec<IntersectionItem> {
    let d0 = l0.direction();
    let d1 = l1.direction();

    if let Some((t, u)) = line_line_params(&l0.a, &d0, &l1.a, &d1) {
        if in_unit_range(t, eps) && in_unit_range(u, eps) {
            return vec![IntersectionPoint::new(t.clamp(0.0, 1.0), u.clamp(0.0, 1.0), false).into()];
        }
        return Vec::new();
    }

    let len0 = d0.norm();
    if len0 < TOLERANCE {
        return Vec::new();
    }
    let off_a = (l1.a - l0.a).perp(&d0).abs() / len0;
    let off_b = (l1.b - l0.a).perp(&d0).abs() / len0;
    if off_a.max(off_b) > eps {
        return Vec::new();
    }

    let s_a = l0.project(&l1.a);
    let s_b = l0.project(&l1.b);
    let lo = s_a.min(s_b).max(0.0);
    let hi = s_a.max(s_b).min(1.0);
    let slack = eps / len0;
    if lo > hi + slack {
        return Vec::new();
    }

    let on_l1 = |t0: f64| l1.project(&l0.point_at(t0)).clamp(0.0, 1.0);
    if hi - lo <= slack {
        let t0 = (0.5 * (lo + hi)).clamp(0.0, 1.0);
        return vec![IntersectionPoint::new(t0, on_l1(t0), true).into()];
    }
    vec![IntersectionOverlap::new([lo, hi], [on_l1(lo), on_l1(hi)]).into()]
}

/// Intersects a line segment (curve 0) with a circular arc (curve 1).
///
/// Line end points lying on the arc are reported as samples as well; the
/// merge step removes the duplicates.
#[must_use]
pub fn line_arc(line: &LineSegment, arc: &CircularArc, eps: f64) -> Vec<IntersectionPoint> {
    let interval = arc.interval();
    let ang_eps = arc.angular_tolerance(eps);
    let mut out = Vec::new();

    let roots = line_circle_params(&line.a, &line.direction(), &arc.center, arc.radius, eps);
    for t in roots {
        if !in_unit_range(t, eps) {
            continue;
        }
        let t = t.clamp(0.0, 1.0);
        let p = line.point_at(t);
        if let Some(u) = interval.param_of(angle_of(&arc.center, &p), ang_eps) {
            out.push(IntersectionPoint::new(t, u, false));
        }
    }

    for (t, p) in [(0.0, line.a), (1.0, line.b)] {
        let gap = (nalgebra::distance(&p, &arc.center) - arc.radius).abs();
        if gap > eps {
            continue;
        }
        if let Some(u) = interval.param_of(angle_of(&arc.center, &p), ang_eps) {
            out.push(IntersectionPoint::new(t, u, true));
        }
    }
    out
}

/// Intersects two circular arcs.
///
/// Arcs on the same circle yield their common angular ranges as overlaps.
#[must_use]
pub fn arc_arc(a0: &CircularArc, a1: &CircularArc, eps: f64) -> Vec<IntersectionItem> {
    let same_center = nalgebra::distance(&a0.center, &a1.center) <= eps;
    if same_center && (a0.radius - a1.radius).abs() <= eps {
        return same_circle(a0, a1, eps);
    }

    let i0 = a0.interval();
    let i1 = a1.interval();
    let ang_eps0 = a0.angular_tolerance(eps);
    let ang_eps1 = a1.angular_tolerance(eps);

    circle_circle_points(&a0.center, a0.radius, &a1.center, a1.radius, eps)
        .into_iter()
        .filter_map(|p| {
            let t0 = i0.param_of(angle_of(&a0.center, &p), ang_eps0)?;
            let t1 = i1.param_of(angle_of(&a1.center, &p), ang_eps1)?;
            Some(IntersectionPoint::new(t0, t1, false).into())
        })
        .collect()
}

fn same_circle(a0: &CircularArc, a1: &CircularArc, eps: f64) -> Vec<IntersectionItem> {
    let i0 = a0.interval();
    let i1 = a1.interval();
    let ang_eps = a0.angular_tolerance(eps);

    i0.overlaps(&i1, ang_eps)
        .into_iter()
        .map(|ov| {
            let t0 = [
                i0.param_at_offset(ov.offset0),
                i0.param_at_offset(ov.offset0 + ov.width),
            ];
            let t1 = [
                i1.param_at_offset(ov.offset1),
                i1.param_at_offset(ov.offset1 + ov.width),
            ];
            if ov.width <= ang_eps {
                IntersectionPoint::new(t0[0], t1[0], true).into()
            } else {
                IntersectionOverlap::new(t0, t1).into()
            }
        })
        .collect()
}
