//! Chord-based intersection of curves that have no closed-form solver.

use tracing::trace;

use crate::geometry::curve::{CircularArc, Curve2};
use crate::math::lerp;
use crate::math::refine_2d::newton_refine;
use crate::tessellation::{Chord, FlattenParams, Polyline, TessellateCurve};

use super::analytic::{line_arc, line_line};
use super::{IntersectOptions, IntersectionItem, IntersectionPoint};

/// Intersects two curves through their polyline approximations.
///
/// An arc is kept exact and met by the chords of the other curve. Every chord
/// hit is polished on the real curves; hits that do not converge are kept as
/// samples at their chord parameters.
#[must_use]
pub fn flatten_pair(c0: &Curve2, c1: &Curve2, options: &IntersectOptions) -> Vec<IntersectionPoint> {
    let segments = FlattenParams::default().segment_count(options.distance_epsilon);
    let accept = options.accept_distance();

    let hits = match (c0, c1) {
        (Curve2::Arc(_), Curve2::Arc(_)) => Vec::new(),
        (Curve2::Arc(arc), other) => {
            let poly = TessellateCurve::new(*other, segments).execute();
            chords_vs_arc(c1, c0, &poly, arc, accept)
                .into_iter()
                .map(|p| p.swapped())
                .collect()
        }
        (other, Curve2::Arc(arc)) => {
            let poly = TessellateCurve::new(*other, segments).execute();
            chords_vs_arc(c0, c1, &poly, arc, accept)
        }
        _ => {
            let poly0 = TessellateCurve::new(*c0, segments).execute();
            let poly1 = TessellateCurve::new(*c1, segments).execute();
            chords_vs_chords(c0, c1, &poly0, &poly1, accept)
        }
    };
    trace!(segments, hits = hits.len(), "flattened pair");
    hits
}

fn chords_vs_chords(
    c0: &Curve2,
    c1: &Curve2,
    poly0: &Polyline,
    poly1: &Polyline,
    accept: f64,
) -> Vec<IntersectionPoint> {
    let chords1: Vec<Chord> = poly1.chords().collect();
    let boxes1: Vec<_> = chords1
        .iter()
        .map(|ch| ch.segment.bounds_in(0.0, 1.0).expand(accept))
        .collect();

    let mut out = Vec::new();
    for ch0 in poly0.chords() {
        let box0 = ch0.segment.bounds_in(0.0, 1.0);
        for (ch1, box1) in chords1.iter().zip(&boxes1) {
            if !box0.intersects(box1) {
                continue;
            }
            for item in line_line(&ch0.segment, &ch1.segment, accept) {
                // Collinear chord pairs are left to their neighbours' shared vertices.
                let IntersectionItem::Point(hit) = item else {
                    continue;
                };
                let raw = IntersectionPoint::new(
                    lerp(ch0.t_lo, ch0.t_hi, hit.t0),
                    lerp(ch1.t_lo, ch1.t_hi, hit.t1),
                    true,
                );
                let reach = (ch0.t_hi - ch0.t_lo, ch1.t_hi - ch1.t_lo);
                out.push(polish(c0, c1, raw, reach, accept));
            }
        }
    }
    out
}

fn chords_vs_arc(
    curve: &Curve2,
    arc_curve: &Curve2,
    poly: &Polyline,
    arc: &CircularArc,
    accept: f64,
) -> Vec<IntersectionPoint> {
    let arc_box = arc.bounds_in(0.0, 1.0).expand(accept);
    let mut out = Vec::new();
    for ch in poly.chords() {
        if !ch.segment.bounds_in(0.0, 1.0).intersects(&arc_box) {
            continue;
        }
        for hit in line_arc(&ch.segment, arc, accept) {
            let raw = IntersectionPoint::new(lerp(ch.t_lo, ch.t_hi, hit.t0), hit.t1, true);
            out.push(polish(curve, arc_curve, raw, (ch.t_hi - ch.t_lo, 1.0), accept));
        }
    }
    out
}

/// Runs Newton from a chord hit, keeping the result only if it converged
/// within `2·accept` and stayed near the chord it started from.
fn polish(
    c0: &Curve2,
    c1: &Curve2,
    raw: IntersectionPoint,
    reach: (f64, f64),
    accept: f64,
) -> IntersectionPoint {
    let refined = newton_refine(|t| c0.point_at(t), |t| c1.point_at(t), raw.t0, raw.t1);
    match refined {
        Some(r)
            if r.error <= 2.0 * accept
                && (r.t0 - raw.t0).abs() <= 2.0 * reach.0
                && (r.t1 - raw.t1).abs() <= 2.0 * reach.1 =>
        {
            IntersectionPoint::new(r.t0, r.t1, false)
        }
        _ => raw,
    }
}
