//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{Box2, Point2, Vector2};

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `(center, radius, start_angle, sweep)`, or `None` for a zero-length
/// chord or a zero bulge (the segment is a straight line).
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<(Point2, f64, f64, f64)> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < 1e-12 || bulge.abs() < 1e-12 || !bulge.is_finite() {
        return None;
    }

    // Distance from chord midpoint to center, relative to half the chord.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = p0 + chord * 0.5;

    // Left normal of the chord; for positive bulge the center is on this side.
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let sweep = 4.0 * bulge.atan();

    Some((center, radius, start_angle, sweep))
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Tight bounding box of the arc restricted to parameters `[t_lo, t_hi]`.
///
/// Includes both end points plus every axis-extreme point (multiples of π/2)
/// that the angular range passes through.
#[must_use]
pub fn arc_bounds(
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    t_lo: f64,
    t_hi: f64,
) -> Box2 {
    let a0 = start_angle + sweep * t_lo;
    let a1 = start_angle + sweep * t_hi;
    let (lo, hi) = if a0 <= a1 { (a0, a1) } else { (a1, a0) };
    let width = hi - lo;

    if width >= TAU || width.is_nan() {
        return Box2::new(
            Point2::new(center.x - radius, center.y - radius),
            Point2::new(center.x + radius, center.y + radius),
        );
    }

    let mut bb = Box2::empty();
    bb.include_point(&arc_point_at(center, radius, start_angle, sweep, t_lo));
    bb.include_point(&arc_point_at(center, radius, start_angle, sweep, t_hi));

    // Quarter-turn indices are taken from the evaluated direction in (-π, π].
    let base = lo.sin().atan2(lo.cos());
    #[allow(clippy::cast_possible_truncation)]
    let first = (base / FRAC_PI_2).ceil() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let last = ((base + width) / FRAC_PI_2).floor() as i64;
    for k in first..=last.min(first.saturating_add(4)) {
        let axis = match k.rem_euclid(4) {
            0 => Vector2::new(radius, 0.0),
            1 => Vector2::new(0.0, radius),
            2 => Vector2::new(-radius, 0.0),
            _ => Vector2::new(0.0, -radius),
        };
        bb.include_point(&(center + axis));
    }
    bb
}
