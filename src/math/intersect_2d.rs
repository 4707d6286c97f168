use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p0 + t * d0` and `p1 + u * d1`, returns `(t, u)` if not parallel.
/// Parallelism is judged on the sine of the angle between the directions.
#[must_use]
pub fn line_line_params(p0: &Point2, d0: &Vector2, p1: &Point2, d1: &Vector2) -> Option<(f64, f64)> {
    let cross = d0.perp(d1);
    let scale = d0.norm() * d1.norm();
    if scale < TOLERANCE * TOLERANCE || cross.abs() <= TOLERANCE * scale {
        return None;
    }
    let dp = p1 - p0;
    let t = dp.perp(d1) / cross;
    let u = dp.perp(d0) / cross;
    Some((t, u))
}

/// Parameters where the line `p + t * d` meets the circle `|x - center| = radius`.
///
/// Substitutes the line into the circle equation, `a t² + b t + c = 0` with
/// `a = d·d`, `b = 2 f·d`, `c = f·f − r²` and `f = p − center`. A line whose
/// closest approach is within `eps` outside the circle yields its tangent
/// parameter. Roots are unbounded; callers restrict them to the segment.
#[must_use]
pub fn line_circle_params(p: &Point2, d: &Vector2, center: &Point2, radius: f64, eps: f64) -> Vec<f64> {
    let f = p - center;
    let a = d.dot(d);
    if a < TOLERANCE * TOLERANCE {
        return Vec::new();
    }
    let b = 2.0 * f.dot(d);
    let c = f.dot(&f) - radius * radius;
    let t_mid = -b / (2.0 * a);

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        let closest = (f + d * t_mid).norm();
        return if closest - radius <= eps {
            vec![t_mid]
        } else {
            Vec::new()
        };
    }

    let disc_sqrt = discriminant.sqrt();
    // Numerically stable pair: q = −(b + sign(b)·√Δ) / 2, roots q/a and c/q.
    let q = -0.5 * (b + b.signum() * disc_sqrt);
    if q.abs() < TOLERANCE * TOLERANCE || disc_sqrt == 0.0 {
        return vec![t_mid];
    }
    let (r0, r1) = (q / a, c / q);
    if r0 <= r1 {
        vec![r0, r1]
    } else {
        vec![r1, r0]
    }
}

/// Intersection points of two circles.
///
/// Rejects circles farther apart than `r0 + r1 + eps`, nested deeper than
/// `|r0 − r1| − eps`, or concentric. Otherwise returns the two points on the
/// radical line, or one point when they touch.
#[must_use]
pub fn circle_circle_points(c0: &Point2, r0: f64, c1: &Point2, r1: f64, eps: f64) -> Vec<Point2> {
    let delta = c1 - c0;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        return Vec::new();
    }
    if dist > r0 + r1 + eps || dist < (r0 - r1).abs() - eps {
        return Vec::new();
    }

    // Distance from c0 along c0→c1 to the radical line.
    let a = (r0 * r0 - r1 * r1 + dist_sq) / (2.0 * dist);
    let h = (r0 * r0 - a * a).max(0.0).sqrt();

    let mid = c0 + delta * (a / dist);
    let perp = Vector2::new(-delta.y, delta.x) / dist;

    if h < TOLERANCE {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    }
}
