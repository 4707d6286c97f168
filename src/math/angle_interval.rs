//! Intervals on the circle.
//!
//! An arc sweep is stored as a counter-clockwise interval `[lo, lo + len]`
//! with `lo` normalized to `[0, 2π)` and `len` in `[0, 2π]`, plus the original
//! direction. All mod-2π comparisons for arc sweeps go through this type.

use std::f64::consts::TAU;

/// A counter-clockwise angular interval remembering the sweep direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleInterval {
    lo: f64,
    len: f64,
    ccw: bool,
}

/// A common sub-interval of two [`AngleInterval`]s.
///
/// Offsets are measured counter-clockwise from each interval's `lo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleOverlap {
    /// Offset of the overlap start inside the first interval.
    pub offset0: f64,
    /// Offset of the overlap start inside the second interval.
    pub offset1: f64,
    /// Angular width of the overlap.
    pub width: f64,
}

/// Normalizes an angle to `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

impl AngleInterval {
    /// Builds the interval covered by an arc starting at `start_angle` with signed sweep `delta`.
    ///
    /// Sweeps longer than a full turn are clamped to `2π`. The start is
    /// reduced through its direction vector, matching arc evaluation for
    /// large angles.
    #[must_use]
    pub fn from_arc(start_angle: f64, delta: f64) -> Self {
        let len = delta.abs().min(TAU);
        let ccw = delta >= 0.0;
        let start = start_angle.sin().atan2(start_angle.cos());
        let lo = if ccw { start } else { start - len };
        Self {
            lo: normalize_angle(lo),
            len,
            ccw,
        }
    }

    /// Start of the interval in `[0, 2π)`.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// End of the interval, `lo + len` (may exceed `2π`).
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.lo + self.len
    }

    /// Angular length in `[0, 2π]`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.len
    }

    /// Counter-clockwise offset of `angle` from `lo`, if the angle lies in the interval.
    ///
    /// Angles within `eps` before `lo` snap to `0`, angles within `eps` after
    /// the end snap to `len`.
    #[must_use]
    pub fn offset_of(&self, angle: f64, eps: f64) -> Option<f64> {
        let off = normalize_angle(angle - self.lo);
        if TAU - off <= eps {
            Some(0.0)
        } else if off <= self.len + eps {
            Some(off.min(self.len))
        } else {
            None
        }
    }

    /// Whether `angle` lies in the interval within `eps`.
    #[must_use]
    pub fn contains(&self, angle: f64, eps: f64) -> bool {
        self.offset_of(angle, eps).is_some()
    }

    /// Converts an offset from `lo` to the arc parameter in `[0, 1]`.
    #[must_use]
    pub fn param_at_offset(&self, offset: f64) -> f64 {
        if self.len <= 0.0 {
            return 0.0;
        }
        let t = (offset / self.len).clamp(0.0, 1.0);
        if self.ccw {
            t
        } else {
            1.0 - t
        }
    }

    /// Arc parameter of `angle`, if the angle lies in the interval within `eps`.
    #[must_use]
    pub fn param_of(&self, angle: f64, eps: f64) -> Option<f64> {
        self.offset_of(angle, eps).map(|off| self.param_at_offset(off))
    }

    /// Raw common ranges, in absolute angles of `self`'s frame, merged where
    /// they touch within `eps`.
    ///
    /// `other` is compared against its copies shifted by `−2π`, `0` and `+2π`.
    #[must_use]
    pub fn intersect(&self, other: &Self, eps: f64) -> Vec<(f64, f64)> {
        let mut ranges: Vec<(f64, f64)> = [-TAU, 0.0, TAU]
            .iter()
            .filter_map(|shift| {
                let b_lo = other.lo + shift;
                let b_hi = b_lo + other.len;
                let lo = self.lo.max(b_lo);
                let hi = self.hi().min(b_hi);
                (lo <= hi + eps).then_some((lo, hi.max(lo)))
            })
            .collect();
        ranges.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut merged: Vec<(f64, f64)> = Vec::with_capacity(ranges.len());
        for (lo, hi) in ranges {
            match merged.last_mut() {
                Some(last) if lo <= last.1 + eps => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        merged
    }

    /// Common sub-intervals expressed as offsets into both intervals.
    ///
    /// A merged range that runs across `other`'s start is split there, so each
    /// returned piece maps monotonically onto both arcs.
    #[must_use]
    pub fn overlaps(&self, other: &Self, eps: f64) -> Vec<AngleOverlap> {
        let mut pieces = Vec::new();
        for (lo, hi) in self.intersect(other, eps) {
            let mut cur = lo;
            // A range can wrap other's start at most once per turn.
            for _ in 0..3 {
                let Some(offset1) = other.offset_of(cur, eps) else {
                    break;
                };
                let room = other.len - offset1;
                let end = (cur + room).min(hi);
                pieces.push(AngleOverlap {
                    offset0: (cur - self.lo).clamp(0.0, self.len),
                    offset1,
                    width: (end - cur).max(0.0),
                });
                if end >= hi - eps || room <= eps {
                    break;
                }
                cur = end;
            }
        }
        pieces
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn normalize_wraps_into_range() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < EPS);
        assert!(normalize_angle(-1e-300) < TAU);
    }

    #[test]
    fn clockwise_arc_interval() {
        // CW from π/2 sweeping −π covers [−π/2, π/2] i.e. lo = 3π/2.
        let iv = AngleInterval::from_arc(FRAC_PI_2, -PI);
        assert!((iv.lo() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((iv.span() - PI).abs() < EPS);
        // Angle 0 is the arc midpoint.
        let t = iv.param_of(0.0, EPS).unwrap_or(f64::NAN);
        assert!((t - 0.5).abs() < EPS, "t={t}");
        // Start of the CW arc is parameter 0.
        let t0 = iv.param_of(FRAC_PI_2, EPS).unwrap_or(f64::NAN);
        assert!(t0.abs() < EPS, "t0={t0}");
        assert!(!iv.contains(PI, EPS));
    }

    #[test]
    fn ccw_param_mapping_across_zero() {
        let iv = AngleInterval::from_arc(-FRAC_PI_2, PI);
        let t = iv.param_of(0.0, EPS).unwrap_or(f64::NAN);
        assert!((t - 0.5).abs() < EPS, "t={t}");
        assert!(iv.param_of(PI, EPS).is_none());
    }

    #[test]
    fn sweep_is_clamped_to_full_turn() {
        let iv = AngleInterval::from_arc(0.0, TAU + 1e-12);
        assert!((iv.span() - TAU).abs() < EPS);
    }

    #[test]
    fn huge_start_angle_maps_like_evaluation() {
        let start = 1e6_f64;
        let iv = AngleInterval::from_arc(start, FRAC_PI_2);
        let end = start + FRAC_PI_2;
        let t = iv.param_of(end.sin().atan2(end.cos()), 1e-6).unwrap_or(f64::NAN);
        assert!((t - 1.0).abs() < 1e-6, "t={t}");
    }

    #[test]
    fn intersect_disjoint_intervals() {
        let a = AngleInterval::from_arc(0.0, FRAC_PI_2);
        let b = AngleInterval::from_arc(PI, FRAC_PI_2);
        assert!(a.intersect(&b, EPS).is_empty());
        assert!(a.overlaps(&b, EPS).is_empty());
    }

    #[test]
    fn intersect_across_wrap() {
        // a covers [−π/4, π/4], b covers [0, π].
        let a = AngleInterval::from_arc(-PI / 4.0, FRAC_PI_2);
        let b = AngleInterval::from_arc(0.0, PI);
        let ov = a.overlaps(&b, EPS);
        assert_eq!(ov.len(), 1, "ov={ov:?}");
        assert!((ov[0].offset0 - PI / 4.0).abs() < EPS);
        assert!(ov[0].offset1.abs() < EPS);
        assert!((ov[0].width - PI / 4.0).abs() < EPS);
    }

    #[test]
    fn two_full_circles_overlap_once() {
        let a = AngleInterval::from_arc(0.0, TAU);
        let b = AngleInterval::from_arc(0.0, TAU);
        let ov = a.overlaps(&b, EPS);
        assert_eq!(ov.len(), 1, "ov={ov:?}");
        assert!((ov[0].width - TAU).abs() < EPS);
    }

    #[test]
    fn full_circles_with_shifted_starts_split() {
        let a = AngleInterval::from_arc(0.0, TAU);
        let b = AngleInterval::from_arc(1.0, TAU);
        let ov = a.overlaps(&b, EPS);
        assert_eq!(ov.len(), 2, "ov={ov:?}");
        let total: f64 = ov.iter().map(|o| o.width).sum();
        assert!((total - TAU).abs() < 1e-6, "total={total}");
    }

    #[test]
    fn touching_intervals_yield_zero_width_overlap() {
        let a = AngleInterval::from_arc(0.0, FRAC_PI_2);
        let b = AngleInterval::from_arc(FRAC_PI_2, FRAC_PI_2);
        let ov = a.overlaps(&b, EPS);
        assert_eq!(ov.len(), 1, "ov={ov:?}");
        assert!(ov[0].width < EPS);
    }
}
