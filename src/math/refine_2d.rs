//! Numerical refinement of a parameter pair `(t0, t1)` so that two
//! parametric curves meet: `P0(t0) = P1(t1)`.
//!
//! Curves are passed as evaluation closures over `[0, 1]`.

use nalgebra::Matrix2;

use super::{Point2, Vector2};

/// Maximum Newton-Raphson iterations.
pub const NEWTON_MAX_ITERATIONS: usize = 8;

/// Samples per axis for the coarse grid search.
pub const GRID_SAMPLES: u32 = 5;

/// Finite-difference step for the Jacobian.
const FD_STEP: f64 = 1e-7;

/// Jacobians whose determinant is below this fraction of `|J₀|·|J₁|` are
/// treated as singular (curves tangent at the iterate).
const SINGULAR_JACOBIAN_RATIO: f64 = 1e-12;

/// A refined parameter pair and the remaining positional error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refined {
    pub t0: f64,
    pub t1: f64,
    /// `|P0(t0) − P1(t1)|`.
    pub error: f64,
}

/// Central finite difference of `eval` at `t`, one-sided at the domain ends.
fn derivative(eval: &impl Fn(f64) -> Point2, t: f64) -> Vector2 {
    let lo = (t - FD_STEP).max(0.0);
    let hi = (t + FD_STEP).min(1.0);
    (eval(hi) - eval(lo)) / (hi - lo)
}

/// Newton-Raphson on `F(t0, t1) = P0(t0) − P1(t1)` starting from `(t0, t1)`.
///
/// Runs at most [`NEWTON_MAX_ITERATIONS`] steps, keeping both parameters in
/// `[0, 1]`, and returns the best iterate. Returns `None` when the Jacobian
/// is near-singular at the start point.
pub fn newton_refine(
    eval0: impl Fn(f64) -> Point2,
    eval1: impl Fn(f64) -> Point2,
    t0: f64,
    t1: f64,
) -> Option<Refined> {
    let (mut t0, mut t1) = (t0.clamp(0.0, 1.0), t1.clamp(0.0, 1.0));
    let mut best = Refined {
        t0,
        t1,
        error: (eval0(t0) - eval1(t1)).norm(),
    };

    for iteration in 0..NEWTON_MAX_ITERATIONS {
        let f = eval0(t0) - eval1(t1);
        if f.norm() == 0.0 {
            break;
        }

        let d0 = derivative(&eval0, t0);
        let d1 = derivative(&eval1, t1);
        let jacobian = Matrix2::from_columns(&[d0, -d1]);
        let det = jacobian.determinant();
        let singular = det.abs() <= SINGULAR_JACOBIAN_RATIO * d0.norm() * d1.norm()
            || !det.is_finite();
        let inverse = if singular { None } else { jacobian.try_inverse() };
        let Some(inverse) = inverse else {
            if iteration == 0 {
                return None;
            }
            break;
        };

        let step = inverse * f;
        t0 = (t0 - step.x).clamp(0.0, 1.0);
        t1 = (t1 - step.y).clamp(0.0, 1.0);

        let error = (eval0(t0) - eval1(t1)).norm();
        if error < best.error {
            best = Refined { t0, t1, error };
        }
        if step.norm() < f64::EPSILON {
            break;
        }
    }

    Some(best)
}

/// Exhaustive [`GRID_SAMPLES`]² search over `[lo0, hi0] × [lo1, hi1]`.
///
/// Returns the closest sample pair.
pub fn grid_search(
    eval0: impl Fn(f64) -> Point2,
    eval1: impl Fn(f64) -> Point2,
    range0: (f64, f64),
    range1: (f64, f64),
) -> Refined {
    let last = f64::from(GRID_SAMPLES - 1);
    let at = |range: (f64, f64), i: u32| range.0 + (range.1 - range.0) * f64::from(i) / last;

    let samples1: Vec<(f64, Point2)> = (0..GRID_SAMPLES)
        .map(|j| {
            let t = at(range1, j);
            (t, eval1(t))
        })
        .collect();

    let mut best = Refined {
        t0: range0.0,
        t1: range1.0,
        error: f64::INFINITY,
    };
    for i in 0..GRID_SAMPLES {
        let t0 = at(range0, i);
        let p0 = eval0(t0);
        for (t1, p1) in &samples1 {
            let error = nalgebra::distance(&p0, p1);
            if error < best.error {
                best = Refined {
                    t0,
                    t1: *t1,
                    error,
                };
            }
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn segment(a: Point2, b: Point2) -> impl Fn(f64) -> Point2 {
        move |t: f64| a + (b - a) * t
    }

    #[test]
    fn newton_solves_crossing_lines_exactly() {
        let l0 = segment(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let l1 = segment(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0));
        let r = newton_refine(l0, l1, 0.1, 0.8).unwrap();
        assert!((r.t0 - 0.5).abs() < 1e-9, "r={r:?}");
        assert!((r.t1 - 0.5).abs() < 1e-9, "r={r:?}");
        assert!(r.error < 1e-9);
    }

    #[test]
    fn newton_converges_on_parabola_line() {
        // y = x² over x ∈ [−1, 1] against y = 0.25.
        let parabola = |t: f64| {
            let x = 2.0 * t - 1.0;
            Point2::new(x, x * x)
        };
        let line = segment(Point2::new(-1.0, 0.25), Point2::new(1.0, 0.25));
        let r = newton_refine(parabola, line, 0.7, 0.7).unwrap();
        assert!(r.error < 1e-9, "r={r:?}");
        assert!((r.t0 - 0.75).abs() < 1e-6, "r={r:?}");
    }

    #[test]
    fn newton_rejects_parallel_start() {
        let l0 = segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let l1 = segment(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        assert!(newton_refine(l0, l1, 0.5, 0.5).is_none());
    }

    #[test]
    fn grid_search_finds_closest_pair() {
        let l0 = segment(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let l1 = segment(Point2::new(3.0, -1.0), Point2::new(3.0, 1.0));
        let r = grid_search(l0, l1, (0.0, 1.0), (0.0, 1.0));
        assert!((r.t0 - 0.75).abs() < 1e-12, "r={r:?}");
        assert!((r.t1 - 0.5).abs() < 1e-12, "r={r:?}");
        assert!(r.error < 1e-12);
    }
}
