//! Curve-curve intersection results, options and solvers.
//!
//! Analytic solvers cover line×line, line×arc and arc×arc. Every pair that
//! involves a (rational) cubic goes through flattening, with recursive
//! subdivision as the fallback. All raw results pass through [`merge`].

pub(crate) mod analytic;
pub(crate) mod flatten;
pub(crate) mod merge;
pub(crate) mod subdivide;

use crate::math::MIN_ACCEPT_DISTANCE;

/// Parameter distance from `0`/`1` under which an overlap end counts as the
/// curve's own boundary.
const BOUNDARY_PARAM_TOLERANCE: f64 = 1e-9;

/// An isolated meeting point of two curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    /// Parameter on the first curve.
    pub t0: f64,
    /// Parameter on the second curve.
    pub t1: f64,
    /// `true` when the point comes from end point / boundary sampling or a
    /// coarse search instead of a closed-form or converged solution.
    pub is_sample: bool,
}

impl IntersectionPoint {
    /// Creates a new intersection point.
    #[must_use]
    pub fn new(t0: f64, t1: f64, is_sample: bool) -> Self {
        Self { t0, t1, is_sample }
    }

    /// The same point seen from the other curve.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self::new(self.t1, self.t0, self.is_sample)
    }
}

/// A maximal coincident stretch shared by both curves.
///
/// Both parameter ranges are ascending. `is_sample[k]` is `true` when end `k`
/// of `t0` lies inside the first curve, i.e. it was set by the second curve's
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOverlap {
    /// Parameter range `[lo, hi]` on the first curve.
    pub t0: [f64; 2],
    /// Parameter range `[lo, hi]` on the second curve.
    pub t1: [f64; 2],
    /// Provenance of each end of `t0`.
    pub is_sample: [bool; 2],
}

fn ascending(range: [f64; 2]) -> [f64; 2] {
    if range[0] <= range[1] {
        range
    } else {
        [range[1], range[0]]
    }
}

impl IntersectionOverlap {
    /// Creates an overlap, sorting both ranges and deriving the end flags.
    #[must_use]
    pub fn new(t0: [f64; 2], t1: [f64; 2]) -> Self {
        let t0 = ascending(t0);
        Self {
            t0,
            t1: ascending(t1),
            is_sample: [
                t0[0] > BOUNDARY_PARAM_TOLERANCE,
                t0[1] < 1.0 - BOUNDARY_PARAM_TOLERANCE,
            ],
        }
    }

    /// The same overlap seen from the other curve.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self::new(self.t1, self.t0)
    }
}

/// One entry of an intersection result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionItem {
    Point(IntersectionPoint),
    Overlap(IntersectionOverlap),
}

impl IntersectionItem {
    /// Curve-0 parameter used for ordering: the point's `t0` or the overlap's lower bound.
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        match self {
            Self::Point(p) => p.t0,
            Self::Overlap(o) => o.t0[0],
        }
    }

    /// The same item seen from the other curve.
    #[must_use]
    pub fn swapped(&self) -> Self {
        match self {
            Self::Point(p) => Self::Point(p.swapped()),
            Self::Overlap(o) => Self::Overlap(o.swapped()),
        }
    }
}

impl From<IntersectionPoint> for IntersectionItem {
    fn from(p: IntersectionPoint) -> Self {
        Self::Point(p)
    }
}

impl From<IntersectionOverlap> for IntersectionItem {
    fn from(o: IntersectionOverlap) -> Self {
        Self::Overlap(o)
    }
}

/// Result of intersecting two curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveCurveIntersections {
    /// The first curve failed its well-formedness check.
    pub is_singularity0: bool,
    /// The second curve failed its well-formedness check.
    pub is_singularity1: bool,
    /// Points and overlaps, ascending by curve-0 parameter.
    pub items: Vec<IntersectionItem>,
}

impl CurveCurveIntersections {
    /// Iterates over the isolated points.
    pub fn points(&self) -> impl Iterator<Item = &IntersectionPoint> {
        self.items.iter().filter_map(|item| match item {
            IntersectionItem::Point(p) => Some(p),
            IntersectionItem::Overlap(_) => None,
        })
    }

    /// Iterates over the overlaps.
    pub fn overlaps(&self) -> impl Iterator<Item = &IntersectionOverlap> {
        self.items.iter().filter_map(|item| match item {
            IntersectionItem::Overlap(o) => Some(o),
            IntersectionItem::Point(_) => None,
        })
    }

    /// Whether either input was singular.
    #[must_use]
    pub fn has_singularity(&self) -> bool {
        self.is_singularity0 || self.is_singularity1
    }

    /// Whether nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Tolerances and hard caps for [`crate::intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectOptions {
    /// Distance under which two positions count as the same point. Negative
    /// values are treated as `0`.
    pub distance_epsilon: f64,
    /// Maximum bisection depth of the subdivision solver.
    pub max_depth: u32,
    /// The subdivision solver stops once this many results were collected.
    pub max_candidates: usize,
    /// The subdivision solver stops after visiting this many nodes.
    pub max_nodes: usize,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self {
            distance_epsilon: 1e-6,
            max_depth: 28,
            max_candidates: 2048,
            max_nodes: 1 << 18,
        }
    }
}

impl IntersectOptions {
    /// Default options with the given distance tolerance.
    #[must_use]
    pub fn new(distance_epsilon: f64) -> Self {
        Self::default().with_distance_epsilon(distance_epsilon)
    }

    /// Sets the distance tolerance.
    #[must_use]
    pub fn with_distance_epsilon(mut self, distance_epsilon: f64) -> Self {
        self.distance_epsilon = distance_epsilon;
        self
    }

    /// Sets the subdivision depth cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the subdivision result cap.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Sets the subdivision node cap.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Copy with `distance_epsilon` clamped to `>= 0` (NaN becomes `0`).
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.distance_epsilon = if self.distance_epsilon.is_nan() {
            0.0
        } else {
            self.distance_epsilon.max(0.0)
        };
        self
    }

    /// Distance used when accepting a numerically found point.
    #[must_use]
    pub fn accept_distance(&self) -> f64 {
        self.distance_epsilon.max(MIN_ACCEPT_DISTANCE)
    }
}
