//! Recursive bounding-box subdivision with numerical refinement at the leaves.

use tracing::{debug, trace};

use crate::geometry::curve::Curve2;
use crate::math::refine_2d::{grid_search, newton_refine};
use crate::math::Box2;

use super::{IntersectOptions, IntersectionPoint};

/// Upper bound on the work-list allocated up front.
const MAX_PREALLOCATED: usize = 256;

/// A pending pair of parameter ranges.
#[derive(Debug, Clone, Copy)]
struct Node {
    range0: (f64, f64),
    range1: (f64, f64),
    depth: u32,
}

impl Node {
    fn mid0(&self) -> f64 {
        0.5 * (self.range0.0 + self.range0.1)
    }

    fn mid1(&self) -> f64 {
        0.5 * (self.range1.0 + self.range1.1)
    }

    fn width0(&self) -> f64 {
        self.range0.1 - self.range0.0
    }

    fn width1(&self) -> f64 {
        self.range1.1 - self.range1.0
    }
}

/// Finds intersections by bisecting the pair of parameter domains until the
/// pieces are small, then solving each leaf numerically.
///
/// Work is bounded by `max_depth`, `max_candidates` and `max_nodes`. Each
/// returned point has been checked against the real curves.
#[must_use]
pub fn subdivide_pair(c0: &Curve2, c1: &Curve2, options: &IntersectOptions) -> Vec<IntersectionPoint> {
    let eps = options.distance_epsilon;
    let accept = options.accept_distance();

    // Depth-first: the stack never holds more than one sibling per level.
    let capacity = usize::try_from(options.max_depth).map_or(MAX_PREALLOCATED, |d| {
        d.saturating_add(2).min(MAX_PREALLOCATED)
    });
    let mut stack: Vec<Node> = Vec::with_capacity(capacity);
    stack.push(Node {
        range0: (0.0, 1.0),
        range1: (0.0, 1.0),
        depth: 0,
    });

    let mut found = Vec::new();
    let mut visited = 0usize;
    while let Some(node) = stack.pop() {
        if found.len() >= options.max_candidates {
            debug!(candidates = found.len(), "subdivision stopped at candidate cap");
            break;
        }
        if visited >= options.max_nodes {
            debug!(visited, "subdivision stopped at node cap");
            break;
        }
        visited += 1;

        let box0 = c0.bounds_in(node.range0.0, node.range0.1);
        let box1 = c1.bounds_in(node.range1.0, node.range1.1);
        if !box0.expand(accept).intersects(&box1) {
            continue;
        }

        let narrow = node.width0() < eps && node.width1() < eps;
        let small = box0.max_extent() <= eps && box1.max_extent() <= eps;
        if narrow || small || node.depth >= options.max_depth {
            found.extend(solve_leaf(c0, c1, &node, accept));
            continue;
        }

        let (lo, hi) = split(&node, &box0, &box1);
        stack.push(hi);
        stack.push(lo);
    }

    trace!(visited, found = found.len(), "subdivision finished");
    found
}

/// Halves the range of the curve whose piece has the larger box.
fn split(node: &Node, box0: &Box2, box1: &Box2) -> (Node, Node) {
    let depth = node.depth + 1;
    if box0.max_extent() >= box1.max_extent() {
        let mid = node.mid0();
        (
            Node {
                range0: (node.range0.0, mid),
                depth,
                ..*node
            },
            Node {
                range0: (mid, node.range0.1),
                depth,
                ..*node
            },
        )
    } else {
        let mid = node.mid1();
        (
            Node {
                range1: (node.range1.0, mid),
                depth,
                ..*node
            },
            Node {
                range1: (mid, node.range1.1),
                depth,
                ..*node
            },
        )
    }
}

fn solve_leaf(c0: &Curve2, c1: &Curve2, node: &Node, accept: f64) -> Option<IntersectionPoint> {
    let eval0 = |t| c0.point_at(t);
    let eval1 = |t| c1.point_at(t);

    if let Some(r) = newton_refine(eval0, eval1, node.mid0(), node.mid1()) {
        if r.error <= 2.0 * accept {
            return Some(IntersectionPoint::new(r.t0, r.t1, false));
        }
    }

    let r = grid_search(eval0, eval1, node.range0, node.range1);
    (r.error <= 4.0 * accept).then_some(IntersectionPoint::new(r.t0, r.t1, true))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn s_curve() -> Curve2 {
        Curve2::cubic([
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 6.0),
            Point2::new(-1.0, -4.0),
            Point2::new(2.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn finds_cubic_line_crossings() {
        let c0 = s_curve();
        let line = Curve2::line(Point2::new(-2.0, 1.0), Point2::new(4.0, 1.0)).unwrap();
        let hits = subdivide_pair(&c0, &line, &IntersectOptions::default());
        assert!(!hits.is_empty());
        for hit in &hits {
            let d = nalgebra::distance(&c0.point_at(hit.t0), &line.point_at(hit.t1));
            assert!(d <= 4e-6, "hit={hit:?} d={d}");
        }
    }

    #[test]
    fn disjoint_boxes_end_immediately() {
        let c0 = s_curve();
        let far = Curve2::line(Point2::new(50.0, 50.0), Point2::new(60.0, 50.0)).unwrap();
        assert!(subdivide_pair(&c0, &far, &IntersectOptions::default()).is_empty());
    }

    #[test]
    fn candidate_cap_is_respected() {
        // Identical curves touch everywhere.
        let c0 = s_curve();
        let options = IntersectOptions::default().with_max_candidates(5);
        let hits = subdivide_pair(&c0, &c0, &options);
        assert!(hits.len() <= 5, "len={}", hits.len());
    }

    #[test]
    fn node_cap_is_respected() {
        let c0 = s_curve();
        let options = IntersectOptions::default().with_max_nodes(1);
        let hits = subdivide_pair(&c0, &c0, &options);
        assert!(hits.is_empty());
    }

    #[test]
    fn shallow_depth_still_verifies_hits() {
        let c0 = s_curve();
        let line = Curve2::line(Point2::new(-2.0, 1.0), Point2::new(4.0, 1.0)).unwrap();
        let options = IntersectOptions::default().with_max_depth(2);
        for hit in subdivide_pair(&c0, &line, &options) {
            let d = nalgebra::distance(&c0.point_at(hit.t0), &line.point_at(hit.t1));
            assert!(d <= 4e-6, "hit={hit:?} d={d}");
        }
    }
}
