use crate::geometry::curve::Curve2;
use crate::math::Point2;

use super::{IntersectionItem, IntersectionPoint};

/// Filters, deduplicates and orders raw solver output.
///
/// Points whose positions on the two curves are farther apart than
/// `4·accept` are dropped. Remaining points closer than `accept` on curve 0
/// collapse into one, keeping a sampled member when the cluster has one.
/// Overlaps pass through. The result is stably sorted by curve-0 parameter.
#[must_use]
pub fn merge_items(
    c0: &Curve2,
    c1: &Curve2,
    items: Vec<IntersectionItem>,
    accept: f64,
) -> Vec<IntersectionItem> {
    let mut clusters: Vec<(IntersectionPoint, Point2)> = Vec::new();
    let mut merged: Vec<IntersectionItem> = Vec::with_capacity(items.len());

    for item in items {
        let point = match item {
            IntersectionItem::Point(point) => point,
            IntersectionItem::Overlap(_) => {
                merged.push(item);
                continue;
            }
        };

        let q0 = c0.point_at(point.t0);
        if nalgebra::distance(&q0, &c1.point_at(point.t1)) > 4.0 * accept {
            continue;
        }

        match clusters
            .iter_mut()
            .find(|(_, rep)| nalgebra::distance(rep, &q0) <= accept)
        {
            Some(cluster) => {
                if point.is_sample && !cluster.0.is_sample {
                    *cluster = (point, q0);
                }
            }
            None => clusters.push((point, q0)),
        }
    }

    merged.extend(clusters.into_iter().map(|(point, _)| IntersectionItem::Point(point)));
    merged.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    merged
}
