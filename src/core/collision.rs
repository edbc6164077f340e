use ordered_float::OrderedFloat;

use crate::core::points::{ChartPoint, LabelBand, PointSet};

/// Assigns each label to one of two vertical bands so neighbours closer
/// than `threshold_px` never share a band.
///
/// Adjacent-only policy: points are stably sorted by ascending `x` (ties
/// keep input order), the first point keeps its incoming band, and every
/// later point is compared against the nearest already-placed point on its
/// left. On a conflict the point takes the opposite band; otherwise it
/// falls back to the upper band.
///
/// With two bands, a run of three or more mutually close points cannot be
/// fully separated; the alternation then still leaves a same-band pair
/// among the non-adjacent points, which is accepted.
///
/// Only `band` changes. `kind`, `value`, `x` and `color` pass through, and
/// the result comes back in sorted order, which downstream rendering does
/// not care about since each point carries its own `x`.
#[must_use]
pub fn resolve_label_collisions(points: &[ChartPoint], threshold_px: f64) -> PointSet {
    let mut sorted: PointSet = points.iter().cloned().collect();
    sorted.sort_by_key(|point| OrderedFloat(point.x));

    let mut resolved = PointSet::new();
    for (index, point) in sorted.into_iter().enumerate() {
        let band = if index == 0 {
            point.band
        } else {
            let previous = &resolved[index - 1];
            if (point.x - previous.x).abs() < threshold_px {
                previous.band.flipped()
            } else {
                LabelBand::Upper
            }
        };
        resolved.push(ChartPoint { band, ..point });
    }

    resolved
}
