//! Filler thinning under a character budget.
//!
//! Selection runs in two passes. A stride estimate keeps every `step`-th
//! filler based on an average point width, then an exact pass drops
//! fillers from the end of the list until the real URL fits.

use crate::assemble::encoded_length;
use crate::budget::max_fillers;
use crate::models::{Point, Route};

/// Keep every waypoint and a strided subset of fillers, in route order.
///
/// The stride counts fillers only, across the whole route, so when
/// `total % max` is non-zero the kept points lean toward the front of
/// each waypoint's segment.
pub fn select_points(route: &Route, remaining: i64, avg_point_width: usize) -> Vec<&Point> {
    if remaining <= 0 {
        tracing::warn!(
            "Waypoints alone exceed the budget by {} chars; dropping all fillers",
            remaining.unsigned_abs()
        );
        return route.waypoints().collect();
    }

    let total = route.filler_count();
    let max = max_fillers(remaining, avg_point_width);

    if total <= max {
        return route.points.iter().collect();
    }
    if max == 0 {
        tracing::debug!("Budget of {} chars fits no fillers", remaining);
        return route.waypoints().collect();
    }

    let step = (total / max).max(1);
    tracing::debug!(
        "Thinning {} fillers to about {} (step {})",
        total,
        max,
        step
    );

    route
        .points
        .iter()
        .scan(0usize, |seen, point| {
            if point.mandatory {
                return Some(Some(point));
            }
            let keep = *seen % step == 0;
            *seen += 1;
            Some(keep.then_some(point))
        })
        .flatten()
        .collect()
}

/// Drop fillers from the back until the encoded URL fits `char_limit`.
///
/// Waypoints are never removed, so the result may still exceed the
/// limit when they alone overflow it.
pub fn trim_to_limit(points: &mut Vec<&Point>, base_url: &str, char_limit: usize) {
    let mandatory = points.iter().filter(|p| p.mandatory).count();
    let mut removed = 0usize;

    while points.len() > mandatory
        && encoded_length(base_url, points.iter().map(|p| &p.coord)) > char_limit
    {
        let mut i = points.len();
        while i > 0 && points[i - 1].mandatory {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        points.remove(i - 1);
        removed += 1;
    }

    if removed > 0 {
        tracing::debug!("Removed {} fillers to fit {} chars", removed, char_limit);
    }
}
