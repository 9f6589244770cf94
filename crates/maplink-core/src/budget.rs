//! Character budget left for filler points.

use crate::models::Coordinate;

/// Characters left under `char_limit` once the base URL and every
/// mandatory coordinate (plus one separator each) are accounted for.
///
/// Negative when the waypoints alone overflow the limit.
pub fn remaining_budget<'a, I>(base_url: &str, char_limit: usize, mandatory: I) -> i64
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let used = base_url.chars().count()
        + mandatory
            .into_iter()
            .map(|coord| coord.encoded_len() + 1)
            .sum::<usize>();

    char_limit as i64 - used as i64
}

/// Upper bound on fillers that fit in `remaining`, estimated with an
/// average per-point width.
pub fn max_fillers(remaining: i64, avg_point_width: usize) -> usize {
    if remaining <= 0 || avg_point_width == 0 {
        return 0;
    }
    remaining as usize / avg_point_width
}
