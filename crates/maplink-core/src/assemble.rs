//! URL assembly.

use crate::models::{Coordinate, LinkStats, MapLink, Point};

/// Path separator between coordinates.
pub const SEPARATOR: char = '/';

/// Exact length of `base_url` followed by the coordinates joined with `/`.
pub fn encoded_length<'a, I>(base_url: &str, coords: I) -> usize
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let (count, chars) = coords
        .into_iter()
        .fold((0usize, 0usize), |(n, len), c| (n + 1, len + c.encoded_len()));

    base_url.chars().count() + chars + count.saturating_sub(1)
}

/// Join the selected points onto the base URL.
pub fn assemble(base_url: &str, points: &[&Point]) -> MapLink {
    let mut url = String::from(base_url);
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            url.push(SEPARATOR);
        }
        url.push_str(point.coord.as_str());
    }

    let mandatory_points = points.iter().filter(|p| p.mandatory).count();
    let stats = LinkStats {
        mandatory_points,
        filler_points: points.len() - mandatory_points,
        url_length: url.chars().count(),
    };

    MapLink { url, stats }
}
