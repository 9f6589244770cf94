//! End-to-end link generation: budget, thin, trim, assemble.

use crate::assemble::assemble;
use crate::budget::remaining_budget;
use crate::config::{LinkConfig, LinkMode};
use crate::error::{LinkError, Result};
use crate::extract::read_route;
use crate::models::{MapLink, Point, Route};
use crate::thinning::{select_points, trim_to_limit};
use std::path::Path;

/// Build a directions link for `route` that respects `config.char_limit`
/// whenever the waypoints alone fit.
pub fn generate_link(route: &Route, config: &LinkConfig) -> Result<MapLink> {
    config.validate()?;
    if route.mandatory_count() == 0 {
        return Err(LinkError::NoRoutePoints);
    }

    let mut points: Vec<&Point> = match config.mode {
        LinkMode::Basic => route.waypoints().collect(),
        LinkMode::Full => {
            let remaining = remaining_budget(
                &config.base_url,
                config.char_limit,
                route.waypoints().map(|p| &p.coord),
            );
            tracing::debug!("Remaining budget: {} chars", remaining);
            select_points(route, remaining, config.avg_point_width)
        }
    };

    if config.mode == LinkMode::Full {
        trim_to_limit(&mut points, &config.base_url, config.char_limit);
    }

    let link = assemble(&config.base_url, &points);
    tracing::info!(
        "Generated link with {} waypoints, {} fillers, {} chars",
        link.stats.mandatory_points,
        link.stats.filler_points,
        link.stats.url_length
    );
    Ok(link)
}

/// Read a GPX file and build its directions link.
pub fn generate_link_from_file<P: AsRef<Path>>(path: P, config: &LinkConfig) -> Result<MapLink> {
    let route = read_route(path)?;
    generate_link(&route, config)
}
