//! Turn GPX routes into mapping-service directions links that fit a URL
//! length limit.

pub mod assemble;
pub mod budget;
pub mod config;
pub mod error;
pub mod extract;
pub mod link;
pub mod models;
pub mod thinning;

pub use assemble::{assemble, encoded_length};
pub use budget::{max_fillers, remaining_budget};
pub use config::{LinkConfig, LinkMode};
pub use error::{LinkError, Result};
pub use extract::{parse_route, read_route};
pub use link::{generate_link, generate_link_from_file};
pub use models::{Coordinate, LinkStats, MapLink, Point, Route};
pub use thinning::{select_points, trim_to_limit};
