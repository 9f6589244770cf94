//! Link generation settings.

use crate::error::{LinkError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Maximum URL length. Browsers start failing near 2000 characters.
pub const DEFAULT_CHAR_LIMIT: usize = 1850;
pub const DEFAULT_BASE_URL: &str = "https://www.google.com/maps/dir/";
/// Typical `-46.12345,6.12345` coordinate plus its separator.
pub const DEFAULT_AVG_POINT_WIDTH: usize = 21;

/// Which points are allowed into the link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Waypoints plus as many detailed path points as fit
    #[default]
    Full,
    /// Waypoints only
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Hard upper bound on the generated URL length
    pub char_limit: usize,
    /// Directions endpoint the coordinates are appended to
    pub base_url: String,
    /// Estimated width of one filler point, used to size the stride.
    /// Must be non-zero.
    pub avg_point_width: usize,
    pub mode: LinkMode,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
            base_url: DEFAULT_BASE_URL.to_string(),
            avg_point_width: DEFAULT_AVG_POINT_WIDTH,
            mode: LinkMode::Full,
        }
    }
}

impl LinkConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            char_limit: env::var("MAPLINK_CHAR_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.char_limit),
            base_url: env::var("MAPLINK_BASE_URL").unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    /// Reject settings the thinning pass cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.avg_point_width == 0 {
            return Err(LinkError::InvalidConfig(
                "avg_point_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_mode(mut self, mode: LinkMode) -> Self {
        self.mode = mode;
        self
    }
}
