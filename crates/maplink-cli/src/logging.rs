//! Log filter setup for the CLI binaries.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "maplink_core=warn";

/// Filter from `directives` (normally `RUST_LOG`), or the quiet default
/// when they are unset or unparsable.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
