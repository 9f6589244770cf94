//! Maplink CLI - command line front end for GPX directions links.
//!
//! This crate provides the `gpx_to_maps` binary, its log filter and the
//! report formatting it prints.

pub mod logging;
pub mod report;

pub use logging::log_filter;
pub use report::{render_json, render_text};
