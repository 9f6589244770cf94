//! Error types for link generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a GPX file into a link.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Input path does not exist
    #[error("The file '{}' was not found.", .0.display())]
    FileNotFound(PathBuf),

    /// Document is not well-formed XML
    #[error("Failed to parse the XML. Ensure it is a valid GPX file. ({0})")]
    Parse(String),

    /// Document contains no route waypoints
    #[error("No route points (rtept) found in the file.")]
    NoRoutePoints,

    /// Settings that cannot produce a link
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other I/O failure while reading the input
    #[error("An unexpected error occurred: {0}")]
    Io(#[from] io::Error),
}

impl From<roxmltree::Error> for LinkError {
    fn from(err: roxmltree::Error) -> Self {
        LinkError::Parse(err.to_string())
    }
}

/// Result type for link operations
pub type Result<T> = std::result::Result<T, LinkError>;
