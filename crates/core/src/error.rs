//! Error types for TerraKit

use thiserror::Error;

/// Main error type for TerraKit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed coordinate text: {0}")]
    Format(String),

    #[error("Invalid GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Degenerate geometry: {0}")]
    Geometry(String),

    #[error("Unexpected coordinate structure: {0}")]
    Structure(String),
}

/// Result type alias for TerraKit operations
pub type Result<T> = std::result::Result<T, Error>;
