//! Error handling for LightBoxKit core types
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
///
/// Raised by the geometry layer when a path or part cannot be built or
/// transformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A path has too few points to form a closed outline
    #[error("Degenerate path: {0}")]
    DegeneratePath(String),

    /// A dimension is zero, negative or not finite
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A part has no outline
    #[error("Part '{0}' has no outline")]
    MissingOutline(String),

    /// Catch-all error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
