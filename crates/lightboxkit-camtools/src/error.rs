//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for drawing, parameter
//! validation and export of generated parts.

use std::io;
use thiserror::Error;

/// Errors that can occur during generation or export.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A geometry operation failed while building a part.
    #[error("Geometry error: {0}")]
    GeometryError(#[from] lightboxkit_core::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// An export error occurred.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors related to parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors related to writing output formats.
#[derive(Error, Debug)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("Nothing to export: {0}")]
    EmptySheet(String),

    /// The requested output format is not supported.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The DXF writer failed.
    #[error("DXF write error: {0}")]
    Dxf(String),

    /// I/O error during file writing.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
