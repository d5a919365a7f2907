//! Error types for the seokit library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SeokitError`] enum. The text metrics engine itself never fails on the
//! shape of its input; errors come from configuration, from plugged-in
//! pipeline components, and from the content-source layer that obtains the
//! text in the first place.
//!
//! # Examples
//!
//! ```
//! use seokit::error::{Result, SeokitError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SeokitError::invalid_argument("Target keyword is required"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for seokit operations.
#[derive(Error, Debug)]
pub enum SeokitError {
    /// I/O errors (reading input files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Extraction-related errors (markup parsing setup)
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// No analyzable content could be obtained from the source
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid caller-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid regular expression
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SeokitError.
pub type Result<T> = std::result::Result<T, SeokitError>;

impl SeokitError {
    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        SeokitError::Extraction(msg.into())
    }

    /// Create a new content unavailable error.
    pub fn content_unavailable<S: Into<String>>(msg: S) -> Self {
        SeokitError::ContentUnavailable(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SeokitError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SeokitError::InvalidArgument(msg.into())
    }

    /// Whether this error means the content could not be obtained, as opposed
    /// to a usage or configuration problem.
    pub fn is_content_unavailable(&self) -> bool {
        matches!(self, SeokitError::ContentUnavailable(_) | SeokitError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SeokitError::extraction("invalid container selector");
        assert_eq!(
            error.to_string(),
            "Extraction error: invalid container selector"
        );

        let error = SeokitError::invalid_config("limit must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: limit must be positive"
        );

        let error = SeokitError::content_unavailable("empty page");
        assert_eq!(error.to_string(), "Content unavailable: empty page");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let seokit_error = SeokitError::from(io_error);

        match seokit_error {
            SeokitError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(seokit_error.is_content_unavailable());
    }

    #[test]
    fn test_usage_errors_are_not_content_errors() {
        assert!(!SeokitError::invalid_argument("blank keyword").is_content_unavailable());
        assert!(!SeokitError::invalid_config("bad band").is_content_unavailable());
    }
}
