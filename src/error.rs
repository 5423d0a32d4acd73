//! Error handling for hourlog
//!
//! This module provides the error type and result alias shared by the
//! scanning, indexing, and query layers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in hourlog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Errors related to I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised while scanning a chunk directory
    #[error("Scan error for {path:?}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Errors raised while reading an indexed chunk file
    #[error("Chunk error for {path:?}: {message}")]
    Chunk { path: PathBuf, message: String },

    /// A date token that is neither `YYYYMMDD` nor `YYYY-MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// An hour token outside 0-23 or not of the accepted shapes
    #[error("Invalid hours: {0}")]
    InvalidHours(String),

    /// Errors related to pattern compilation
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Errors related to serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for hourlog operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new scan error
    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new chunk error
    pub fn chunk(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Chunk {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid-date error
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }

    /// Create a new invalid-hours error
    pub fn invalid_hours(message: impl Into<String>) -> Self {
        Self::InvalidHours(message.into())
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this error came from user-supplied query input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDate(_) | Self::InvalidHours(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        // Test various error creation methods
        let scan_err = Error::scan("/data/chunks", "Failed to read directory");
        assert!(matches!(scan_err, Error::Scan { .. }));

        let chunk_err = Error::chunk("/data/chunks/chunk_2025-08-10_03.txt", "File removed");
        assert!(matches!(chunk_err, Error::Chunk { .. }));

        let date_err = Error::invalid_date("2025/08/10");
        assert!(matches!(date_err, Error::InvalidDate(_)));
        assert!(date_err.is_invalid_input());
    }

    #[test]
    fn test_error_conversion() {
        // Test conversion from io::Error
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_io_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_hours("Hour out of range: 25");
        assert_eq!(err.to_string(), "Invalid hours: Hour out of range: 25");

        let err = Error::scan("/missing", "No such directory");
        assert!(err.to_string().contains("/missing"));
    }
}
