//! Error types for linelife.
//!
//! This module provides a unified error type for all fallible operations in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for linelife operations.
#[derive(Error, Debug)]
pub enum LinelifeError {
    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for linelife operations.
pub type Result<T> = std::result::Result<T, LinelifeError>;
