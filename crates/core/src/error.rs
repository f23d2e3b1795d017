//! Error types for lambdava
//!
//! This module defines all error types used throughout the kit.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::convert::Infallible;
use std::io;
use std::num::TryFromIntError;
use thiserror::Error;

/// Result type alias for lambdava operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lambdava
#[derive(Debug, Error)]
pub enum Error {
    /// A pair element cannot be represented in a primitive slot
    #[error("Invalid conversion of {slot} element: {reason}")]
    InvalidConversion {
        /// Which slot failed: "first", "second", or "value" for a lone element
        slot: &'static str,
        /// What was wrong with the element
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Blob format version does not match the target type
    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Version the target type declares
        expected: u32,
        /// Version found in the blob
        actual: u32,
    },

    /// Strict sort met an element without a defined ordering
    #[error("Incomparable element at index {index}")]
    IncomparableElements {
        /// Position of the first offending element in the input
        index: usize,
    },

    /// Configuration could not be parsed or validated
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (configuration files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<TryFromIntError> for Error {
    fn from(e: TryFromIntError) -> Self {
        Error::InvalidConversion {
            slot: "value",
            reason: e.to_string(),
        }
    }
}

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
