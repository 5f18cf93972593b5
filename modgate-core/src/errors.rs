//! errors.rs - Custom error types for the modgate-core library.
//!
//! Two error classes matter to callers: `ValidationError` (the text handed in
//! was empty or too long, a caller-side concern) and
//! `ModgateError::ContentRejected` (the engine decided against the content).
//! Dictionary failures are surfaced separately so the integration layer can
//! choose to fail open.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::moderation_result::Flag;

/// Field-level input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: String },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
}

/// This enum represents all possible error types in the `modgate-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ModgateError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Content rejected: {reason}")]
    ContentRejected { reason: String, flags: Vec<Flag> },

    #[error("Dictionary matcher failed: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl ModgateError {
    /// Flags carried by a rejection, empty for every other variant.
    pub fn flags(&self) -> &[Flag] {
        match self {
            ModgateError::ContentRejected { flags, .. } => flags,
            _ => &[],
        }
    }
}
