// File: modgate-core/src/validators.rs
//! Programmatic validation helpers for caller-supplied fields.
//!
//! The engine itself accepts any text; these checks are what the request
//! layer runs before calling it (empty or over-long input), plus the
//! syntactic URL check used for profile websites.
//!
//! License: MIT OR APACHE 2.0

use url::Url;

use crate::errors::ValidationError;

/// Rejects blank text and text longer than `max_len` characters.
///
/// # Arguments
///
/// * `field` - Field name used in the error message (e.g. "content").
/// * `text` - The raw field value.
/// * `max_len` - Maximum length in characters (not bytes).
pub fn validate_text(field: &str, text: &str, max_len: usize) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty { field: field.to_string() });
    }

    let actual = text.chars().count();
    if actual > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: max_len,
            actual,
        });
    }
    Ok(())
}

/// Returns `true` if `candidate` parses as an absolute URL.
///
/// Only syntax is checked; the host is never resolved or contacted.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate.trim()).is_ok()
}
