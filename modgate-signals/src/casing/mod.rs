// modgate-signals/src/casing/mod.rs
use crate::Ratio;

/// Number of Unicode scalar values in `text`.
///
/// This is the "length" the capitalization gate compares against, so that
/// multi-byte characters count once rather than once per UTF-8 byte.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Counts ASCII uppercase letters (`A`-`Z`).
pub fn uppercase_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_uppercase()).count()
}

/// Ratio of ASCII uppercase letters to the total character count.
///
/// Spaces, digits and punctuation count towards the length but never towards
/// the uppercase total. Returns `0.0` for empty input.
pub fn uppercase_ratio(text: &str) -> Ratio {
    let len = char_count(text);
    if len == 0 {
        return 0.0;
    }
    uppercase_count(text) as f64 / len as f64
}
