//! The pluggable dictionary matcher the engine consults for profanity.
//!
//! The engine only needs four things from a dictionary: a yes/no profanity
//! test, a cleaning pass, and the ability to add or remove words at runtime.
//! Anything that can answer those through [`DictionaryMatcher`] can be used,
//! the bundled [`WordListMatcher`] being the default.

pub mod word_list;

pub use word_list::WordListMatcher;

use thiserror::Error;

/// Failures a dictionary matcher may report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DictionaryError {
    #[error("word list lock was poisoned by a panicking writer")]
    Poisoned,

    #[error("dictionary backend failed: {0}")]
    Backend(String),
}

/// Contract between the moderation engine and a word-list based matcher.
///
/// Implementations must be safe to share across threads: `is_profane` and
/// `clean` may run concurrently with `add_words` / `remove_words`, and an
/// in-flight scan must never observe a half-applied mutation.
pub trait DictionaryMatcher: Send + Sync {
    /// Returns `true` if `text` contains at least one listed word.
    fn is_profane(&self, text: &str) -> Result<bool, DictionaryError>;

    /// Returns `text` with every listed word masked by a placeholder.
    fn clean(&self, text: &str) -> Result<String, DictionaryError>;

    /// Adds words to the list.
    fn add_words(&self, words: &[String]) -> Result<(), DictionaryError>;

    /// Removes words from the list. Unknown words are ignored.
    fn remove_words(&self, words: &[String]) -> Result<(), DictionaryError>;
}

/// Byte spans of the word tokens in `text`.
///
/// A token is a maximal run of Unicode alphanumerics or `_`.
pub fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        let is_word = c.is_alphanumeric() || c == '_';
        match (is_word, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                spans.push((s, idx));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}
