//! word_list.rs - The default, word-list backed `DictionaryMatcher`.
//!
//! The list lives in an immutable `WordSnapshot` behind an `RwLock<Arc<_>>`.
//! Readers clone the `Arc` and release the lock before scanning; writers build
//! a fresh snapshot and swap it in. A scan therefore always sees one complete
//! version of the list, whatever mutations happen meanwhile.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use super::{word_spans, DictionaryError, DictionaryMatcher};
use crate::config::DictionaryConfig;

/// Default character used to mask listed words.
pub const DEFAULT_PLACEHOLDER: char = '*';

/// One immutable version of the word list.
#[derive(Debug, Default)]
struct WordSnapshot {
    words: HashSet<String>,
}

impl WordSnapshot {
    fn contains_token(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }
}

#[derive(Debug)]
pub struct WordListMatcher {
    snapshot: RwLock<Arc<WordSnapshot>>,
    placeholder: char,
}

impl Default for WordListMatcher {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl WordListMatcher {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_placeholder(words, DEFAULT_PLACEHOLDER)
    }

    pub fn with_placeholder<I, S>(words: I, placeholder: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words.into_iter().filter_map(|w| normalize_word(w.as_ref())).collect();
        debug!("Built word list with {} entries.", words.len());
        Self {
            snapshot: RwLock::new(Arc::new(WordSnapshot { words })),
            placeholder,
        }
    }

    /// Builds the matcher from the dictionary section of the configuration:
    /// base words plus extras, minus exclusions.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        let excluded: HashSet<String> = config
            .excluded_words
            .iter()
            .filter_map(|w| normalize_word(w))
            .collect();

        let words = config
            .words
            .iter()
            .chain(config.extra_words.iter())
            .filter_map(|w| normalize_word(w))
            .filter(|w| !excluded.contains(w));

        Self::with_placeholder(words, config.placeholder())
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of words currently listed.
    pub fn len(&self) -> Result<usize, DictionaryError> {
        Ok(self.current()?.words.len())
    }

    pub fn is_empty(&self) -> Result<bool, DictionaryError> {
        Ok(self.len()? == 0)
    }

    pub fn contains_word(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.current()?.contains_token(word))
    }

    fn current(&self) -> Result<Arc<WordSnapshot>, DictionaryError> {
        let guard = self.snapshot.read().map_err(|_| DictionaryError::Poisoned)?;
        Ok(Arc::clone(&*guard))
    }

    fn update<F>(&self, mutate: F) -> Result<(), DictionaryError>
    where
        F: FnOnce(&mut HashSet<String>),
    {
        let mut guard = self.snapshot.write().map_err(|_| DictionaryError::Poisoned)?;
        let mut words = guard.words.clone();
        mutate(&mut words);
        *guard = Arc::new(WordSnapshot { words });
        Ok(())
    }
}

impl DictionaryMatcher for WordListMatcher {
    fn is_profane(&self, text: &str) -> Result<bool, DictionaryError> {
        let snapshot = self.current()?;
        Ok(word_spans(text)
            .into_iter()
            .any(|(start, end)| snapshot.contains_token(&text[start..end])))
    }

    fn clean(&self, text: &str) -> Result<String, DictionaryError> {
        let snapshot = self.current()?;
        let mut cleaned = String::with_capacity(text.len());
        let mut last_end = 0usize;

        for (start, end) in word_spans(text) {
            let token = &text[start..end];
            if !snapshot.contains_token(token) {
                continue;
            }
            cleaned.push_str(&text[last_end..start]);
            cleaned.extend(std::iter::repeat(self.placeholder).take(token.chars().count()));
            last_end = end;
        }
        cleaned.push_str(&text[last_end..]);
        Ok(cleaned)
    }

    fn add_words(&self, words: &[String]) -> Result<(), DictionaryError> {
        let normalized: Vec<String> = words.iter().filter_map(|w| normalize_word(w)).collect();
        debug!("Adding {} word(s) to the word list.", normalized.len());
        self.update(|set| set.extend(normalized))
    }

    fn remove_words(&self, words: &[String]) -> Result<(), DictionaryError> {
        let normalized: Vec<String> = words.iter().filter_map(|w| normalize_word(w)).collect();
        debug!("Removing {} word(s) from the word list.", normalized.len());
        self.update(|set| {
            for word in &normalized {
                set.remove(word);
            }
        })
    }
}

/// Lowercases and trims a word; rejects entries that can never match a token.
fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
        warn!("Ignoring dictionary entry with non-word characters ({} chars).", trimmed.chars().count());
        return None;
    }
    Some(trimmed.to_lowercase())
}
