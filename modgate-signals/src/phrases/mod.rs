// modgate-signals/src/phrases/mod.rs
use daachorse::errors::DaachorseError;
use daachorse::DoubleArrayAhoCorasick;
extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

/// Case-insensitive multi-phrase substring scanner.
///
/// Phrases are folded to ASCII lowercase at build time and the haystack is
/// folded the same way at scan time, so `"BUY NOW"` matches the phrase `"buy now"`.
pub struct PhraseScanner {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    phrase_count: usize,
}

impl fmt::Debug for PhraseScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseScanner")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("phrase_count", &self.phrase_count)
         .finish()
    }
}

impl PhraseScanner {
    /// Builds a scanner over `phrases`.
    ///
    /// Empty phrases are skipped. Phrases that fold to the same lowercase
    /// bytes are kept once; the returned index always refers to the position
    /// in the original `phrases` slice of the first such phrase.
    pub fn new(phrases: &[&str]) -> Result<Self, DaachorseError> {
        let mut folded: Vec<Vec<u8>> = Vec::with_capacity(phrases.len());
        let mut values: Vec<usize> = Vec::with_capacity(phrases.len());

        for (idx, phrase) in phrases.iter().enumerate() {
            if phrase.is_empty() {
                continue;
            }
            let lower = fold(phrase.as_bytes());
            if folded.contains(&lower) {
                continue;
            }
            folded.push(lower);
            values.push(idx);
        }

        if folded.is_empty() {
            return Ok(Self { automaton: None, phrase_count: 0 });
        }

        let phrase_count = folded.len();
        let automaton = DoubleArrayAhoCorasick::with_values(folded.into_iter().zip(values))?;
        Ok(Self { automaton: Some(automaton), phrase_count })
    }

    /// Number of distinct phrases the scanner matches.
    pub fn len(&self) -> usize {
        self.phrase_count
    }

    pub fn is_empty(&self) -> bool {
        self.phrase_count == 0
    }

    /// Index (into the slice given to [`PhraseScanner::new`]) of the first
    /// phrase found in `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<usize> {
        let automaton = self.automaton.as_ref()?;
        let haystack = fold(text.as_bytes());
        automaton.find_iter(&haystack).next().map(|m| m.value())
    }

    /// Returns `true` if any phrase occurs in `text`.
    pub fn contains_any(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

fn fold(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b.to_ascii_lowercase()).collect()
}
