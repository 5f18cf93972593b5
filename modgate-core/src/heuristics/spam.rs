// modgate-core/src/heuristics/spam.rs
//! Rule-based statistical and pattern spam detection.
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use modgate_signals::casing::{char_count, uppercase_ratio};
use modgate_signals::emoji::count_emoji;
use modgate_signals::phrases::PhraseScanner;
use modgate_signals::repetition::has_run_of;

use crate::heuristic::Heuristic;
use crate::moderation_result::DetectionOutcome;

/// Uppercase ratio above which text counts as shouting.
pub const CAPS_RATIO_THRESHOLD: f64 = 0.7;
/// Texts this short (in characters) are never judged on capitalization.
pub const CAPS_MIN_LEN: usize = 20;
/// Consecutive identical characters that count as a flood.
pub const REPEAT_RUN_LEN: usize = 6;
pub const MAX_EMOJI: usize = 20;
pub const MAX_LINKS: usize = 5;

pub const REASON_CAPS: &str = "Excessive capitalization detected";
pub const REASON_REPEATED: &str = "Excessive repeated characters";
pub const REASON_EMOJI: &str = "Excessive emojis";
pub const REASON_LINKS: &str = "Excessive links detected";
pub const REASON_PROMOTIONAL: &str = "Suspected promotional content";

pub const PROMOTIONAL_PHRASES: &[&str] = &[
    "click here now",
    "click here",
    "limited time offer",
    "buy now",
    "act now",
    "order now",
    "free money",
    "make money fast",
    "earn money fast",
    "double your money",
    "100% free",
    "risk free",
    "no credit check",
    "you have won",
    "work from home",
    "subscribe now",
    "check out my profile",
];

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://").expect("link pattern is valid")
});

static PROMOTIONAL_SCANNER: Lazy<PhraseScanner> = Lazy::new(|| {
    PhraseScanner::new(PROMOTIONAL_PHRASES).expect("promotional phrase list is valid")
});

/// Counts `http://` / `https://` occurrences.
pub fn count_links(text: &str) -> usize {
    LINK_REGEX.find_iter(text).count()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SpamHeuristic;

impl SpamHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for SpamHeuristic {
    fn name(&self) -> &'static str {
        "spam"
    }

    fn detect(&self, text: &str) -> DetectionOutcome {
        if char_count(text) > CAPS_MIN_LEN && uppercase_ratio(text) > CAPS_RATIO_THRESHOLD {
            return DetectionOutcome::triggered(REASON_CAPS, 0.8);
        }

        if has_run_of(text, REPEAT_RUN_LEN) {
            return DetectionOutcome::triggered(REASON_REPEATED, 0.85);
        }

        if count_emoji(text) > MAX_EMOJI {
            return DetectionOutcome::triggered(REASON_EMOJI, 0.75);
        }

        if count_links(text) > MAX_LINKS {
            return DetectionOutcome::triggered(REASON_LINKS, 0.9);
        }

        if PROMOTIONAL_SCANNER.contains_any(text) {
            return DetectionOutcome::triggered(REASON_PROMOTIONAL, 0.7);
        }

        DetectionOutcome::clear()
    }
}
