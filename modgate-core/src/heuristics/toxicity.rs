// modgate-core/src/heuristics/toxicity.rs
//! Regex-based detection of threatening, hateful or harassing language.
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::heuristic::Heuristic;
use crate::moderation_result::DetectionOutcome;

pub const REASON_HATE: &str = "Content may contain threatening or hateful language";
pub const REASON_HARASSMENT: &str = "Content may be harassing or insulting";

/// Distinct insults needed before text counts as harassment.
pub const MIN_DISTINCT_INSULTS: usize = 2;

const HATE_PATTERNS: &[&str] = &[
    r"(?i)\b(?:kill|hurt|attack|destroy|murder|shoot|stab|hate)\s+(?:you|them|him|her|everyone|all\s+of\s+you)\b",
    r"(?i)\byou\s+(?:should|must|need\s+to|deserve\s+to|ought\s+to)\s+die\b",
    r"(?i)\bgo\s+kill\s+yourself\b",
    r"(?i)\bi\s+hope\s+you\s+die\b",
];

pub const INSULT_WORDS: &[&str] = &[
    "idiot",
    "stupid",
    "dumb",
    "moron",
    "loser",
    "pathetic",
    "worthless",
    "ugly",
    "trash",
    "garbage",
    "freak",
    "jerk",
    "imbecile",
    "scum",
    "bitch",
    "bastard",
];

static HATE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    HATE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("hate pattern is valid"))
        .collect()
});

static INSULT_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = INSULT_WORDS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("insult pattern is valid")
});

/// Distinct insult words present in `text`, lowercased.
pub fn distinct_insults(text: &str) -> HashSet<String> {
    INSULT_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ToxicityHeuristic;

impl ToxicityHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ToxicityHeuristic {
    fn name(&self) -> &'static str {
        "toxicity"
    }

    fn detect(&self, text: &str) -> DetectionOutcome {
        if HATE_REGEXES.iter().any(|re| re.is_match(text)) {
            return DetectionOutcome::triggered(REASON_HATE, 0.85);
        }

        if distinct_insults(text).len() >= MIN_DISTINCT_INSULTS {
            return DetectionOutcome::triggered(REASON_HARASSMENT, 0.75);
        }

        DetectionOutcome::clear()
    }
}
