// modgate-core/src/moderation_result.rs
//! Core data structures for moderation requests and decisions, plus the
//! helpers used to log decisions without leaking user content.

use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::ModgateError;
use crate::heuristics::pii::PiiKind;

lazy_static! {
    /// Initialized once: whether raw user content may appear in debug logs.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("MODGATE_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Confidence reported when no blocking detector fired.
pub const FULL_CONFIDENCE: f64 = 1.0;

/// Tag recorded when a detector fires, independent of the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Profanity,
    Spam,
    Toxic,
    PersonalInfo,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Profanity => "profanity",
            Flag::Spam => "spam",
            Flag::Toxic => "toxic",
            Flag::PersonalInfo => "personal_info",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call switches for each moderation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModerationOptions {
    pub check_profanity: bool,
    pub check_spam: bool,
    pub check_toxicity: bool,
    pub check_personal_info: bool,
    /// Replace profane tokens and approve the cleaned text.
    pub auto_clean: bool,
}

impl Default for ModerationOptions {
    fn default() -> Self {
        Self {
            check_profanity: true,
            check_spam: true,
            check_toxicity: true,
            check_personal_info: true,
            auto_clean: false,
        }
    }
}

impl ModerationOptions {
    /// Every check disabled; useful as a base for enabling a single layer.
    pub fn none() -> Self {
        Self {
            check_profanity: false,
            check_spam: false,
            check_toxicity: false,
            check_personal_info: false,
            auto_clean: false,
        }
    }

    pub fn with_auto_clean(mut self, auto_clean: bool) -> Self {
        self.auto_clean = auto_clean;
        self
    }
}

/// Outcome of a single heuristic over one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionOutcome {
    pub triggered: bool,
    pub reason: Option<String>,
    pub confidence: f64,
}

impl DetectionOutcome {
    /// Nothing found.
    pub fn clear() -> Self {
        Self {
            triggered: false,
            reason: None,
            confidence: FULL_CONFIDENCE,
        }
    }

    pub fn triggered(reason: impl Into<String>, confidence: f64) -> Self {
        Self {
            triggered: true,
            reason: Some(reason.into()),
            confidence,
        }
    }
}

/// The engine's decision for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub approved: bool,
    /// Reason of the last blocking check, in profanity, spam, toxicity order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Every detector that fired, in detection order.
    pub flags: Vec<Flag>,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
    /// Every per-check reason, in evaluation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personal_info: Vec<PiiKind>,
}

impl Default for ModerationResult {
    fn default() -> Self {
        Self::allow()
    }
}

impl ModerationResult {
    /// An approved result with no flags and full confidence.
    pub fn allow() -> Self {
        Self {
            approved: true,
            reason: None,
            flags: Vec::new(),
            confidence: FULL_CONFIDENCE,
            cleaned_text: None,
            reasons: Vec::new(),
            personal_info: Vec::new(),
        }
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Records `flag` once, keeping insertion order.
    pub(crate) fn add_flag(&mut self, flag: Flag) {
        if !self.has_flag(flag) {
            self.flags.push(flag);
        }
    }

    /// Marks the result as blocked by a check with the given reason and confidence.
    pub(crate) fn block(&mut self, flag: Flag, reason: String, confidence: f64) {
        self.add_flag(flag);
        self.approved = false;
        self.confidence = self.confidence.min(confidence);
        self.reasons.push(reason.clone());
        self.reason = Some(reason);
    }

    /// Converts a rejected result into `ModgateError::ContentRejected`.
    pub fn into_rejection(self) -> Result<ModerationResult, ModgateError> {
        if self.approved {
            return Ok(self);
        }
        Err(ModgateError::ContentRejected {
            reason: self.reason.unwrap_or_else(|| "Content rejected".to_string()),
            flags: self.flags,
        })
    }
}

/// Short, stable digest of some content, suitable for log correlation.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let full = hex::encode(hasher.finalize());
    full[..12].to_string()
}

pub fn redact_content(text: &str) -> String {
    format!("[CONTENT sha256:{} {} chars]", content_digest(text), text.chars().count())
}

fn get_loggable_content(text: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        text.to_string()
    } else {
        redact_content(text)
    }
}

pub fn log_decision_debug(module_path: &str, text: &str, result: &ModerationResult) {
    let flags: Vec<&str> = result.flags.iter().map(Flag::as_str).collect();
    debug!(
        "{} Moderated {}: approved={}, flags=[{}], confidence={:.2}",
        module_path,
        get_loggable_content(text),
        result.approved,
        flags.join(", "),
        result.confidence
    );
}

pub fn log_check_debug(module_path: &str, check: &str, text: &str, outcome: &DetectionOutcome) {
    if outcome.triggered {
        debug!(
            "{} Check '{}' triggered on {}: {} ({:.2})",
            module_path,
            check,
            get_loggable_content(text),
            outcome.reason.as_deref().unwrap_or(""),
            outcome.confidence
        );
    }
}
