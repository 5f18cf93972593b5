// modgate-core/src/heuristic.rs
//! Defines the `Heuristic` trait shared by the rule-based blocking detectors.
//!
//! A heuristic is a pure, total function from text to a [`DetectionOutcome`].
//! It never fails and holds no mutable state, so one instance can be shared
//! by every request thread.
//!
//! License: MIT OR APACHE 2.0

use crate::moderation_result::DetectionOutcome;

pub trait Heuristic: Send + Sync {
    /// Short identifier used in logs (e.g. `"spam"`).
    fn name(&self) -> &'static str;

    /// Inspects `text` and reports whether the heuristic fired.
    ///
    /// Implementations evaluate their rules in a fixed priority order and
    /// return the first rule that matches.
    fn detect(&self, text: &str) -> DetectionOutcome;
}
