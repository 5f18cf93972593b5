// modgate-core/src/heuristics/mod.rs
//! Concrete detectors used by the moderation engine.
//!
//! `spam` and `toxicity` implement the blocking [`Heuristic`](crate::heuristic::Heuristic)
//! trait; `pii` is advisory and reports the kinds of personal information it
//! finds instead of a blocking outcome.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod spam;
pub mod toxicity;
pub mod pii;
