// modgate-core/src/lib.rs
//! # Modgate Core Library
//!
//! `modgate-core` provides a deterministic, multi-layer content moderation
//! engine for free-form user text (posts, comments, profile fields). It
//! inspects text with several independent strategies and folds their signals
//! into a single approve/reject decision with supporting evidence.
//!
//! The library performs no I/O during moderation and keeps no per-request
//! state: the only shared mutable state is the dictionary word list, which is
//! swapped copy-on-write so concurrent reads never observe a partial update.
//!
//! ## Modules
//!
//! * `config`: `ModerationConfig` loading (YAML), merging, validation and env override.
//! * `dictionary`: the `DictionaryMatcher` trait and the default `WordListMatcher`.
//! * `heuristic`: the `Heuristic` trait for blocking detectors.
//! * `heuristics`: spam, toxicity and personal-information detectors.
//! * `engine`: `ModerationEngine`, which sequences the checks and aggregates results.
//! * `profile_moderation`: exhaustive moderation of profile fields.
//! * `multi_field`: short-circuiting moderation of ordered fields.
//! * `moderation_result`: options, flags, results and privacy-preserving log helpers.
//! * `validators`: caller-side text and URL validation.
//! * `errors`: the `ModgateError` and `ValidationError` types.
//!
//! ## Usage Example
//!
//! ```rust
//! use modgate_core::{ModerationConfig, ModerationEngine, ModerationOptions, Flag};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = ModerationConfig::load_default()?;
//!     let engine = ModerationEngine::from_config(&config)?;
//!
//!     let result = engine.moderate_text("Great post, thanks!", &ModerationOptions::default());
//!     assert!(result.approved);
//!
//!     let result = engine.moderate_text("email me at someone@example.com", &ModerationOptions::default());
//!     assert!(result.approved);
//!     assert!(result.flags.contains(&Flag::PersonalInfo));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Detectors are total functions and never fail. The only fallible step is
//! the pluggable dictionary: [`ModerationEngine::try_moderate_text`] surfaces
//! its errors, while [`ModerationEngine::moderate_text`] fails open.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod heuristic;
pub mod heuristics;
pub mod moderation_result;
pub mod multi_field;
pub mod profile_moderation;
pub mod validators;

/// Re-exports the configuration types and functions.
pub use config::{
    config_candidate_paths,
    merge_config,
    parse_toggle,
    resolve_config,
    DictionaryConfig,
    ModerationConfig,
    TextLimits,
    DEFAULT_MAX_LEN,
};

/// Re-exports the custom error types for clear error reporting.
pub use errors::{ModgateError, ValidationError};

/// Re-exports the dictionary seam and its default implementation.
pub use dictionary::{DictionaryError, DictionaryMatcher, WordListMatcher};

/// Re-exports the engine and the field-level moderators.
pub use engine::ModerationEngine;
pub use multi_field::{FieldModerationResult, MultiFieldModerator, TextField};
pub use profile_moderation::{ProfileModerationResult, ProfileModerator, UserProfile};

/// Re-exports the detector trait and concrete detectors.
pub use heuristic::Heuristic;
pub use heuristics::pii::{PiiDetector, PiiKind, PiiReport};
pub use heuristics::spam::SpamHeuristic;
pub use heuristics::toxicity::ToxicityHeuristic;

/// Re-exports request/decision types.
pub use moderation_result::{DetectionOutcome, Flag, ModerationOptions, ModerationResult};

pub use validators::{is_valid_url, validate_text};
