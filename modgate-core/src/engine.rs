// modgate-core/src/engine.rs
//! The moderation engine: runs the enabled checks in a fixed order and folds
//! their outcomes into one [`ModerationResult`].
//!
//! Evaluation order is profanity, spam, toxicity, then personal information.
//! Each blocking check that fires records its flag, lowers the confidence to
//! its own and overwrites `reason`; the personal information probe only adds
//! its flag and appends a suffix to an existing reason. When `auto_clean` is
//! requested and profanity fired, the text is cleaned and the result is
//! approved regardless of the other checks. Flags are kept as evidence.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::ModerationConfig;
use crate::dictionary::{DictionaryMatcher, WordListMatcher};
use crate::errors::ModgateError;
use crate::heuristic::Heuristic;
use crate::heuristics::pii::PiiDetector;
use crate::heuristics::spam::SpamHeuristic;
use crate::heuristics::toxicity::ToxicityHeuristic;
use crate::moderation_result::{
    log_check_debug, log_decision_debug, Flag, ModerationOptions, ModerationResult,
};

pub const REASON_PROFANITY: &str = "Content contains inappropriate language";
pub const PROFANITY_CONFIDENCE: f64 = 0.9;
pub const PERSONAL_INFO_SUFFIX: &str = "; also contains personal information";

pub struct ModerationEngine {
    enabled: bool,
    dictionary: Arc<dyn DictionaryMatcher>,
    spam: Arc<dyn Heuristic>,
    toxicity: Arc<dyn Heuristic>,
    pii: PiiDetector,
}

impl fmt::Debug for ModerationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModerationEngine")
            .field("enabled", &self.enabled)
            .field("dictionary", &"<dyn DictionaryMatcher>")
            .field("spam", &self.spam.name())
            .field("toxicity", &self.toxicity.name())
            .finish()
    }
}

impl ModerationEngine {
    /// Creates an engine around `dictionary` with the built-in heuristics.
    ///
    /// `enabled` is the resolved process-wide toggle; a disabled engine
    /// approves everything without inspecting it.
    pub fn new(enabled: bool, dictionary: Arc<dyn DictionaryMatcher>) -> Self {
        Self {
            enabled,
            dictionary,
            spam: Arc::new(SpamHeuristic::new()),
            toxicity: Arc::new(ToxicityHeuristic::new()),
            pii: PiiDetector::new(),
        }
    }

    /// Builds an engine (and its word list) from a resolved configuration.
    pub fn from_config(config: &ModerationConfig) -> Result<Self, ModgateError> {
        config
            .validate()
            .map_err(|e| ModgateError::InvalidConfig(e.to_string()))?;
        let dictionary = WordListMatcher::from_config(&config.dictionary);
        debug!(
            "Building moderation engine (enabled={}, placeholder='{}').",
            config.is_enabled(),
            dictionary.placeholder()
        );
        Ok(Self::new(config.is_enabled(), Arc::new(dictionary)))
    }

    /// Engine over the embedded default configuration.
    pub fn with_default_config() -> Result<Self, ModgateError> {
        let config = ModerationConfig::load_default()?;
        Self::from_config(&config)
    }

    /// Replaces the spam and toxicity heuristics.
    pub fn with_heuristics(mut self, spam: Arc<dyn Heuristic>, toxicity: Arc<dyn Heuristic>) -> Self {
        self.spam = spam;
        self.toxicity = toxicity;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn dictionary(&self) -> &Arc<dyn DictionaryMatcher> {
        &self.dictionary
    }

    /// Adds words to the shared dictionary.
    pub fn add_custom_words<S: AsRef<str>>(&self, words: &[S]) -> Result<(), ModgateError> {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        self.dictionary.add_words(&words)?;
        Ok(())
    }

    /// Removes words from the shared dictionary.
    pub fn remove_words<S: AsRef<str>>(&self, words: &[S]) -> Result<(), ModgateError> {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        self.dictionary.remove_words(&words)?;
        Ok(())
    }

    /// Moderates `text`, failing open when the dictionary misbehaves.
    ///
    /// A dictionary error is logged and turns into an approved result with
    /// no flags and full confidence: a broken moderation subsystem must not
    /// block legitimate content.
    pub fn moderate_text(&self, text: &str, options: &ModerationOptions) -> ModerationResult {
        match self.try_moderate_text(text, options) {
            Ok(result) => result,
            Err(e) => {
                warn!("Moderation failed, approving content (fail-open): {}", e);
                ModerationResult::allow()
            }
        }
    }

    /// Moderates `text`, surfacing dictionary failures to the caller.
    pub fn try_moderate_text(
        &self,
        text: &str,
        options: &ModerationOptions,
    ) -> Result<ModerationResult, ModgateError> {
        if !self.enabled {
            debug!("Moderation disabled, approving without checks.");
            return Ok(ModerationResult::allow());
        }

        let mut result = ModerationResult::allow();

        if options.check_profanity && self.dictionary.is_profane(text)? {
            result.block(Flag::Profanity, REASON_PROFANITY.to_string(), PROFANITY_CONFIDENCE);
        }

        if options.check_spam {
            self.apply_heuristic(self.spam.as_ref(), Flag::Spam, text, &mut result);
        }

        if options.check_toxicity {
            self.apply_heuristic(self.toxicity.as_ref(), Flag::Toxic, text, &mut result);
        }

        if options.check_personal_info {
            let report = self.pii.detect(text);
            if report.has_pii {
                result.add_flag(Flag::PersonalInfo);
                result.personal_info = report.types;
                if let Some(reason) = result.reason.as_mut() {
                    reason.push_str(PERSONAL_INFO_SUFFIX);
                }
            }
        }

        if options.auto_clean && result.has_flag(Flag::Profanity) {
            result.cleaned_text = Some(self.dictionary.clean(text)?);
            result.approved = true;
            result.reason = None;
        }

        log_decision_debug(module_path!(), text, &result);
        Ok(result)
    }

    fn apply_heuristic(
        &self,
        heuristic: &dyn Heuristic,
        flag: Flag,
        text: &str,
        result: &mut ModerationResult,
    ) {
        let outcome = heuristic.detect(text);
        log_check_debug(module_path!(), heuristic.name(), text, &outcome);
        if outcome.triggered {
            let reason = outcome.reason.unwrap_or_else(|| format!("Content flagged as {}", flag));
            result.block(flag, reason, outcome.confidence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::pii::PiiKind;
    use crate::heuristics::spam::{REASON_PROMOTIONAL, REASON_REPEATED};
    use crate::heuristics::toxicity::REASON_HARASSMENT;
    use crate::moderation_result::DetectionOutcome;

    fn engine() -> ModerationEngine {
        ModerationEngine::new(true, Arc::new(WordListMatcher::new(["darn", "bitch"])))
    }

    #[test]
    fn test_clean_text_is_approved_with_full_confidence() {
        let result = engine().moderate_text("What a lovely day for a walk.", &ModerationOptions::default());
        assert_eq!(result, ModerationResult::allow());
    }

    #[test]
    fn test_profanity_blocks() {
        let result = engine().moderate_text("well darn it", &ModerationOptions::default());
        assert!(!result.approved);
        assert_eq!(result.flags, vec![Flag::Profanity]);
        assert_eq!(result.confidence, PROFANITY_CONFIDENCE);
        assert_eq!(result.reason.as_deref(), Some(REASON_PROFANITY));
    }

    #[test]
    fn test_last_blocking_reason_wins() {
        let result = engine().moderate_text("darn, buy now", &ModerationOptions::default());
        assert_eq!(result.flags, vec![Flag::Profanity, Flag::Spam]);
        assert_eq!(result.reason.as_deref(), Some(REASON_PROMOTIONAL));
        assert_eq!(result.reasons, vec![REASON_PROFANITY.to_string(), REASON_PROMOTIONAL.to_string()]);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_personal_info_suffix_follows_block() {
        let result = engine().moderate_text("darn, mail me at a@b.com", &ModerationOptions::default());
        assert_eq!(result.flags, vec![Flag::Profanity, Flag::PersonalInfo]);
        assert_eq!(
            result.reason.as_deref(),
            Some("Content contains inappropriate language; also contains personal information")
        );
        assert_eq!(result.personal_info, vec![PiiKind::Email]);
    }

    #[test]
    fn test_personal_info_alone_is_advisory() {
        let options = ModerationOptions { check_personal_info: true, ..ModerationOptions::none() };
        let result = engine().moderate_text("contact me at a@b.com", &options);
        assert!(result.approved);
        assert_eq!(result.flags, vec![Flag::PersonalInfo]);
        assert_eq!(result.reason, None);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_disabled_checks_are_skipped() {
        let options = ModerationOptions { check_profanity: false, ..ModerationOptions::default() };
        assert!(engine().moderate_text("darn", &options).approved);
    }

    #[test]
    fn test_auto_clean_overrides_everything() {
        let text = "YOU ARE SO STUPID STUPID!!! buy now buy now bitch";
        let result = engine().moderate_text(text, &ModerationOptions::default().with_auto_clean(true));
        assert!(result.approved);
        assert_eq!(result.reason, None);
        assert_eq!(result.flags, vec![Flag::Profanity, Flag::Spam, Flag::Toxic]);
        assert_eq!(result.confidence, 0.7);
        assert_eq!(
            result.cleaned_text.as_deref(),
            Some("YOU ARE SO STUPID STUPID!!! buy now buy now *****")
        );
        assert_eq!(result.reasons.last().map(String::as_str), Some(REASON_HARASSMENT));
    }

    #[test]
    fn test_auto_clean_without_profanity_does_nothing() {
        let result = engine().moderate_text("heyyyyyyy", &ModerationOptions::default().with_auto_clean(true));
        assert!(!result.approved);
        assert_eq!(result.reason.as_deref(), Some(REASON_REPEATED));
        assert_eq!(result.cleaned_text, None);
    }

    #[test]
    fn test_disabled_engine_approves_everything() {
        let engine = ModerationEngine::new(false, Arc::new(WordListMatcher::new(["darn"])));
        let result = engine.moderate_text("darn darn BUY NOW!!!!!!!", &ModerationOptions::default());
        assert_eq!(result, ModerationResult::allow());
        assert!(!engine.is_enabled());
    }

    #[test]
    fn test_custom_words_round_trip() {
        let engine = engine();
        let options = ModerationOptions::default();
        assert!(engine.moderate_text("oh fiddlesticks", &options).approved);
        engine.add_custom_words(&["fiddlesticks"]).unwrap();
        assert!(!engine.moderate_text("oh fiddlesticks", &options).approved);
        engine.remove_words(&["fiddlesticks"]).unwrap();
        assert!(engine.moderate_text("oh fiddlesticks", &options).approved);
    }

    struct AlwaysFires;

    impl Heuristic for AlwaysFires {
        fn name(&self) -> &'static str {
            "always"
        }

        fn detect(&self, _text: &str) -> DetectionOutcome {
            DetectionOutcome::triggered("always fires", 0.5)
        }
    }

    #[test]
    fn test_heuristics_can_be_replaced() {
        let engine = engine().with_heuristics(Arc::new(AlwaysFires), Arc::new(ToxicityHeuristic::new()));
        let result = engine.moderate_text("hello", &ModerationOptions::default());
        assert_eq!(result.flags, vec![Flag::Spam]);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.reason.as_deref(), Some("always fires"));
    }
}
