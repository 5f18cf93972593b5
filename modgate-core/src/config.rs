//! Configuration management for `modgate-core`.
//!
//! This module defines the configuration surface of the engine: the
//! process-wide `enabled` toggle, the dictionary word lists and the text
//! limits callers validate against. It handles YAML (de)serialization and
//! provides utilities for loading, merging, validating and overriding configs
//! from the environment.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::dictionary::word_list::DEFAULT_PLACEHOLDER;

/// Default maximum length, in characters, of a single moderated text.
pub const DEFAULT_MAX_LEN: usize = 10_000;

/// Environment variable that toggles moderation for the whole process.
pub const ENABLED_ENV_VAR: &str = "MODGATE_ENABLED";

/// Dictionary settings: the base list plus operator additions and exclusions.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base word list.
    pub words: Vec<String>,
    /// Words added on top of the base list.
    pub extra_words: Vec<String>,
    /// Words removed from the combined list.
    pub excluded_words: Vec<String>,
    /// Masking character used by auto-clean (default: `*`).
    pub placeholder: Option<char>,
}

impl DictionaryConfig {
    pub fn placeholder(&self) -> char {
        self.placeholder.unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

/// Caller-side text limits.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct TextLimits {
    /// Maximum characters per field (default: 10000).
    pub max_len: Option<usize>,
}

/// Top-level configuration structure for modgate.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ModerationConfig {
    /// Process-wide switch; `false` approves everything (default: true).
    pub enabled: Option<bool>,
    pub dictionary: DictionaryConfig,
    pub limits: TextLimits,
}

impl ModerationConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading moderation config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ModerationConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded config from {} ({} base words, {} extra, {} excluded).",
            path.display(),
            config.dictionary.words.len(),
            config.dictionary.extra_words.len(),
            config.dictionary.excluded_words.len()
        );
        Ok(config)
    }

    /// Loads the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: ModerationConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default config")?;

        debug!("Loaded {} default dictionary words.", config.dictionary.words.len());
        Ok(config)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn max_len(&self) -> usize {
        self.limits.max_len.unwrap_or(DEFAULT_MAX_LEN)
    }

    /// Checks values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(c) = self.dictionary.placeholder {
            if c.is_alphanumeric() || c.is_whitespace() {
                errors.push(format!(
                    "dictionary.placeholder must be a symbol, got '{}'.",
                    c.escape_default()
                ));
            }
        }

        if self.limits.max_len == Some(0) {
            errors.push("limits.max_len must be greater than 0.".to_string());
        }

        let excluded: HashSet<String> = self
            .dictionary
            .excluded_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .collect();
        for word in &self.dictionary.extra_words {
            if excluded.contains(&word.trim().to_lowercase()) {
                warn!("Word '{}' is both in extra_words and excluded_words; it will be excluded.", word);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Applies `MODGATE_ENABLED` from the process environment, if set.
    pub fn apply_env_override(&mut self) {
        let raw = std::env::var(ENABLED_ENV_VAR).ok();
        self.apply_enabled_override(raw.as_deref());
    }

    /// Applies a raw toggle value (as read from the environment).
    pub fn apply_enabled_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else { return; };
        match parse_toggle(raw) {
            Some(enabled) => {
                debug!("{} override: enabled={}", ENABLED_ENV_VAR, enabled);
                self.enabled = Some(enabled);
            }
            None => warn!("Ignoring unrecognized {} value '{}'.", ENABLED_ENV_VAR, raw),
        }
    }
}

/// Parses a boolean-ish toggle value.
pub fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Merges a user configuration on top of the defaults.
///
/// Scalars set by the user win; word lists are unioned.
pub fn merge_config(
    default_config: ModerationConfig,
    user_config: Option<ModerationConfig>,
) -> ModerationConfig {
    let mut merged = default_config;

    let Some(user) = user_config else {
        debug!("merge_config called without user config.");
        return merged;
    };

    if let Some(enabled) = user.enabled {
        debug!("Overriding enabled with user value: {}", enabled);
        merged.enabled = Some(enabled);
    }
    if let Some(max_len) = user.limits.max_len {
        debug!("Overriding max_len with user value: {}", max_len);
        merged.limits.max_len = Some(max_len);
    }
    if let Some(placeholder) = user.dictionary.placeholder {
        merged.dictionary.placeholder = Some(placeholder);
    }

    union_into(&mut merged.dictionary.words, user.dictionary.words);
    union_into(&mut merged.dictionary.extra_words, user.dictionary.extra_words);
    union_into(&mut merged.dictionary.excluded_words, user.dictionary.excluded_words);

    debug!(
        "Merged config: {} base words, {} extra, {} excluded.",
        merged.dictionary.words.len(),
        merged.dictionary.extra_words.len(),
        merged.dictionary.excluded_words.len()
    );
    merged
}

fn union_into(target: &mut Vec<String>, extra: Vec<String>) {
    for word in extra {
        if !target.iter().any(|w| w.eq_ignore_ascii_case(&word)) {
            target.push(word);
        }
    }
}

/// Paths checked, in order, when no explicit config file is given.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("modgate.yaml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("modgate").join("config.yaml"));
    }
    paths
}

/// Loads defaults, merges the first existing candidate file (or `explicit`)
/// and applies the environment override.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ModerationConfig> {
    let defaults = ModerationConfig::load_default()?;

    let user = match explicit {
        Some(path) => Some(ModerationConfig::load_from_file(path)?),
        None => match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Some(ModerationConfig::load_from_file(&path)?),
            None => None,
        },
    };

    let mut config = merge_config(defaults, user);
    config.apply_env_override();
    Ok(config)
}
