// modgate-core/src/profile_moderation.rs
//! Moderation of user profile updates (name, bio, website).
//!
//! Every present field is checked and every failing field is reported; there
//! is no short-circuit. Names skip the spam layer because short names trip
//! the capitalization and repetition rules too easily.

use serde::{Deserialize, Serialize};

use crate::engine::ModerationEngine;
use crate::moderation_result::{ModerationOptions, ModerationResult};
use crate::validators::is_valid_url;

pub const INVALID_URL_REASON: &str = "Invalid URL format";

/// The moderated subset of a profile update. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileModerationResult {
    pub approved: bool,
    /// One `"<field>: <reason>"` entry per failing field, in name, bio, website order.
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileModerator<'a> {
    engine: &'a ModerationEngine,
}

impl<'a> ProfileModerator<'a> {
    pub fn new(engine: &'a ModerationEngine) -> Self {
        Self { engine }
    }

    pub fn moderate_profile(&self, profile: &UserProfile) -> ProfileModerationResult {
        let mut issues = Vec::new();

        if let Some(name) = present(&profile.name) {
            let options = ModerationOptions { check_spam: false, ..ModerationOptions::default() };
            let result = self.engine.moderate_text(name, &options);
            push_issue(&mut issues, "name", &result);
        }

        if let Some(bio) = present(&profile.bio) {
            let result = self.engine.moderate_text(bio, &ModerationOptions::default());
            push_issue(&mut issues, "bio", &result);
        }

        if let Some(website) = present(&profile.website) {
            if !is_valid_url(website) {
                issues.push(format!("website: {}", INVALID_URL_REASON));
            }
        }

        ProfileModerationResult {
            approved: issues.is_empty(),
            issues,
        }
    }
}

impl ModerationEngine {
    /// Moderates every present profile field; see [`ProfileModerator`].
    pub fn moderate_profile(&self, profile: &UserProfile) -> ProfileModerationResult {
        ProfileModerator::new(self).moderate_profile(profile)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

fn push_issue(issues: &mut Vec<String>, field: &str, result: &ModerationResult) {
    if result.approved {
        return;
    }
    let reason = result.reason.as_deref().unwrap_or("Content rejected");
    issues.push(format!("{}: {}", field, reason));
}
