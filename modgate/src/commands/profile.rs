// modgate/src/commands/profile.rs
//! `modgate profile`: moderate a profile update.

use std::io::Write;

use anyhow::Result;
use log::info;

use modgate_core::{validate_text, ModerationEngine, UserProfile};

use crate::cli::ProfileCommand;
use crate::ui::output;
use crate::ui::theme::Theme;

fn profile_from_command(cmd: &ProfileCommand) -> UserProfile {
    UserProfile {
        name: cmd.name.clone(),
        bio: cmd.bio.clone(),
        website: cmd.website.clone(),
    }
}

pub fn run_profile<W: Write>(
    engine: &ModerationEngine,
    cmd: &ProfileCommand,
    max_len: usize,
    out: &mut W,
    theme: &Theme,
) -> Result<bool> {
    let profile = profile_from_command(cmd);
    for (field, value) in [("name", &profile.name), ("bio", &profile.bio)] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            validate_text(field, value, max_len)?;
        }
    }

    let result = engine.moderate_profile(&profile);
    info!("Profile check finished: approved={}, issues={}", result.approved, result.issues.len());

    if cmd.json {
        output::print_json(out, &result)?;
    } else {
        output::print_profile(out, &result, theme)?;
    }
    Ok(result.approved)
}
