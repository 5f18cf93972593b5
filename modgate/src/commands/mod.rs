// modgate/src/commands/mod.rs
//! Subcommand runners. Each returns whether the input was approved; the
//! binary maps that onto the process exit code.

use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use modgate_core::ModerationEngine;

use crate::cli::WordEdits;

pub mod check;
pub mod fields;
pub mod profile;

/// Exit status for a rejected input.
pub const EXIT_REJECTED: u8 = 2;

pub fn exit_code(approved: bool) -> ExitCode {
    if approved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    }
}

/// Applies `--add-word` / `--remove-word` to the engine's dictionary.
/// Additions run first so a word named in both ends up removed.
pub fn apply_word_edits(engine: &ModerationEngine, edits: &WordEdits) -> Result<()> {
    if !edits.add_words.is_empty() {
        engine
            .add_custom_words(&edits.add_words)
            .context("Failed to add custom words")?;
        info!("Added {} custom word(s) to the dictionary.", edits.add_words.len());
    }
    if !edits.remove_words.is_empty() {
        engine
            .remove_words(&edits.remove_words)
            .context("Failed to remove words")?;
        info!("Removed {} word(s) from the dictionary.", edits.remove_words.len());
    }
    Ok(())
}
