// modgate/src/commands/check.rs
//! `modgate check`: moderate a single text.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use modgate_core::{validate_text, ModerationEngine, ModerationOptions};

use crate::cli::CheckCommand;
use crate::ui::output;
use crate::ui::theme::Theme;

/// Options for a single `check` run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub input: String,
    pub moderation: ModerationOptions,
    pub max_len: usize,
    pub json: bool,
}

impl CheckOptions {
    pub fn from_command(cmd: &CheckCommand, input: String, max_len: usize) -> Self {
        let moderation = ModerationOptions {
            check_profanity: !cmd.no_profanity,
            check_spam: !cmd.no_spam,
            check_toxicity: !cmd.no_toxicity,
            check_personal_info: !cmd.no_pii,
            auto_clean: cmd.auto_clean,
        };
        Self { input, moderation, max_len, json: cmd.json }
    }
}

/// Reads the input file, or all of stdin. One trailing line ending is dropped.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let mut content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

/// Validates and moderates the input, printing the decision to `out`.
pub fn run_check<W: Write>(
    engine: &ModerationEngine,
    opts: &CheckOptions,
    out: &mut W,
    theme: &Theme,
) -> Result<bool> {
    validate_text("content", &opts.input, opts.max_len)?;
    debug!("Checking {} characters of input.", opts.input.chars().count());

    let result = engine.moderate_text(&opts.input, &opts.moderation);
    info!("Check finished: approved={}, flags={:?}", result.approved, result.flags);

    if opts.json {
        output::print_json(out, &result)?;
    } else {
        output::print_decision(out, &result, theme)?;
    }
    Ok(result.approved)
}
