// modgate/src/cli.rs
//! This file defines the command-line interface (CLI) for the modgate
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use modgate_core::TextField;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "modgate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Moderate user text for profanity, spam, toxicity and personal information",
    long_about = "modgate runs free-form text (posts, comments, profile fields) through a deterministic, multi-layer moderation engine and prints an approve/reject decision with its supporting evidence. Exit code 0 means approved, 2 means rejected.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file merged over the defaults.
    #[arg(long = "config", env = "MODGATE_CONFIG", value_name = "FILE", global = true, help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Disable moderation entirely (every input is approved).
    #[arg(long, global = true, help = "Disable moderation; every input is approved.")]
    pub disabled: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Moderates a single text read from a file or stdin.
    #[command(about = "Moderate a single text read from a file or stdin.")]
    Check(CheckCommand),

    /// Moderates profile fields; every failing field is reported.
    #[command(about = "Moderate profile fields (name, bio, website).")]
    Profile(ProfileCommand),

    /// Moderates ordered fields, stopping at the first rejected one.
    #[command(about = "Moderate ordered NAME=VALUE fields, stopping at the first rejection.")]
    Fields(FieldsCommand),
}

/// Dictionary mutations applied before moderating.
#[derive(Parser, Debug, Default, Clone)]
pub struct WordEdits {
    /// Add a word to the dictionary for this run (repeatable).
    #[arg(long = "add-word", value_name = "WORD")]
    pub add_words: Vec<String>,

    /// Remove a word from the dictionary for this run (repeatable).
    #[arg(long = "remove-word", value_name = "WORD")]
    pub remove_words: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    #[arg(long = "no-profanity", help = "Skip the dictionary check.")]
    pub no_profanity: bool,

    #[arg(long = "no-spam", help = "Skip the spam heuristics.")]
    pub no_spam: bool,

    #[arg(long = "no-toxicity", help = "Skip the toxicity heuristics.")]
    pub no_toxicity: bool,

    #[arg(long = "no-pii", help = "Skip personal information detection.")]
    pub no_pii: bool,

    /// Mask profanity and approve the cleaned text.
    #[arg(long = "auto-clean", help = "Mask profanity and approve the cleaned text.")]
    pub auto_clean: bool,

    #[arg(long, help = "Print the decision as JSON.")]
    pub json: bool,

    #[command(flatten)]
    pub words: WordEdits,
}

#[derive(Parser, Debug)]
pub struct ProfileCommand {
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub bio: Option<String>,

    #[arg(long, value_name = "URL")]
    pub website: Option<String>,

    #[arg(long, help = "Print the decision as JSON.")]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct FieldsCommand {
    /// A field to moderate, in order (repeatable).
    #[arg(long = "field", short = 'f', value_name = "NAME=VALUE", value_parser = parse_field, required = true)]
    pub fields: Vec<TextField>,

    #[arg(long = "auto-clean", help = "Mask profanity and continue with the cleaned value.")]
    pub auto_clean: bool,

    #[arg(long, help = "Print the decision as JSON.")]
    pub json: bool,

    #[command(flatten)]
    pub words: WordEdits,
}

/// Parses `NAME=VALUE`; the value may itself contain `=`.
pub fn parse_field(raw: &str) -> Result<TextField, String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok(TextField::new(name.trim(), value)),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}
