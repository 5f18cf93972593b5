// modgate/src/main.rs
//! Modgate entry point.
//!
//! Loads `.env`, resolves the configuration, builds the moderation engine and
//! dispatches to the chosen subcommand. Exit code 0 means approved, 2 means
//! rejected, 1 means the run itself failed.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use modgate::cli::{Cli, Commands};
use modgate::commands::{self, check, fields, profile};
use modgate::logger;
use modgate::ui::theme::Theme;
use modgate_core::{resolve_config, ModerationEngine};

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    let mut config = resolve_config(args.config.as_deref()).context("Failed to load configuration")?;
    if args.disabled {
        config.enabled = Some(false);
    }
    debug!("Moderation enabled: {}", config.is_enabled());

    let engine = ModerationEngine::from_config(&config).context("Failed to build moderation engine")?;
    let max_len = config.max_len();
    let theme = Theme::for_stdout();
    let mut stdout = io::stdout().lock();

    let approved = match &args.command {
        Commands::Check(cmd) => {
            commands::apply_word_edits(&engine, &cmd.words)?;
            let input = check::read_input(cmd.input_file.as_deref())?;
            let opts = check::CheckOptions::from_command(cmd, input, max_len);
            check::run_check(&engine, &opts, &mut stdout, &theme)?
        }
        Commands::Profile(cmd) => profile::run_profile(&engine, cmd, max_len, &mut stdout, &theme)?,
        Commands::Fields(cmd) => {
            commands::apply_word_edits(&engine, &cmd.words)?;
            let mut values = cmd.fields.clone();
            fields::run_fields(&engine, &mut values, cmd.auto_clean, cmd.json, max_len, &mut stdout, &theme)?
        }
    };

    info!("Exiting with approved={}", approved);
    Ok(commands::exit_code(approved))
}
