// modgate/src/logger.rs
//! Logger initialization for the CLI.
//!
//! Log records always go to stderr so that stdout only carries decisions.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. `RUST_LOG` is honored unless `level_override` is
/// given. Calling this more than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}

/// Picks the level override implied by the `--quiet` / `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
