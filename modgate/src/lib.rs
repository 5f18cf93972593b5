// modgate/src/lib.rs
//! # Modgate CLI
//!
//! Terminal front end for the `modgate-core` moderation engine. Reads text
//! from files, stdin or arguments, runs it through the engine and prints the
//! decision as coloured text or JSON.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
