//! Command-line interface module.
//!
//! This module provides the CLI structure and command handler for the scenewright binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_transcript;
