//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Scenewright - emotion-aware instructional video scripts from a language model
#[derive(Parser, Debug)]
#[command(name = "scenewright")]
#[command(about = "Generate a narrated video script, one JSON string per scene", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Topic to explain; read from standard input when omitted
    #[arg(short, long)]
    pub topic: Option<String>,

    /// How the learner currently feels about the topic
    #[arg(short, long, default_value = "neutral")]
    pub emotion: String,

    /// Model identifier, overriding configuration and LLM_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Read client settings from this file instead of the default locations
    #[arg(long, conflicts_with = "env_only")]
    pub config: Option<PathBuf>,

    /// Ignore config files; use bundled defaults and the environment only
    #[arg(long)]
    pub env_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
