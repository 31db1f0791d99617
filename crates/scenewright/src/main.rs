//! Scenewright CLI binary.
//!
//! Reads a topic (from `--topic` or stdin) and an emotion, asks the
//! configured model for a scene-by-scene script and prints it as a JSON array.

use clap::Parser;
use scenewright::{LoggingConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_transcript};

    // Missing .env is fine; settings may come from the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::new("debug").with_forced_level(true)
    } else {
        LoggingConfig::default()
    };
    init_logging(logging.with_json_logs(cli.json_logs))?;

    if let Err(e) = run_transcript(&cli).await {
        tracing::error!(error = %e, "Transcript generation failed");
        return Err(e);
    }

    Ok(())
}
