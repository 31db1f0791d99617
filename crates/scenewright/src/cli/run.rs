//! Transcript generation command handler.

use crate::cli::Cli;
use scenewright::{
    ClientConfig, OpenAiCompatibleClient, ScenewrightResult, TranscriptAcquirer,
    produce_transcript, read_topic, render_transcript,
};
use std::io;
use std::sync::Arc;

/// Generate a transcript for the topic named on the command line or typed
/// on stdin, and print it to stdout as JSON.
pub async fn run_transcript(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let topic = match &cli.topic {
        Some(topic) => topic.clone(),
        None => read_topic(io::stdin().lock(), io::stdout())?,
    };

    let acquirer = build_acquirer(cli)?;
    tracing::debug!(?acquirer, "Acquirer ready");

    let transcript = produce_transcript(&acquirer, &topic, &cli.emotion).await?;
    println!("{}", render_transcript(&transcript)?);

    Ok(())
}

fn build_acquirer(cli: &Cli) -> ScenewrightResult<TranscriptAcquirer> {
    let config = load_config(cli)?;
    tracing::info!(base_url = %config.base_url, model = %config.model, "Loaded client configuration");

    let acquirer = TranscriptAcquirer::new(Arc::new(OpenAiCompatibleClient::new(config)?));
    Ok(match &cli.model {
        Some(model) => acquirer.with_model(model.as_str()),
        None => acquirer,
    })
}

fn load_config(cli: &Cli) -> ScenewrightResult<ClientConfig> {
    match &cli.config {
        Some(path) => {
            Ok(ClientConfig::from_file(path)?.with_overrides(|key| std::env::var(key).ok()))
        }
        None if cli.env_only => ClientConfig::from_env(),
        None => ClientConfig::load(),
    }
}
