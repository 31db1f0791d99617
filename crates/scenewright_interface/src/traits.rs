//! Trait definitions for completion backends and completion logging.

use async_trait::async_trait;
use scenewright_core::{GenerateRequest, GenerateResponse};
use scenewright_error::ScenewrightResult;

/// Core trait that all completion backends must implement.
///
/// One call sends the whole conversation and returns one completion.
/// Transport, authentication and quota failures are reported as errors and
/// are never retried by callers in this workspace.
#[async_trait]
pub trait ScriptDriver: Send + Sync {
    /// Generate a completion for the request.
    async fn generate(&self, req: &GenerateRequest) -> ScenewrightResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "groq", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier sent with each request.
    fn model_name(&self) -> &str;
}

/// Receives every raw completion as it arrives.
///
/// Recording is fire-and-forget: implementations must not block and cannot
/// fail the request.
pub trait CompletionLog: Send + Sync {
    /// Record the cleaned completion text returned for `attempt` (0-based).
    fn record(&self, attempt: usize, completion: &str);
}

/// Default [`CompletionLog`] that emits each completion as an info event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TracingCompletionLog;

impl CompletionLog for TracingCompletionLog {
    fn record(&self, attempt: usize, completion: &str) {
        tracing::info!(attempt, completion, "Generated transcript");
    }
}
