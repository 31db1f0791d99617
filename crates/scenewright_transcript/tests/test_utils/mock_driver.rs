//! Scripted completion driver for testing.

use async_trait::async_trait;
use scenewright_core::{GenerateRequest, GenerateResponse, Output};
use scenewright_error::{ScenewrightError, ScenewrightResult, ServerError, ServerErrorKind};
use scenewright_interface::{CompletionLog, ScriptDriver};
use std::sync::{Arc, Mutex};

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this completion text
    Text(String),
    /// Return a response with no outputs
    Empty,
    /// Fail the call with this service error
    Error(ServerErrorKind),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Driver that replays a fixed sequence of responses and records every request.
pub struct MockDriver {
    responses: Vec<MockResponse>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Replay `responses` in order; calls past the end fail.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Return the same completion text for every call.
    pub fn repeating(text: &str, times: usize) -> Self {
        Self::new_sequence(vec![MockResponse::text(text); times])
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Temperatures sent, in order.
    pub fn temperatures(&self) -> Vec<f32> {
        self.requests()
            .iter()
            .map(|r| r.temperature.expect("temperature should be set"))
            .collect()
    }
}

#[async_trait]
impl ScriptDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScenewrightResult<GenerateResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        // Yield once so the acquirer really suspends on the driver.
        tokio::task::yield_now().await;

        match self.responses.get(call) {
            Some(MockResponse::Text(text)) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            Some(MockResponse::Empty) => Ok(GenerateResponse { outputs: vec![] }),
            Some(MockResponse::Error(kind)) => {
                Err(ScenewrightError::from(ServerError::new(kind.clone())))
            }
            None => Err(ScenewrightError::from(ServerError::new(ServerErrorKind::Http(
                format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    call + 1,
                    self.responses.len()
                ),
            )))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Completion log that keeps every record.
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<(usize, String)>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<(usize, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl CompletionLog for RecordingLog {
    fn record(&self, attempt: usize, completion: &str) {
        self.records
            .lock()
            .unwrap()
            .push((attempt, completion.to_string()));
    }
}
