use crate::{ChatCompletionRequest, ChatCompletionResponse, ClientConfig, convert};
use async_trait::async_trait;
use scenewright_core::{GenerateRequest, GenerateResponse};
use scenewright_error::{HttpError, ScenewrightResult, ServerError, ServerErrorKind};
use scenewright_interface::ScriptDriver;
use std::time::Duration;
use tracing::instrument;

/// Client for OpenAI-compatible chat-completions services
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: ClientConfig) -> ScenewrightResult<Self> {
        tracing::debug!("Creating chat completions client");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model, temperature = ?request.temperature))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ServerError> {
        let url = self.config.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let mut req = self.client.post(&url).json(request);

        if let Some(api_key) = &self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ServerError::new(ServerErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Server returned error");
            return Err(ServerError::new(ServerErrorKind::Api {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            }));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ServerError::new(ServerErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl ScriptDriver for OpenAiCompatibleClient {
    #[instrument(skip(self, req), fields(provider = "openai-compatible", model = %self.config.model))]
    async fn generate(&self, req: &GenerateRequest) -> ScenewrightResult<GenerateResponse> {
        let chat_request = convert::to_chat_request(req, &self.config.model)?;
        let response = self.chat_completion(&chat_request).await?;
        convert::from_chat_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
