//! Conversion between Scenewright and chat-completions API types

use scenewright_core::{GenerateRequest, GenerateResponse, Output};
use scenewright_error::{BackendError, ScenewrightResult, ServerError, ServerErrorKind};

use crate::{ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage};

/// Convert a GenerateRequest to a ChatCompletionRequest.
///
/// The request's own model wins over `default_model`.
#[tracing::instrument(skip(request), fields(messages = request.messages.len()))]
pub fn to_chat_request(
    request: &GenerateRequest,
    default_model: &str,
) -> Result<ChatCompletionRequest, ServerError> {
    let model = request
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    ChatCompletionRequestBuilder::default()
        .model(model)
        .messages(
            request
                .messages
                .iter()
                .map(ChatMessage::from)
                .collect::<Vec<_>>(),
        )
        .max_tokens(request.max_tokens)
        .temperature(request.temperature)
        .build()
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Configuration(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Convert a ChatCompletionResponse to a GenerateResponse.
///
/// Choices without content are skipped; a response with no usable choice is
/// a backend error.
#[tracing::instrument(skip(response), fields(choices = response.choices.len()))]
pub fn from_chat_response(response: ChatCompletionResponse) -> ScenewrightResult<GenerateResponse> {
    let outputs: Vec<Output> = response
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .map(Output::Text)
        .collect();

    if outputs.is_empty() {
        tracing::error!("No text content in response choices");
        return Err(BackendError::new("No text content in response choices").into());
    }

    Ok(GenerateResponse { outputs })
}
