//! OpenAI-compatible chat completion client for Scenewright.
//!
//! Any service exposing `POST {base_url}/chat/completions` in the OpenAI
//! shape works: OpenAI itself, Groq, Together, a local llama.cpp or
//! mistral.rs server, and so on.
//!
//! # Example
//!
//! ```rust,no_run
//! use scenewright_models::{ClientConfig, OpenAiCompatibleClient};
//! use scenewright_interface::ScriptDriver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load()?;
//! let client = OpenAiCompatibleClient::new(config)?;
//! assert_eq!(client.provider_name(), "openai-compatible");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod request;
mod response;

pub use client::OpenAiCompatibleClient;
pub use config::{
    ClientConfig, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_OPENAI_API_KEY,
};
pub use convert::{from_chat_response, to_chat_request};
pub use request::{ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
