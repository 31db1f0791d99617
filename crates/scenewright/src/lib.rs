//! Scenewright: short instructional video scripts from a language model.
//!
//! Given a topic and how the learner currently feels about it, Scenewright
//! asks a chat-completion model for a narrated script split into scenes. The
//! model is asked for a bare JSON array of strings; completions that wrap the
//! array in prose are salvaged, and completions that cannot be read at all
//! are answered with a correction and retried at a higher temperature.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scenewright::{ClientConfig, OpenAiCompatibleClient, TranscriptAcquirer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiCompatibleClient::new(ClientConfig::load()?)?;
//!     let acquirer = TranscriptAcquirer::new(Arc::new(client));
//!
//!     let scenes = acquirer.generate("How do vaccines work?", "worried").await?;
//!     println!("{}", serde_json::to_string_pretty(&scenes)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `scenewright_error` - Error types
//! - `scenewright_core` - Conversation and transcript types
//! - `scenewright_interface` - `ScriptDriver` and `CompletionLog` traits
//! - `scenewright_models` - OpenAI-compatible client and its configuration
//! - `scenewright_transcript` - Prompting, parsing and the retry loop
//!
//! This crate re-exports all of them and adds logging setup plus the
//! helpers behind the `scenewright` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use scenewright_core::*;
pub use scenewright_error::*;
pub use scenewright_interface::*;
pub use scenewright_models::*;
pub use scenewright_transcript::*;

mod logging;
mod session;

pub use logging::{LoggingConfig, init_logging};
pub use session::{TOPIC_PROMPT, produce_transcript, read_topic, render_transcript};
