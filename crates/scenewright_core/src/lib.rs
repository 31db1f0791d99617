//! Core data types for the Scenewright transcript generator.
//!
//! This crate provides the conversation and transcript types shared by the
//! driver interface, the model clients, and the transcript acquirer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conversation;
mod message;
mod output;
mod request;
mod role;
mod transcript;

pub use conversation::Conversation;
pub use message::Message;
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
};
pub use role::Role;
pub use transcript::SceneTranscript;
