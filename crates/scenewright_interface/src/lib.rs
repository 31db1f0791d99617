//! Trait definitions for the Scenewright transcript generator.
//!
//! This crate defines the two collaborators the transcript acquirer depends
//! on: the completion service ([`ScriptDriver`]) and the sink for raw
//! completions ([`CompletionLog`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionLog, ScriptDriver, TracingCompletionLog};
