//! Scene transcript acquisition for Scenewright.
//!
//! Turns a topic and the learner's emotional state into a short narrated
//! video script:
//!
//! - [`assemble`] builds the system and user turns
//! - [`TranscriptAcquirer`] sends the conversation to a [`ScriptDriver`] with a
//!   rising temperature, up to [`MAX_ATTEMPTS`] times
//! - [`Interpreter`] reads each completion strictly, then by salvaging the
//!   outermost bracket span, and on failure the acquirer asks the model to
//!   correct its format
//!
//! [`ScriptDriver`]: scenewright_interface::ScriptDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod acquirer;
mod parse;
mod prompt;

pub use acquirer::{
    Acquisition, AcquisitionOutcome, MAX_ATTEMPTS, TranscriptAcquirer, temperature,
};
pub use parse::{
    Interpretation, Interpreter, ParseTier, SalvageParser, SceneParser, StrictParser,
    clean_completion, outermost_bracket_span,
};
pub use prompt::{CORRECTIVE_INSTRUCTION, MAX_SCENES, Prompt, assemble, system_prompt};
