//! Error types for the Scenewright library.
//!
//! # Error Hierarchy
//!
//! Errors come in two shapes:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Message-only errors ([`HttpError`], [`ConfigError`], ...) skip the kind
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`ScenewrightError`] so callers can use `?` freely.
//!
//! # Examples
//!
//! ```
//! use scenewright_error::{HttpError, ScenewrightResult};
//!
//! fn fetch_completion() -> ScenewrightResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_completion().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod message;
mod server;
mod transcript;

pub use error::{ScenewrightError, ScenewrightErrorKind, ScenewrightResult};
pub use message::{BackendError, ConfigError, FormatError, HttpError, JsonError};
pub use server::{ServerError, ServerErrorKind};
pub use transcript::{TranscriptError, TranscriptErrorKind};
