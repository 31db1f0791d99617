//! Top-level error wrapper types.

use crate::{
    BackendError, ConfigError, FormatError, HttpError, JsonError, ServerError, TranscriptError,
};

/// Every error condition a Scenewright operation can surface.
///
/// # Examples
///
/// ```
/// use scenewright_error::{ScenewrightError, HttpError};
///
/// let err: ScenewrightError = HttpError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenewrightErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Completion service error
    #[from(ServerError)]
    Server(ServerError),
    /// Completion text could not be interpreted as scenes
    #[from(FormatError)]
    Format(FormatError),
    /// Transcript request error
    #[from(TranscriptError)]
    Transcript(TranscriptError),
}

/// Scenewright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenewright_error::{ConfigError, ScenewrightErrorKind, ScenewrightResult};
///
/// fn might_fail() -> ScenewrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScenewrightErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenewright Error: {}", _0)]
pub struct ScenewrightError(Box<ScenewrightErrorKind>);

impl ScenewrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenewrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenewrightErrorKind {
        &self.0
    }

    /// Whether this error came from the completion service rather than from
    /// the content of a completion.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self.kind(),
            ScenewrightErrorKind::Http(_)
                | ScenewrightErrorKind::Server(_)
                | ScenewrightErrorKind::Backend(_)
        )
    }
}

// Generic From implementation for any type that converts to ScenewrightErrorKind
impl<T> From<T> for ScenewrightError
where
    T: Into<ScenewrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scenewright operations.
pub type ScenewrightResult<T> = std::result::Result<T, ScenewrightError>;
