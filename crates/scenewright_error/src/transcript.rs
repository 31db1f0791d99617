//! Transcript request error types.

/// Specific error conditions for transcript requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TranscriptErrorKind {
    /// Topic is empty or whitespace
    #[display("Topic cannot be empty")]
    EmptyTopic,
    /// Driver response carried no text to interpret
    #[display("Completion for attempt {} contained no text", _0)]
    MissingText(usize),
    /// No completion parsed within the attempt budget
    #[display("No parseable transcript after {} attempts", _0)]
    Exhausted(usize),
}

/// Error type for transcript requests.
///
/// # Examples
///
/// ```
/// use scenewright_error::{TranscriptError, TranscriptErrorKind};
///
/// let err = TranscriptError::new(TranscriptErrorKind::EmptyTopic);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transcript Error: {} at line {} in {}", kind, line, file)]
pub struct TranscriptError {
    /// The specific error condition
    pub kind: TranscriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TranscriptError {
    /// Create a new TranscriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TranscriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
