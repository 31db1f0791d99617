//! Interpretation of raw completions as scene transcripts.
//!
//! Models are asked for a bare JSON array of strings but often wrap it in
//! prose or code fences. Parsing therefore runs in tiers:
//! 1. [`StrictParser`]: the whole text must be an array of strings.
//! 2. [`SalvageParser`]: the span from the first `[` to the last `]` must be.
//!
//! [`Interpreter`] tries each tier in order and reports which one succeeded.

use scenewright_core::SceneTranscript;
use scenewright_error::FormatError;

/// Which parser produced a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ParseTier {
    /// Whole text parsed as an array of strings
    Strict,
    /// Outermost bracket span parsed as an array of strings
    Salvage,
}

/// One way of reading a completion as scenes.
pub trait SceneParser: Send + Sync {
    /// Tier reported when this parser succeeds.
    fn tier(&self) -> ParseTier;

    /// Parse `text` into a transcript.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] describing why the text was rejected.
    fn parse(&self, text: &str) -> Result<SceneTranscript, FormatError>;
}

/// Accepts only text that is, top to bottom, a JSON array of strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrictParser;

impl SceneParser for StrictParser {
    fn tier(&self) -> ParseTier {
        ParseTier::Strict
    }

    fn parse(&self, text: &str) -> Result<SceneTranscript, FormatError> {
        parse_string_array(text.trim())
    }
}

/// Recovers an array surrounded by prose by parsing the first-`[` to
/// last-`]` span.
///
/// # Examples
///
/// ```
/// use scenewright_transcript::{SalvageParser, SceneParser};
///
/// let text = r#"Sure! Here you go: ["scene one", "scene two"] Hope that helps!"#;
/// let transcript = SalvageParser.parse(text).unwrap();
/// assert_eq!(transcript.scenes(), ["scene one", "scene two"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SalvageParser;

impl SceneParser for SalvageParser {
    fn tier(&self) -> ParseTier {
        ParseTier::Salvage
    }

    fn parse(&self, text: &str) -> Result<SceneTranscript, FormatError> {
        let span = outermost_bracket_span(text)
            .ok_or_else(|| FormatError::new("no '[' ... ']' span in completion"))?;
        parse_string_array(span)
    }
}

/// Text from the first `[` through the last `]`, inclusive.
///
/// Returns `None` when either bracket is missing or the last `]` comes
/// before the first `[`.
pub fn outermost_bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

fn parse_string_array(text: &str) -> Result<SceneTranscript, FormatError> {
    serde_json::from_str::<Vec<String>>(text)
        .map(SceneTranscript::from)
        .map_err(|e| FormatError::new(e.to_string()))
}

/// Strip surrounding whitespace and code fences from a raw completion.
///
/// Removes a leading fence with an optional language tag (```` ```python ````,
/// ```` ```json ````) and a trailing fence. Fences inside the text are left
/// alone.
///
/// # Examples
///
/// ```
/// use scenewright_transcript::clean_completion;
///
/// assert_eq!(clean_completion("```json\n[\"a\"]\n```\n"), "[\"a\"]");
/// assert_eq!(clean_completion("  [\"a\"]  "), "[\"a\"]");
/// ```
pub fn clean_completion(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        text = &rest[tag_len..];
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// A successfully parsed completion.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Interpretation {
    /// Scenes in playback order
    transcript: SceneTranscript,
    /// Parser that accepted the text
    tier: ParseTier,
}

impl Interpretation {
    /// Consume the interpretation, returning the transcript.
    pub fn into_transcript(self) -> SceneTranscript {
        self.transcript
    }
}

/// Ordered fallback over [`SceneParser`] tiers.
pub struct Interpreter {
    tiers: Vec<Box<dyn SceneParser>>,
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field(
                "tiers",
                &self.tiers.iter().map(|t| t.tier()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(vec![Box::new(StrictParser), Box::new(SalvageParser)])
    }
}

impl Interpreter {
    /// Interpreter trying `tiers` in the given order.
    pub fn new(tiers: Vec<Box<dyn SceneParser>>) -> Self {
        Self { tiers }
    }

    /// Tiers in the order they are tried.
    pub fn tiers(&self) -> Vec<ParseTier> {
        self.tiers.iter().map(|t| t.tier()).collect()
    }

    /// Parse `text` with the first tier that accepts it.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] listing every tier's rejection when none
    /// accepts the text.
    pub fn interpret(&self, text: &str) -> Result<Interpretation, FormatError> {
        let mut rejections = Vec::with_capacity(self.tiers.len());

        for parser in &self.tiers {
            match parser.parse(text) {
                Ok(transcript) => {
                    tracing::debug!(tier = %parser.tier(), scenes = transcript.len(), "Parsed completion");
                    return Ok(Interpretation {
                        transcript,
                        tier: parser.tier(),
                    });
                }
                Err(e) => {
                    tracing::debug!(tier = %parser.tier(), error = %e.message, "Parser rejected completion");
                    rejections.push(format!("{} parse failed: {}", parser.tier(), e.message));
                }
            }
        }

        Err(FormatError::new(rejections.join("; ")))
    }
}
