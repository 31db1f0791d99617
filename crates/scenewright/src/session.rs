//! One topic in, one script out: the steps behind the `scenewright` binary.

use scenewright_core::SceneTranscript;
use scenewright_error::{JsonError, ScenewrightResult, TranscriptError, TranscriptErrorKind};
use scenewright_transcript::{AcquisitionOutcome, TranscriptAcquirer};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

/// Prompt shown when the topic is read interactively.
pub const TOPIC_PROMPT: &str = "Enter user topic: ";

/// Prompt on `out` and read one line of topic from `input`.
///
/// The trailing line ending is removed; other whitespace is kept.
///
/// # Examples
///
/// ```
/// use scenewright::{TOPIC_PROMPT, read_topic};
///
/// let mut prompt = Vec::new();
/// let topic = read_topic(&b"Fourier series\n"[..], &mut prompt).unwrap();
///
/// assert_eq!(topic, "Fourier series");
/// assert_eq!(prompt, TOPIC_PROMPT.as_bytes());
/// ```
///
/// # Errors
///
/// Propagates I/O errors from either stream.
pub fn read_topic(mut input: impl BufRead, mut out: impl Write) -> io::Result<String> {
    out.write_all(TOPIC_PROMPT.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Acquire a transcript and treat an exhausted attempt budget as an error.
///
/// # Errors
///
/// Returns [`TranscriptErrorKind::Exhausted`] when no completion parsed, and
/// any error from [`TranscriptAcquirer::acquire`].
#[instrument(skip(acquirer, topic))]
pub async fn produce_transcript(
    acquirer: &TranscriptAcquirer,
    topic: &str,
    emotion: &str,
) -> ScenewrightResult<SceneTranscript> {
    let acquisition = acquirer.acquire(topic, emotion).await?;

    if let AcquisitionOutcome::Exhausted { attempts } = *acquisition.outcome() {
        return Err(TranscriptError::new(TranscriptErrorKind::Exhausted(attempts)).into());
    }

    let transcript = acquisition.into_transcript();
    info!(scenes = ?transcript.scenes(), "Final transcript");
    Ok(transcript)
}

/// Serialize a transcript as a JSON array of strings.
///
/// # Errors
///
/// Returns a [`JsonError`] if serialization fails.
pub fn render_transcript(transcript: &SceneTranscript) -> ScenewrightResult<String> {
    let json = serde_json::to_string_pretty(transcript)
        .map_err(|e| JsonError::new(format!("Failed to serialize transcript: {}", e)))?;
    Ok(json)
}
