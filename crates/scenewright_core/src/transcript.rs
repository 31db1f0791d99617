//! Scene transcript output artifact.

use serde::{Deserialize, Serialize};

/// Ordered narration for a video, one string per scene.
///
/// Order is playback order. The prompt asks for at most five scenes but the
/// count is not enforced here.
///
/// # Examples
///
/// ```
/// use scenewright_core::SceneTranscript;
///
/// let transcript = SceneTranscript::from(vec![
///     "Look at the screen".to_string(),
///     "Now watch the arrow move".to_string(),
/// ]);
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript[0], "Look at the screen");
/// assert_eq!(serde_json::to_string(&transcript).unwrap(),
///     r#"["Look at the screen","Now watch the arrow move"]"#);
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Deref,
    derive_more::IntoIterator,
)]
#[serde(transparent)]
#[into_iterator(owned, ref)]
pub struct SceneTranscript(Vec<String>);

impl SceneTranscript {
    /// An empty transcript, the result of an exhausted request.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scenes in playback order.
    pub fn scenes(&self) -> &[String] {
        &self.0
    }

    /// Consume the transcript, returning its scenes.
    pub fn into_scenes(self) -> Vec<String> {
        self.0
    }
}
