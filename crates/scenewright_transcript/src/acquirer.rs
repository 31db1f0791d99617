//! Transcript acquisition: prompt, invoke, interpret, retry.

use crate::{CORRECTIVE_INSTRUCTION, Interpreter, ParseTier, assemble, clean_completion};
use scenewright_core::{Conversation, GenerateRequest, SceneTranscript};
use scenewright_error::{
    BackendError, ScenewrightResult, TranscriptError, TranscriptErrorKind,
};
use scenewright_interface::{CompletionLog, ScriptDriver, TracingCompletionLog};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Maximum model invocations per transcript request.
pub const MAX_ATTEMPTS: usize = 5;

/// Sampling temperature for a 0-based attempt.
///
/// `round(attempt / MAX_ATTEMPTS, 1)`: deterministic first, then
/// increasingly exploratory on each retry.
///
/// # Examples
///
/// ```
/// use scenewright_transcript::temperature;
///
/// let ramp: Vec<f32> = (0..5).map(temperature).collect();
/// assert_eq!(ramp, vec![0.0, 0.2, 0.4, 0.6, 0.8]);
/// ```
pub fn temperature(attempt: usize) -> f32 {
    let tenths = (attempt as f64 * 10.0 / MAX_ATTEMPTS as f64).round_ties_even();
    tenths as f32 / 10.0
}

/// How a transcript request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionOutcome {
    /// A completion parsed on `attempt` (0-based) using `tier`.
    Succeeded {
        /// Attempt whose completion parsed
        attempt: usize,
        /// Parser that accepted it
        tier: ParseTier,
    },
    /// Every attempt produced unparseable text.
    Exhausted {
        /// Number of model invocations made
        attempts: usize,
    },
}

impl AcquisitionOutcome {
    /// Number of model invocations made.
    pub fn invocations(&self) -> usize {
        match self {
            AcquisitionOutcome::Succeeded { attempt, .. } => attempt + 1,
            AcquisitionOutcome::Exhausted { attempts } => *attempts,
        }
    }

    /// Whether a transcript was obtained.
    pub fn is_success(&self) -> bool {
        matches!(self, AcquisitionOutcome::Succeeded { .. })
    }
}

/// Result of a transcript request together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Acquisition {
    /// Parsed scenes; empty when exhausted
    transcript: SceneTranscript,
    /// How the request ended
    outcome: AcquisitionOutcome,
    /// Every turn exchanged with the model
    conversation: Conversation,
}

impl Acquisition {
    /// Consume the acquisition, returning the transcript.
    pub fn into_transcript(self) -> SceneTranscript {
        self.transcript
    }
}

/// Obtains a scene transcript from a completion service.
///
/// Each request owns its conversation and attempt counter, so one acquirer
/// can serve concurrent requests.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use scenewright_models::{ClientConfig, OpenAiCompatibleClient};
/// use scenewright_transcript::TranscriptAcquirer;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenAiCompatibleClient::new(ClientConfig::load()?)?;
/// let acquirer = TranscriptAcquirer::new(Arc::new(client));
///
/// let scenes = acquirer.generate("What is a derivative?", "frustrated").await?;
/// for scene in scenes.iter() {
///     println!("{scene}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct TranscriptAcquirer {
    driver: Arc<dyn ScriptDriver>,
    log: Arc<dyn CompletionLog>,
    interpreter: Interpreter,
    model: Option<String>,
}

impl std::fmt::Debug for TranscriptAcquirer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptAcquirer")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.model_name())
            .field("interpreter", &self.interpreter)
            .finish()
    }
}

impl TranscriptAcquirer {
    /// Acquirer using `driver`, logging completions through `tracing`.
    pub fn new(driver: Arc<dyn ScriptDriver>) -> Self {
        Self {
            driver,
            log: Arc::new(TracingCompletionLog),
            interpreter: Interpreter::default(),
            model: None,
        }
    }

    /// Send completions to `log` instead of `tracing`.
    pub fn with_log(mut self, log: Arc<dyn CompletionLog>) -> Self {
        self.log = log;
        self
    }

    /// Replace the parsing tiers.
    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Request `model` instead of the driver's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Model identifier sent with each request.
    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.driver.model_name())
    }

    /// Generate the scene transcript for `topic`, tailored to `emotion`.
    ///
    /// Returns an empty transcript when every attempt produced unparseable
    /// text; callers must treat that as failure.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty topic, and propagates any completion
    /// service error unchanged after the failing call.
    pub async fn generate(&self, topic: &str, emotion: &str) -> ScenewrightResult<SceneTranscript> {
        Ok(self.acquire(topic, emotion).await?.into_transcript())
    }

    /// Like [`generate`](Self::generate), also reporting the outcome and the
    /// full conversation.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    #[instrument(
        skip(self, topic, emotion),
        fields(provider = self.driver.provider_name(), model = %self.model_name())
    )]
    pub async fn acquire(&self, topic: &str, emotion: &str) -> ScenewrightResult<Acquisition> {
        if topic.trim().is_empty() {
            return Err(TranscriptError::new(TranscriptErrorKind::EmptyTopic).into());
        }

        let mut conversation = assemble(topic, emotion).into_conversation();

        for attempt in 0..MAX_ATTEMPTS {
            let completion = self.invoke(&conversation, attempt).await?;
            conversation.push_assistant(completion.as_str());

            match self.interpreter.interpret(&completion) {
                Ok(interpretation) => {
                    let tier = *interpretation.tier();
                    let transcript = interpretation.into_transcript();
                    info!(attempt, %tier, scenes = transcript.len(), "Transcript acquired");
                    return Ok(Acquisition {
                        transcript,
                        outcome: AcquisitionOutcome::Succeeded { attempt, tier },
                        conversation,
                    });
                }
                Err(e) => {
                    warn!(attempt, error = %e.message, "Completion did not follow the scene format");
                    if attempt + 1 < MAX_ATTEMPTS {
                        conversation.push_user(CORRECTIVE_INSTRUCTION);
                    }
                }
            }
        }

        warn!(attempts = MAX_ATTEMPTS, "No parseable transcript after all attempts");
        Ok(Acquisition {
            transcript: SceneTranscript::empty(),
            outcome: AcquisitionOutcome::Exhausted {
                attempts: MAX_ATTEMPTS,
            },
            conversation,
        })
    }

    /// Call the driver once and return the cleaned completion text.
    #[instrument(skip(self, conversation), fields(turns = conversation.len()))]
    async fn invoke(&self, conversation: &Conversation, attempt: usize) -> ScenewrightResult<String> {
        let temperature = temperature(attempt);
        debug!(attempt, temperature, "Requesting completion");

        let request = GenerateRequest::builder()
            .messages(conversation.messages().to_vec())
            .temperature(Some(temperature))
            .model(Some(self.model_name().to_string()))
            .build()
            .map_err(|e| BackendError::new(format!("Failed to build request: {}", e)))?;

        let response = self.driver.generate(&request).await?;
        let raw = response
            .first_text()
            .ok_or_else(|| TranscriptError::new(TranscriptErrorKind::MissingText(attempt)))?;

        let completion = clean_completion(raw).to_string();
        self.log.record(attempt, &completion);
        Ok(completion)
    }
}
