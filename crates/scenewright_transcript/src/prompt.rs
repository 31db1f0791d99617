//! Prompt assembly for transcript requests.

use scenewright_core::Conversation;

/// Upper bound on scenes requested from the model.
///
/// Only communicated through the prompt; parsed transcripts are not truncated.
pub const MAX_SCENES: usize = 5;

/// User turn appended after a completion that could not be parsed.
pub const CORRECTIVE_INSTRUCTION: &str =
    "Error: Did not follow correct format. Please create an array of strings for scenes.";

/// The two opening turns of a transcript conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct Prompt {
    /// System instruction carrying persona, emotion and format rules
    system: String,
    /// The learner's topic, verbatim
    user: String,
}

impl Prompt {
    /// Start a conversation from this prompt.
    pub fn into_conversation(self) -> Conversation {
        Conversation::new(self.system, self.user)
    }
}

/// Build the system and user texts for a topic and the learner's emotional state.
///
/// Pure and deterministic: identical inputs give byte-identical output.
///
/// # Examples
///
/// ```
/// use scenewright_transcript::assemble;
///
/// let prompt = assemble("How do rainbows form?", "curious but tired");
/// assert!(prompt.system().contains("curious but tired"));
/// assert_eq!(prompt.user(), "How do rainbows form?");
/// ```
pub fn assemble(topic: &str, emotion: &str) -> Prompt {
    Prompt {
        system: system_prompt(emotion),
        user: topic.to_string(),
    }
}

/// System instruction with `emotion` embedded verbatim.
pub fn system_prompt(emotion: &str) -> String {
    format!(
        "You are an expert teacher, in the spirit of 3Blue1Brown. Given a student's question \
about a topic, write the transcript for a video that explains it. Prioritize a fundamental \
understanding of the concept over a high-level overview, and speak as a fond teacher with an \
empathetic tone; how you deliver this knowledge shapes how the student grows. Right now the \
student is feeling {emotion}, so take that into account in your explanation.\n\n\
Animations will be generated for your narration, so feel free to reference \"the screen\" and \
talk as if something relevant to what you are saying is shown on it.\n\n\
If needed, split the transcript into multiple scenes in the order that best explains the topic. \
Keep it engaging and informative, and use no more than {max} scenes.\n\n\
ONLY output an array of strings, where each string is the transcript of one scene. START and \
END the output with square brackets. Every element must be a string surrounded by double \
quotes. Do not include a programming language name, code fences, markdown, or any other \
commentary.\n\n\
Format example:\n\n\
[\n    \"This is the first scene\",\n    \"This is the second scene\"\n]\n",
        emotion = emotion,
        max = MAX_SCENES,
    )
}
