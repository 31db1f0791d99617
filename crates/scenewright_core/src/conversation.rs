//! Conversation history for a single transcript request.

use crate::{Message, Role};
use serde::Serialize;

/// Ordered turns exchanged with the completion service.
///
/// A conversation always opens with exactly one system turn followed by one
/// user turn; [`Conversation::new`] is the only constructor. After that it
/// only grows, one turn at a time.
///
/// # Examples
///
/// ```
/// use scenewright_core::{Conversation, Role};
///
/// let mut conversation = Conversation::new("Be concise.", "Explain entropy");
/// conversation.push_assistant("[\"Entropy measures disorder\"]");
///
/// assert_eq!(conversation.len(), 3);
/// assert_eq!(conversation.messages()[0].role, Role::System);
/// assert_eq!(conversation.last().map(|m| m.role), Some(Role::Assistant));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation from the system instruction and the opening user turn.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system), Message::user(user)],
        }
    }

    /// Append a model completion.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// All turns in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The system instruction that opened the conversation.
    pub fn system(&self) -> &str {
        &self.messages[0].content
    }

    /// The most recent turn.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether there are no turns; never true for a constructed conversation.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count of turns authored by `role`.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    /// Consume the conversation, returning its turns.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
