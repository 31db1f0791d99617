//! Output types from completion responses.

use serde::{Deserialize, Serialize};

/// One output produced by the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

impl Output {
    /// Text of this output, if it is textual.
    pub fn text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
        }
    }
}
