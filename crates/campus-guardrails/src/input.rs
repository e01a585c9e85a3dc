//! Raw input model and normalization
//!
//! An agent receives either a bare text value or an ordered sequence of
//! messages. Guardrails never inspect the structure directly; they work
//! on the normalized form produced by [`RawInput::normalize`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message (instructions)
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        };
        f.write_str(name)
    }
}

/// A message-like element of an input sequence
///
/// `content` is optional; a message without content contributes its
/// display form (a role placeholder) when the sequence is flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text content, if any
    pub content: Option<String>,
}

impl InputMessage {
    /// Create a new message with content
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

impl fmt::Display for InputMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(content) => f.write_str(content),
            None => write!(f, "[{}]", self.role),
        }
    }
}

/// User input as handed to an agent
///
/// Either a single text value or an ordered sequence of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// A bare text value
    Text(String),
    /// An ordered sequence of messages
    Messages(Vec<InputMessage>),
}

impl RawInput {
    /// Create a text input
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a message-sequence input
    pub fn messages(messages: Vec<InputMessage>) -> Self {
        Self::Messages(messages)
    }

    /// Flatten this input into one lowercase string for matching
    ///
    /// Sequence elements are joined with a single space, preserving
    /// order. The function is deterministic and total; internal
    /// whitespace is left untouched.
    pub fn normalize(&self) -> String {
        let unified = match self {
            Self::Text(value) => value.clone(),
            Self::Messages(messages) => messages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        };
        unified.to_lowercase()
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<InputMessage>> for RawInput {
    fn from(messages: Vec<InputMessage>) -> Self {
        Self::Messages(messages)
    }
}
