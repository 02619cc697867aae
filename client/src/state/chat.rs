//! Chat transcript and composer draft.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    pub is_open: bool,
}

impl ChatState {
    #[must_use]
    pub fn with_message(&self, message: ChatMessage) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages, ..self.clone() }
    }

    #[must_use]
    pub fn with_draft(&self, draft: impl Into<String>) -> Self {
        Self { draft: draft.into(), ..self.clone() }
    }

    #[must_use]
    pub fn toggled_open(&self) -> Self {
        Self { is_open: !self.is_open, ..self.clone() }
    }

    /// Move the trimmed draft into the transcript as a user message.
    /// A blank draft leaves the state unchanged.
    #[must_use]
    pub fn submitted(&self) -> Self {
        let text = self.draft.trim();
        if text.is_empty() {
            return self.clone();
        }
        let mut next = self.with_message(ChatMessage::new(Role::User, text));
        next.draft.clear();
        next
    }

    #[must_use]
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
