//! Transcript model
//!
//! - Message = one participant's contribution
//! - Transcript = append-only ordered history, sent as context on every remote call

use serde::{Deserialize, Serialize};

/// Who produced a message. Serialized with the chat-completion role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human at the console
    User,
    /// The remote model
    Assistant,
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Ordered, append-only message history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Entries are never edited afterwards.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of entries from the given role
    pub fn count_by(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Message::user("첫 번째"));
        transcript.push(Message::assistant("두 번째"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].content, "첫 번째");
        assert_eq!(transcript.last().unwrap().role, Role::Assistant);
    }

    #[test]
    fn test_count_by_role() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("a"));
        transcript.push(Message::assistant("b"));
        transcript.push(Message::user("c"));

        assert_eq!(transcript.count_by(Role::User), 2);
        assert_eq!(transcript.count_by(Role::Assistant), 1);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hi"));

        let json = serde_json::to_string(&transcript).unwrap();
        assert_eq!(json, r#"[{"role":"user","content":"hi"}]"#);
    }
}
