//! Chat message types.
//!
//! A `Message` is immutable once created. Ids come from the owning
//! `Conversation`'s counter, so they are unique and ordered by creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    /// Label shown in the message bubble title.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "boilercompass",
        }
    }
}

/// Creation-ordered message identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, role: Role, content: String) -> Self {
        Self {
            id,
            content,
            role,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn message_ids_order_by_value() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(7).to_string(), "7");
    }

    #[test]
    fn new_message_keeps_content_verbatim() {
        let msg = Message::new(MessageId(3), Role::Assistant, "  <b>hi</b> ".to_string());
        assert_eq!(msg.content, "  <b>hi</b> ");
        assert_eq!(msg.role, Role::Assistant);
    }
}
