//! # Conversation State
//!
//! Core chat state for BoilerCompass. Domain logic only; presentation state
//! lives in the `tui` module.
//!
//! ```text
//! Conversation
//! ├── messages: Vec<Message>         // append-only log, starts with the welcome
//! ├── pending_input: String          // composer text not yet sent
//! ├── is_awaiting_response: bool     // gates sends while a reply is pending
//! ├── generation: u64                // bumped on reset, tags outbound requests
//! ├── next_id: u64                   // message id counter, never rewound
//! └── welcome_message: String        // text of the initial assistant message
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::message::{Message, MessageId, Role};

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello! I'm BoilerCompass AI. Ask me about events, sports, and more at Purdue!";

/// A request the store wants issued to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub messages: Vec<Message>,
    pub pending_input: String,
    pub is_awaiting_response: bool,
    pub generation: u64,
    next_id: u64,
    welcome_message: String,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME_MESSAGE.to_string())
    }
}

impl Conversation {
    pub fn new(welcome_message: String) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            pending_input: String::new(),
            is_awaiting_response: false,
            generation: 0,
            next_id: 1,
            welcome_message,
        };
        conversation.push(Role::Assistant, conversation.welcome_message.clone());
        conversation
    }

    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    /// True while only the welcome message is shown.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }

    fn push(&mut self, role: Role, content: String) {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::new(id, role, content));
    }

    pub fn update_input_value(&mut self, text: String) {
        self.pending_input = text;
    }

    /// Appends the trimmed composer text as a user message and raises the
    /// awaiting flag. Returns `None` (and changes nothing) if the input is
    /// blank or a reply is already pending.
    pub fn send_message(&mut self) -> Option<PendingRequest> {
        if self.is_awaiting_response {
            return None;
        }
        let query = self.pending_input.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();

        self.push(Role::User, query.clone());
        self.pending_input.clear();
        self.is_awaiting_response = true;

        Some(PendingRequest {
            generation: self.generation,
            query,
        })
    }

    /// Appends the assistant reply for `generation`. Replies issued before the
    /// most recent reset are dropped; returns whether the reply was accepted.
    pub fn receive_reply(&mut self, generation: u64, content: String) -> bool {
        if generation != self.generation || !self.is_awaiting_response {
            return false;
        }
        self.push(Role::Assistant, content);
        self.is_awaiting_response = false;
        true
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending_input.clear();
        self.is_awaiting_response = false;
        self.generation += 1;
        self.push(Role::Assistant, self.welcome_message.clone());
    }
}
