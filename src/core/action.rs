//! # Actions
//!
//! Everything that can happen in BoilerCompass becomes an `Action`.
//! User presses Enter? That's `Action::Send`.
//! Backend answers? That's `Action::ReplyReceived { .. }`.
//!
//! The `update()` function applies an action to the conversation and returns
//! an `Effect` describing the I/O the caller should perform. No side effects
//! here. I/O happens elsewhere.
//!
//! ```text
//! Conversation + Action  →  update()  →  Conversation' + Effect
//! ```

use log::debug;

use crate::core::state::Conversation;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Composer text changed.
    UpdateInput(String),
    /// Submit the composer text.
    Send,
    /// A starter prompt was picked: fill the composer and submit it.
    SelectStarter(String),
    /// The backend answered a request issued under `generation`.
    ReplyReceived { generation: u64, content: String },
    /// Start over with only the welcome message.
    Reset,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Ask the backend for a reply to `query`.
    FetchReply { generation: u64, query: String },
    Quit,
}

pub fn update(conversation: &mut Conversation, action: Action) -> Effect {
    match action {
        Action::UpdateInput(text) => {
            conversation.update_input_value(text);
            Effect::None
        }
        Action::Send => send(conversation),
        Action::SelectStarter(prompt) => {
            if conversation.is_awaiting_response {
                return Effect::None;
            }
            conversation.update_input_value(prompt);
            send(conversation)
        }
        Action::ReplyReceived {
            generation,
            content,
        } => {
            if !conversation.receive_reply(generation, content) {
                debug!(
                    "Dropping reply for generation {} (current {})",
                    generation, conversation.generation
                );
            }
            Effect::None
        }
        Action::Reset => {
            conversation.reset();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn send(conversation: &mut Conversation) -> Effect {
    match conversation.send_message() {
        Some(request) => Effect::FetchReply {
            generation: request.generation,
            query: request.query,
        },
        None => Effect::None,
    }
}
