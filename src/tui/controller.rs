//! Glue between the reducer and the async gateway.
//!
//! The `Controller` owns the `Conversation`, runs every `Action` through
//! `update()`, and performs the resulting `Effect`: a `FetchReply` becomes a
//! tokio task that calls the backend and sends `ReplyReceived` back over a
//! channel. The event loop drains that channel with [`Controller::poll_replies`].

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::message::MessageId;
use crate::core::state::Conversation;
use crate::gateway::{AssistantBackend, fetch_assistant_reply};

/// What the event loop needs to know after a dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub quit: bool,
    /// The newest message changed (scroll to it)
    pub grew: bool,
}

pub struct Controller {
    pub conversation: Conversation,
    backend: Arc<dyn AssistantBackend>,
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
    in_flight: Option<AbortHandle>,
}

impl Controller {
    pub fn new(conversation: Conversation, backend: Arc<dyn AssistantBackend>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            conversation,
            backend,
            tx,
            rx,
            in_flight: None,
        }
    }

    fn last_id(&self) -> Option<MessageId> {
        self.conversation.messages.last().map(|m| m.id)
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let before = self.last_id();

        if matches!(action, Action::Reset)
            && let Some(handle) = self.in_flight.take()
        {
            debug!("Aborting in-flight request on reset");
            handle.abort();
        }

        let effect = update(&mut self.conversation, action);
        let quit = match effect {
            Effect::None => false,
            Effect::FetchReply { generation, query } => {
                self.spawn_fetch(generation, query);
                false
            }
            Effect::Quit => true,
        };

        if !self.conversation.is_awaiting_response {
            self.in_flight = None;
        }

        Outcome {
            quit,
            grew: self.last_id() != before,
        }
    }

    /// Apply every reply that arrived since the last call.
    pub fn poll_replies(&mut self) -> Outcome {
        let mut outcome = Outcome::default();
        while let Ok(action) = self.rx.try_recv() {
            let next = self.dispatch(action);
            outcome.quit |= next.quit;
            outcome.grew |= next.grew;
        }
        outcome
    }

    fn spawn_fetch(&mut self, generation: u64, query: String) {
        info!("Spawning backend request (generation {})", generation);
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let content = fetch_assistant_reply(backend.as_ref(), &query).await;
            if tx
                .send(Action::ReplyReceived {
                    generation,
                    content,
                })
                .is_err()
            {
                warn!("Failed to deliver reply: receiver dropped");
            }
        });
        self.in_flight = Some(handle.abort_handle());
    }
}
