//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the chat
//! screen, and translates keyboard and mouse events into `core::Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Awaiting a reply**: draws every ~80ms so the typing indicator animates.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod controller;
mod event;
pub mod markup;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::state::Conversation;
use crate::gateway::HttpBackend;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState, STARTERS, StarterState};
use crate::tui::controller::{Controller, Outcome};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);
/// Typing indicator steps per second.
const SPINNER_RATE: f32 = 3.0;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub starters: StarterState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            starters: StarterState::default(),
        }
    }

    /// Follow the store after a dispatch: re-pin on growth and mirror the
    /// pending input into the composer.
    fn sync(&mut self, outcome: Outcome, conversation: &Conversation) {
        if outcome.grew {
            self.message_list.scroll_to_latest();
        }
        self.input_box.sync(&conversation.pending_input);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets us tell Shift+Enter from Enter.
        // Terminals that don't support it ignore the request.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Turn one terminal event into an action, updating presentation-only
/// state along the way. `None` means nothing for the store to do.
fn route_event(
    event: &TuiEvent,
    conversation: &Conversation,
    tui: &mut TuiState,
) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ResetChat => Some(Action::Reset),
        TuiEvent::Resize => None,
        TuiEvent::Starter(index) => starter_action(*index, conversation),
        TuiEvent::MouseClick(column, row) => tui
            .starters
            .hit_test(*column, *row)
            .and_then(|index| starter_action(index, conversation)),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            tui.message_list.handle_event(event);
            None
        }
        _ => match tui.input_box.handle_event(event)? {
            InputEvent::ContentChanged => Some(Action::UpdateInput(tui.input_box.buffer.clone())),
            InputEvent::Submit => Some(Action::Send),
            InputEvent::CursorMoved => None,
        },
    }
}

/// Starters only apply to a fresh conversation.
fn starter_action(index: usize, conversation: &Conversation) -> Option<Action> {
    if !conversation.is_fresh() {
        return None;
    }
    let starter = STARTERS.get(index)?;
    debug!("Starter picked: {}", starter.title);
    Some(Action::SelectStarter(starter.prompt.to_string()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    info!(
        "Using backend {} (timeout: {:?})",
        config.endpoint, config.request_timeout
    );
    let backend = Arc::new(HttpBackend::new(
        config.endpoint.clone(),
        config.request_timeout,
    ));
    let conversation = Conversation::new(config.welcome_message.clone());
    let mut controller = Controller::new(conversation, backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = controller.conversation.is_awaiting_response;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * SPINNER_RATE) as usize;
            terminal.draw(|f| ui::draw_ui(f, &controller.conversation, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if let Some(action) = route_event(&event, &controller.conversation, &mut tui) {
                let outcome = controller.dispatch(action);
                tui.sync(outcome, &controller.conversation);
                should_quit |= outcome.quit;
            }
        }

        if should_quit {
            break;
        }

        // Replies from background tasks
        let outcome = controller.poll_replies();
        if outcome.grew {
            needs_redraw = true;
            tui.sync(outcome, &controller.conversation);
        }
    }

    info!("BoilerCompass shutting down");
    ratatui::restore();
    Ok(())
}
