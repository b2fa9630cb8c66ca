//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the message log as bubbles
//! - Append the typing indicator while a reply is pending
//! - Stick to the bottom until the user scrolls away, and re-pin on growth
//! - Cache message heights so only new messages are measured
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the messages (props).
//! `Component::render` takes `&mut self`, so the layout cache and scroll
//! state are refreshed during the render pass.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Text;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::{Message, MessageId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::components::typing_indicator::TypingIndicator;
use crate::tui::event::TuiEvent;

/// Blank rows between bubbles.
const MESSAGE_GAP: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Last known canvas height, messages plus typing indicator
    pub canvas_height: u16,
    /// Content sits below the viewport (drives the header's "↓ New")
    pub has_unseen_content: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true,
            viewport_height: 0,
            canvas_height: 0,
            has_unseen_content: false,
        }
    }

    fn max_offset(&self) -> u16 {
        self.canvas_height.saturating_sub(self.viewport_height)
    }

    /// Re-pin to the newest message. Called whenever the log grows.
    pub fn scroll_to_latest(&mut self) {
        self.stick_to_bottom = true;
        self.has_unseen_content = false;
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll once the user has scrolled back to the end.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub is_awaiting: bool,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        is_awaiting: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            is_awaiting,
            spinner_frame,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        // 1. Update layout cache
        let layout = &mut self.state.layout;
        layout.refresh_bodies(self.messages);
        let reusable = layout.reusable_count(self.messages, content_width);
        layout.heights.truncate(reusable);
        for body in layout.bodies.iter().skip(reusable) {
            layout.heights.push(
                MessageBubble::calculate_height(body, content_width).saturating_add(MESSAGE_GAP),
            );
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(self.messages, content_width);

        let messages_height = self.state.layout.total_height();
        let indicator_height = if self.is_awaiting {
            TypingIndicator::HEIGHT
        } else {
            0
        };
        let canvas_height = messages_height.saturating_add(indicator_height);

        // 2. Clamp against the new bounds
        self.state.viewport_height = area.height;
        self.state.canvas_height = canvas_height;
        if self.state.stick_to_bottom {
            self.state
                .scroll_state
                .set_offset(Position::new(0, self.state.max_offset()));
        } else {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible messages into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let layout = &self.state.layout;
        for i in visible_range {
            let bubble = MessageBubble::new(&self.messages[i], &layout.bodies[i]);
            scroll_view.render_widget(bubble, layout.bubble_rect(i, content_width));
        }

        if self.is_awaiting {
            let rect = Rect::new(0, messages_height, content_width, indicator_height);
            scroll_view.render_widget(TypingIndicator::new(self.spinner_frame), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        let current = self.state.scroll_state.offset().y;
        self.state.has_unseen_content = current < self.state.max_offset();
    }
}

/// EventHandler lives on `MessageListState` because `MessageList` is rebuilt
/// every frame and cannot hold scroll position across events.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => self.scroll_to_latest(),
            _ => {}
        }
        None
    }
}

/// Cached layout measurements.
///
/// Messages are immutable, so a styled body stays valid for as long as the
/// message at that index keeps its id, and a height for as long as the width
/// is unchanged too. Heights and offsets saturate at `u16::MAX`.
pub struct LayoutCache {
    /// Styled bodies, parsed once per message
    pub bodies: Vec<Text<'static>>,
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    ids: Vec<MessageId>,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            ids: Vec::new(),
            content_width: 0,
        }
    }

    /// Leading messages whose ids match the cached ones.
    fn common_prefix(&self, messages: &[Message]) -> usize {
        self.ids
            .iter()
            .zip(messages)
            .take_while(|(id, message)| **id == message.id)
            .count()
    }

    /// Number of leading heights still valid for `messages` at `content_width`.
    pub fn reusable_count(&self, messages: &[Message], content_width: u16) -> usize {
        if self.content_width != content_width {
            return 0;
        }
        self.common_prefix(messages).min(self.heights.len())
    }

    /// Keep bodies for the unchanged prefix and style the rest.
    pub fn refresh_bodies(&mut self, messages: &[Message]) {
        let keep = self.common_prefix(messages).min(self.bodies.len());
        self.bodies.truncate(keep);
        self.bodies.extend(messages[keep..].iter().map(MessageBubble::body));
    }

    pub fn update_metadata(&mut self, messages: &[Message], content_width: u16) {
        self.ids = messages.iter().map(|m| m.id).collect();
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Canvas y of the message at `index`.
    pub fn top_of(&self, index: usize) -> u16 {
        if index == 0 {
            0
        } else {
            self.prefix_heights[index - 1]
        }
    }

    /// Canvas area of the bubble at `index`, without the trailing gap.
    pub fn bubble_rect(&self, index: usize, content_width: u16) -> Rect {
        let height = self.heights[index].saturating_sub(MESSAGE_GAP);
        Rect::new(0, self.top_of(index), content_width, height)
    }

    /// Indices worth rendering for the viewport, with half a screen of slack
    /// on each side.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end.max(start)
    }
}
