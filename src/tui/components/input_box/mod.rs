//! # InputBox Component
//!
//! The composer: where the user drafts the next question.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Shift+Enter line breaks)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on plain Enter
//! - Show a placeholder when empty and dim itself while a reply is pending
//!
//! ## State Management
//!
//! The buffer mirrors `Conversation::pending_input`. Edits are reported as
//! `ContentChanged` so the parent can forward them to the store, and the
//! parent calls [`InputBox::sync`] after every store update so the store
//! stays the source of truth (a send clears it, a rejected send keeps it).

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    visual_rows,
};

pub const PLACEHOLDER: &str = "Ask me about Purdue events, sports, and more...";
const KEY_HINTS: &str = " Enter send · Shift+Enter new line · Ctrl+N new chat · Esc quit ";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed
    Submit,
    /// Buffer text changed
    ContentChanged,
    /// Only the cursor moved
    CursorMoved,
}

/// Text input component.
///
/// # Props
///
/// - `awaiting`: a reply is pending; the border dims and the title says so
///
/// # State
///
/// - `buffer`: current draft
/// - `cursor`: cursor position and internal scroll (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    pub awaiting: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            awaiting: false,
            cursor: CursorState::new(),
        }
    }

    /// Adopt `pending` as the buffer if it differs (cursor jumps to the end).
    pub fn sync(&mut self, pending: &str) {
        if self.buffer != pending {
            self.buffer = pending.to_string();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    /// Height for the current buffer, clamped to
    /// `[1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD]`.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let rows = visual_rows(&self.buffer, inner_width(area_width)).len() as u16;
        rows.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn visible_lines(&self, area_width: u16) -> Vec<Line<'static>> {
        visual_rows(&self.buffer, inner_width(area_width))
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_LINES as usize)
            .map(|r| Line::from(self.buffer[r].to_string()))
            .collect()
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_area_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let (title, border_style) = if self.awaiting {
            (
                " Waiting for BoilerCompass... ",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (" Message ", Style::default().fg(Color::Yellow))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .title_bottom(
                Line::from(KEY_HINTS).style(Style::default().add_modifier(Modifier::DIM)),
            );

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_lines(area.width)).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        let (x, y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Normalize CRLF from some terminals
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map_or(0, |i| i + 1);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map_or(self.buffer.len(), |i| self.cursor.pos + i);
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_area_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_area_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::new();

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(input.buffer, "hi");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "h");
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputBox::new();
        input.sync("ac");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");
    }

    #[test]
    fn test_newline_char_is_inserted() {
        let mut input = InputBox::new();
        input.sync("line one");
        input.handle_event(&TuiEvent::InputChar('\n'));
        input.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(input.buffer, "line one\n2");
    }

    #[test]
    fn test_submit_does_not_clear_buffer() {
        let mut input = InputBox::new();
        input.sync("hello");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
        // The store decides whether the draft is consumed
        assert_eq!(input.buffer, "hello");
        input.sync("");
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("a\r\nb\rc".to_string()));
        assert_eq!(input.buffer, "a\nb\nc");
    }

    #[test]
    fn test_home_end_are_line_local() {
        let mut input = InputBox::new();
        input.sync("first\nsecond");
        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(InputEvent::CursorMoved)
        );
        input.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(input.buffer, "first\n>second");
        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "first\n>second!");
    }

    #[test]
    fn test_height_grows_and_clamps() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);
        input.sync("a\nb\nc");
        assert_eq!(input.calculate_height(40), 3 + VERTICAL_OVERHEAD);
        input.sync("1\n2\n3\n4\n5\n6\n7\n8");
        assert_eq!(
            input.calculate_height(40),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        let mut input = InputBox::new();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        assert!(buffer_text(&terminal).contains("Ask me about Purdue"));
    }

    #[test]
    fn test_render_awaiting_title() {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        let mut input = InputBox::new();
        input.awaiting = true;
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        assert!(buffer_text(&terminal).contains("Waiting for BoilerCompass"));
    }
}
