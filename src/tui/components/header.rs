//! # Header Component
//!
//! Top status line: app name, readiness, and a "↓ New" hint when the user has
//! scrolled away from the newest message.
//!
//! Stateless: every field is a prop set by the parent each frame.
//!
//! ```text
//! BoilerCompass | Ready to help
//! BoilerCompass | Thinking... | ↓ New
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const APP_NAME: &str = "BoilerCompass";
const READY: &str = "Ready to help";
const THINKING: &str = "Thinking...";

pub struct Header {
    /// A reply is pending
    pub is_awaiting: bool,
    /// Content below the current scroll position
    pub has_unseen_content: bool,
}

impl Header {
    pub fn new(is_awaiting: bool, has_unseen_content: bool) -> Self {
        Self {
            is_awaiting,
            has_unseen_content,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.is_awaiting { THINKING } else { READY }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let status_style = if self.is_awaiting {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };

        let mut spans = vec![
            Span::styled(
                APP_NAME,
                Style::default()
                    .fg(Color::Rgb(207, 185, 145))
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(self.status(), status_style),
        ];
        if self.has_unseen_content {
            spans.push(separator);
            spans.push(Span::styled(
                "↓ New",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
