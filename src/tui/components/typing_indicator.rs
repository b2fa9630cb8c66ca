//! Animated "BoilerCompass is typing..." row shown while a reply is pending.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

const LABEL: &str = "BoilerCompass is typing...";
const DOT: &str = "●";
const DOT_COUNT: usize = 3;

/// One-line indicator: three dots with a travelling highlight, then the label.
///
/// `frame` is the global animation counter, so the highlight advances with
/// every redraw tick while the event loop is animating.
pub struct TypingIndicator {
    frame: usize,
}

impl TypingIndicator {
    pub const HEIGHT: u16 = 1;

    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    fn line(&self) -> Line<'static> {
        let active = self.frame % DOT_COUNT;
        let mut spans = Vec::with_capacity(DOT_COUNT * 2 + 1);
        spans.push(Span::raw(" "));
        for i in 0..DOT_COUNT {
            let style = if i == active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(DOT, style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            LABEL,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ));
        Line::from(spans)
    }
}

impl Widget for TypingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
