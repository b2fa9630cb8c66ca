use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::message::{Message, Role};
use crate::tui::component::Component;
use crate::tui::markup;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Share of the row a bubble may occupy, in percent.
const BUBBLE_WIDTH_PERCENT: u16 = 85;

const GOLD: Color = Color::Rgb(207, 185, 145);

/// A stateless component that renders one chat message as a bubble.
///
/// # Layout
///
/// The parent hands every message a full-width row. The bubble takes
/// [`BUBBLE_WIDTH_PERCENT`] of it: user bubbles hug the right edge, assistant
/// bubbles the left, like the two sides of a chat.
///
/// # Content
///
/// Assistant replies go through the inline markup renderer (bold, line
/// breaks, links). User text is shown literally, so typing `<b>` shows `<b>`.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap`, line by line over the same styled `Text` that `render`
/// draws, so `MessageList` can lay out the scroll canvas without rendering.
/// Heights saturate at `u16::MAX`; replies have no length limit.
///
/// The styled body comes from [`body`](Self::body) and is built once per
/// message by the caller, not on every frame.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
    pub body: &'a Text<'static>,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, body: &'a Text<'static>) -> Self {
        Self { message, body }
    }

    fn style(role: Role) -> Style {
        match role {
            Role::User => Style::default().fg(Color::White),
            Role::Assistant => Style::default().fg(GOLD),
        }
    }

    /// Styled content for `message`. Markup is interpreted for replies only.
    pub fn body(message: &Message) -> Text<'static> {
        let base = Self::style(message.role);
        match message.role {
            Role::Assistant => markup::render(message.content.trim(), base),
            Role::User => markup::render_plain(message.content.trim(), base),
        }
    }

    /// Width of the bubble inside a row of `row_width` columns.
    pub fn bubble_width(row_width: u16) -> u16 {
        let width = (u32::from(row_width) * u32::from(BUBBLE_WIDTH_PERCENT) / 100) as u16;
        width.max(HORIZONTAL_OVERHEAD + 1).min(row_width)
    }

    /// Rows needed to render `body` in a row of `row_width` columns.
    pub fn calculate_height(body: &Text<'_>, row_width: u16) -> u16 {
        let content_width = Self::bubble_width(row_width).saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines: usize = body
            .lines
            .iter()
            .map(|line| {
                let flat: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                textwrap::wrap(&flat, &options).len().max(1)
            })
            .sum();

        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn title(&self) -> String {
        let time = self.message.timestamp.with_timezone(&Local).format("%H:%M");
        format!(" {} · {} ", self.message.role.label(), time)
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let width = Self::bubble_width(area.width);
        let x = match self.message.role {
            Role::User => area.x + area.width.saturating_sub(width),
            Role::Assistant => area.x,
        };
        let bubble = Rect::new(x, area.y, width, area.height);

        let style = Self::style(self.message.role);
        let border_style = match self.message.role {
            Role::User => style.add_modifier(Modifier::DIM),
            Role::Assistant => style,
        };

        let block = Block::bordered()
            .title(self.title())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(bubble);
        block.render(bubble, buf);

        Paragraph::new(self.body.clone())
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl<'a> Component for MessageBubble<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
