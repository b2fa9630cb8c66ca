//! Inline markup → ratatui `Text`.
//!
//! Styles the nodes produced by [`crate::markup::parse`]: bold runs get
//! `Modifier::BOLD`, `<br>` and literal newlines start a new line, and links
//! are underlined with their URL appended in a dimmed suffix.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::markup::{self, Node};

const LINK_COLOR: Color = Color::LightBlue;

/// Parse `content` and render it with `base` as the default style.
pub fn render(content: &str, base: Style) -> Text<'static> {
    to_text(&markup::parse(content), base)
}

/// Render literal text (no markup interpretation), honoring newlines.
pub fn render_plain(content: &str, base: Style) -> Text<'static> {
    let mut w = Writer::new(base);
    w.push_str(content, base);
    w.text
}

pub fn to_text(nodes: &[Node], base: Style) -> Text<'static> {
    let mut w = Writer::new(base);
    for node in nodes {
        match node {
            Node::Text(s) => w.push_str(s, base),
            Node::Bold(s) => w.push_str(s, base.add_modifier(Modifier::BOLD)),
            Node::Break => w.new_line(),
            Node::Link { href, text } => {
                w.push_str(
                    text,
                    base.fg(LINK_COLOR).add_modifier(Modifier::UNDERLINED),
                );
                w.push_str(&format!(" ({href})"), base.add_modifier(Modifier::DIM));
            }
        }
    }
    w.text
}

struct Writer {
    text: Text<'static>,
}

impl Writer {
    fn new(base: Style) -> Self {
        let mut text = Text::default().style(base);
        text.lines.push(Line::default());
        Self { text }
    }

    fn new_line(&mut self) {
        self.text.lines.push(Line::default());
    }

    /// Append `s`, splitting on embedded newlines.
    fn push_str(&mut self, s: &str, style: Style) {
        for (i, part) in s.split('\n').enumerate() {
            if i > 0 {
                self.new_line();
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = self.text.lines.last_mut() {
                line.push_span(Span::styled(part.to_string(), style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bold_span_gets_modifier() {
        let text = render("Go <b>Boilers</b>!", Style::default());
        assert_eq!(text.lines.len(), 1);
        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "Boilers");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn break_starts_new_line() {
        let text = render("a<br>b", Style::default());
        assert_eq!(text.lines.len(), 2);
        assert_eq!(line_text(&text.lines[0]), "a");
        assert_eq!(line_text(&text.lines[1]), "b");
    }

    #[test]
    fn literal_newlines_split_lines() {
        let text = render("one\ntwo\n\nfour", Style::default());
        let lines: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn link_shows_text_and_url() {
        let text = render(r#"<a href="https://purdue.edu">Purdue</a>"#, Style::default());
        let spans = &text.lines[0].spans;
        assert_eq!(spans[0].content, "Purdue");
        assert!(spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(spans[1].content, " (https://purdue.edu)");
    }

    #[test]
    fn plain_render_keeps_tags_literal() {
        let text = render_plain("<b>not bold</b>", Style::default());
        assert_eq!(line_text(&text.lines[0]), "<b>not bold</b>");
    }
}
