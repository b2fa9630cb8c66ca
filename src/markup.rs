//! # Inline Markup
//!
//! Assistant replies may carry a tiny HTML-like vocabulary:
//! `<b>…</b>`, `<br>` and `<a href="…">…</a>`. [`parse`] turns a reply into a
//! flat list of [`Node`]s that a front end can style however it likes.
//!
//! The scanner looks for the earliest of the three opening tags. At equal
//! offsets bold is tried first, then break, then anchor. Anything it cannot
//! make sense of is kept as literal text; parsing never fails.
//!
//! ```text
//! "Go <b>Boilers</b><br>see <a href=\"https://purdue.edu\">site</a>"
//!   → [Text("Go "), Bold("Boilers"), Break, Text("see "), Link { href, text: "site" }]
//! ```

use std::sync::LazyLock;

use regex::Regex;

const BOLD_OPEN: &str = "<b>";
const BOLD_CLOSE: &str = "</b>";
const BREAK: &str = "<br>";
const LINK_OPEN: &str = "<a href=\"";
const LINK_CLOSE: &str = "</a>";

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+)""#).expect("valid href regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Bold(String),
    Break,
    Link { href: String, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Bold,
    Break,
    Link,
}

impl Tag {
    /// Scan order doubles as the tie-break order.
    const ALL: [Tag; 3] = [Tag::Bold, Tag::Break, Tag::Link];

    fn opener(self) -> &'static str {
        match self {
            Tag::Bold => BOLD_OPEN,
            Tag::Break => BREAK,
            Tag::Link => LINK_OPEN,
        }
    }
}

/// Finds opening tags left to right. Each tag's next offset is cached and
/// only searched for again once the cursor has moved past it, so every
/// opener is scanned over the input at most once.
struct TagFinder<'a> {
    content: &'a str,
    /// Next offset per tag, in `Tag::ALL` order. `None` once exhausted.
    next: [Option<usize>; 3],
}

impl<'a> TagFinder<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            next: Tag::ALL.map(|tag| content.find(tag.opener())),
        }
    }

    /// Earliest opening tag at or after `from`.
    fn next_from(&mut self, from: usize) -> Option<(usize, Tag)> {
        let mut best: Option<(usize, Tag)> = None;
        for (slot, tag) in self.next.iter_mut().zip(Tag::ALL) {
            if slot.is_some_and(|stale| stale < from) {
                *slot = self.content[from..].find(tag.opener()).map(|rel| from + rel);
            }
            if let Some(start) = *slot {
                if best.is_none_or(|(b, _)| start < b) {
                    best = Some((start, tag));
                }
            }
        }
        best
    }
}

/// Accumulates nodes, merging adjacent text runs.
#[derive(Default)]
struct Nodes(Vec<Node>);

impl Nodes {
    fn text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.0.last_mut() {
            last.push_str(s);
        } else {
            self.0.push(Node::Text(s.to_string()));
        }
    }

    fn push(&mut self, node: Node) {
        match node {
            Node::Text(s) => self.text(&s),
            other => self.0.push(other),
        }
    }
}

/// Parse `content` into display nodes. Pure: equal input, equal output.
pub fn parse(content: &str) -> Vec<Node> {
    let mut nodes = Nodes::default();
    let mut finder = TagFinder::new(content);
    let mut pos = 0;

    while pos < content.len() {
        let Some((start, tag)) = finder.next_from(pos) else {
            nodes.text(&content[pos..]);
            break;
        };
        nodes.text(&content[pos..start]);

        match tag {
            Tag::Break => {
                nodes.push(Node::Break);
                pos = start + BREAK.len();
            }
            Tag::Bold => {
                let inner = start + BOLD_OPEN.len();
                let Some(rel) = content[inner..].find(BOLD_CLOSE) else {
                    // Unterminated: the rest is literal
                    nodes.text(&content[start..]);
                    break;
                };
                nodes.push(Node::Bold(content[inner..inner + rel].to_string()));
                pos = inner + rel + BOLD_CLOSE.len();
            }
            Tag::Link => {
                let Some((node, end)) = parse_link(content, start) else {
                    nodes.text(&content[start..]);
                    break;
                };
                nodes.push(node);
                pos = end;
            }
        }
    }

    nodes.0
}

/// Parses the anchor starting at `start`. Returns the node and the offset just
/// past `</a>`, or `None` if the tag is never closed.
fn parse_link(content: &str, start: usize) -> Option<(Node, usize)> {
    let tag_end = start + content[start..].find('>')? + 1;
    let close = tag_end + content[tag_end..].find(LINK_CLOSE)?;

    let opening = &content[start..tag_end];
    let text = content[tag_end..close].to_string();
    let node = match HREF.captures(opening) {
        Some(caps) => Node::Link {
            href: caps[1].to_string(),
            text,
        },
        None => Node::Text(text),
    };
    Some((node, close + LINK_CLOSE.len()))
}

/// Concatenated visible text, with breaks as newlines.
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(s) | Node::Bold(s) => out.push_str(s),
            Node::Link { text, .. } => out.push_str(text),
            Node::Break => out.push('\n'),
        }
    }
    out
}
