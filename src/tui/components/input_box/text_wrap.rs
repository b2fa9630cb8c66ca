//! Row layout and dimensions for the composer.
//!
//! The composer hard-wraps by display width so that every byte of the buffer
//! maps to exactly one screen cell row. Cursor math and rendering both go
//! through [`visual_rows`], so they can never disagree.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Left + right border consumed horizontally by the bordered block.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically.
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Content rows shown before the composer scrolls internally.
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Offset from area edge to content (border width).
pub(super) const BORDER_OFFSET: u16 = 1;

/// Usable text width inside the borders (0 if the area is too narrow).
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

pub(super) fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Byte ranges of each screen row of `text` at `width` columns.
///
/// Rows end at a newline (which belongs to no row) or when the next char
/// would overflow. Always returns at least one row.
pub(super) fn visual_rows(text: &str, width: u16) -> Vec<Range<usize>> {
    if width == 0 {
        return vec![0..text.len()];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    let mut col: u16 = 0;
    for (i, c) in text.char_indices() {
        if c == '\n' {
            rows.push(start..i);
            start = i + 1;
            col = 0;
            continue;
        }
        let w = char_width(c);
        if col > 0 && col + w > width {
            rows.push(start..i);
            start = i;
            col = 0;
        }
        col += w;
    }
    rows.push(start..text.len());
    rows
}

/// Display width of a slice.
pub(super) fn display_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
}

/// Byte offset of the char boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset of the char boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_as_str(text: &str, width: u16) -> Vec<&str> {
        visual_rows(text, width)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn empty_buffer_is_one_row() {
        assert_eq!(rows_as_str("", 10), vec![""]);
    }

    #[test]
    fn long_text_hard_wraps() {
        assert_eq!(rows_as_str("boilermaker", 5), vec!["boile", "rmake", "r"]);
    }

    #[test]
    fn newlines_split_rows() {
        assert_eq!(
            rows_as_str("dining\nsports\n", 40),
            vec!["dining", "sports", ""]
        );
    }

    #[test]
    fn wide_chars_do_not_split_cells() {
        // Each emoji is two columns wide
        assert_eq!(rows_as_str("🏈🏈🏈", 5), vec!["🏈🏈", "🏈"]);
    }

    #[test]
    fn zero_width_area_is_single_row() {
        assert_eq!(visual_rows("abc", 0), vec![0..3]);
    }

    #[test]
    fn inner_width_saturates() {
        assert_eq!(inner_width(40), 38);
        assert_eq!(inner_width(1), 0);
    }

    #[test]
    fn char_boundaries_respect_multibyte() {
        let s = "a🏈b";
        assert_eq!(next_char_boundary(s, 1), 5);
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(next_char_boundary(s, s.len()), s.len());
        assert_eq!(prev_char_boundary(s, 0), 0);
    }

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width("ab🏈"), 4);
    }
}
