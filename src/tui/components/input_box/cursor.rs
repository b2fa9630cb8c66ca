//! Cursor position tracking for the composer.
//!
//! `CursorState` owns the cursor byte offset and the internal scroll offset.
//! The text itself is owned by `InputBox` and passed in explicitly.

use ratatui::layout::Rect;

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, char_width, display_width, inner_width, visual_rows,
};

pub(super) struct CursorState {
    /// Byte offset in the buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible row when the buffer is taller than the viewport
    pub scroll_offset: u16,
    /// Area width from the last render, used for vertical movement
    pub last_area_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_area_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Place the cursor after the last character.
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// (row, column) of the cursor in screen cells, relative to the text origin.
    pub fn row_col(&self, buffer: &str, area_width: u16) -> (u16, u16) {
        let rows = visual_rows(buffer, inner_width(area_width));
        let row = rows
            .iter()
            .rposition(|r| r.start <= self.pos)
            .unwrap_or(0);
        let col = display_width(&buffer[rows[row].start..self.pos.max(rows[row].start)]);
        (row as u16, col)
    }

    /// Move up (`-1`) or down (`1`) one screen row, keeping the column where
    /// possible. Returns `false` at the first/last row.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, area_width: u16) -> bool {
        let rows = visual_rows(buffer, inner_width(area_width));
        let (row, col) = self.row_col(buffer, area_width);

        let target = i32::from(row) + i32::from(direction);
        if target < 0 || target as usize >= rows.len() {
            return false;
        }
        let range = rows[target as usize].clone();

        let mut pos = range.start;
        let mut used = 0;
        for (i, c) in buffer[range.clone()].char_indices() {
            let w = char_width(c);
            if used + w > col {
                break;
            }
            used += w;
            pos = range.start + i + c.len_utf8();
        }
        self.pos = pos;
        true
    }

    /// Keep the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let total = visual_rows(buffer, inner_width(area_width)).len() as u16;
        if total <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = self.row_col(buffer, area_width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Screen coordinates of the cursor within `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let (row, col) = self.row_col(buffer, area.width);
        let max_col = inner_width(area.width).saturating_sub(1);
        let x = area.x + BORDER_OFFSET + col.min(max_col);
        let y = area.y + BORDER_OFFSET + row.saturating_sub(self.scroll_offset);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Area width 7 → 5 usable columns
    const WIDTH: u16 = 7;

    #[test]
    fn row_col_after_wrap() {
        let mut cursor = CursorState::new();
        cursor.pos = 6; // "boile|r|make"
        assert_eq!(cursor.row_col("boilermaker", WIDTH), (1, 1));
    }

    #[test]
    fn cursor_at_wrap_point_sits_on_next_row() {
        let mut cursor = CursorState::new();
        cursor.pos = 5;
        assert_eq!(cursor.row_col("boilermaker", WIDTH), (1, 0));
    }

    #[test]
    fn cursor_before_newline_stays_on_row() {
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        assert_eq!(cursor.row_col("ab\ncd", WIDTH), (0, 2));
        cursor.pos = 3;
        assert_eq!(cursor.row_col("ab\ncd", WIDTH), (1, 0));
    }

    #[test]
    fn move_up_keeps_column() {
        let buffer = "abcd\nxy";
        let mut cursor = CursorState::new();
        cursor.pos = buffer.len(); // after "xy", column 2
        assert!(cursor.move_vertically(buffer, -1, WIDTH));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn move_down_clamps_to_shorter_row() {
        let buffer = "abcd\nxy";
        let mut cursor = CursorState::new();
        cursor.pos = 4; // end of "abcd"
        assert!(cursor.move_vertically(buffer, 1, WIDTH));
        assert_eq!(cursor.pos, buffer.len());
    }

    #[test]
    fn move_past_edges_fails() {
        let mut cursor = CursorState::new();
        assert!(!cursor.move_vertically("single", -1, WIDTH));
        cursor.pos = 3;
        assert!(!cursor.move_vertically("one", 1, WIDTH));
    }

    #[test]
    fn scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5\n6\n7";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);
        cursor.update_scroll_offset(buffer, WIDTH);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer, WIDTH);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_accounts_for_border() {
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        let area = Rect::new(10, 20, WIDTH, 3);
        assert_eq!(cursor.screen_pos("ab", area), (13, 21));
    }
}
