use std::ops::Range;

use ratatui::layout::Rect;
use tui_textarea::{CursorMove, Scrolling, TextArea};
use unicode_width::UnicodeWidthStr;

use super::{CaretCoordinates, HostField, ScrollOffset};

/// `HostField` over a `tui_textarea::TextArea`.
///
/// The textarea keeps its viewport private, so the scroll offset is mirrored
/// here using the same minimal-scroll rule the textarea applies when it is
/// drawn. Call `sync_viewport` with the content area before each draw.
pub struct TextAreaField {
    pub textarea: TextArea<'static>,
    scroll: ScrollOffset,
    viewport_width: u16,
    viewport_height: u16,
}

impl TextAreaField {
    pub fn new(textarea: TextArea<'static>) -> Self {
        Self {
            textarea,
            scroll: ScrollOffset::default(),
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    /// Record the content area the textarea is about to be drawn into and
    /// follow the cursor the way the textarea does
    pub fn sync_viewport(&mut self, area: Rect) {
        self.viewport_width = area.width;
        self.viewport_height = area.height;

        let (row, col) = self.textarea.cursor();
        self.scroll.top = next_scroll_top(self.scroll.top, to_cells(row), self.viewport_height);
        self.scroll.left = next_scroll_top(self.scroll.left, to_cells(col), self.viewport_width);
    }

    fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let lines = self.textarea.lines();
        let mut remaining = offset;

        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                return (row, remaining);
            }
            // +1 for the newline joining this line to the next
            remaining -= len + 1;
        }

        let last = lines.len().saturating_sub(1);
        (last, lines.get(last).map_or(0, |line| line.chars().count()))
    }
}

impl Default for TextAreaField {
    fn default() -> Self {
        Self::new(TextArea::default())
    }
}

impl HostField for TextAreaField {
    fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn caret(&self) -> usize {
        let (row, col) = self.textarea.cursor();
        let preceding: usize = self.textarea.lines()[..row]
            .iter()
            .map(|line| line.chars().count() + 1)
            .sum();
        preceding + col
    }

    fn set_caret(&mut self, offset: usize) {
        let (row, col) = self.offset_to_cursor(offset);
        self.textarea.move_cursor(CursorMove::Jump(to_cells(row), to_cells(col)));
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: ScrollOffset) {
        let rows = offset.top as i32 - self.scroll.top as i32;
        let cols = offset.left as i32 - self.scroll.left as i32;
        if rows != 0 || cols != 0 {
            // Scrolling drags the cursor into the new viewport; put it back
            let (row, col) = self.textarea.cursor();
            self.textarea.scroll(Scrolling::Delta {
                rows: rows.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
                cols: cols.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
            });
            self.textarea.move_cursor(CursorMove::Jump(to_cells(row), to_cells(col)));
        }
        self.scroll = offset;
    }

    fn caret_coordinates(&self, offset: usize) -> Option<CaretCoordinates> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return None;
        }

        let (row, col) = self.offset_to_cursor(offset);
        let line = &self.textarea.lines()[row];
        let prefix: String = line.chars().take(col).collect();

        Some(CaretCoordinates {
            top: to_cells(row),
            left: to_cells(prefix.width()),
        })
    }

    fn width(&self) -> u16 {
        self.viewport_width
    }

    fn height(&self) -> u16 {
        self.viewport_height
    }

    fn replace_range(&mut self, range: Range<usize>, replacement: &str) {
        self.set_caret(range.start);
        self.textarea.delete_str(range.end.saturating_sub(range.start));
        self.textarea.insert_str(replacement);
    }
}

/// Row or column count as cells, saturating on very long texts
fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn next_scroll_top(prev_top: u16, cursor: u16, len: u16) -> u16 {
    if cursor < prev_top {
        cursor
    } else if len > 0 && prev_top.saturating_add(len) <= cursor {
        cursor + 1 - len
    } else {
        prev_top
    }
}

#[cfg(test)]
#[path = "textarea_field_tests.rs"]
mod textarea_field_tests;
