//! Host text field capability
//!
//! The controller only needs a handful of primitives from the field it
//! enhances: its text, caret, scroll offset, and where a given offset is drawn.
//! `HostField` captures those; `TextAreaField` provides them for
//! `tui_textarea::TextArea`.

use std::ops::Range;

use crate::mentions::MentionItem;
use crate::trigger::CaretRange;

mod textarea_field;

pub use textarea_field::TextAreaField;

/// Visual position of a text offset, in cells from the top-left of the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretCoordinates {
    pub top: u16,
    pub left: u16,
}

/// Scroll position of the field's viewport, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub top: u16,
    pub left: u16,
}

pub trait HostField {
    /// Full text, lines joined with `\n`
    fn value(&self) -> String;

    /// Caret position as a character offset into `value()`
    fn caret(&self) -> usize;

    fn set_caret(&mut self, offset: usize);

    fn scroll_offset(&self) -> ScrollOffset;

    fn set_scroll_offset(&mut self, offset: ScrollOffset);

    /// Where `offset` is drawn, ignoring scrolling. `None` if the field
    /// cannot be measured yet.
    fn caret_coordinates(&self, offset: usize) -> Option<CaretCoordinates>;

    /// Rendered content width in cells
    fn width(&self) -> u16;

    /// Rendered content height in cells
    fn height(&self) -> u16;

    /// Replace the characters in `range` with `replacement`
    fn replace_range(&mut self, range: Range<usize>, replacement: &str);
}

/// Place the caret at `offset` and scroll vertically so its line is visible
pub fn move_caret_into_view(field: &mut dyn HostField, offset: usize) {
    field.set_caret(offset);

    let Some(coordinates) = field.caret_coordinates(offset) else {
        return;
    };

    let line_bottom = coordinates.top.saturating_add(1);
    let mut scroll = field.scroll_offset();
    scroll.top = line_bottom.saturating_sub(field.height());
    field.set_scroll_offset(scroll);
}

/// Replace the trigger and query covered by `range` with the item's value.
///
/// Only splices when the trigger character is still at `range.start`; the
/// caret ends up just after the inserted text. Returns whether the field was
/// changed.
pub fn splice_selection(field: &mut dyn HostField, item: &MentionItem, range: CaretRange, trigger: char) -> bool {
    let value = field.value();
    if value.chars().nth(range.start) != Some(trigger) {
        log::debug!("Trigger no longer at offset {}, skipping splice", range.start);
        return false;
    }

    let text_len = value.chars().count();
    let end = (range.end + 1).min(text_len);
    let replacement = item.value.to_string();

    field.replace_range(range.start..end, &replacement);
    move_caret_into_view(field, range.start + replacement.chars().count());
    true
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
