//! Tests for field helpers

use ratatui::layout::Rect;
use tui_textarea::TextArea;

use super::*;

fn field_with(text: &str) -> TextAreaField {
    let mut field = TextAreaField::new(TextArea::from(text.lines().map(str::to_string)));
    field.sync_viewport(Rect::new(0, 0, 40, 3));
    field
}

#[test]
fn test_splice_replaces_trigger_and_query() {
    let mut field = field_with("hello /Jo");
    let item = MentionItem::labeled("John");

    let spliced = splice_selection(&mut field, &item, CaretRange { start: 6, end: 8 }, '/');

    assert!(spliced);
    assert_eq!(field.value(), "hello John");
    assert_eq!(field.caret(), 10);
}

#[test]
fn test_splice_keeps_text_after_query() {
    let mut field = field_with("hi /Jo there");
    let item = MentionItem::new("John", "@john");

    splice_selection(&mut field, &item, CaretRange { start: 3, end: 5 }, '/');

    assert_eq!(field.value(), "hi @john there");
    assert_eq!(field.caret(), 8);
}

#[test]
fn test_splice_inserts_numeric_value() {
    let mut field = field_with("fix /bug");
    let item = MentionItem::new("Login bug", 1024i64);

    splice_selection(&mut field, &item, CaretRange { start: 4, end: 7 }, '/');

    assert_eq!(field.value(), "fix 1024");
}

#[test]
fn test_splice_skipped_when_trigger_gone() {
    let mut field = field_with("hello Jo");
    let item = MentionItem::labeled("John");

    let spliced = splice_selection(&mut field, &item, CaretRange { start: 6, end: 8 }, '/');

    assert!(!spliced);
    assert_eq!(field.value(), "hello Jo");
}

#[test]
fn test_move_caret_into_view_scrolls_to_caret_line() {
    let text = "l0\nl1\nl2\nl3\nl4\nl5";
    let mut field = field_with(text);

    move_caret_into_view(&mut field, text.len());

    assert_eq!(field.caret(), text.len());
    // Caret on row 5 with a three row viewport
    assert_eq!(field.scroll_offset().top, 3);
}
