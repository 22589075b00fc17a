//! Tests for popup rendering

use std::time::{Duration, Instant};

use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tui_textarea::TextArea;

use super::*;
use crate::config::MentionsConfig;
use crate::field::{HostField, TextAreaField};
use crate::mentions::{MentionGroup, MentionItem};

const TEST_WIDTH: u16 = 30;
const TEST_HEIGHT: u16 = 8;

fn field_area() -> Rect {
    Rect::new(0, 0, TEST_WIDTH, 1)
}

fn groups() -> Vec<MentionGroup> {
    vec![
        MentionGroup::new(
            "Friends",
            vec![
                MentionItem::labeled("John"),
                MentionItem::labeled("Jack"),
                MentionItem::labeled("Tom"),
            ],
        ),
        MentionGroup::new("Teams", vec![MentionItem::labeled("Jobs")]),
    ]
}

fn typed(controller: &mut MentionsController, text: &str) {
    let mut field = TextAreaField::new(TextArea::from([text.to_string()]));
    field.set_caret(text.chars().count());
    field.sync_viewport(field_area());
    controller.handle_input(&field, &groups());
}

/// Render the controller and return the popup area plus its text, row by row
fn render(controller: &MentionsController) -> (Option<Rect>, String, Terminal<TestBackend>) {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            area = render_popup(controller, f, field_area());
        })
        .unwrap();

    let text = area
        .map(|rect| {
            let buffer = terminal.backend().buffer();
            (rect.y..rect.bottom())
                .map(|y| {
                    (rect.x..rect.right())
                        .map(|x| buffer[(x, y)].symbol().to_string())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    (area, text, terminal)
}

#[test]
fn test_hidden_popup_renders_nothing() {
    let controller = MentionsController::default();
    let (area, text, _) = render(&controller);

    assert!(area.is_none());
    assert!(text.is_empty());
}

#[test]
fn snapshot_popup_single_match() {
    let mut controller = MentionsController::default();
    typed(&mut controller, "hi /Joh");

    let (area, text, _) = render(&controller);

    // Anchored just after the trigger, one row below the caret line
    assert_eq!(area, Some(Rect::new(4, 1, 14, 4)));
    assert_snapshot!(text, @r"
    ╭────────────╮
    │ Friends    │
    │ ► John     │
    ╰────────────╯
    ");
}

#[test]
fn snapshot_popup_groups_with_divider() {
    let mut controller = MentionsController::default();
    typed(&mut controller, "/jo");

    let (area, text, _) = render(&controller);

    assert_eq!(area, Some(Rect::new(1, 1, 14, 7)));
    assert_snapshot!(text, @r"
    ╭────────────╮
    │ Friends    │
    │ ► John     │
    │────────────│
    │ Teams      │
    │   Jobs     │
    ╰────────────╯
    ");
}

#[test]
fn test_active_item_is_highlighted() {
    let mut controller = MentionsController::default();
    typed(&mut controller, "/");

    let (area, _, terminal) = render(&controller);
    let area = area.unwrap();
    let buffer = terminal.backend().buffer();

    // Row 0 is the border, row 1 the group title, row 2 the first item
    let marker = &buffer[(area.x + 2, area.y + 2)];
    assert_eq!(marker.symbol(), "►");
    assert_eq!(marker.bg, ITEM_ACTIVE_BG);

    let inactive = &buffer[(area.x + 4, area.y + 3)];
    assert_eq!(inactive.symbol(), "J");
    assert_ne!(inactive.bg, ITEM_ACTIVE_BG);
}

#[test]
fn test_query_is_marked_inside_labels() {
    let mut controller = MentionsController::default();
    typed(&mut controller, "/ja");

    let (area, _, terminal) = render(&controller);
    let area = area.unwrap();
    let buffer = terminal.backend().buffer();

    // " ► Jack": label starts four cells into the row
    let row = area.y + 2;
    let j = &buffer[(area.x + 4, row)];
    let c = &buffer[(area.x + 6, row)];
    assert_eq!(j.symbol(), "J");
    assert!(j.modifier.contains(Modifier::UNDERLINED));
    assert_eq!(c.symbol(), "c");
    assert!(!c.modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn test_label_spans_split_on_matches() {
    let base = Style::default();
    let matched = Style::default().fg(MATCH);

    let spans = label_spans("Banana", "an", base, matched);
    let parts: Vec<(&str, bool)> = spans
        .iter()
        .map(|span| (span.content.as_ref(), span.style == matched))
        .collect();

    assert_eq!(parts, vec![("B", false), ("an", true), ("an", true), ("a", false)]);
}

#[test]
fn test_label_spans_without_query() {
    let spans = label_spans("John", "", Style::default(), Style::default());
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content, "John");
}

#[test]
fn snapshot_popup_empty_state() {
    let config = MentionsConfig {
        empty_result_limit: 3,
        ..MentionsConfig::default()
    };
    let mut controller = MentionsController::new(config);
    typed(&mut controller, "/jo");
    typed(&mut controller, "/jox");

    let (_, text, _) = render(&controller);

    assert_snapshot!(text, @r"
    ╭────────────╮
    │ No results │
    ╰────────────╯
    ");
}

#[test]
fn test_active_row_drawn_when_frame_clamps_popup() {
    let groups = vec![MentionGroup::new(
        "G",
        (0..9).map(|i| MentionItem::labeled(format!("Item{}", i))).collect(),
    )];
    let mut controller = MentionsController::default();
    let mut field = TextAreaField::new(TextArea::from(["/".to_string()]));
    field.set_caret(1);
    field.sync_viewport(field_area());
    controller.handle_input(&field, &groups);

    // Ten list rows wanted, five fit below the field
    let (area, _, _) = render(&controller);
    let area = area.unwrap();
    assert_eq!(area.height, 7);
    controller.set_viewport(area.height - 2);

    let now = Instant::now();
    for _ in 0..6 {
        controller.next(now);
    }
    let due = now + Duration::from_millis(10);
    while controller.tick(due) {}

    let (_, text, _) = render(&controller);
    assert!(text.contains("► Item6"), "active row not drawn:\n{}", text);
}
