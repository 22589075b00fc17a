//! Mentions popup rendering
//!
//! Draws the filtered groups under the caret: group titles, a divider between
//! groups, the active item highlighted and the query marked inside every
//! label.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::layout::PopupRow;
use crate::controller::MentionsController;
use crate::mentions::highlight_ranges;
use crate::widgets::popup;

const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";

const BORDER: Color = Color::Cyan;
const BACKGROUND: Color = Color::Black;
const TITLE: Color = Color::DarkGray;
const ITEM: Color = Color::White;
const ITEM_ACTIVE_FG: Color = Color::Black;
const ITEM_ACTIVE_BG: Color = Color::Cyan;
const MATCH: Color = Color::Yellow;
const EMPTY: Color = Color::Gray;

/// Render the popup below the caret anchor inside `field_area`
///
/// Returns the popup area for region tracking.
pub fn render_popup(controller: &MentionsController, frame: &mut Frame, field_area: Rect) -> Option<Rect> {
    if !controller.is_visible() {
        return None;
    }

    let (width, height) = controller.popup_size();
    let anchor = controller.anchor();
    let popup_area = popup::popup_below_anchor(
        frame.area(),
        field_area.x.saturating_add(anchor.left),
        field_area.y.saturating_add(anchor.top),
        width,
        height,
    );
    if popup_area.is_empty() {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let inner_width = popup_area.width.saturating_sub(2) as usize;
    let viewport = popup_area.height.saturating_sub(2) as usize;
    let lines = popup_lines(controller, inner_width, viewport);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(BACKGROUND));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    Some(popup_area)
}

fn popup_lines(controller: &MentionsController, inner_width: usize, viewport: usize) -> Vec<Line<'static>> {
    let groups = controller.candidates();
    let offset = controller.scroll_offset() as usize;

    controller
        .layout()
        .rows()
        .iter()
        .skip(offset)
        .take(viewport)
        .map(|row| match *row {
            PopupRow::Divider => Line::from(Span::styled(
                "─".repeat(inner_width),
                Style::default().fg(TITLE),
            )),
            PopupRow::Title { group } => Line::from(Span::styled(
                format!(" {}", groups[group].title),
                Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
            )),
            PopupRow::Item { group, item, index } => item_line(
                &groups[group].items[item].label,
                controller.query(),
                index == controller.active_index(),
                inner_width,
            ),
            PopupRow::Empty => Line::from(Span::styled(
                format!(" {}", controller.empty_text()),
                Style::default().fg(EMPTY).add_modifier(Modifier::ITALIC),
            )),
        })
        .collect()
}

fn item_line(label: &str, query: &str, active: bool, inner_width: usize) -> Line<'static> {
    let (base, marker) = if active {
        (
            Style::default()
                .fg(ITEM_ACTIVE_FG)
                .bg(ITEM_ACTIVE_BG)
                .add_modifier(Modifier::BOLD),
            ACTIVE_MARKER,
        )
    } else {
        (Style::default().fg(ITEM), INACTIVE_MARKER)
    };
    let matched = if active {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base.fg(MATCH).add_modifier(Modifier::UNDERLINED)
    };

    let mut spans = vec![Span::styled(format!(" {}", marker), base)];
    spans.extend(label_spans(label, query, base, matched));

    let used = 1 + marker.chars().count() + unicode_width::UnicodeWidthStr::width(label);
    if used < inner_width {
        spans.push(Span::styled(" ".repeat(inner_width - used), base));
    }

    Line::from(spans)
}

/// Split `label` into plain and matched spans
fn label_spans(label: &str, query: &str, base: Style, matched: Style) -> Vec<Span<'static>> {
    let chars: Vec<char> = label.chars().collect();
    let mut spans = Vec::new();
    let mut cursor = 0;

    for range in highlight_ranges(label, query) {
        if range.start > cursor {
            spans.push(Span::styled(chars[cursor..range.start].iter().collect::<String>(), base));
        }
        spans.push(Span::styled(chars[range.clone()].iter().collect::<String>(), matched));
        cursor = range.end;
    }

    if cursor < chars.len() {
        spans.push(Span::styled(chars[cursor..].iter().collect::<String>(), base));
    }

    spans
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
