//! Row model of the mentions popup
//!
//! Groups are laid out top to bottom: a divider between groups, the group
//! title, then one row per item. An empty candidate list gets a single
//! empty-state row instead.

use unicode_width::UnicodeWidthStr;

use crate::mentions::MentionGroup;

/// Width reserved in front of every item for the active marker
pub const ITEM_PREFIX_WIDTH: u16 = 2;
/// Borders plus one column of padding on each side
const POPUP_HORIZONTAL_CHROME: u16 = 4;
const POPUP_BORDER_HEIGHT: u16 = 2;
const MAX_POPUP_WIDTH: u16 = 48;
const MIN_POPUP_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRow {
    Divider,
    Title { group: usize },
    Item { group: usize, item: usize, index: usize },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupLayout {
    rows: Vec<PopupRow>,
}

impl PopupLayout {
    pub fn build(groups: &[MentionGroup]) -> Self {
        let mut rows = Vec::new();
        let mut index = 0;

        for (group_idx, group) in groups.iter().enumerate() {
            if group_idx > 0 {
                rows.push(PopupRow::Divider);
            }
            rows.push(PopupRow::Title { group: group_idx });
            for item_idx in 0..group.items.len() {
                rows.push(PopupRow::Item {
                    group: group_idx,
                    item: item_idx,
                    index,
                });
                index += 1;
            }
        }

        if index == 0 {
            rows.push(PopupRow::Empty);
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[PopupRow] {
        &self.rows
    }

    pub fn height(&self) -> u16 {
        self.rows.len().min(u16::MAX as usize) as u16
    }

    /// Row holding the candidate at `index`
    pub fn item_row(&self, index: usize) -> Option<u16> {
        self.rows
            .iter()
            .position(|row| matches!(row, PopupRow::Item { index: i, .. } if *i == index))
            .map(|row| row as u16)
    }

    /// Candidate index shown on `row`, if that row is an item
    pub fn index_at_row(&self, row: u16) -> Option<usize> {
        match self.rows.get(row as usize) {
            Some(PopupRow::Item { index, .. }) => Some(*index),
            _ => None,
        }
    }
}

/// Outer popup size for the given groups, borders included
pub fn popup_size(
    layout: &PopupLayout,
    groups: &[MentionGroup],
    empty_text: &str,
    max_visible_rows: u16,
) -> (u16, u16) {
    let content_width = groups
        .iter()
        .flat_map(|group| {
            std::iter::once(group.title.width()).chain(
                group
                    .items
                    .iter()
                    .map(|item| item.label.width() + ITEM_PREFIX_WIDTH as usize),
            )
        })
        .chain(std::iter::once(empty_text.width()))
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;

    let width = (content_width + POPUP_HORIZONTAL_CHROME).clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let height = layout.height().min(max_visible_rows.max(1)) + POPUP_BORDER_HEIGHT;

    (width, height)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
