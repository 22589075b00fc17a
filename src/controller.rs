//! Mentions controller
//!
//! Glue between the host field and the popup: re-scans the text on every
//! change, filters the groups for the active query, drives the selection and
//! hands confirmed items back to the embedding application.

use std::fmt;
use std::time::Instant;

use crate::config::MentionsConfig;
use crate::field::HostField;
use crate::layout::LayoutRegions;
use crate::mentions::{self, MentionGroup, MentionItem};
use crate::popup::{Anchor, PopupLayout, popup_size, position};
use crate::selection::{PopupScroll, ScrollBehavior, SelectionState};
use crate::timer::DeferredSlot;
use crate::trigger::{self, CaretRange};

mod key_events;
mod mouse_events;

/// Called once per confirmed selection with the item and the span of the
/// trigger and query it should replace
pub type SelectCallback = Box<dyn FnMut(&MentionItem, Option<CaretRange>)>;

/// Whether the host should still apply an event to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Consumed,
    Forward,
}

/// A confirmed pick, kept until the host takes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSelection {
    pub item: MentionItem,
    pub range: Option<CaretRange>,
}

/// Per-interaction trigger state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MentionsState {
    pub query: String,
    /// Offset of the trigger character
    pub left_boundary: Option<usize>,
    pub caret: Option<usize>,
    pub visible: bool,
    pub anchor: Anchor,
    /// Consecutive updates that matched nothing
    pub empty_streak: u32,
}

impl MentionsState {
    pub fn caret_range(&self) -> Option<CaretRange> {
        self.left_boundary.map(|start| CaretRange {
            start,
            end: start + self.query.chars().count(),
        })
    }
}

pub struct MentionsController {
    config: MentionsConfig,
    state: MentionsState,
    candidates: Vec<MentionGroup>,
    layout: PopupLayout,
    selection: SelectionState,
    scroll: PopupScroll,
    pending_scroll: DeferredSlot<usize>,
    confirmed: Option<MentionSelection>,
    on_select: Option<SelectCallback>,
}

impl fmt::Debug for MentionsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionsController")
            .field("state", &self.state)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Default for MentionsController {
    fn default() -> Self {
        Self::new(MentionsConfig::default())
    }
}

impl MentionsController {
    pub fn new(config: MentionsConfig) -> Self {
        let selection = SelectionState::new(config.infinite, config.hover_lock());
        let scroll = PopupScroll::new(config.scroll_margin);

        Self {
            config,
            state: MentionsState::default(),
            candidates: Vec::new(),
            layout: PopupLayout::default(),
            selection,
            scroll,
            pending_scroll: DeferredSlot::new(),
            confirmed: None,
            on_select: None,
        }
    }

    pub fn with_on_select(mut self, callback: impl FnMut(&MentionItem, Option<CaretRange>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn set_on_select(&mut self, callback: Option<SelectCallback>) {
        self.on_select = callback;
    }

    pub fn config(&self) -> &MentionsConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enable
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn state(&self) -> &MentionsState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn anchor(&self) -> Anchor {
        self.state.anchor
    }

    pub fn caret_range(&self) -> Option<CaretRange> {
        self.state.caret_range()
    }

    /// Filtered groups currently shown
    pub fn candidates(&self) -> &[MentionGroup] {
        &self.candidates
    }

    pub fn candidate_count(&self) -> usize {
        self.selection.len()
    }

    pub fn active_index(&self) -> usize {
        self.selection.index()
    }

    pub fn active_item(&self) -> Option<&MentionItem> {
        let items = mentions::flatten(&self.candidates);
        self.selection.select(&items).copied()
    }

    pub fn layout(&self) -> &PopupLayout {
        &self.layout
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn empty_text(&self) -> &str {
        &self.config.empty_text
    }

    /// Outer popup size, borders included
    pub fn popup_size(&self) -> (u16, u16) {
        popup_size(
            &self.layout,
            &self.candidates,
            &self.config.empty_text,
            self.config.max_visible_rows,
        )
    }

    /// Screen area of the popup from the last drawn frame
    pub fn bounding_area(&self, regions: &LayoutRegions) -> Option<ratatui::layout::Rect> {
        if self.state.visible { regions.popup } else { None }
    }

    /// Match the scroll model to the list rows actually drawn.
    ///
    /// The popup can be drawn shorter than `max_visible_rows` when the frame
    /// has no room, so the host reports the drawn inner height after each
    /// render. The active row is kept in view.
    pub fn set_viewport(&mut self, rows: u16) {
        if rows == self.scroll.viewport_height() {
            return;
        }
        self.scroll.update_bounds(self.layout.height(), rows);

        if !self.selection.is_empty()
            && let Some(row) = self.layout.item_row(self.selection.index())
        {
            self.scroll.scroll_into_view(row, 1, ScrollBehavior::Auto);
        }
    }

    /// Recompute the trigger state after the field's text or caret changed
    pub fn handle_input(&mut self, field: &dyn HostField, groups: &[MentionGroup]) {
        if !self.config.enable {
            return;
        }

        let text = field.value();
        let scan = trigger::scan(&text, field.caret(), self.config.trigger());

        match (self.state.visible, scan.active) {
            (false, true) => {
                let candidates = mentions::filter(&scan.query, groups);
                if mentions::candidate_count(&candidates) == 0 {
                    return;
                }

                self.set_candidates(candidates);
                let (popup_width, _) = self.popup_size();
                let anchor = measure_anchor(field, scan.left_boundary + 1, popup_width, self.config.collision)
                    .unwrap_or(self.state.anchor);

                log::debug!(
                    "Opening mentions for query {:?} with {} candidates",
                    scan.query,
                    self.selection.len()
                );

                self.state = MentionsState {
                    query: scan.query,
                    left_boundary: Some(scan.left_boundary),
                    caret: Some(scan.caret),
                    visible: true,
                    anchor,
                    empty_streak: 0,
                };
            }
            (true, true) => {
                let candidates = mentions::filter(&scan.query, groups);

                if mentions::candidate_count(&candidates) == 0 {
                    self.state.empty_streak += 1;
                } else {
                    self.state.empty_streak = 0;
                }

                if self.state.empty_streak >= self.config.empty_result_limit.max(1) {
                    log::debug!("No mentions for {:?}, closing", scan.query);
                    self.dismiss();
                    return;
                }

                self.set_candidates(candidates);
                self.state.query = scan.query;
                self.state.left_boundary = Some(scan.left_boundary);
                self.state.caret = Some(scan.caret);
            }
            (true, false) => self.dismiss(),
            (false, false) => {}
        }
    }

    /// Re-filter the open popup against a new set of groups
    pub fn refresh(&mut self, groups: &[MentionGroup]) {
        if !self.state.visible {
            return;
        }
        let candidates = mentions::filter(&self.state.query, groups);
        self.set_candidates(candidates);
    }

    pub fn next(&mut self, now: Instant) {
        if !self.state.visible {
            return;
        }
        if let Some(index) = self.selection.next(now) {
            self.pending_scroll.schedule(now, self.config.settle_delay(), index);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if !self.state.visible {
            return;
        }
        if let Some(index) = self.selection.prev(now) {
            self.pending_scroll.schedule(now, self.config.settle_delay(), index);
        }
    }

    /// Confirm the active candidate
    pub fn select(&mut self) -> Option<MentionSelection> {
        if !self.state.visible {
            return None;
        }
        let item = self.active_item()?.clone();
        Some(self.finish_selection(item))
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Hide the popup and forget the trigger state
    pub fn dismiss(&mut self) {
        if self.state.visible {
            log::debug!("Dismissing mentions");
        }
        self.state = MentionsState::default();
        self.set_candidates(Vec::new());
    }

    /// Most recent confirmed selection, if the host has not taken it yet
    pub fn take_selection(&mut self) -> Option<MentionSelection> {
        self.confirmed.take()
    }

    /// Run deferred work that has come due. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.selection.tick(now);

        if let Some(index) = self.pending_scroll.take_due(now)
            && let Some(row) = self.layout.item_row(index)
        {
            let behavior = ScrollBehavior::for_index(index, self.selection.len());
            changed |= self.scroll.scroll_into_view(row, 1, behavior);
        }

        changed |= self.scroll.step();
        changed
    }

    fn confirm_index(&mut self, index: usize) -> Option<MentionSelection> {
        let item = mentions::flatten(&self.candidates).get(index).map(|item| (*item).clone())?;
        Some(self.finish_selection(item))
    }

    fn finish_selection(&mut self, item: MentionItem) -> MentionSelection {
        let range = self.state.caret_range();
        log::debug!("Selected mention {:?} for range {:?}", item.label, range);

        if let Some(callback) = self.on_select.as_mut() {
            callback(&item, range);
        }

        let selection = MentionSelection { item, range };
        self.confirmed = Some(selection.clone());
        self.dismiss();
        selection
    }

    fn set_candidates(&mut self, candidates: Vec<MentionGroup>) {
        self.layout = PopupLayout::build(&candidates);
        self.selection.set_len(mentions::candidate_count(&candidates));
        self.candidates = candidates;

        let viewport = self.layout.height().min(self.config.max_visible_rows.max(1));
        self.scroll.reset();
        self.scroll.update_bounds(self.layout.height(), viewport);
        self.pending_scroll.cancel();
    }
}

/// Anchor for a popup opened at `offset`, or `None` if the field cannot be
/// measured
fn measure_anchor(field: &dyn HostField, offset: usize, popup_width: u16, collision: bool) -> Option<Anchor> {
    let caret = field.caret_coordinates(offset)?;
    Some(position(caret, field.scroll_offset(), field.width(), popup_width, collision))
}
