use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use textarea_mentions::controller::EventDisposition;
use textarea_mentions::field::HostField;
use textarea_mentions::layout::{Region, region_at};
use tui_textarea::CursorMove;

use super::app_state::App;

impl App {
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only presses, so held keys on some terminals don't double up
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                self.field.textarea.insert_str(text);
                self.sync_mentions();
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.mentions.handle_key(key, now) == EventDisposition::Consumed {
            self.apply_selection();
            return;
        }

        let (value, caret) = (self.field.value(), self.field.caret());
        self.field.textarea.input(key);

        // Only edits open the popup; caret moves just update or close an open one
        let edited = self.field.value() != value;
        let moved = self.field.caret() != caret;
        if edited || (moved && self.mentions.is_visible()) {
            self.sync_mentions();
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mentions.handle_mouse(mouse, &self.regions) == EventDisposition::Consumed {
            self.apply_selection();
            return;
        }

        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && region_at(&self.regions, mouse.column, mouse.row) == Some(Region::Field)
        {
            self.click_field(mouse.column, mouse.row);
        }
    }

    /// Move the caret to the clicked cell
    fn click_field(&mut self, column: u16, row: u16) {
        let Some(area) = self.regions.field else {
            return;
        };

        let scroll = self.field.scroll_offset();
        let row = row.saturating_sub(area.y).saturating_add(scroll.top);
        let col = column.saturating_sub(area.x).saturating_add(scroll.left);

        // Clicks only move the caret; the controller has already dismissed
        self.field.textarea.move_cursor(CursorMove::Jump(row, col));
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
