use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::{EventDisposition, MentionsController};

impl MentionsController {
    /// Handle a key press before the field sees it
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> EventDisposition {
        if !self.config.enable {
            return EventDisposition::Forward;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down => {
                if !self.state.visible {
                    return EventDisposition::Forward;
                }
                if key.code == KeyCode::Up {
                    self.prev(now);
                } else {
                    self.next(now);
                }
                EventDisposition::Consumed
            }
            KeyCode::Tab | KeyCode::Enter => {
                if !self.state.visible {
                    return EventDisposition::Forward;
                }
                // Swallowed even with nothing to pick so the field doesn't get a newline
                if !self.selection.is_empty() {
                    self.select();
                }
                EventDisposition::Consumed
            }
            KeyCode::Esc => {
                self.dismiss();
                EventDisposition::Forward
            }
            _ => EventDisposition::Forward,
        }
    }
}
