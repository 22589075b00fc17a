use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{EventDisposition, MentionsController};
use crate::layout::{LayoutRegions, Region, region_at};

impl MentionsController {
    /// Handle a pointer event routed by the regions of the last frame.
    ///
    /// Clicks anywhere but the popup dismiss it and are forwarded. Clicks on
    /// the popup stay with the popup; a left click on an item confirms it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, regions: &LayoutRegions) -> EventDisposition {
        if !self.config.enable {
            return EventDisposition::Forward;
        }

        let in_popup = self.state.visible && region_at(regions, mouse.column, mouse.row) == Some(Region::Popup);

        match mouse.kind {
            MouseEventKind::Down(button) => {
                if !in_popup {
                    self.dismiss();
                    return EventDisposition::Forward;
                }
                if button == MouseButton::Left
                    && let Some(index) = self.index_at(mouse, regions)
                {
                    self.confirm_index(index);
                }
                EventDisposition::Consumed
            }
            MouseEventKind::Moved if in_popup => {
                if let Some(index) = self.index_at(mouse, regions) {
                    self.selection.hover(index);
                }
                EventDisposition::Consumed
            }
            MouseEventKind::ScrollDown if in_popup => {
                self.scroll.scroll_by(1);
                EventDisposition::Consumed
            }
            MouseEventKind::ScrollUp if in_popup => {
                self.scroll.scroll_by(-1);
                EventDisposition::Consumed
            }
            _ if in_popup => EventDisposition::Consumed,
            _ => EventDisposition::Forward,
        }
    }

    /// Candidate under the pointer, accounting for the border and list scroll
    fn index_at(&self, mouse: MouseEvent, regions: &LayoutRegions) -> Option<usize> {
        let popup = regions.popup?;

        let inner_x = popup.x.saturating_add(1);
        let inner_y = popup.y.saturating_add(1);
        let inner_width = popup.width.saturating_sub(2);
        let inner_height = popup.height.saturating_sub(2);

        if mouse.column < inner_x
            || mouse.column >= inner_x.saturating_add(inner_width)
            || mouse.row < inner_y
            || mouse.row >= inner_y.saturating_add(inner_height)
        {
            return None;
        }

        let row = (mouse.row - inner_y).saturating_add(self.scroll.offset());
        self.layout.index_at_row(row)
    }
}
