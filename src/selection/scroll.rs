//! Scroll-into-view for the popup's scrollable list

/// How the list moves to reveal the active row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset
    Auto,
    /// Step one row per tick toward the target offset
    Smooth,
}

impl ScrollBehavior {
    /// First and last candidates jump; everything in between scrolls smoothly
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 || index + 1 >= len {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupScroll {
    offset: u16,
    target: u16,
    content_height: u16,
    viewport_height: u16,
    margin: u16,
}

impl PopupScroll {
    pub fn new(margin: u16) -> Self {
        Self {
            margin,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn update_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
        self.target = self.target.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.target = 0;
    }

    /// Bring the row span `item_top..item_top + item_height` into view.
    ///
    /// Rows below the viewport are revealed with `margin` rows to spare,
    /// rows above it with `margin` rows of headroom. Returns whether a
    /// scroll was started.
    pub fn scroll_into_view(&mut self, item_top: u16, item_height: u16, behavior: ScrollBehavior) -> bool {
        if self.viewport_height == 0 {
            return false;
        }

        let item_bottom = item_top.saturating_add(item_height);
        let visible_bottom = self.offset.saturating_add(self.viewport_height);

        let target = if item_bottom > visible_bottom {
            item_bottom - self.viewport_height + self.margin
        } else if item_top < self.offset {
            item_top.saturating_sub(self.margin)
        } else {
            return false;
        };

        self.target = target.min(self.max_offset());
        if behavior == ScrollBehavior::Auto {
            self.offset = self.target;
        }
        true
    }

    /// Advance a smooth scroll by one row. Returns whether the offset moved.
    pub fn step(&mut self) -> bool {
        if self.offset < self.target {
            self.offset += 1;
            true
        } else if self.offset > self.target {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Scroll by a row delta (mouse wheel), cancelling any animation
    pub fn scroll_by(&mut self, rows: i32) {
        let next = (self.offset as i32 + rows).clamp(0, self.max_offset() as i32);
        self.offset = next as u16;
        self.target = self.offset;
    }
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod scroll_tests;
