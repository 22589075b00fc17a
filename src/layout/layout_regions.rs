use ratatui::layout::Rect;

/// Component that can receive pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Field,
    Popup,
}

/// Screen areas of the last drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRegions {
    pub field: Option<Rect>,
    pub popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.field = None;
        self.popup = None;
    }
}
