use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area for a popup hanging off the cell at (`anchor_x`, `anchor_y`).
///
/// The popup opens on the row below the anchor and flips above it when there
/// is more room there. It is shifted left and shrunk as needed to stay
/// inside `bounds`.
pub fn popup_below_anchor(bounds: Rect, anchor_x: u16, anchor_y: u16, width: u16, height: u16) -> Rect {
    let popup_width = width.min(bounds.width);
    let popup_x = anchor_x
        .min(bounds.right().saturating_sub(popup_width))
        .max(bounds.x);

    let below = anchor_y.saturating_add(1).max(bounds.y);
    let space_below = bounds.bottom().saturating_sub(below);
    let space_above = anchor_y.saturating_sub(bounds.y);

    let (popup_y, popup_height) = if height <= space_below || space_below >= space_above {
        (below, height.min(space_below))
    } else {
        let popup_height = height.min(space_above);
        (anchor_y - popup_height, popup_height)
    };

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
