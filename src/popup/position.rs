use crate::field::{CaretCoordinates, ScrollOffset};

/// Where the popup hangs, in cells relative to the field's content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub top: u16,
    pub left: u16,
}

/// Place the popup at the caret, compensating for the field's scroll.
///
/// With `collision` on, a popup that would overflow the right edge of the
/// field is pulled back so its right edge lines up with the field's.
pub fn position(
    caret: CaretCoordinates,
    scroll: ScrollOffset,
    field_width: u16,
    popup_width: u16,
    collision: bool,
) -> Anchor {
    let top = caret.top.saturating_sub(scroll.top);
    let left = caret.left.saturating_sub(scroll.left);

    let left = if collision && left.saturating_add(popup_width) > field_width {
        field_width.saturating_sub(popup_width)
    } else {
        left
    };

    Anchor { top, left }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caret(top: u16, left: u16) -> CaretCoordinates {
        CaretCoordinates { top, left }
    }

    fn scrolled(top: u16, left: u16) -> ScrollOffset {
        ScrollOffset { top, left }
    }

    #[test]
    fn test_position_at_caret_without_scroll() {
        let anchor = position(caret(2, 7), ScrollOffset::default(), 80, 20, false);
        assert_eq!(anchor, Anchor { top: 2, left: 7 });
    }

    #[test]
    fn test_position_subtracts_scroll_offset() {
        let anchor = position(caret(12, 30), scrolled(10, 25), 80, 20, false);
        assert_eq!(anchor, Anchor { top: 2, left: 5 });
    }

    #[test]
    fn test_collision_pulls_popup_inside_field() {
        let anchor = position(caret(0, 70), ScrollOffset::default(), 80, 20, true);
        assert_eq!(anchor.left, 60);
    }

    #[test]
    fn test_overflow_ignored_without_collision() {
        let anchor = position(caret(0, 70), ScrollOffset::default(), 80, 20, false);
        assert_eq!(anchor.left, 70);
    }

    #[test]
    fn test_collision_with_exact_fit_keeps_caret_column() {
        let anchor = position(caret(0, 60), ScrollOffset::default(), 80, 20, true);
        assert_eq!(anchor.left, 60);
    }

    #[test]
    fn test_collision_with_popup_wider_than_field() {
        let anchor = position(caret(0, 5), ScrollOffset::default(), 10, 30, true);
        assert_eq!(anchor.left, 0);
    }
}
