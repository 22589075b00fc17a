#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::mentions::{MentionGroup, MentionItem};

    /// A single "Friends" group: John, Jack, Tom
    pub fn friends() -> Vec<MentionGroup> {
        vec![MentionGroup::new(
            "Friends",
            vec![
                MentionItem::labeled("John"),
                MentionItem::labeled("Jack"),
                MentionItem::labeled("Tom"),
            ],
        )]
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }
}
