use std::time::Instant;

use ratatui::style::{Color, Style};
use textarea_mentions::config::MentionsConfig;
use textarea_mentions::controller::MentionsController;
use textarea_mentions::field::{HostField, TextAreaField, splice_selection};
use textarea_mentions::layout::LayoutRegions;
use textarea_mentions::mentions::{MentionGroup, MentionItem};
use tui_textarea::TextArea;

/// Demo application state
pub struct App {
    pub field: TextAreaField,
    pub mentions: MentionsController,
    pub groups: Vec<MentionGroup>,
    /// Where the field and popup were drawn last frame
    pub regions: LayoutRegions,
    /// Last inserted mention, shown under the field
    pub status: Option<String>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(config: MentionsConfig, groups: Vec<MentionGroup>) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(format!("Type {} to mention someone", config.trigger()));
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            field: TextAreaField::new(textarea),
            mentions: MentionsController::new(config),
            groups,
            regions: LayoutRegions::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text currently in the field
    pub fn text(&self) -> String {
        self.field.value()
    }

    pub fn tick(&mut self, now: Instant) {
        self.mentions.tick(now);
    }

    /// Let the controller re-read the field after an edit or caret move
    pub(super) fn sync_mentions(&mut self) {
        self.mentions.handle_input(&self.field, &self.groups);
    }

    /// Splice a confirmed mention into the field
    pub(super) fn apply_selection(&mut self) {
        let Some(selection) = self.mentions.take_selection() else {
            return;
        };

        let trigger = self.mentions.config().trigger();
        if let Some(range) = selection.range
            && splice_selection(&mut self.field, &selection.item, range, trigger)
        {
            self.status = Some(format!("Mentioned {}", selection.item.label));
        }
    }
}

/// Groups shown when no `--mentions` file is given
pub fn sample_groups() -> Vec<MentionGroup> {
    vec![
        MentionGroup::new(
            "Friends",
            vec![
                MentionItem::labeled("John"),
                MentionItem::labeled("Jack"),
                MentionItem::labeled("Tom"),
            ],
        ),
        MentionGroup::new(
            "Teams",
            vec![
                MentionItem::new("Core team", "@core"),
                MentionItem::new("Infra", "@infra"),
            ],
        ),
    ]
}
