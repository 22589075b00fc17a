// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::trigger::DEFAULT_TRIGGER;

/// Mentions configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MentionsConfig {
    /// Turns the whole feature on or off
    pub enable: bool,
    /// Keep the popup inside the field's right edge
    pub collision: bool,
    /// Label shown when nothing matches
    pub empty_text: String,
    /// Wrap navigation around at either end of the list
    pub infinite: bool,
    /// Character that opens the popup
    pub trigger: char,
    /// Consecutive empty results tolerated before the popup closes
    pub empty_result_limit: u32,
    /// Rows kept between the active item and the popup edge when scrolling
    pub scroll_margin: u16,
    /// Most list rows shown before the popup scrolls
    pub max_visible_rows: u16,
    /// Delay before scrolling the active item into view
    pub settle_delay_ms: u64,
    /// How long pointer hover is ignored after a keyboard move
    pub hover_lock_ms: u64,
}

impl Default for MentionsConfig {
    fn default() -> Self {
        MentionsConfig {
            enable: true,
            collision: false,
            empty_text: "No results".to_string(),
            infinite: true,
            trigger: DEFAULT_TRIGGER,
            empty_result_limit: 2,
            scroll_margin: 1,
            max_visible_rows: 10,
            settle_delay_ms: 10,
            hover_lock_ms: 1000,
        }
    }
}

impl MentionsConfig {
    /// Trigger character, falling back to the default for whitespace
    pub fn trigger(&self) -> char {
        if self.trigger.is_whitespace() {
            DEFAULT_TRIGGER
        } else {
            self.trigger
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn hover_lock(&self) -> Duration {
        Duration::from_millis(self.hover_lock_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub mentions: MentionsConfig,
}
