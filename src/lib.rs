//! Trigger-character mention suggestions for terminal text areas.
//!
//! Typing the trigger character (`/` by default) in a [`field::HostField`]
//! opens a popup of grouped suggestions filtered by the text after the
//! trigger. [`MentionsController`] owns the interaction: feed it the field
//! after each edit, route keys and pointer events through it, and draw it with
//! [`popup::render_popup`].

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod layout;
pub mod logging;
pub mod mentions;
pub mod popup;
pub mod selection;
pub mod timer;
pub mod trigger;
pub mod widgets;

mod test_utils;

pub use config::{Config, MentionsConfig};
pub use controller::{EventDisposition, MentionSelection, MentionsController, MentionsState, SelectCallback};
pub use error::MentionsError;
pub use field::{HostField, TextAreaField, splice_selection};
pub use mentions::{MentionGroup, MentionItem, MentionValue};
pub use trigger::CaretRange;
