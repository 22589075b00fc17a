//! Mention data and matching
//!
//! Groups of labeled items supplied by the embedding application, the
//! substring matcher that narrows them down for the active query, and the
//! JSON loader used by the demo.

mod item;
pub mod matcher;
mod source;

pub use item::{MentionGroup, MentionItem, MentionValue};
pub use matcher::{candidate_count, filter, flatten, highlight_ranges};
pub use source::{load_groups_from_path, parse_groups_json};
