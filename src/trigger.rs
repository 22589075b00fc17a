//! Trigger detection
//!
//! Finds the mention token under the caret. Runs on every text change since
//! edits shift offsets even when the caret itself does not move.

mod scanner;

pub use scanner::{CaretRange, DEFAULT_TRIGGER, TriggerScan, scan};
