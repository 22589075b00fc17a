//! Selection state machine for the mentions popup
//!
//! Tracks the active candidate, handles wraparound or clamped navigation and
//! keeps the active row scrolled into view.

mod scroll;
mod state;

pub use scroll::{PopupScroll, ScrollBehavior};
pub use state::SelectionState;
