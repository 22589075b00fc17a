//! Mentions popup: row layout, anchoring and drawing

mod layout;
mod position;
pub mod render;

pub use layout::{ITEM_PREFIX_WIDTH, PopupLayout, PopupRow, popup_size};
pub use position::{Anchor, position};
pub use render::render_popup;
