//! Layout module for tracking UI component regions
//!
//! The host records where the field and the popup were drawn on every frame.
//! Pointer events are routed by hit testing those regions, which is how a
//! click outside the popup is told apart from a click inside it.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
