//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were drawn on the last frame, and
//! `region_at()` maps a screen position back to the component under it.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
