//! Small rendering helpers shared by the popups and panes.

pub mod popup;
pub mod scrollbar;
