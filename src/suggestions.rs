//! Ingredient suggestions shown while the user types.

pub mod suggestion_events;
pub mod suggestion_render;
mod suggestion_state;

pub use suggestion_state::SuggestionState;
