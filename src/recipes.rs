//! Recipe search results and the per-card instruction toggle.

pub mod card;
pub mod instructions;
pub mod recipe_events;
pub mod recipe_render;
pub mod recipe_state;

pub use recipe_state::RecipeState;
