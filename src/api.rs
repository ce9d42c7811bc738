//! Recipe API access
//!
//! The UI never performs network I/O itself. Components allocate a request id
//! from [`ApiChannel`], send an [`ApiRequest`] to the worker thread, and later
//! receive the matching [`ApiResponse`] when the event loop drains the channel.

mod channel;
pub mod client;
mod messages;
pub mod types;
pub mod worker;

pub use channel::ApiChannel;
pub use client::ApiError;
pub use messages::{ApiRequest, ApiResponse};
pub use types::{IngredientSuggestion, RecipeDetail, RecipeSummary};
