//! larder library - find recipes by ingredient from the terminal
//!
//! This library exposes the core functionality of larder for testing purposes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod notification;
pub mod recipes;
pub mod scroll;
pub mod suggestions;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod visit;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
