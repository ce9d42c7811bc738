//! First-visit tracking and the welcome screen shown on a first launch.

mod storage;
mod welcome_render;
mod welcome_state;

pub use storage::VisitTracker;
pub use welcome_render::render_popup;
pub use welcome_state::WelcomeState;
