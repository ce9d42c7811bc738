mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_events;
mod mouse_scroll;


pub use app_state::{App, Focus};
