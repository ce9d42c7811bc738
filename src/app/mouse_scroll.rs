//! Mouse scroll handling
//!
//! Routes scroll events to the component under the cursor.

use super::app_state::App;
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

const RESULTS_SCROLL_LINES: u16 = 3;
const HELP_SCROLL_LINES: u16 = 3;

/// Handle scroll event for the given region
///
/// Falls back to the results pane when the cursor is outside all regions.
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    if app.help.visible {
        scroll_help(app, direction);
        return;
    }

    match region {
        Some(Region::ResultsPane) | None => scroll_results(app, direction),
        Some(Region::Suggestions) => match direction {
            ScrollDirection::Up => app.suggestions.select_previous(),
            ScrollDirection::Down => app.suggestions.select_next(),
        },
        Some(Region::HelpPopup)
        | Some(Region::WelcomePopup)
        | Some(Region::InputField)
        | Some(Region::SearchButton) => {}
    }
}

fn scroll_results(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.results_scroll.scroll_up(RESULTS_SCROLL_LINES),
        ScrollDirection::Down => app.results_scroll.scroll_down(RESULTS_SCROLL_LINES),
    }
}

fn scroll_help(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.help.scroll.scroll_up(HELP_SCROLL_LINES),
        ScrollDirection::Down => app.help.scroll.scroll_down(HELP_SCROLL_LINES),
    }
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
