//! Mouse click handling
//!
//! Clicks move focus, press the search button, pick suggestions and toggle
//! recipe instructions.

use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use super::app_state::{App, Focus};
use crate::layout::Region;
use crate::recipes::recipe_events;
use crate::suggestions::suggestion_events;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if app.welcome.is_visible() {
        app.welcome.dismiss();
        return;
    }

    // Dismiss help popup if clicking outside it
    if app.help.visible && region != Some(Region::HelpPopup) {
        app.help.close();
        return;
    }

    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::SearchButton) => {
            app.focus = Focus::InputField;
            app.search_recipes();
        }
        Some(Region::InputField) => click_input_field(app, mouse),
        Some(Region::ResultsPane) => click_results_pane(app, mouse),
        Some(Region::HelpPopup) | Some(Region::WelcomePopup) | None => {}
    }
}

/// Position of the click inside the bordered `rect`, if it lands inside
fn inner_position(rect: Rect, mouse: MouseEvent) -> Option<(u16, u16)> {
    let inner_x = rect.x.saturating_add(1);
    let inner_y = rect.y.saturating_add(1);
    let inner_width = rect.width.saturating_sub(2);
    let inner_height = rect.height.saturating_sub(2);

    if mouse.column < inner_x
        || mouse.column >= inner_x.saturating_add(inner_width)
        || mouse.row < inner_y
        || mouse.row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    Some((mouse.column - inner_x, mouse.row - inner_y))
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(rect) = app.layout_regions.suggestions else {
        return;
    };
    let Some((_, relative_y)) = inner_position(rect, mouse) else {
        return;
    };

    let first = crate::suggestions::suggestion_render::first_visible(
        app.suggestions.selected_index(),
        app.suggestions.items().len(),
    );
    suggestion_events::accept_suggestion(app, first + relative_y as usize);
}

fn click_input_field(app: &mut App, mouse: MouseEvent) {
    app.focus = Focus::InputField;

    let Some(input_rect) = app.layout_regions.input_field else {
        return;
    };
    let Some((relative_x, _)) = inner_position(input_rect, mouse) else {
        return;
    };

    let target_col = app.input.scroll_offset + relative_x as usize;
    app.input.set_cursor_column(target_col);
}

fn click_results_pane(app: &mut App, mouse: MouseEvent) {
    if app.focus == Focus::InputField {
        app.suggestions.clear();
    }
    app.focus = Focus::ResultsPane;

    let Some(results_rect) = app.layout_regions.results_pane else {
        return;
    };
    let Some((relative_x, relative_y)) = inner_position(results_rect, mouse) else {
        return;
    };

    let clicked_line = app.results_scroll.offset as u32 + relative_y as u32;
    let Some(index) = app.recipes.card_at_line(clicked_line) else {
        return;
    };
    app.recipes.select_card(index);

    let span = app.recipes.card_spans[index];
    let button_start = 2;
    if clicked_line == span.button_line
        && relative_x >= button_start
        && relative_x < button_start + span.button_width
    {
        recipe_events::toggle_instructions(app, index);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
