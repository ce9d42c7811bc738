use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::api::ApiRequest;
use crate::app::App;

/// Re-evaluate suggestions after the search text changed
///
/// An empty query clears the list without touching the network; anything
/// else issues exactly one autocomplete request.
pub fn refresh_suggestions(app: &mut App) {
    let query = app.input.query().trim().to_string();
    if query.is_empty() {
        app.suggestions.clear();
        return;
    }

    let request_id = app.api.next_request_id();
    let cancel_token = app.suggestions.begin_request(request_id);

    #[cfg(debug_assertions)]
    log::debug!("Suggest request {} for {:?}", request_id, query);

    if !app.api.send(ApiRequest::Suggest {
        query,
        request_id,
        cancel_token,
    }) {
        app.suggestions.abandon_request(request_id);
    }
}

/// Use suggestion `index` as the query and search with it
pub fn accept_suggestion(app: &mut App, index: usize) {
    let Some(name) = app.suggestions.items().get(index).map(|s| s.name.clone()) else {
        return;
    };

    app.input.set_query(&name);
    app.suggestions.clear();
    app.search_recipes();
}

/// Keys handled while the suggestion list is showing; returns true if consumed
pub fn handle_suggestion_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.suggestions.is_visible() {
        return false;
    }

    match key.code {
        KeyCode::Down => {
            app.suggestions.select_next();
            true
        }
        KeyCode::Up => {
            app.suggestions.select_previous();
            true
        }
        KeyCode::Tab => {
            let index = app.suggestions.selected_index().unwrap_or(0);
            accept_suggestion(app, index);
            true
        }
        KeyCode::Enter => match app.suggestions.selected_index() {
            Some(index) => {
                accept_suggestion(app, index);
                true
            }
            None => false,
        },
        KeyCode::Esc => {
            app.suggestions.clear();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "suggestion_events_tests.rs"]
mod suggestion_events_tests;
