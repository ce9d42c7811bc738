use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{ApiError, ApiRequest};
use crate::app::{App, Focus};

use super::card::ToggleAction;

/// Run a recipe search for the current search text
///
/// Any suggestion list is cleared first. An empty query sends nothing and
/// leaves the results as they are.
pub fn search(app: &mut App) {
    app.suggestions.clear();

    let query = app.input.query().trim().to_string();
    if query.is_empty() {
        return;
    }

    let request_id = app.api.next_request_id();
    let cancel_token = app.recipes.begin_search(request_id, &query);

    #[cfg(debug_assertions)]
    log::debug!("Recipe search {} for {:?}", request_id, query);

    if !app.api.send(ApiRequest::FindRecipes {
        query,
        request_id,
        cancel_token,
    }) {
        app.recipes.apply_search_response(
            request_id,
            Err(ApiError::NotConfigured("API worker is not running".to_string())),
        );
    }
}

/// Activate the instruction toggle of card `index`
pub fn toggle_instructions(app: &mut App, index: usize) {
    let Some(card) = app.recipes.card_mut(index) else {
        return;
    };

    match card.toggle() {
        ToggleAction::Collapsed => {}
        ToggleAction::FetchDetail { recipe_id } => {
            let request_id = app.api.next_request_id();
            card.await_detail(request_id);

            if !app.api.send(ApiRequest::RecipeDetail {
                recipe_id,
                request_id,
            }) {
                card.apply_detail(
                    request_id,
                    Err(ApiError::NotConfigured("API worker is not running".to_string())),
                );
            }
        }
    }
}

pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(index) = app.recipes.selected_card() {
                toggle_instructions(app, index);
            }
        }

        KeyCode::Down | KeyCode::Char('j') => app.recipes.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.recipes.select_previous(),

        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.results_scroll.page_down();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.results_scroll.page_up();
        }
        KeyCode::PageDown => app.results_scroll.page_down(),
        KeyCode::PageUp => app.results_scroll.page_up(),
        KeyCode::Char('J') => app.results_scroll.scroll_down(1),
        KeyCode::Char('K') => app.results_scroll.scroll_up(1),

        KeyCode::Home | KeyCode::Char('g') => {
            app.recipes.select_card(0);
            app.results_scroll.jump_to_top();
        }
        KeyCode::End | KeyCode::Char('G') => {
            let last = app.recipes.cards().len().saturating_sub(1);
            app.recipes.select_card(last);
            app.results_scroll.jump_to_bottom();
        }

        KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Tab => {
            app.focus = Focus::InputField;
        }

        KeyCode::Char('q') => app.should_quit = true,

        _ => {}
    }
}

#[cfg(test)]
#[path = "recipe_events_tests.rs"]
mod recipe_events_tests;
