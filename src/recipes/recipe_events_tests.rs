use super::*;
use crate::api::{ApiResponse, RecipeDetail, RecipeSummary};
use crate::app::App;
use crate::recipes::card::ToggleLabel;
use crate::recipes::recipe_state::{RecipeResults, SEARCH_ERROR_MESSAGE};
use crate::test_utils::test_helpers::{
    TestWorker, app_with_recipes, key, key_with_mods, render_to_string, summary, test_app,
};

fn three_cards() -> (App, TestWorker) {
    let (mut app, mut worker) = app_with_recipes(
        "rice",
        vec![
            summary(11, "Fried Rice", &["2 cups rice"]),
            summary(12, "Rice Pudding", &["1 cup rice", "milk"]),
            summary(13, "Risotto", &["arborio rice"]),
        ],
    );
    worker.sent_requests();
    app.focus = Focus::ResultsPane;
    (app, worker)
}

fn detail_request(worker: &mut TestWorker) -> (u64, u64) {
    let requests = worker.sent_requests();
    assert_eq!(requests.len(), 1, "expected exactly one detail request");
    match &requests[0] {
        ApiRequest::RecipeDetail {
            recipe_id,
            request_id,
        } => (*recipe_id, *request_id),
        other => panic!("unexpected request {:?}", other),
    }
}

fn answer(app: &mut App, worker: &TestWorker, ids: (u64, u64), instructions: Option<&str>) {
    worker.respond(ApiResponse::RecipeDetail {
        recipe_id: ids.0,
        request_id: ids.1,
        result: Ok(RecipeDetail {
            instructions: instructions.map(str::to_string),
        }),
    });
    app.poll_api_responses();
}

#[test]
fn test_search_clears_suggestions_and_marks_searching() {
    let (mut app, mut worker) = test_app();
    app.input.set_query("egg");

    search(&mut app);

    assert!(app.recipes.is_searching());
    assert_eq!(app.recipes.searching_for(), Some("egg"));
    assert!(matches!(
        &worker.sent_requests()[0],
        ApiRequest::FindRecipes { query, .. } if query == "egg"
    ));
}

#[test]
fn test_search_without_worker_shows_error() {
    let mut app = App::new(&crate::config::Config::default(), false);
    app.input.set_query("egg");

    search(&mut app);

    assert!(!app.recipes.is_searching());
    assert!(matches!(app.recipes.results(), RecipeResults::Failed));
    assert_eq!(app.recipes.results().message(), Some(SEARCH_ERROR_MESSAGE));
}

#[test]
fn test_new_search_replaces_old_cards() {
    let (mut app, mut worker) = three_cards();
    app.input.set_query("egg");
    search(&mut app);

    let request_id = worker.sent_requests()[0].request_id();
    worker.respond(ApiResponse::Recipes {
        request_id,
        result: Ok(vec![summary(21, "Omelette", &["3 eggs"])]),
    });
    app.poll_api_responses();

    let titles: Vec<&str> = app
        .recipes
        .cards()
        .iter()
        .map(|card| card.summary().title.as_str())
        .collect();
    assert_eq!(titles, vec!["Omelette"]);
}

#[test]
fn test_toggle_fetches_then_expands() {
    let (mut app, mut worker) = three_cards();

    toggle_instructions(&mut app, 1);
    assert_eq!(app.recipes.cards()[1].label(), ToggleLabel::Hide);

    let ids = detail_request(&mut worker);
    assert_eq!(ids.0, 12);

    answer(&mut app, &worker, ids, Some("<p>Simmer the rice in milk.</p>"));
    let card = &app.recipes.cards()[1];
    assert_eq!(card.instructions(), Some("Simmer the rice in milk."));
    assert_eq!(card.label(), ToggleLabel::Hide);
}

#[test]
fn test_second_toggle_collapses_without_request() {
    let (mut app, mut worker) = three_cards();
    toggle_instructions(&mut app, 0);
    let ids = detail_request(&mut worker);
    answer(&mut app, &worker, ids, Some("Fry it."));

    toggle_instructions(&mut app, 0);

    assert!(worker.sent_requests().is_empty());
    let card = &app.recipes.cards()[0];
    assert!(card.instructions().is_none());
    assert_eq!(card.label(), ToggleLabel::Show);
}

#[test]
fn test_missing_instructions_leave_hide_label_and_refetch() {
    let (mut app, mut worker) = three_cards();
    toggle_instructions(&mut app, 2);
    let ids = detail_request(&mut worker);
    answer(&mut app, &worker, ids, None);

    let card = &app.recipes.cards()[2];
    assert_eq!(card.label(), ToggleLabel::Hide);
    assert!(card.instructions().is_none());

    // Still collapsed, so the next click fetches again
    toggle_instructions(&mut app, 2);
    let again = detail_request(&mut worker);
    assert_eq!(again.0, 13);
    assert!(again.1 > ids.1);
}

#[test]
fn test_cards_toggle_independently() {
    let (mut app, mut worker) = three_cards();
    toggle_instructions(&mut app, 0);
    let first = detail_request(&mut worker);
    toggle_instructions(&mut app, 2);
    let third = detail_request(&mut worker);

    answer(&mut app, &worker, third, Some("Stir constantly."));
    answer(&mut app, &worker, first, Some("Fry it."));

    let cards = app.recipes.cards();
    assert_eq!(cards[0].instructions(), Some("Fry it."));
    assert!(cards[1].instructions().is_none());
    assert_eq!(cards[2].instructions(), Some("Stir constantly."));
}

#[test]
fn test_toggle_without_worker_keeps_card_collapsed() {
    let mut app = App::new(&crate::config::Config::default(), false);
    app.recipes.begin_search(1, "rice");
    app.recipes
        .apply_search_response(1, Ok(vec![summary(1, "Fried Rice", &[])]));

    toggle_instructions(&mut app, 0);

    let card = &app.recipes.cards()[0];
    assert!(card.instructions().is_none());
    assert!(card.pending_detail().is_none());
}

#[test]
fn test_toggle_out_of_range_is_ignored() {
    let (mut app, mut worker) = three_cards();
    toggle_instructions(&mut app, 9);
    assert!(worker.sent_requests().is_empty());
}

#[test]
fn test_enter_toggles_selected_card() {
    let (mut app, mut worker) = three_cards();

    handle_results_pane_key(&mut app, key(KeyCode::Char('j')));
    handle_results_pane_key(&mut app, key(KeyCode::Enter));

    assert_eq!(detail_request(&mut worker).0, 12);
}

#[test]
fn test_space_toggles_selected_card() {
    let (mut app, mut worker) = three_cards();

    handle_results_pane_key(&mut app, key(KeyCode::Char(' ')));

    assert_eq!(detail_request(&mut worker).0, 11);
}

#[test]
fn test_selection_keys() {
    let (mut app, _worker) = three_cards();

    handle_results_pane_key(&mut app, key(KeyCode::Down));
    handle_results_pane_key(&mut app, key(KeyCode::Down));
    handle_results_pane_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.recipes.selected_card(), Some(2));

    handle_results_pane_key(&mut app, key(KeyCode::Char('k')));
    assert_eq!(app.recipes.selected_card(), Some(1));

    handle_results_pane_key(&mut app, key(KeyCode::Char('g')));
    assert_eq!(app.recipes.selected_card(), Some(0));

    handle_results_pane_key(&mut app, key(KeyCode::Char('G')));
    assert_eq!(app.recipes.selected_card(), Some(2));
}

#[test]
fn test_scroll_keys() {
    let recipes: Vec<RecipeSummary> = (1..=8)
        .map(|id| summary(id, &format!("Recipe {}", id), &["salt", "pepper"]))
        .collect();
    let (mut app, _worker) = app_with_recipes("salt", recipes);
    app.focus = Focus::ResultsPane;
    render_to_string(&mut app, 80, 24);

    handle_results_pane_key(&mut app, key(KeyCode::Char('J')));
    assert_eq!(app.results_scroll.offset, 1);

    handle_results_pane_key(&mut app, key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.results_scroll.offset, 10);

    handle_results_pane_key(&mut app, key(KeyCode::PageUp));
    assert_eq!(app.results_scroll.offset, 1);

    handle_results_pane_key(&mut app, key(KeyCode::Char('K')));
    assert_eq!(app.results_scroll.offset, 0);
}

#[test]
fn test_focus_return_keys() {
    for code in [
        KeyCode::Esc,
        KeyCode::Tab,
        KeyCode::Char('i'),
        KeyCode::Char('/'),
    ] {
        let (mut app, _worker) = three_cards();
        handle_results_pane_key(&mut app, key(code));
        assert_eq!(app.focus, Focus::InputField, "{:?}", code);
    }
}

#[test]
fn test_q_quits() {
    let (mut app, _worker) = three_cards();
    handle_results_pane_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
