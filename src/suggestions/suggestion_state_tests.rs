use super::*;
use crate::api::client::Endpoint;
use proptest::prelude::*;

fn names(names: &[&str]) -> Vec<IngredientSuggestion> {
    names
        .iter()
        .map(|name| IngredientSuggestion {
            name: name.to_string(),
        })
        .collect()
}

fn state_with(items: &[&str]) -> SuggestionState {
    let mut state = SuggestionState::new();
    state.begin_request(1);
    state.apply_response(1, Ok(names(items)));
    state
}

#[test]
fn test_new_state_is_hidden() {
    let state = SuggestionState::new();
    assert!(!state.is_visible());
    assert!(state.items().is_empty());
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.pending_request_id(), None);
}

#[test]
fn test_response_replaces_items_in_order() {
    let state = state_with(&["garlic", "ginger"]);

    let shown: Vec<&str> = state.items().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(shown, vec!["garlic", "ginger"]);
    assert!(state.is_visible());
    assert_eq!(state.pending_request_id(), None);
}

#[test]
fn test_empty_response_hides_list() {
    let mut state = state_with(&["garlic"]);
    state.begin_request(2);
    assert!(state.apply_response(2, Ok(vec![])));
    assert!(!state.is_visible());
}

#[test]
fn test_stale_response_is_dropped() {
    let mut state = SuggestionState::new();
    state.begin_request(1);
    state.begin_request(2);

    assert!(!state.apply_response(1, Ok(names(&["gar"]))));
    assert!(state.items().is_empty());
    assert_eq!(state.pending_request_id(), Some(2));

    assert!(state.apply_response(2, Ok(names(&["garlic"]))));
    assert_eq!(state.items()[0].name, "garlic");
}

#[test]
fn test_new_request_cancels_previous_token() {
    let mut state = SuggestionState::new();
    let first = state.begin_request(1);
    let second = state.begin_request(2);

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn test_clear_cancels_and_invalidates_pending_request() {
    let mut state = state_with(&["garlic", "ginger"]);
    let token = state.begin_request(2);

    state.clear();

    assert!(token.is_cancelled());
    assert!(!state.is_visible());
    assert!(!state.apply_response(2, Ok(names(&["garlic"]))));
    assert!(!state.is_visible());
}

#[test]
fn test_failure_keeps_previous_items() {
    let mut state = state_with(&["garlic", "ginger"]);
    state.begin_request(2);

    let changed = state.apply_response(
        2,
        Err(ApiError::Http {
            endpoint: Endpoint::Autocomplete,
            status: 402,
        }),
    );

    assert!(!changed);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.pending_request_id(), None);
}

#[test]
fn test_abandon_request_only_matches_pending_id() {
    let mut state = SuggestionState::new();
    state.begin_request(3);
    state.abandon_request(2);
    assert_eq!(state.pending_request_id(), Some(3));
    state.abandon_request(3);
    assert_eq!(state.pending_request_id(), None);
}

#[test]
fn test_selection_starts_empty_and_wraps() {
    let mut state = state_with(&["garlic", "ginger", "grape"]);
    assert_eq!(state.selected(), None);

    state.select_next();
    assert_eq!(state.selected_index(), Some(0));
    state.select_next();
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_index(), Some(0));

    state.select_previous();
    assert_eq!(state.selected().map(|s| s.name.as_str()), Some("grape"));
}

#[test]
fn test_select_previous_from_nothing_picks_last() {
    let mut state = state_with(&["garlic", "ginger"]);
    state.select_previous();
    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut state = state_with(&["garlic"]);
    state.select(4);
    assert_eq!(state.selected_index(), None);
    state.select(0);
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let mut state = SuggestionState::new();
    state.select_next();
    state.select_previous();
    assert_eq!(state.selected_index(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Only the response to the latest request ever reaches the list.
    #[test]
    fn prop_only_latest_response_applies(request_count in 1u64..20, answered in 1u64..20) {
        let mut state = SuggestionState::new();
        for id in 1..=request_count {
            state.begin_request(id);
        }

        let applied = state.apply_response(answered, Ok(names(&["x"])));

        prop_assert_eq!(applied, answered == request_count);
        prop_assert_eq!(state.is_visible(), answered == request_count);
    }

    /// The selection never points past the end of the list.
    #[test]
    fn prop_selection_stays_in_bounds(len in 1usize..8, moves in prop::collection::vec(any::<bool>(), 0..30)) {
        let items: Vec<String> = (0..len).map(|i| format!("item{}", i)).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);

        for forward in moves {
            if forward {
                state.select_next();
            } else {
                state.select_previous();
            }
            prop_assert!(state.selected_index().is_none_or(|i| i < len));
        }
    }
}
