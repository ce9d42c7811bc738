use super::*;
use proptest::prelude::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(input: &mut InputState, text: &str) {
    for c in text.chars() {
        input.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_new_input_is_empty() {
    let input = InputState::new();
    assert_eq!(input.query(), "");
    assert_eq!(input.scroll_offset, 0);
}

#[test]
fn test_typing_reports_modification() {
    let mut input = InputState::new();
    assert!(input.handle_key(key(KeyCode::Char('g'))));
    assert_eq!(input.query(), "g");
}

#[test]
fn test_cursor_movement_is_not_a_modification() {
    let mut input = InputState::new();
    type_text(&mut input, "garlic");
    assert!(!input.handle_key(key(KeyCode::Left)));
    assert_eq!(input.query(), "garlic");
}

#[test]
fn test_backspace_is_a_modification() {
    let mut input = InputState::new();
    type_text(&mut input, "garlic");
    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.query(), "garli");
}

#[test]
fn test_enter_and_tab_never_reach_the_editor() {
    let mut input = InputState::new();
    type_text(&mut input, "egg");
    assert!(!input.handle_key(key(KeyCode::Enter)));
    assert!(!input.handle_key(key(KeyCode::Tab)));
    assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
    assert_eq!(input.textarea.lines().len(), 1);
    assert_eq!(input.query(), "egg");
}

#[test]
fn test_set_query_replaces_text() {
    let mut input = InputState::new();
    type_text(&mut input, "gar");
    input.handle_key(key(KeyCode::Home));

    input.set_query("garlic");

    assert_eq!(input.query(), "garlic");
    assert_eq!(input.textarea.cursor(), (0, 6));
}

#[test]
fn test_paste_flattens_newlines() {
    let mut input = InputState::new();
    assert!(input.paste("garlic\nonion\r\nbasil"));
    assert_eq!(input.query(), "garlic onion basil");
}

#[test]
fn test_paste_of_only_newlines_inserts_nothing() {
    let mut input = InputState::new();
    assert!(!input.paste("\n\r\n"));
    assert_eq!(input.query(), "");
}

#[test]
fn test_set_cursor_column_clamps_to_text() {
    let mut input = InputState::new();
    input.set_query("tomato");
    input.set_cursor_column(2);
    assert_eq!(input.textarea.cursor(), (0, 2));
    input.set_cursor_column(40);
    assert_eq!(input.textarea.cursor(), (0, 6));
}

#[test]
fn test_scroll_offset_follows_cursor() {
    let mut input = InputState::new();
    input.set_query("a very long list of ingredients");
    input.calculate_scroll_offset(10);
    assert_eq!(input.scroll_offset, 22);

    input.set_cursor_column(0);
    input.calculate_scroll_offset(10);
    assert_eq!(input.scroll_offset, 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The cursor always stays inside the visible window.
    #[test]
    fn prop_cursor_visible_after_scroll(text in "[a-z ]{0,60}", width in 1usize..30, col in 0usize..70) {
        let mut input = InputState::new();
        input.set_query(&text);
        input.set_cursor_column(col);
        input.calculate_scroll_offset(width);

        let cursor = input.textarea.cursor().1;
        prop_assert!(cursor >= input.scroll_offset);
        prop_assert!(cursor < input.scroll_offset + width);
    }
}
