use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, Focus};

/// Any key closes the welcome popup; Ctrl+C still quits
pub fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    if is_quit_chord(key) {
        app.should_quit = true;
    }
    app.welcome.dismiss();
}

fn is_quit_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.help.close();
        }
        KeyCode::Char('j') | KeyCode::Down => app.help.scroll.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.help.scroll.scroll_up(1),
        KeyCode::PageDown => app.help.scroll.page_down(),
        KeyCode::PageUp => app.help.scroll.page_up(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.help.scroll.page_down()
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.help.scroll.page_up()
        }
        KeyCode::Char('g') | KeyCode::Home => app.help.scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.help.scroll.jump_to_bottom(),
        _ => {}
    }
}

/// Keys that work regardless of focus; returns true if consumed
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if is_quit_chord(key) {
        app.should_quit = true;
        return true;
    }

    if app.help.visible {
        handle_help_key(app, key);
        return true;
    }

    match key.code {
        KeyCode::F(1) => {
            app.help.open();
            true
        }
        KeyCode::Char('?') if app.focus == Focus::ResultsPane => {
            app.help.open();
            true
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_recipes();
            true
        }
        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::InputField => {
                    app.suggestions.clear();
                    Focus::ResultsPane
                }
                Focus::ResultsPane => Focus::InputField,
            };
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
