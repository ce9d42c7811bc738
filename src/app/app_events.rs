use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use super::mouse_events;
use crate::recipes::recipe_events;
use crate::suggestions::suggestion_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_api_responses();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.welcome.is_visible() || self.help.visible {
            return;
        }

        self.focus = Focus::InputField;
        if self.input.paste(&text) {
            self.refresh_suggestions();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.welcome.is_visible() {
            global::handle_welcome_key(self, key);
            return;
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => recipe_events::handle_results_pane_key(self, key),
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        if suggestion_events::handle_suggestion_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Enter => self.search_recipes(),
            KeyCode::Esc => {}
            _ => {
                if self.input.handle_key(key) {
                    self.refresh_suggestions();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
