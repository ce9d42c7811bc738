use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

/// The single-line ingredient search field
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(ratatui::style::Style::default());

        Self {
            textarea,
            scroll_offset: 0,
        }
    }

    /// Raw text of the field; callers trim it themselves
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole text and leave the cursor at its end
    pub fn set_query(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed a key to the editor, returning true when the text changed
    ///
    /// Keys that would break the field onto a second line are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if breaks_line(key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor, returning true when anything was inserted
    pub fn paste(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }

    /// Keep the cursor inside a viewport `viewport_width` columns wide
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            return;
        }

        let cursor_col = self.textarea.cursor().1;
        let text_length = self.query().chars().count();
        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }

    /// Move cursor to a specific column position
    pub fn set_cursor_column(&mut self, target_col: usize) {
        let text_length = self.query().chars().count();
        let target_col = target_col.min(text_length);
        self.textarea.move_cursor(CursorMove::Jump(0, target_col as u16));
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn breaks_line(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
