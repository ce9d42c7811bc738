use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::theme;

pub const PLACEHOLDER: &str = "e.g. chicken, garlic, lemon";
pub const SEARCH_BUTTON: &str = " [ Search ] ";

/// Render the search field with its search button, returning the field area
///
/// The button sits on the top border and its rect is recorded in the layout
/// regions so clicks can find it.
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let focused = app.focus == Focus::InputField;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let button_color = if app.query().trim().is_empty() {
        theme::input::BUTTON_DISABLED
    } else {
        theme::input::BUTTON
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Ingredients ",
            Style::default()
                .fg(theme::input::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                SEARCH_BUTTON,
                Style::default()
                    .fg(button_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(border_color));

    app.layout_regions.search_button = search_button_area(area);

    let line = if app.query().is_empty() {
        placeholder_line(focused)
    } else {
        let cursor_col = app.input.textarea.cursor().1;
        query_line(
            app.query(),
            app.input.scroll_offset,
            viewport_width,
            focused.then_some(cursor_col),
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
    area
}

/// Where the right-aligned button title lands on the top border
fn search_button_area(area: Rect) -> Option<Rect> {
    let width = SEARCH_BUTTON.chars().count() as u16;
    // Both corners plus the left title need room too
    if area.width < width + 2 || area.height == 0 {
        return None;
    }
    Some(Rect::new(area.x + area.width - 1 - width, area.y, width, 1))
}

fn placeholder_line(focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled(" ", theme::palette::CURSOR));
    }
    spans.push(Span::styled(
        PLACEHOLDER,
        Style::default().fg(theme::input::PLACEHOLDER),
    ));
    Line::from(spans)
}

/// The visible slice of the query, with a block cursor when `cursor` is set
fn query_line(
    query: &str,
    scroll_offset: usize,
    viewport_width: usize,
    cursor: Option<usize>,
) -> Line<'static> {
    let text_style = Style::default().fg(theme::input::TEXT);
    let visible: Vec<char> = query
        .chars()
        .skip(scroll_offset)
        .take(viewport_width)
        .collect();

    let Some(cursor) = cursor.map(|col| col.saturating_sub(scroll_offset)) else {
        return Line::from(Span::styled(visible.into_iter().collect::<String>(), text_style));
    };

    let before: String = visible.iter().take(cursor).collect();
    let under: String = visible
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = visible.iter().skip(cursor + 1).collect();

    Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(under, theme::palette::CURSOR),
        Span::styled(after, text_style),
    ])
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
