use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::app::App;
use crate::theme;
use crate::widgets::popup;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 48;
const MIN_POPUP_WIDTH: usize = 16;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the suggestion list just above the search field
///
/// Returns the popup area, or `None` when there is nothing to show.
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let items = app.suggestions.items();
    if items.is_empty() {
        return None;
    }

    let first = first_visible(app.suggestions.selected_index(), items.len());
    let visible = &items[first..(first + MAX_VISIBLE_SUGGESTIONS).min(items.len())];

    let text_width = visible
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = text_width as u16 + POPUP_PADDING;
    let popup_height = visible.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_PADDING {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    let typed = app.query().trim();

    let list_items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(offset, suggestion)| {
            let selected = app.suggestions.selected_index() == Some(first + offset);
            let matched = matcher
                .fuzzy_indices(&suggestion.name, typed)
                .map(|(_, indices)| indices)
                .unwrap_or_default();
            ListItem::new(item_line(&suggestion.name, &matched, selected))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                " Suggestions ",
                Style::default().fg(theme::suggestions::TITLE),
            ))
            .border_style(Style::default().fg(theme::suggestions::BORDER))
            .style(Style::default().bg(theme::suggestions::BACKGROUND)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

/// Index of the first item shown so the selection stays inside the window
pub fn first_visible(selected: Option<usize>, len: usize) -> usize {
    match selected {
        Some(index) if index >= MAX_VISIBLE_SUGGESTIONS => {
            (index + 1 - MAX_VISIBLE_SUGGESTIONS).min(len.saturating_sub(MAX_VISIBLE_SUGGESTIONS))
        }
        _ => 0,
    }
}

fn item_line(name: &str, matched: &[usize], selected: bool) -> Line<'static> {
    let base = if selected {
        Style::default()
            .fg(theme::suggestions::ITEM_SELECTED_FG)
            .bg(theme::suggestions::ITEM_SELECTED_BG)
            .add_modifier(theme::suggestions::ITEM_SELECTED_MODIFIER)
    } else {
        Style::default().fg(theme::suggestions::ITEM_NORMAL_FG)
    };
    let highlight = if selected {
        base
    } else {
        base.fg(theme::suggestions::MATCH_FG)
    };

    let marker = if selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };

    let mut spans = vec![Span::styled(marker, base)];
    for (i, c) in name.chars().enumerate() {
        let style = if matched.contains(&i) { highlight } else { base };
        spans.push(Span::styled(c.to_string(), style));
    }
    Line::from(spans)
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
