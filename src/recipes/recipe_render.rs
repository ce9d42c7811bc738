use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::card::{CardElement, RecipeCard};
use super::instructions::wrap;
use super::recipe_state::{CardSpan, RecipeResults};
use crate::app::{App, Focus};
use crate::theme;
use crate::widgets::scrollbar;

pub const IDLE_HINT: &str = "Type an ingredient below and press Enter to find recipes.";

const INDENT: &str = "  ";
const DETAIL_INDENT: &str = "    ";
const BULLET: &str = "  • ";
const SELECTED_MARKER: &str = "▶ ";
const LOADING_SUFFIX: &str = " loading…";

/// Width of the clickable `[ label ]` button, in columns
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render the results pane and record where each card landed
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::ResultsPane;
    let border_color = if focused {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            pane_title(app.recipes.shown_query()),
            Style::default()
                .fg(theme::results::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border_color));

    if let Some(query) = app.recipes.searching_for() {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" Searching for \"{}\"… ", query),
                Style::default().fg(theme::results::SEARCHING),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let (lines, spans) = match app.recipes.results() {
        RecipeResults::Idle => (
            vec![styled_line(IDLE_HINT, theme::results::IDLE_HINT)],
            Vec::new(),
        ),
        RecipeResults::NoResults | RecipeResults::Failed => {
            let color = if matches!(app.recipes.results(), RecipeResults::Failed) {
                theme::results::ERROR_MESSAGE
            } else {
                theme::results::EMPTY_MESSAGE
            };
            let message = app.recipes.results().message().unwrap_or_default();
            (vec![styled_line(message, color)], Vec::new())
        }
        RecipeResults::Cards(cards) => {
            build_card_list(cards, app.recipes.selected_card(), focused, width)
        }
    };

    let total_lines = lines.len();
    app.results_scroll
        .update_bounds(total_lines as u32, inner.height);

    if app.recipes.scroll_to_selected {
        if let Some(index) = app.recipes.selected_card()
            && let Some(span) = spans.get(index)
        {
            app.results_scroll.ensure_visible(span.start, span.end);
        }
        app.recipes.scroll_to_selected = false;
    }
    app.recipes.card_spans = spans;

    let offset = app.results_scroll.offset;
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);

    let scrollbar_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    scrollbar::render_vertical_scrollbar(
        frame,
        scrollbar_area,
        total_lines,
        inner.height as usize,
        offset as usize,
        theme::results::SCROLLBAR,
    );

    area
}

fn pane_title(shown_query: Option<&str>) -> String {
    match shown_query {
        Some(query) => format!(" Recipes for \"{}\" ", query),
        None => " Recipes ".to_string(),
    }
}

fn styled_line(text: &'static str, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(format!("{}{}", INDENT, text), Style::default().fg(color)))
}

/// Lay out every card, one blank line apart
pub fn build_card_list(
    cards: &[RecipeCard],
    selected: Option<usize>,
    focused: bool,
    width: usize,
) -> (Vec<Line<'static>>, Vec<CardSpan>) {
    let mut lines = Vec::new();
    let mut spans = Vec::with_capacity(cards.len());

    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }

        let start = lines.len() as u32;
        let is_selected = focused && selected == Some(index);
        let (card_lines, button_offset) = build_card_lines(card, is_selected, width);
        lines.extend(card_lines);

        spans.push(CardSpan {
            start,
            button_line: start + button_offset,
            button_width: button_width(card.label().text()),
            end: lines.len() as u32,
        });
    }

    (lines, spans)
}

/// Lines of one card plus the offset of its button line
pub fn build_card_lines(
    card: &RecipeCard,
    selected: bool,
    width: usize,
) -> (Vec<Line<'static>>, u32) {
    let mut lines = Vec::new();
    let mut button_offset = 0;
    let text_width = width.saturating_sub(INDENT.len());
    let detail_width = width.saturating_sub(DETAIL_INDENT.len());

    for element in card.elements() {
        match element {
            CardElement::Title(title) => {
                let title_color = if selected {
                    theme::card::SELECTED_TITLE
                } else {
                    theme::card::TITLE
                };
                let title_style = Style::default()
                    .fg(title_color)
                    .add_modifier(theme::card::TITLE_MODIFIER);

                for (i, part) in wrap(title, text_width).into_iter().enumerate() {
                    let prefix = if i == 0 && selected {
                        Span::styled(
                            SELECTED_MARKER,
                            Style::default().fg(theme::card::SELECTED_MARKER),
                        )
                    } else {
                        Span::raw(INDENT)
                    };
                    lines.push(Line::from(vec![prefix, Span::styled(part, title_style)]));
                }
            }
            CardElement::Image(url) => {
                lines.push(Line::from(Span::styled(
                    format!("{}Image: {}", INDENT, url),
                    Style::default().fg(theme::card::IMAGE),
                )));
            }
            CardElement::Ingredient(text) => {
                for (i, part) in wrap(text, detail_width).into_iter().enumerate() {
                    let prefix = if i == 0 { BULLET } else { DETAIL_INDENT };
                    lines.push(Line::from(vec![
                        Span::styled(prefix, Style::default().fg(theme::card::INGREDIENT_BULLET)),
                        Span::styled(part, Style::default().fg(theme::card::INGREDIENT)),
                    ]));
                }
            }
            CardElement::ToggleButton(label) => {
                button_offset = lines.len() as u32;
                let mut spans = vec![
                    Span::raw(INDENT),
                    Span::styled(
                        format!("[ {} ]", label),
                        Style::default()
                            .fg(theme::card::BUTTON)
                            .add_modifier(Modifier::BOLD),
                    ),
                ];
                if card.pending_detail().is_some() {
                    spans.push(Span::styled(
                        LOADING_SUFFIX,
                        Style::default().fg(theme::card::BUTTON_LOADING),
                    ));
                }
                lines.push(Line::from(spans));
            }
            CardElement::Instructions(text) => {
                lines.push(Line::from(Span::styled(
                    format!("{}Instructions", INDENT),
                    Style::default()
                        .fg(theme::card::INSTRUCTIONS_HEADER)
                        .add_modifier(Modifier::UNDERLINED),
                )));
                for paragraph in text.lines() {
                    for part in wrap(paragraph, detail_width) {
                        lines.push(Line::from(Span::styled(
                            format!("{}{}", DETAIL_INDENT, part),
                            Style::default().fg(theme::card::INSTRUCTIONS),
                        )));
                    }
                }
            }
        }
    }

    (lines, button_offset)
}

#[cfg(test)]
#[path = "recipe_render_tests.rs"]
mod recipe_render_tests;
