use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 62;
const POPUP_HEIGHT: u16 = 15;

pub const WELCOME_TITLE: &str = " Welcome to Larder ";
pub const WELCOME_FOOTER: &str = "Press any key to start";

const INTRO: &str = "Got ingredients but no plan? Type what you have, pick from the suggestions, and Larder finds recipes that use it.";

const QUICK_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Browse ingredient suggestions"),
    ("Tab", "Use the highlighted suggestion"),
    ("Enter", "Search recipes"),
    ("Space", "Show or hide a recipe's instructions"),
    ("F1", "All keyboard shortcuts"),
];

fn build_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(INTRO, Style::default().fg(theme::welcome::TEXT))),
        Line::from(""),
    ];

    for (key, desc) in QUICK_KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<8}", key),
                Style::default()
                    .fg(theme::welcome::KEY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(theme::welcome::TEXT)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            WELCOME_FOOTER,
            Style::default().fg(theme::welcome::FOOTER),
        ))
        .alignment(Alignment::Center),
    );
    lines
}

/// Render the welcome popup centered on the frame, returning its area.
pub fn render_popup(frame: &mut Frame) -> Option<Rect> {
    let popup_area = popup::centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    if popup_area.width < 20 || popup_area.height < 5 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            WELCOME_TITLE,
            Style::default()
                .fg(theme::welcome::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme::welcome::BORDER))
        .style(Style::default().bg(theme::welcome::BACKGROUND));

    let paragraph = Paragraph::new(build_lines())
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
    Some(popup_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(width: u16, height: u16) -> (String, Option<Rect>) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut area = None;
        terminal.draw(|f| area = render_popup(f)).unwrap();
        (terminal.backend().to_string(), area)
    }

    #[test]
    fn test_renders_title_and_footer() {
        let (output, area) = render_to_string(80, 24);
        assert!(output.contains("Welcome to Larder"));
        assert!(output.contains(WELCOME_FOOTER));
        assert_eq!(area, Some(Rect::new(9, 4, POPUP_WIDTH, POPUP_HEIGHT)));
    }

    #[test]
    fn test_lists_quick_keys() {
        let (output, _) = render_to_string(80, 24);
        assert!(output.contains("Search recipes"));
        assert!(output.contains("Show or hide a recipe's instructions"));
    }

    #[test]
    fn test_skipped_when_terminal_too_small() {
        let (output, area) = render_to_string(15, 4);
        assert!(area.is_none());
        assert!(!output.contains("Welcome"));
    }
}
