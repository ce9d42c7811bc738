use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
use crate::theme;
use crate::widgets::{popup, scrollbar};

const KEY_COLUMN_WIDTH: usize = 20;

/// Render the help popup
///
/// Returns the popup area for region tracking.
pub fn render_popup(app: &mut App, frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < 40 || frame_area.height < 12 {
        return None;
    }

    let popup_width = ((frame_area.width as f32 * 0.8) as u16)
        .clamp(60, 80)
        .min(frame_area.width.saturating_sub(4));
    let popup_height = ((frame_area.height as f32 * 0.8) as u16)
        .clamp(12, 32)
        .min(frame_area.height.saturating_sub(2));

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme::help::TITLE)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));

    let inner_area = outer_block.inner(popup_area);
    frame.render_widget(outer_block, popup_area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    let lines = render_help_sections(HELP_SECTIONS);
    let content_height = lines.len();
    app.help
        .scroll
        .update_bounds(content_height as u32, content_area.height);

    let offset = app.help.scroll.offset;
    frame.render_widget(
        Paragraph::new(Text::from(lines)).scroll((offset, 0)),
        content_area,
    );

    let footer = Line::from(Span::styled(
        HELP_FOOTER,
        Style::default().fg(theme::help::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), footer_area);

    let scrollbar_area = Rect {
        x: popup_area.x,
        y: popup_area.y.saturating_add(1),
        width: popup_area.width,
        height: popup_area.height.saturating_sub(2),
    };
    scrollbar::render_vertical_scrollbar(
        frame,
        scrollbar_area,
        content_height,
        content_area.height as usize,
        offset as usize,
        theme::help::BORDER,
    );

    Some(popup_area)
}

fn render_help_sections(sections: &[HelpSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section_idx, section) in sections.iter().enumerate() {
        if section_idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("── {} ──", section.title),
                Style::default()
                    .fg(theme::help::SECTION_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    Style::default()
                        .fg(theme::help::KEY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    lines
}
