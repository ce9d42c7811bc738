//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const NOTIFICATION_HEIGHT: u16 = 3;

/// Render the notification overlay in the top-right corner of the frame.
///
/// Called after the main UI so the notification sits on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let content_width = notif.message.chars().count() as u16;
    let notification_width = content_width.saturating_add(4);

    let frame_area = frame.area();
    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width.saturating_add(MARGIN)),
        y: MARGIN,
        width: notification_width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: NOTIFICATION_HEIGHT.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let style = &notif.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}
