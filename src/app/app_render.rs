use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::{App, Focus};
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (results_area, input_area, help_area) = (layout[0], layout[1], layout[2]);

        let results_rect = crate::recipes::recipe_render::render_pane(self, frame, results_area);
        self.layout_regions.results_pane = Some(results_rect);

        let input_rect = crate::input::input_render::render_field(self, frame, input_area);
        self.layout_regions.input_field = Some(input_rect);

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.focus == Focus::InputField
            && self.suggestions.is_visible()
            && let Some(suggestions_rect) =
                crate::suggestions::suggestion_render::render_popup(self, frame, input_area)
        {
            self.layout_regions.suggestions = Some(suggestions_rect);
        }

        if self.help.visible
            && let Some(help_rect) = crate::help::help_popup_render::render_popup(self, frame)
        {
            self.layout_regions.help_popup = Some(help_rect);
        }

        if self.welcome.is_visible()
            && let Some(welcome_rect) = crate::visit::render_popup(frame)
        {
            self.layout_regions.welcome_popup = Some(welcome_rect);
        }

        render_notification(frame, &mut self.notification);
    }
}
