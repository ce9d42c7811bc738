use crate::api::{ApiChannel, ApiResponse};
use crate::config::Config;
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::recipes::{RecipeState, recipe_events};
use crate::scroll::ScrollState;
use crate::suggestions::{SuggestionState, suggestion_events};
use crate::visit::WelcomeState;

pub const MISSING_API_KEY_WARNING: &str =
    "No API key configured. Set api_key under [api] in the config or pass --api-key.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub suggestions: SuggestionState,
    pub recipes: RecipeState,
    pub results_scroll: ScrollState,
    pub help: HelpPopupState,
    pub welcome: WelcomeState,
    pub notification: NotificationState,
    pub api: ApiChannel,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: &Config, first_visit: bool) -> Self {
        let mut notification = NotificationState::new();
        if !config.api.is_configured() {
            notification.show_warning(MISSING_API_KEY_WARNING);
        }

        Self {
            input: InputState::new(),
            focus: Focus::InputField,
            suggestions: SuggestionState::new(),
            recipes: RecipeState::new(),
            results_scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            welcome: WelcomeState::new(first_visit),
            notification,
            api: ApiChannel::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when something changed, or while a timer-driven element is on screen
    pub fn should_render(&self) -> bool {
        self.needs_render || self.needs_animation()
    }

    fn needs_animation(&self) -> bool {
        self.notification.current().is_some()
    }

    /// Search recipes for the current query text
    pub fn search_recipes(&mut self) {
        recipe_events::search(self);
    }

    /// Re-run the suggestion lookup after the query text changed
    pub fn refresh_suggestions(&mut self) {
        suggestion_events::refresh_suggestions(self);
    }

    /// Apply every worker response that has arrived, returning true if any did
    pub fn poll_api_responses(&mut self) -> bool {
        let was_connected = self.api.is_connected();
        let responses = self.api.drain();
        let received = !responses.is_empty();

        for response in responses {
            match response {
                ApiResponse::Suggestions { request_id, result } => {
                    self.suggestions.apply_response(request_id, result);
                }
                ApiResponse::Recipes { request_id, result } => {
                    self.recipes.apply_search_response(request_id, result);
                }
                ApiResponse::RecipeDetail {
                    request_id,
                    recipe_id,
                    result,
                } => {
                    self.recipes.apply_detail_response(request_id, recipe_id, result);
                }
            }
        }

        if was_connected && !self.api.is_connected() {
            self.notification
                .show_error("Recipe service stopped. Restart larder to search again.");
        }

        if received {
            self.mark_dirty();
        }
        received
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
