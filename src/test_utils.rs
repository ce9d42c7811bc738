//! Shared test utilities for larder
//!
//! Fixtures and helpers used across the component test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::types::UsedIngredient;
    use crate::api::{ApiRequest, ApiResponse, RecipeSummary};
    use crate::app::App;
    use crate::config::Config;

    /// The worker side of the channels handed to a test app
    pub struct TestWorker {
        pub request_rx: UnboundedReceiver<ApiRequest>,
        pub response_tx: Sender<ApiResponse>,
    }

    impl TestWorker {
        /// Every request the app has sent since the last call
        pub fn sent_requests(&mut self) -> Vec<ApiRequest> {
            let mut requests = Vec::new();
            while let Ok(request) = self.request_rx.try_recv() {
                requests.push(request);
            }
            requests
        }

        pub fn respond(&self, response: ApiResponse) {
            self.response_tx.send(response).unwrap();
        }
    }

    /// App with default config, no welcome popup or notification, and channels
    /// wired to a fake worker
    pub fn test_app() -> (App, TestWorker) {
        let mut app = App::new(&Config::default(), false);
        app.notification.dismiss();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.api.set_channels(request_tx, response_rx);
        (
            app,
            TestWorker {
                request_rx,
                response_tx,
            },
        )
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn summary(id: u64, title: &str, ingredients: &[&str]) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: Some(format!("https://img.spoonacular.com/recipes/{}-312x231.jpg", id)),
            used_ingredients: ingredients
                .iter()
                .map(|text| UsedIngredient {
                    original_string: Some(text.to_string()),
                    original: None,
                })
                .collect(),
        }
    }

    /// App showing one card per recipe, as if a search for `query` just finished
    pub fn app_with_recipes(query: &str, recipes: Vec<RecipeSummary>) -> (App, TestWorker) {
        let (mut app, mut worker) = test_app();
        app.input.set_query(query);
        app.search_recipes();

        let request_id = worker
            .sent_requests()
            .last()
            .map(ApiRequest::request_id)
            .unwrap();
        worker.respond(ApiResponse::Recipes {
            request_id,
            result: Ok(recipes),
        });
        app.poll_api_responses();
        (app, worker)
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
