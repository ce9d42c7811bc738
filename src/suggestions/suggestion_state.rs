use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, IngredientSuggestion};

/// Suggestion list plus the bookkeeping for its in-flight request
///
/// Only the most recent request may change the list: every new request
/// cancels the previous one, and a response whose id is not the pending one
/// is dropped.
#[derive(Debug, Default)]
pub struct SuggestionState {
    items: Vec<IngredientSuggestion>,
    selected_index: Option<usize>,
    pending_request_id: Option<u64>,
    cancel_token: Option<CancellationToken>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn items(&self) -> &[IngredientSuggestion] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&IngredientSuggestion> {
        self.selected_index.and_then(|i| self.items.get(i))
    }

    #[cfg(test)]
    pub fn pending_request_id(&self) -> Option<u64> {
        self.pending_request_id
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        });
    }

    #[cfg(test)]
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = Some(index);
        }
    }

    /// Register a new request, cancelling whatever was in flight
    ///
    /// Returns the token to hand to the worker along with the request.
    pub fn begin_request(&mut self, request_id: u64) -> CancellationToken {
        self.cancel_in_flight();
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        self.pending_request_id = Some(request_id);
        token
    }

    /// Forget the request with this id if it is still the pending one
    pub fn abandon_request(&mut self, request_id: u64) {
        if self.pending_request_id == Some(request_id) {
            self.pending_request_id = None;
            self.cancel_token = None;
        }
    }

    /// Empty the list and invalidate any in-flight request
    pub fn clear(&mut self) {
        self.cancel_in_flight();
        self.items.clear();
        self.selected_index = None;
    }

    /// Apply a worker response, returning true when the list changed
    ///
    /// Failures leave the current list untouched.
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<Vec<IngredientSuggestion>, ApiError>,
    ) -> bool {
        if self.pending_request_id != Some(request_id) {
            #[cfg(debug_assertions)]
            log::debug!("Dropping stale suggestion response {}", request_id);
            return false;
        }

        self.pending_request_id = None;
        self.cancel_token = None;

        match result {
            Ok(items) => {
                self.items = items;
                self.selected_index = None;
                true
            }
            Err(ApiError::Cancelled) => false,
            Err(e) => {
                log::error!("Error fetching suggestions: {}", e);
                false
            }
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        self.pending_request_id = None;
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
