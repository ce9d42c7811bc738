use tokio_util::sync::CancellationToken;

use super::card::RecipeCard;
use crate::api::{ApiError, RecipeDetail, RecipeSummary};

pub const NO_RECIPES_MESSAGE: &str = "No recipes found. Try different ingredients.";
pub const SEARCH_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// What the results pane currently shows
#[derive(Debug, Default)]
pub enum RecipeResults {
    /// Nothing searched yet
    #[default]
    Idle,
    NoResults,
    Failed,
    Cards(Vec<RecipeCard>),
}

impl RecipeResults {
    /// The single message shown instead of cards, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RecipeResults::NoResults => Some(NO_RECIPES_MESSAGE),
            RecipeResults::Failed => Some(SEARCH_ERROR_MESSAGE),
            RecipeResults::Idle | RecipeResults::Cards(_) => None,
        }
    }
}

/// Rendered line range of one card inside the results pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpan {
    pub start: u32,
    pub button_line: u32,
    pub button_width: u16,
    pub end: u32,
}

/// Results container state
///
/// Every completed search replaces `results` wholesale. Older responses are
/// recognised by request id and dropped.
#[derive(Debug, Default)]
pub struct RecipeState {
    results: RecipeResults,
    selected_card: usize,
    pending_search: Option<u64>,
    cancel_token: Option<CancellationToken>,
    searching_for: Option<String>,
    shown_query: Option<String>,
    pub card_spans: Vec<CardSpan>,
    pub scroll_to_selected: bool,
}

impl RecipeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &RecipeResults {
        &self.results
    }

    pub fn cards(&self) -> &[RecipeCard] {
        match &self.results {
            RecipeResults::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut RecipeCard> {
        match &mut self.results {
            RecipeResults::Cards(cards) => cards.get_mut(index),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    #[cfg(test)]
    pub fn pending_search(&self) -> Option<u64> {
        self.pending_search
    }

    /// Query text of the search in flight
    pub fn searching_for(&self) -> Option<&str> {
        self.searching_for.as_deref()
    }

    /// Query text the current results answer
    pub fn shown_query(&self) -> Option<&str> {
        self.shown_query.as_deref()
    }

    /// Register a new search, cancelling any older one still running
    pub fn begin_search(&mut self, request_id: u64, query: &str) -> CancellationToken {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        self.pending_search = Some(request_id);
        self.searching_for = Some(query.to_string());
        token
    }

    /// Apply a search response, returning true when the pane needs a redraw
    pub fn apply_search_response(
        &mut self,
        request_id: u64,
        result: Result<Vec<RecipeSummary>, ApiError>,
    ) -> bool {
        if self.pending_search != Some(request_id) {
            #[cfg(debug_assertions)]
            log::debug!("Dropping stale recipe response {}", request_id);
            return false;
        }

        self.pending_search = None;
        self.cancel_token = None;
        let query = self.searching_for.take();

        self.results = match result {
            Ok(recipes) if recipes.is_empty() => RecipeResults::NoResults,
            Ok(recipes) => {
                RecipeResults::Cards(recipes.into_iter().map(RecipeCard::new).collect())
            }
            Err(ApiError::Cancelled) => return true,
            Err(e) if e.is_user_visible() => {
                log::error!("Error fetching recipes: {}", e);
                RecipeResults::Failed
            }
            Err(e) => {
                log::error!("Malformed recipe response: {}", e);
                RecipeResults::NoResults
            }
        };

        self.shown_query = query;
        self.selected_card = 0;
        self.card_spans.clear();
        self.scroll_to_selected = true;
        true
    }

    /// Route a detail response to the card that asked for it
    pub fn apply_detail_response(
        &mut self,
        request_id: u64,
        recipe_id: u64,
        result: Result<RecipeDetail, ApiError>,
    ) -> bool {
        let RecipeResults::Cards(cards) = &mut self.results else {
            return false;
        };

        match cards.iter_mut().find(|card| {
            card.pending_detail() == Some(request_id) && card.recipe_id() == recipe_id
        }) {
            Some(card) => card.apply_detail(request_id, result),
            None => {
                #[cfg(debug_assertions)]
                log::debug!("Dropping detail response {} with no waiting card", request_id);
                false
            }
        }
    }

    pub fn selected_card(&self) -> Option<usize> {
        (self.selected_card < self.cards().len()).then_some(self.selected_card)
    }

    pub fn select_card(&mut self, index: usize) {
        if index < self.cards().len() {
            self.selected_card = index;
            self.scroll_to_selected = true;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.cards().len();
        if count > 0 && self.selected_card + 1 < count {
            self.select_card(self.selected_card + 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_card > 0 {
            self.select_card(self.selected_card - 1);
        }
    }

    /// Card whose rendered lines include `line`
    pub fn card_at_line(&self, line: u32) -> Option<usize> {
        self.card_spans
            .iter()
            .position(|span| line >= span.start && line < span.end)
    }
}

#[cfg(test)]
#[path = "recipe_state_tests.rs"]
mod recipe_state_tests;
