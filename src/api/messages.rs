//! Messages exchanged with the API worker thread

use tokio_util::sync::CancellationToken;

use super::client::ApiError;
use super::types::{IngredientSuggestion, RecipeDetail, RecipeSummary};

/// Request messages sent to the API worker thread
///
/// Every request carries a `request_id`, echoed on its response so the UI
/// can drop answers to requests it no longer cares about.
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Ingredient autocomplete for the current search text
    Suggest {
        query: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
    /// Recipe search by ingredient text
    FindRecipes {
        query: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
    /// Full record for one recipe card
    RecipeDetail { recipe_id: u64, request_id: u64 },
}

impl ApiRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            ApiRequest::Suggest { request_id, .. }
            | ApiRequest::FindRecipes { request_id, .. }
            | ApiRequest::RecipeDetail { request_id, .. } => *request_id,
        }
    }
}

/// Response messages received from the API worker thread
#[derive(Debug)]
pub enum ApiResponse {
    Suggestions {
        request_id: u64,
        result: Result<Vec<IngredientSuggestion>, ApiError>,
    },
    Recipes {
        request_id: u64,
        result: Result<Vec<RecipeSummary>, ApiError>,
    },
    RecipeDetail {
        request_id: u64,
        recipe_id: u64,
        result: Result<RecipeDetail, ApiError>,
    },
}

impl ApiResponse {
    /// Build the response a request gets when it fails before reaching the API
    pub fn failed(request: &ApiRequest, error: ApiError) -> Self {
        match request {
            ApiRequest::Suggest { request_id, .. } => ApiResponse::Suggestions {
                request_id: *request_id,
                result: Err(error),
            },
            ApiRequest::FindRecipes { request_id, .. } => ApiResponse::Recipes {
                request_id: *request_id,
                result: Err(error),
            },
            ApiRequest::RecipeDetail {
                recipe_id,
                request_id,
            } => ApiResponse::RecipeDetail {
                request_id: *request_id,
                recipe_id: *recipe_id,
                result: Err(error),
            },
        }
    }

    #[cfg(test)]
    pub fn request_id(&self) -> u64 {
        match self {
            ApiResponse::Suggestions { request_id, .. }
            | ApiResponse::Recipes { request_id, .. }
            | ApiResponse::RecipeDetail { request_id, .. } => *request_id,
        }
    }
}
