//! Async recipe API client
//!
//! Wraps the three endpoints the UI needs. Built from an explicit
//! [`ApiConfig`] rather than global state, and every call can be raced
//! against a `CancellationToken`.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::types::{IngredientSuggestion, RecipeDetail, RecipeSummary};
use crate::config::ApiConfig;

/// Remote endpoints, used to label errors in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Autocomplete,
    FindByIngredients,
    Information,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Autocomplete => write!(f, "ingredient autocomplete"),
            Endpoint::FindByIngredients => write!(f, "find by ingredients"),
            Endpoint::Information => write!(f, "recipe information"),
        }
    }
}

/// Errors that can occur while talking to the recipe API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// No usable API key, or the HTTP client could not be built
    #[error("API not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (DNS, connect, TLS, timeout, broken body)
    #[error("[{endpoint}] Network error: {message}")]
    Network { endpoint: Endpoint, message: String },

    /// The API answered with a non-success status
    #[error("[{endpoint}] HTTP error ({status})")]
    Http { endpoint: Endpoint, status: u16 },

    /// The body was not the JSON we expected
    #[error("[{endpoint}] Parse error: {message}")]
    Parse { endpoint: Endpoint, message: String },

    /// Superseded by a newer request
    #[error("Request cancelled")]
    Cancelled,

    /// The worker task running the request panicked or was aborted
    #[error("Request failed in the API worker: {0}")]
    Worker(String),
}

impl ApiError {
    /// Whether the user should see this failure in the results pane
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            ApiError::NotConfigured(_)
                | ApiError::Network { .. }
                | ApiError::Http { .. }
                | ApiError::Worker(_)
        )
    }
}

/// Async client for the Spoonacular-compatible recipe API
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    api_key: String,
    base_url: String,
    suggestion_limit: u8,
    recipe_limit: u8,
}

impl RecipeClient {
    /// Create a client from configuration
    ///
    /// Fails with `NotConfigured` when the API key is missing or blank.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::NotConfigured(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_http_client(config, client)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(config: &ApiConfig, client: Client) -> Result<Self, ApiError> {
        let api_key = config.api_key().ok_or_else(|| {
            ApiError::NotConfigured(
                "Missing API key. Add 'api_key' in [api] section or pass --api-key.".to_string(),
            )
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            suggestion_limit: config.suggestion_limit,
            recipe_limit: config.recipe_limit,
        })
    }

    /// Fetch ingredient-name completions for `query`
    ///
    /// A non-list payload yields no suggestions.
    pub async fn autocomplete(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<IngredientSuggestion>, ApiError> {
        let number = self.suggestion_limit.to_string();
        let request = self
            .get("/food/ingredients/autocomplete")
            .query(&[("query", query), ("number", number.as_str())]);

        let body = fetch_with_cancel(Endpoint::Autocomplete, request, cancel_token).await?;
        parse_list(Endpoint::Autocomplete, &body)
    }

    /// Find recipes that use the given ingredient text
    ///
    /// A non-list payload yields no recipes.
    pub async fn find_by_ingredients(
        &self,
        ingredients: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<RecipeSummary>, ApiError> {
        let number = self.recipe_limit.to_string();
        let request = self
            .get("/recipes/findByIngredients")
            .query(&[("ingredients", ingredients), ("number", number.as_str())]);

        let body = fetch_with_cancel(Endpoint::FindByIngredients, request, cancel_token).await?;
        parse_list(Endpoint::FindByIngredients, &body)
    }

    /// Fetch the full recipe record for `recipe_id`
    pub async fn recipe_information(
        &self,
        recipe_id: u64,
        cancel_token: &CancellationToken,
    ) -> Result<RecipeDetail, ApiError> {
        let request = self.get(&format!("/recipes/{}/information", recipe_id));

        let body = fetch_with_cancel(Endpoint::Information, request, cancel_token).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse {
            endpoint: Endpoint::Information,
            message: e.to_string(),
        })
    }

    /// GET request for `path` with the API key already attached
    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", self.api_key.as_str())])
    }
}

/// Send the request and read the body, unless the token fires first
async fn fetch_with_cancel(
    endpoint: Endpoint,
    request: RequestBuilder,
    cancel_token: &CancellationToken,
) -> Result<String, ApiError> {
    if cancel_token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            log::debug!("{} request cancelled in flight", endpoint);
            Err(ApiError::Cancelled)
        }

        result = fetch(endpoint, request) => result,
    }
}

async fn fetch(endpoint: Endpoint, request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Network {
        endpoint,
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Http {
            endpoint,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| ApiError::Network {
        endpoint,
        message: e.to_string(),
    })
}

/// Decode a JSON array of `T`; any other JSON value is an empty list
fn parse_list<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<Vec<T>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse {
        endpoint,
        message: e.to_string(),
    })?;

    if !value.is_array() {
        log::debug!("{} returned a non-list payload, treating as empty", endpoint);
        return Ok(Vec::new());
    }

    serde_json::from_value(value).map_err(|e| ApiError::Parse {
        endpoint,
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
