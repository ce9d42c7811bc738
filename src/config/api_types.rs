// Recipe API configuration type definitions

use serde::Deserialize;

/// Public Spoonacular endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default number of matches requested from both list endpoints
fn default_result_limit() -> u8 {
    5
}

/// Recipe API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Static key appended as the `apiKey` query parameter
    pub api_key: Option<String>,
    /// Scheme and host of the API, without trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `number` sent to the ingredient autocomplete endpoint
    #[serde(default = "default_result_limit")]
    pub suggestion_limit: u8,
    /// `number` sent to the find-by-ingredients endpoint
    #[serde(default = "default_result_limit")]
    pub recipe_limit: u8,
    /// Per-request timeout; absent means requests may hang indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_key: None,
            base_url: default_base_url(),
            suggestion_limit: default_result_limit(),
            recipe_limit: default_result_limit(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// The API key, if one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
