// Configuration type definitions

use serde::Deserialize;

use super::api_types::ApiConfig;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api.api_key = Some(key);
        }
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        self
    }
}
