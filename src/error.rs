use thiserror::Error;

#[derive(Debug, Error)]
pub enum LarderError {
    #[error("Invalid base URL '{url}': {reason}\n\nSet 'base_url' in the [api] section of ~/.config/larder/config.toml or pass --base-url.")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
