use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheapsharkError {
    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network failure or a non-2xx response.
    #[error("CheapShark unavailable at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Core(#[from] gameloot_core::CoreError),
}
