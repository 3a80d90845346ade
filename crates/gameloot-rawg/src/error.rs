use thiserror::Error;

/// Errors returned by the RAWG API client.
#[derive(Debug, Error)]
pub enum RawgError {
    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network failure or a non-2xx response. `url` never contains the API key.
    #[error("RAWG unavailable at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
