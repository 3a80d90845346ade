//! HTTP client for the RAWG video game database API.
//!
//! Wraps `reqwest` with RAWG-specific URL construction, API key handling and
//! typed response deserialization. Every failure surfaces to the caller; the
//! client never retries.

use std::time::Duration;

use gameloot_core::{CatalogItem, GamePage, Screenshot};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::RawgError;
use crate::normalize::{normalize_game, normalize_screenshot};
use crate::types::{RawgGame, RawgPage, RawgScreenshot};

const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";
const DEFAULT_USER_AGENT: &str = "gameloot/0.1 (game-discovery)";

/// Client for the RAWG REST API.
///
/// Use [`RawgClient::new`] for production or [`RawgClient::with_base_url`]
/// to point at a mock server in tests.
pub struct RawgClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl RawgClient {
    /// Creates a new client pointed at the production RAWG API.
    ///
    /// # Errors
    ///
    /// Returns [`RawgError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, RawgError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`RawgError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`RawgError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RawgError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so pushed path segments land under the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RawgError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RawgError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches games by title.
    ///
    /// A blank query returns an empty list without a request.
    ///
    /// # Errors
    ///
    /// - [`RawgError::RemoteUnavailable`] on network failure or non-2xx status.
    /// - [`RawgError::Deserialize`] if the body does not match the expected shape.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, RawgError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.build_url(&["games"], &[("search", query)]);
        let page: RawgPage<RawgGame> = self
            .request_json(url, &format!("search(query={query})"))
            .await?;

        tracing::debug!(query, count = page.results.len(), "RAWG search complete");
        Ok(page.results.into_iter().map(normalize_game).collect())
    }

    /// Fetches full details for one game by RAWG id or slug.
    ///
    /// # Errors
    ///
    /// - [`RawgError::InvalidArgument`] if `id` is blank.
    /// - [`RawgError::RemoteUnavailable`] on network failure or non-2xx status.
    /// - [`RawgError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_by_id(&self, id: &str) -> Result<CatalogItem, RawgError> {
        let id = require_id(id)?;
        let url = self.build_url(&["games", id], &[]);
        let game: RawgGame = self.request_json(url, &format!("game(id={id})")).await?;
        Ok(normalize_game(game))
    }

    /// Fetches the screenshots for one game.
    ///
    /// # Errors
    ///
    /// Same as [`RawgClient::get_by_id`].
    pub async fn get_screenshots(&self, id: &str) -> Result<Vec<Screenshot>, RawgError> {
        let id = require_id(id)?;
        let url = self.build_url(&["games", id, "screenshots"], &[]);
        let page: RawgPage<RawgScreenshot> = self
            .request_json(url, &format!("screenshots(id={id})"))
            .await?;
        Ok(page.results.into_iter().map(normalize_screenshot).collect())
    }

    /// Fetches details and screenshots concurrently and returns once both
    /// have completed. Either failure fails the whole page.
    ///
    /// # Errors
    ///
    /// Same as [`RawgClient::get_by_id`].
    pub async fn get_game_page(&self, id: &str) -> Result<GamePage, RawgError> {
        let (game, screenshots) = tokio::try_join!(self.get_by_id(id), self.get_screenshots(id))?;
        Ok(GamePage { game, screenshots })
    }

    /// Builds the request URL from path segments plus the API key and any
    /// extra query parameters, percent-encoding everything.
    fn build_url(&self, segments: &[&str], extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body.
    ///
    /// # Errors
    ///
    /// Returns [`RawgError::RemoteUnavailable`] on network failure or a
    /// non-2xx status, [`RawgError::Deserialize`] if the body does not parse.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, RawgError> {
        let shown = redact_key(&url);
        tracing::debug!(url = %shown, "requesting RAWG");

        let unavailable = |reason: String| RawgError::RemoteUnavailable {
            url: shown.clone(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %shown, status = status.as_u16(), "RAWG returned non-success status");
            return Err(unavailable(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| unavailable(e.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|e| RawgError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn require_id(id: &str) -> Result<&str, RawgError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RawgError::InvalidArgument(
            "a RAWG game id is required".to_owned(),
        ));
    }
    Ok(id)
}

/// Renders `url` with the `key` query parameter masked, for logs and errors.
fn redact_key(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "[redacted]".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
