//! HTTP client for the CheapShark price-comparison API.
//!
//! Read-only queries plus a per-client memoized store directory. Nothing is
//! retried; every failure reaches the caller.

use std::sync::Arc;
use std::time::Duration;

use gameloot_core::{effective_savings_percent, select_best_deal, BestDeal, DealRecord};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::CheapsharkError;
use crate::normalize::normalize_deals;
use crate::store_directory::{StoreDirectory, StoreDirectoryCache};
use crate::types::{DealsGame, StoreInfo};

const DEFAULT_BASE_URL: &str = "https://www.cheapshark.com/api/1.0";
const DEFAULT_USER_AGENT: &str = "gameloot/0.1 (game-discovery)";
const REDIRECT_URL: &str = "https://www.cheapshark.com/redirect";

/// Number of title matches requested per search.
const SEARCH_PAGE_SIZE: &str = "10";

/// Link that sends a shopper to the storefront for `deal_id`.
#[must_use]
pub fn redirect_url(deal_id: &str) -> String {
    format!(
        "{REDIRECT_URL}?dealID={}",
        utf8_percent_encode(deal_id, NON_ALPHANUMERIC)
    )
}

/// Client for the CheapShark REST API.
///
/// Owns its store directory cache: the first [`CheapsharkClient::resolve_store_name`]
/// call fetches `/stores`, later calls on the same client never touch the
/// network for store names.
pub struct CheapsharkClient {
    client: Client,
    base_url: Url,
    stores: StoreDirectoryCache,
}

impl CheapsharkClient {
    /// Creates a new client pointed at the production CheapShark API.
    ///
    /// # Errors
    ///
    /// Returns [`CheapsharkError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, CheapsharkError> {
        Self::with_base_url(timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CheapsharkError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`CheapsharkError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CheapsharkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| CheapsharkError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(CheapsharkError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url,
            stores: StoreDirectoryCache::new(),
        })
    }

    /// Searches CheapShark titles. A blank title returns an empty list
    /// without a request.
    ///
    /// # Errors
    ///
    /// - [`CheapsharkError::RemoteUnavailable`] on network failure or non-2xx status.
    /// - [`CheapsharkError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<DealsGame>, CheapsharkError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.build_url(
            "games",
            &[("title", title), ("limit", SEARCH_PAGE_SIZE), ("exact", "0")],
        );
        self.request_json(url, &format!("games(title={title})")).await
    }

    /// Fetches every current deal for a CheapShark game id.
    ///
    /// # Errors
    ///
    /// Same as [`CheapsharkClient::search_by_title`].
    pub async fn deals_by_game_id(&self, game_id: &str) -> Result<Vec<DealRecord>, CheapsharkError> {
        let game_id = game_id.trim();
        if game_id.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.build_url("deals", &[("gameID", game_id)]);
        let raw: Vec<serde_json::Value> = self
            .request_json(url, &format!("deals(gameID={game_id})"))
            .await?;
        Ok(normalize_deals(&raw))
    }

    /// Fetches the largest current discounts, biggest first.
    ///
    /// # Errors
    ///
    /// Same as [`CheapsharkClient::search_by_title`].
    pub async fn top_deals(
        &self,
        limit: u32,
        upper_price: Option<Decimal>,
    ) -> Result<Vec<DealRecord>, CheapsharkError> {
        let page_size = limit.to_string();
        let upper = upper_price.map(|p| p.normalize().to_string());

        let mut params = vec![("pageSize", page_size.as_str()), ("sortBy", "Savings")];
        if let Some(upper) = upper.as_deref() {
            params.push(("upperPrice", upper));
        }

        let url = self.build_url("deals", &params);
        let raw: Vec<serde_json::Value> = self.request_json(url, "deals(top)").await?;
        Ok(normalize_deals(&raw))
    }

    /// Fetches the full store list.
    ///
    /// # Errors
    ///
    /// Same as [`CheapsharkClient::search_by_title`].
    pub async fn stores(&self) -> Result<Vec<StoreInfo>, CheapsharkError> {
        let url = self.build_url("stores", &[]);
        self.request_json(url, "stores").await
    }

    /// Returns the store directory, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Same as [`CheapsharkClient::search_by_title`]; nothing is cached on failure.
    pub async fn store_directory(&self) -> Result<Arc<StoreDirectory>, CheapsharkError> {
        self.stores.get_or_load(|| self.load_directory()).await
    }

    /// Resolves a store id to its display name.
    ///
    /// Unknown or blank ids resolve to [`gameloot_core::UNKNOWN_STORE`].
    ///
    /// # Errors
    ///
    /// [`CheapsharkError::RemoteUnavailable`] if the directory has to be
    /// fetched and the fetch fails.
    pub async fn resolve_store_name(&self, store_id: &str) -> Result<String, CheapsharkError> {
        self.stores
            .resolve_with(store_id, || self.load_directory())
            .await
    }

    /// Forgets the cached store directory.
    pub async fn reset_store_cache(&self) {
        self.stores.reset().await;
    }

    /// Looks up the cheapest current deal for a title.
    ///
    /// Runs the chain title search → first match → deals → best deal → store
    /// name, each step waiting on the previous one. Returns `Ok(None)` when
    /// the title has no match or the match has no deals.
    ///
    /// # Errors
    ///
    /// Propagates the first failing request.
    pub async fn best_deal_for_title(
        &self,
        title: &str,
    ) -> Result<Option<BestDeal>, CheapsharkError> {
        let matches = self.search_by_title(title).await?;
        let Some(first) = matches.first() else {
            tracing::info!(title, "no CheapShark match");
            return Ok(None);
        };

        let deals = self.deals_by_game_id(&first.game_id).await?;
        if deals.is_empty() {
            tracing::info!(title, game_id = %first.game_id, "no active deals");
            return Ok(None);
        }

        let deal = select_best_deal(&deals)?.clone();
        let store_name = self.resolve_store_name(&deal.store_id).await?;
        let savings_percent = effective_savings_percent(&deal);

        tracing::debug!(
            title,
            deal_id = %deal.deal_id,
            store = %store_name,
            savings_percent,
            "best deal selected"
        );

        Ok(Some(BestDeal {
            deal,
            store_name,
            savings_percent,
        }))
    }

    async fn load_directory(&self) -> Result<StoreDirectory, CheapsharkError> {
        let stores = self.stores().await?;
        Ok(stores.into_iter().collect())
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(endpoint);
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CheapsharkError> {
        let shown = url.to_string();
        tracing::debug!(url = %shown, "requesting CheapShark");

        let unavailable = |reason: String| CheapsharkError::RemoteUnavailable {
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
            tracing::warn!(url = %shown, status = status.as_u16(), "CheapShark returned non-success status");
            return Err(unavailable(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| unavailable(e.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|e| CheapsharkError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> CheapsharkClient {
        CheapsharkClient::with_base_url(30, "gameloot-test/0.1", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_keeps_api_version_path() {
        let client = test_client("https://www.cheapshark.com/api/1.0/");
        let url = client.build_url("deals", &[("gameID", "612")]);
        assert_eq!(
            url.as_str(),
            "https://www.cheapshark.com/api/1.0/deals?gameID=612"
        );
    }

    #[test]
    fn build_url_without_params_has_no_query() {
        let client = test_client("https://www.cheapshark.com/api/1.0");
        let url = client.build_url("stores", &[]);
        assert_eq!(url.as_str(), "https://www.cheapshark.com/api/1.0/stores");
    }

    #[test]
    fn redirect_url_encodes_deal_id() {
        assert_eq!(
            redirect_url("X8sebHhbc1Ga0dTkgg59WgyM506af9oNZZJLU9uSrX8="),
            "https://www.cheapshark.com/redirect?dealID=X8sebHhbc1Ga0dTkgg59WgyM506af9oNZZJLU9uSrX8%3D"
        );
    }
}
