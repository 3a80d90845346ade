//! Lazily loaded store-id → store-name directory.
//!
//! The directory is fetched at most once per [`StoreDirectoryCache`]. The
//! async mutex is held for the whole load, so callers that arrive while a
//! fetch is in flight wait for it instead of starting their own. A failed
//! load leaves the cache empty and the next caller fetches again.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use gameloot_core::UNKNOWN_STORE;
use tokio::sync::Mutex;

use crate::types::StoreInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreDirectory {
    names: HashMap<String, String>,
}

impl StoreDirectory {
    /// Returns the store name, or [`UNKNOWN_STORE`] for ids not in the directory.
    #[must_use]
    pub fn name_for(&self, store_id: &str) -> &str {
        self.names
            .get(store_id)
            .map_or(UNKNOWN_STORE, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<StoreInfo> for StoreDirectory {
    fn from_iter<I: IntoIterator<Item = StoreInfo>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|s| (s.store_id, s.store_name))
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct StoreDirectoryCache {
    slot: Mutex<Option<Arc<StoreDirectory>>>,
}

impl StoreDirectoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached directory, running `load` first if it is empty.
    ///
    /// # Errors
    ///
    /// Propagates the error from `load`; nothing is cached in that case.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<Arc<StoreDirectory>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<StoreDirectory, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(directory) = slot.as_ref() {
            return Ok(Arc::clone(directory));
        }

        let directory = Arc::new(load().await?);
        tracing::debug!(stores = directory.len(), "store directory cached");
        *slot = Some(Arc::clone(&directory));
        Ok(directory)
    }

    /// Resolves `store_id` to a display name, loading the directory on first use.
    ///
    /// A blank id resolves to [`UNKNOWN_STORE`] without loading anything.
    ///
    /// # Errors
    ///
    /// Propagates the error from `load`.
    pub async fn resolve_with<F, Fut, E>(&self, store_id: &str, load: F) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<StoreDirectory, E>>,
    {
        let store_id = store_id.trim();
        if store_id.is_empty() {
            return Ok(UNKNOWN_STORE.to_owned());
        }
        let directory = self.get_or_load(load).await?;
        Ok(directory.name_for(store_id).to_owned())
    }

    pub async fn is_loaded(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Drops the cached directory so the next lookup fetches it again.
    pub async fn reset(&self) {
        *self.slot.lock().await = None;
    }
}
