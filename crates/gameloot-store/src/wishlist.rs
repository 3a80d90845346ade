//! The wishlist document: a JSON array of [`WishlistEntry`] stored under a
//! single key.
//!
//! Every mutation reads the whole document, changes it in memory and writes
//! it back in one `set`. There is no locking across processes; two writers
//! racing on the same backend resolve as last-writer-wins.

use gameloot_core::WishlistEntry;
use serde_json::Value;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const WISHLIST_KEY: &str = "gameloot-wishlist";

/// Parses a stored wishlist document.
///
/// Invalid JSON or a non-array value yields an empty list. Array elements
/// that are not valid entries are skipped, and only the first entry for each
/// id is kept.
#[must_use]
pub fn parse_document(raw: &str) -> Vec<WishlistEntry> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "wishlist document is not valid JSON; treating as empty");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        tracing::warn!("wishlist document is not a JSON array; treating as empty");
        return Vec::new();
    };

    let mut entries: Vec<WishlistEntry> = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<WishlistEntry>(item) {
            Ok(entry) if entries.iter().any(|e| e.id == entry.id) => {
                tracing::debug!(id = entry.id, "dropping duplicate wishlist entry");
            }
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::debug!(error = %e, "skipping malformed wishlist entry"),
        }
    }
    entries
}

pub struct WishlistStore<S> {
    backend: S,
}

impl<S: KeyValueStore> WishlistStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// All entries in insertion order. Never fails: unreadable or corrupt
    /// storage reads as an empty wishlist.
    pub fn list(&self) -> Vec<WishlistEntry> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read wishlist; treating as empty");
            Vec::new()
        })
    }

    pub fn contains(&self, id: i64) -> bool {
        self.list().iter().any(|e| e.id == id)
    }

    /// Appends `entry` unless an entry with the same id exists.
    ///
    /// Returns `true` if the entry was added.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidArgument`] if `entry.id` is not positive.
    /// - Any backend error while reading or writing the document.
    pub fn add(&self, entry: WishlistEntry) -> Result<bool, StoreError> {
        if entry.id <= 0 {
            return Err(StoreError::InvalidArgument(format!(
                "wishlist entry id must be positive, got {}",
                entry.id
            )));
        }

        let mut entries = self.load()?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Ok(false);
        }

        tracing::info!(id = entry.id, name = %entry.name, "adding to wishlist");
        entries.push(entry);
        self.save(&entries)?;
        Ok(true)
    }

    /// Removes every entry with `id`. Returns `true` if anything was removed.
    ///
    /// # Errors
    ///
    /// Any backend error while reading or writing the document.
    pub fn remove(&self, id: i64) -> Result<bool, StoreError> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }

        tracing::info!(id, "removing from wishlist");
        self.save(&entries)?;
        Ok(true)
    }

    /// Deletes the whole document.
    ///
    /// # Errors
    ///
    /// Any backend error while deleting the key.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(WISHLIST_KEY)
    }

    /// Reads the current document. Backend failures propagate so that a
    /// mutation never overwrites a document it could not read; malformed
    /// content does not.
    fn load(&self) -> Result<Vec<WishlistEntry>, StoreError> {
        Ok(self
            .backend
            .get(WISHLIST_KEY)?
            .map(|raw| parse_document(&raw))
            .unwrap_or_default())
    }

    fn save(&self, entries: &[WishlistEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(|source| StoreError::Serialize {
            key: WISHLIST_KEY.to_owned(),
            source,
        })?;
        self.backend.set(WISHLIST_KEY, &raw)
    }
}

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod tests;
