//! Local persistence for gameloot: a tiny key-value layer and the wishlist
//! document stored on top of it.

pub mod error;
pub mod kv;
pub mod wishlist;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use wishlist::{parse_document, WishlistStore, WISHLIST_KEY};
