pub mod client;
pub mod error;
pub mod normalize;
pub mod store_directory;
pub mod types;

pub use client::{redirect_url, CheapsharkClient};
pub use error::CheapsharkError;
pub use normalize::{normalize_deal, normalize_deals};
pub use store_directory::{StoreDirectory, StoreDirectoryCache};
pub use types::{DealsGame, StoreInfo};
