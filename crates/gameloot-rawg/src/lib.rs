pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::RawgClient;
pub use error::RawgError;
pub use normalize::{normalize_game, normalize_screenshot, parse_date};
pub use types::{RawgGame, RawgPage, RawgScreenshot};
