//! Domain types and pure logic shared by every gameloot crate.
//!
//! Nothing in here performs network or storage I/O; the only side effect is
//! reading environment variables in [`load_app_config`].

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod deals;
pub mod wishlist;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogItem, GamePage, Screenshot};
pub use config::{load_app_config, load_app_config_from_env};
pub use deals::{
    effective_savings_percent, parse_decimal, select_best_deal, BestDeal, DealRecord,
    UNKNOWN_STORE,
};
pub use wishlist::WishlistEntry;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
