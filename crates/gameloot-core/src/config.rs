use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_RAWG_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_CHEAPSHARK_BASE_URL: &str = "https://www.cheapshark.com/api/1.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let require_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw.trim_end_matches('/').to_string())
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let env = parse_environment(&or_default("GAMELOOT_ENV", "development"));
    let log_level = or_default("GAMELOOT_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("GAMELOOT_DATA_DIR", "./data"));

    // An empty key is as good as no key.
    let rawg_api_key = lookup("RAWG_API_KEY").ok().filter(|k| !k.trim().is_empty());

    let rawg_base_url = require_url("GAMELOOT_RAWG_BASE_URL", DEFAULT_RAWG_BASE_URL)?;
    let cheapshark_base_url =
        require_url("GAMELOOT_CHEAPSHARK_BASE_URL", DEFAULT_CHEAPSHARK_BASE_URL)?;

    let request_timeout_secs = parse_positive_u64("GAMELOOT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GAMELOOT_USER_AGENT", "gameloot/0.1 (game-discovery)");

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        rawg_api_key,
        rawg_base_url,
        cheapshark_base_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
