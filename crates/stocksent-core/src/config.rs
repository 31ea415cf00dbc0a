use thiserror::Error;

use crate::app_config::AppConfig;

/// Hard cap on `pageSize` accepted by the news API.
pub const NEWS_MAX_ARTICLES_CAP: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let alpha_vantage_api_key = require("ALPHA_VANTAGE_API_KEY")?;
    let news_api_key = require("NEWS_API_KEY")?;

    let log_level = or_default("STOCKSENT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("STOCKSENT_REQUEST_TIMEOUT_SECS", "10")?;
    let news_window_days = parse_i64("STOCKSENT_NEWS_WINDOW_DAYS", "7")?;
    let news_max_articles =
        parse_u32("STOCKSENT_NEWS_MAX_ARTICLES", "20")?.min(NEWS_MAX_ARTICLES_CAP);
    let user_agent = or_default("STOCKSENT_USER_AGENT", "stocksent/0.1 (stock-sentiment)");

    Ok(AppConfig {
        alpha_vantage_api_key,
        news_api_key,
        log_level,
        request_timeout_secs,
        news_window_days,
        news_max_articles,
        user_agent,
    })
}
