//! Shared domain types and configuration for stocksent.
//!
//! Holds the boundary shapes exchanged between the data providers and the
//! sentiment pipeline, plus environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use types::{CompanyInfo, RawArticle, StockQuote};
