//! Boundary types handed from the data providers into the analysis pipeline.

use serde::{Deserialize, Serialize};

/// A news article as delivered by the news provider, before any cleaning.
///
/// `title` and `url` are required for an article to survive preprocessing;
/// everything else is optional and defaulted downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub url: String,
    /// Publisher name. Absent values are reported as "Unknown".
    pub source_name: Option<String>,
    /// ISO-8601 publication timestamp as returned by the API.
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

/// A real-time quote for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    /// Percent change with the trailing `%` already stripped, e.g. `"1.23"`.
    pub change_percent: String,
    pub volume: u64,
    pub previous_close: f64,
    pub trading_day: String,
}

/// Company overview metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub sector: String,
    pub industry: String,
    /// Market capitalization in dollars, as a raw string from the API.
    pub market_cap: String,
    pub description: String,
}

impl CompanyInfo {
    /// Minimal fallback when the overview lookup fails: carry only the symbol.
    #[must_use]
    pub fn fallback(symbol: &str) -> Self {
        Self {
            name: symbol.to_string(),
            sector: "N/A".to_string(),
            industry: "N/A".to_string(),
            market_cap: "0".to_string(),
            description: String::new(),
        }
    }
}
