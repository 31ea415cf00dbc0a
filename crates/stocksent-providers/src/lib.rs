//! HTTP data providers for stocksent.
//!
//! Thin clients for the Alpha Vantage quote/overview API and the NewsAPI
//! article search. These collaborators own all network failure handling:
//! a quote that cannot be found is an absence signal (`Ok(None)`), a company
//! overview that fails degrades to a symbol-only fallback, and any news fetch
//! failure collapses to an empty article list. The sentiment core never sees
//! an I/O error.

pub mod alpha_vantage;
pub mod error;
pub mod news_api;

pub use alpha_vantage::AlphaVantageClient;
pub use error::ProviderError;
pub use news_api::NewsApiClient;
