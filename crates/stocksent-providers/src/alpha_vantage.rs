//! Alpha Vantage client for real-time quotes and company overviews.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use stocksent_core::{CompanyInfo, StockQuote};

use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Validate and canonicalize a ticker symbol: trim, uppercase, and accept
/// only ASCII alphanumerics and `.` (e.g. `BRK.B`).
///
/// # Errors
///
/// Returns [`ProviderError::InvalidSymbol`] for empty input or input with
/// any other character.
pub fn normalize_symbol(symbol: &str) -> Result<String, ProviderError> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
        return Err(ProviderError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuotePayload>,
}

/// Quote fields as Alpha Vantage ships them: numbered keys, string values.
#[derive(Debug, Deserialize)]
struct GlobalQuotePayload {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OverviewPayload {
    #[serde(rename = "Symbol")]
    symbol: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Sector")]
    sector: Option<String>,
    #[serde(rename = "Industry")]
    industry: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    market_capitalization: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

/// HTTP client for the Alpha Vantage `query` endpoint.
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient {
    /// Creates a client with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Override the API base URL. Used by tests to point at a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Fetch the current quote for one symbol.
    ///
    /// Returns `Ok(None)` — the absence signal — when the symbol is invalid,
    /// when the response carries no `Global Quote` object, when the price
    /// field is missing, or when a numeric field fails to parse.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Http`] — network or timeout failure.
    /// - [`ProviderError::UnexpectedStatus`] — non-2xx response.
    /// - [`ProviderError::Deserialize`] — response body is not valid JSON.
    pub async fn global_quote(&self, symbol: &str) -> Result<Option<StockQuote>, ProviderError> {
        let Ok(symbol) = normalize_symbol(symbol) else {
            return Ok(None);
        };

        let body = self.query("GLOBAL_QUOTE", &symbol).await?;
        let response: GlobalQuoteResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("global quote for {symbol}"),
                source: e,
            })?;

        let Some(quote) = response.global_quote else {
            return Ok(None);
        };
        if quote.price.is_none() {
            return Ok(None);
        }

        // Any present-but-unparsable numeric field collapses to absence,
        // matching the all-or-nothing shape of a valid quote payload.
        let Some(price) = parse_f64(quote.price) else {
            return Ok(None);
        };
        let Some(change) = parse_f64(quote.change) else {
            return Ok(None);
        };
        let Some(previous_close) = parse_f64(quote.previous_close) else {
            return Ok(None);
        };
        let Some(volume) = parse_u64(quote.volume) else {
            return Ok(None);
        };

        let change_percent = quote
            .change_percent
            .unwrap_or_else(|| "0%".to_owned())
            .trim_end_matches('%')
            .to_owned();

        Ok(Some(StockQuote {
            symbol: quote.symbol.unwrap_or(symbol),
            price,
            change,
            change_percent,
            volume,
            previous_close,
            trading_day: quote.latest_trading_day.unwrap_or_else(|| "N/A".to_owned()),
        }))
    }

    /// Fetch company overview metadata for one symbol.
    ///
    /// Never fails: any HTTP error, bad payload, or payload without a
    /// `Symbol` field degrades to [`CompanyInfo::fallback`] after a warning.
    pub async fn company_overview(&self, symbol: &str) -> CompanyInfo {
        match self.try_company_overview(symbol).await {
            Ok(Some(info)) => info,
            Ok(None) => {
                tracing::warn!(symbol, "company overview has no data, using fallback");
                CompanyInfo::fallback(symbol)
            }
            Err(e) => {
                tracing::warn!(symbol, error = %e, "company overview fetch failed, using fallback");
                CompanyInfo::fallback(symbol)
            }
        }
    }

    async fn try_company_overview(
        &self,
        symbol: &str,
    ) -> Result<Option<CompanyInfo>, ProviderError> {
        let symbol = normalize_symbol(symbol)?;
        let body = self.query("OVERVIEW", &symbol).await?;
        let payload: OverviewPayload =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("company overview for {symbol}"),
                source: e,
            })?;

        if payload.symbol.is_none() {
            return Ok(None);
        }

        Ok(Some(CompanyInfo {
            name: payload.name.unwrap_or(symbol),
            sector: payload.sector.unwrap_or_else(|| "N/A".to_owned()),
            industry: payload.industry.unwrap_or_else(|| "N/A".to_owned()),
            market_cap: payload.market_capitalization.unwrap_or_else(|| "0".to_owned()),
            description: payload.description.unwrap_or_default(),
        }))
    }

    async fn query(&self, function: &str, symbol: &str) -> Result<String, ProviderError> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", function),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

/// Parse an optional numeric string; absent means 0, present-but-bad means `None`.
fn parse_f64(value: Option<String>) -> Option<f64> {
    match value {
        None => Some(0.0),
        Some(raw) => raw.parse().ok(),
    }
}

fn parse_u64(value: Option<String>) -> Option<u64> {
    match value {
        None => Some(0),
        Some(raw) => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_symbol_uppercases_and_trims() {
        assert_eq!(normalize_symbol(" aapl ").unwrap(), "AAPL");
    }

    #[test]
    fn normalize_symbol_allows_dotted_classes() {
        assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
    }

    #[test]
    fn normalize_symbol_rejects_empty() {
        assert!(matches!(
            normalize_symbol("   "),
            Err(ProviderError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn normalize_symbol_rejects_punctuation() {
        assert!(matches!(
            normalize_symbol("AAPL; DROP"),
            Err(ProviderError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn parse_f64_absent_defaults_to_zero() {
        assert_eq!(parse_f64(None), Some(0.0));
    }

    #[test]
    fn parse_f64_garbage_is_none() {
        assert_eq!(parse_f64(Some("not-a-number".to_owned())), None);
    }
}
