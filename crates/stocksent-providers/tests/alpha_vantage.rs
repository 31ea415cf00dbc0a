//! Integration tests for `AlphaVantageClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the quote happy path, every absence-signal
//! payload shape, and the overview fallback behavior.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stocksent_providers::{AlphaVantageClient, ProviderError};

/// Builds a client pointed at the mock server: 5-second timeout, test UA.
fn test_client(server: &MockServer) -> AlphaVantageClient {
    AlphaVantageClient::new("test-key", 5, "stocksent-test/0.1")
        .expect("failed to build test AlphaVantageClient")
        .with_base_url(&server.uri())
}

/// Full valid GLOBAL_QUOTE fixture for AAPL.
fn quote_json() -> serde_json::Value {
    json!({
        "Global Quote": {
            "01. symbol": "AAPL",
            "02. open": "230.00",
            "03. high": "233.10",
            "04. low": "229.50",
            "05. price": "232.50",
            "06. volume": "51234567",
            "07. latest trading day": "2026-08-26",
            "08. previous close": "230.10",
            "09. change": "2.40",
            "10. change percent": "1.0430%"
        }
    })
}

#[tokio::test]
async fn global_quote_parses_full_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&quote_json()))
        .mount(&server)
        .await;

    let quote = test_client(&server)
        .global_quote("aapl")
        .await
        .expect("expected Ok")
        .expect("expected a quote");

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 232.50);
    assert_eq!(quote.change, 2.40);
    assert_eq!(quote.change_percent, "1.0430");
    assert_eq!(quote.volume, 51_234_567);
    assert_eq!(quote.previous_close, 230.10);
    assert_eq!(quote.trading_day, "2026-08-26");
}

#[tokio::test]
async fn global_quote_missing_quote_object_is_absence() {
    let server = MockServer::start().await;

    // Alpha Vantage signals unknown symbols with an informational body.
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!({"Information": "Invalid API call."})),
        )
        .mount(&server)
        .await;

    let result = test_client(&server).global_quote("ZZZZ").await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None), got: {result:?}"
    );
}

#[tokio::test]
async fn global_quote_empty_quote_object_is_absence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"Global Quote": {}})))
        .mount(&server)
        .await;

    let result = test_client(&server).global_quote("AAPL").await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None) when price is missing, got: {result:?}"
    );
}

#[tokio::test]
async fn global_quote_unparsable_price_is_absence() {
    let server = MockServer::start().await;

    let mut body = quote_json();
    body["Global Quote"]["05. price"] = json!("not-a-price");

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let result = test_client(&server).global_quote("AAPL").await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None) for unparsable price, got: {result:?}"
    );
}

#[tokio::test]
async fn global_quote_invalid_symbol_is_absence_without_request() {
    // No mock mounted: an invalid symbol must short-circuit before any request.
    let server = MockServer::start().await;

    let result = test_client(&server).global_quote("AAPL; DROP").await;
    assert!(
        matches!(result, Ok(None)),
        "expected Ok(None) for invalid symbol, got: {result:?}"
    );
}

#[tokio::test]
async fn global_quote_server_error_is_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = test_client(&server).global_quote("AAPL").await;
    assert!(
        matches!(
            result,
            Err(ProviderError::UnexpectedStatus { status: 500, .. })
        ),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn global_quote_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = test_client(&server).global_quote("AAPL").await;
    assert!(
        matches!(result, Err(ProviderError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn company_overview_parses_full_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "OVERVIEW"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "Symbol": "AAPL",
            "Name": "Apple Inc",
            "Sector": "TECHNOLOGY",
            "Industry": "ELECTRONIC COMPUTERS",
            "MarketCapitalization": "3450000000000",
            "Description": "Apple Inc. designs consumer electronics."
        })))
        .mount(&server)
        .await;

    let info = test_client(&server).company_overview("AAPL").await;
    assert_eq!(info.name, "Apple Inc");
    assert_eq!(info.sector, "TECHNOLOGY");
    assert_eq!(info.industry, "ELECTRONIC COMPUTERS");
    assert_eq!(info.market_cap, "3450000000000");
}

#[tokio::test]
async fn company_overview_without_symbol_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({})))
        .mount(&server)
        .await;

    let info = test_client(&server).company_overview("ZZZZ").await;
    assert_eq!(info.name, "ZZZZ");
    assert_eq!(info.sector, "N/A");
}

#[tokio::test]
async fn company_overview_server_error_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let info = test_client(&server).company_overview("AAPL").await;
    assert_eq!(info.name, "AAPL");
    assert_eq!(info.market_cap, "0");
}
