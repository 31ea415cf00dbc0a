//! NewsAPI client for recent article search.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use stocksent_core::RawArticle;

use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Hard cap on `pageSize` accepted by the API.
const PAGE_SIZE_CAP: u32 = 100;

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: Option<String>,
    #[serde(default)]
    articles: Vec<ArticlePayload>,
}

#[derive(Debug, Deserialize)]
struct ArticlePayload {
    source: Option<SourcePayload>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SourcePayload {
    name: Option<String>,
}

/// HTTP client for NewsAPI's `/v2/everything` search.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
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

    /// Fetch English-language articles matching `query` from the last
    /// `window_days` days, newest first, capped at `max_articles` (hard cap
    /// 100).
    ///
    /// Never fails: an empty query, HTTP error, timeout, non-`ok` API status,
    /// or malformed payload all collapse to an empty list after a warning.
    /// Downstream code treats an empty list as a valid input.
    pub async fn fetch_news(
        &self,
        query: &str,
        window_days: i64,
        max_articles: u32,
    ) -> Vec<RawArticle> {
        if query.is_empty() {
            return Vec::new();
        }

        match self.try_fetch_news(query, window_days, max_articles).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(query, error = %e, "news fetch failed, returning no articles");
                Vec::new()
            }
        }
    }

    async fn try_fetch_news(
        &self,
        query: &str,
        window_days: i64,
        max_articles: u32,
    ) -> Result<Vec<RawArticle>, ProviderError> {
        let to_date = Utc::now().date_naive();
        let from_date = to_date - ChronoDuration::days(window_days);
        let page_size = max_articles.min(PAGE_SIZE_CAP);

        let from = from_date.format("%Y-%m-%d").to_string();
        let to = to_date.format("%Y-%m-%d").to_string();
        let page_size = page_size.to_string();

        let url = format!("{}/v2/everything", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
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

        let body = response.text().await?;
        let parsed: EverythingResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                context: format!("news search for {query}"),
                source: e,
            })?;

        if parsed.status.as_deref() != Some("ok") {
            tracing::warn!(
                query,
                status = parsed.status.as_deref().unwrap_or("missing"),
                "news API returned non-ok status"
            );
            return Ok(Vec::new());
        }

        let articles = parsed
            .articles
            .into_iter()
            .map(|article| RawArticle {
                title: article.title.unwrap_or_default(),
                url: article.url.unwrap_or_default(),
                source_name: article.source.and_then(|s| s.name),
                published_at: article.published_at,
                description: article.description,
                content: article.content,
            })
            .collect();

        Ok(articles)
    }
}
