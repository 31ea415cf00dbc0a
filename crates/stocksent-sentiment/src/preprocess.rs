//! Article filtering, deduplication, and clean-text construction.

use std::collections::HashSet;

use stocksent_core::RawArticle;

use crate::normalize::clean_text;
use crate::types::{ProcessedArticle, Sentiment};

/// Filter, deduplicate, and clean a batch of raw articles.
///
/// Articles missing a non-empty title or URL are dropped. Duplicate titles
/// (case-insensitive exact match) are dropped, keeping the first occurrence
/// in input order. Survivors keep their input order and carry `clean_text`
/// built from the non-empty values among title, description, and content.
///
/// An empty result is valid, not an error.
#[must_use]
pub fn preprocess_articles(raw_articles: Vec<RawArticle>) -> Vec<ProcessedArticle> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut processed = Vec::new();

    for article in raw_articles {
        if article.title.is_empty() || article.url.is_empty() {
            tracing::debug!(url = %article.url, "dropping malformed article");
            continue;
        }

        if !seen_titles.insert(article.title.to_lowercase()) {
            tracing::debug!(title = %article.title, "dropping duplicate article");
            continue;
        }

        let text = [
            Some(article.title.as_str()),
            article.description.as_deref(),
            article.content.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        processed.push(ProcessedArticle {
            clean_text: clean_text(&text),
            title: article.title,
            url: article.url,
            source_name: article.source_name.unwrap_or_else(|| "Unknown".to_string()),
            published_at: article.published_at.unwrap_or_default(),
            sentiment: Sentiment::neutral(),
        });
    }

    processed
}
