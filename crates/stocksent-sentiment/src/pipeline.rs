//! Sentiment pipeline orchestration.

use stocksent_core::RawArticle;

use crate::aggregate::aggregate_sentiment;
use crate::preprocess::preprocess_articles;
use crate::scorer::SentimentAnalyzer;
use crate::types::{AggregateSentiment, ProcessedArticle};

/// Result of one pipeline run: scored articles in pipeline order plus the
/// run-wide aggregate.
#[derive(Debug, Clone)]
pub struct SentimentReport {
    pub articles: Vec<ProcessedArticle>,
    pub aggregate: AggregateSentiment,
}

/// Run the full sentiment pipeline over one batch of raw articles.
///
/// 1. Preprocess: drop malformed articles, dedup by title, build clean text.
/// 2. Score each survivor with the analyzer and attach its classification.
/// 3. Aggregate the scored set into summary statistics.
///
/// Sequential and purely in-memory. An empty batch flows through to an
/// all-zero aggregate.
#[must_use]
pub fn analyze_articles(
    analyzer: &SentimentAnalyzer,
    raw_articles: Vec<RawArticle>,
) -> SentimentReport {
    let raw_count = raw_articles.len();
    let mut articles = preprocess_articles(raw_articles);
    tracing::debug!(
        raw = raw_count,
        kept = articles.len(),
        "preprocessed article batch"
    );

    for article in &mut articles {
        article.sentiment = analyzer.analyze(&article.clean_text);
    }

    let aggregate = aggregate_sentiment(&articles);
    tracing::debug!(
        total = aggregate.total,
        average = aggregate.average,
        "aggregated article sentiment"
    );

    SentimentReport {
        articles,
        aggregate,
    }
}
