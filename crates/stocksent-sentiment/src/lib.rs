//! Sentiment analysis pipeline for stocksent.
//!
//! Takes raw news articles, filters and deduplicates them, normalizes their
//! text, scores each one with the VADER lexicon model, classifies the scores
//! against fixed thresholds, and aggregates the results into per-run summary
//! statistics. Pure in-memory computation; all I/O lives in the provider crates.

pub mod aggregate;
pub mod normalize;
pub mod pipeline;
pub mod preprocess;
pub mod scorer;
pub mod types;

pub use aggregate::aggregate_sentiment;
pub use normalize::clean_text;
pub use pipeline::{analyze_articles, SentimentReport};
pub use preprocess::preprocess_articles;
pub use scorer::SentimentAnalyzer;
pub use types::{AggregateSentiment, ProcessedArticle, Sentiment, SentimentLabel};
