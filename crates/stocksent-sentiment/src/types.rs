//! Sentiment domain types.

use serde::{Deserialize, Serialize};

/// Compound score at or above this is classified positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below this is classified negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete polarity class for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify a compound score against the fixed thresholds.
    ///
    /// `>= 0.05` is positive, `<= -0.05` is negative, and the open interval
    /// between them is neutral.
    #[must_use]
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Polarity scores for one article, rounded to 3 decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentiment {
    /// Normalized overall score in `[-1.0, 1.0]`.
    pub compound: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    /// The defined sentiment for empty or absent text: fully neutral.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
            label: SentimentLabel::Neutral,
        }
    }
}

/// An article that survived preprocessing, carrying its cleaned text.
///
/// `sentiment` starts at the neutral default and is set during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedArticle {
    pub title: String,
    pub url: String,
    pub source_name: String,
    pub published_at: String,
    pub clean_text: String,
    pub sentiment: Sentiment,
}

/// Summary statistics across one run's scored articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSentiment {
    /// Mean compound score, rounded to 3 decimals. 0.0 for an empty set.
    pub average: f64,
    pub total: usize,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    /// Per-class share of `total` in percent, rounded to 1 decimal.
    ///
    /// Each percent is rounded independently, so the three may sum to
    /// slightly off 100.0.
    pub positive_percent: f64,
    pub neutral_percent: f64,
    pub negative_percent: f64,
}

impl AggregateSentiment {
    /// All-zero aggregate for an empty article set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            total: 0,
            positive_count: 0,
            neutral_count: 0,
            negative_count: 0,
            positive_percent: 0.0,
            neutral_percent: 0.0,
            negative_percent: 0.0,
        }
    }
}

/// Round to 3 decimal places, the precision stored on [`Sentiment`].
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to 1 decimal place, the precision used for percentages.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
