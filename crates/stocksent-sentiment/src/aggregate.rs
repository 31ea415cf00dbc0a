//! Aggregate statistics across a scored article set.

use crate::types::{round1, round3, AggregateSentiment, ProcessedArticle, SentimentLabel};

/// Combine per-article sentiments into summary statistics.
///
/// An empty input returns the all-zero aggregate, a defined default rather
/// than an error. Otherwise the average is the 3-decimal-rounded mean of the
/// stored compound scores, each article increments exactly one class counter,
/// and each percent is `count / total * 100` rounded to 1 decimal. Percents
/// are rounded independently per class, so their sum may drift slightly from
/// 100.0; that drift is preserved, not corrected.
#[must_use]
pub fn aggregate_sentiment(articles: &[ProcessedArticle]) -> AggregateSentiment {
    if articles.is_empty() {
        return AggregateSentiment::empty();
    }

    let mut positive_count = 0_usize;
    let mut neutral_count = 0_usize;
    let mut negative_count = 0_usize;
    let mut compound_sum = 0.0_f64;

    for article in articles {
        compound_sum += article.sentiment.compound;
        match article.sentiment.label {
            SentimentLabel::Positive => positive_count += 1,
            SentimentLabel::Neutral => neutral_count += 1,
            SentimentLabel::Negative => negative_count += 1,
        }
    }

    let total = articles.len();
    #[allow(clippy::cast_precision_loss)]
    let denom = total as f64;
    let percent = |count: usize| {
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        round1(count / denom * 100.0)
    };

    AggregateSentiment {
        average: round3(compound_sum / denom),
        total,
        positive_count,
        neutral_count,
        negative_count,
        positive_percent: percent(positive_count),
        neutral_percent: percent(neutral_count),
        negative_percent: percent(negative_count),
    }
}
