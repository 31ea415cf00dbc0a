//! VADER polarity scoring wrapped behind a process-wide analyzer.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::types::{round3, Sentiment, SentimentLabel};

/// Lexicon-based polarity scorer.
///
/// Wraps the VADER intensity analyzer, which loads its pretrained lexicon at
/// construction. Build one per process and pass it into the pipeline rather
/// than constructing per call.
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score one text and classify the result.
    ///
    /// Empty or whitespace-only text yields the defined neutral default
    /// ([`Sentiment::neutral`]) without consulting the model. All four stored
    /// scores are rounded to 3 decimal places; the label is derived from the
    /// unrounded compound. Deterministic for a given text.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::neutral();
        }

        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        let compound = get("compound");

        Sentiment {
            compound: round3(compound),
            positive: round3(get("pos")),
            neutral: round3(get("neu")),
            negative: round3(get("neg")),
            label: SentimentLabel::from_compound(compound),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_neutral_default() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.analyze("");
        assert_eq!(sentiment.compound, 0.0);
        assert_eq!(sentiment.positive, 0.0);
        assert_eq!(sentiment.neutral, 1.0);
        assert_eq!(sentiment.negative, 0.0);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn whitespace_text_returns_neutral_default() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.analyze("   \n\t");
        assert_eq!(sentiment.neutral, 1.0);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn strongly_positive_text_classifies_positive() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.analyze("Great earnings, excellent growth, investors love it");
        assert!(
            sentiment.compound >= 0.05,
            "expected positive compound, got {}",
            sentiment.compound
        );
        assert_eq!(sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn strongly_negative_text_classifies_negative() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.analyze("Terrible losses, awful fraud lawsuit, worst crash");
        assert!(
            sentiment.compound <= -0.05,
            "expected negative compound, got {}",
            sentiment.compound
        );
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn scoring_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let text = "Shares rallied after a strong quarterly report";
        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);
        assert_eq!(first.compound, second.compound);
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn stored_scores_are_rounded_to_three_decimals() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.analyze("Mixed results with some good and some bad news");
        for value in [
            sentiment.compound,
            sentiment.positive,
            sentiment.neutral,
            sentiment.negative,
        ] {
            assert_eq!(round3(value), value, "value not 3-decimal-rounded: {value}");
        }
    }
}
