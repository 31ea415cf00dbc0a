//! Human-readable report formatting for one analysis run.

use std::fmt::Write;

use stocksent_core::{CompanyInfo, StockQuote};
use stocksent_sentiment::{SentimentLabel, SentimentReport};

const RULE: &str = "======================================================================";

/// Number of articles listed individually at the end of the report.
const ARTICLES_SHOWN: usize = 5;

/// Max title length before truncation in the article list.
const TITLE_WIDTH: usize = 70;

/// Render the full report: company block, price block, and (when articles
/// were found) the sentiment summary plus the first few scored articles in
/// pipeline order.
#[must_use]
pub fn render_report(
    quote: &StockQuote,
    company: &CompanyInfo,
    sentiment: &SentimentReport,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "STOCK SENTIMENT ANALYSIS: {}", quote.symbol);
    let _ = writeln!(out, "{RULE}\n");

    let _ = writeln!(out, "Company Information:");
    let _ = writeln!(out, "   Name: {}", company.name);
    let _ = writeln!(out, "   Sector: {}", company.sector);
    let _ = writeln!(out, "   Industry: {}\n", company.industry);

    let direction = if quote.change > 0.0 {
        "up"
    } else if quote.change < 0.0 {
        "down"
    } else {
        "flat"
    };
    let _ = writeln!(out, "Stock Price ({direction}):");
    let _ = writeln!(out, "   Current: ${:.2}", quote.price);
    let _ = writeln!(
        out,
        "   Change: ${:+.2} ({}%)",
        quote.change, quote.change_percent
    );
    let _ = writeln!(out, "   Previous Close: ${:.2}", quote.previous_close);
    let _ = writeln!(out, "   Volume: {}", group_thousands(quote.volume));
    if !company.market_cap.is_empty() && company.market_cap != "0" {
        let _ = writeln!(out, "   Market Cap: {}", format_market_cap(&company.market_cap));
    }
    let _ = writeln!(out, "   Trading Day: {}\n", quote.trading_day);

    if sentiment.articles.is_empty() {
        let _ = writeln!(out, "No news articles found\n");
        return out;
    }

    let aggregate = &sentiment.aggregate;
    let overall = SentimentLabel::from_compound(aggregate.average);

    let _ = writeln!(out, "Sentiment Analysis:");
    let _ = writeln!(out, "   Overall score: {:.3}", aggregate.average);
    let _ = writeln!(out, "   Classification: {}\n", overall.to_string().to_uppercase());

    let _ = writeln!(out, "   Distribution:");
    let _ = writeln!(
        out,
        "     - Positive: {:.1}% ({} articles)",
        aggregate.positive_percent, aggregate.positive_count
    );
    let _ = writeln!(
        out,
        "     - Neutral:  {:.1}% ({} articles)",
        aggregate.neutral_percent, aggregate.neutral_count
    );
    let _ = writeln!(
        out,
        "     - Negative: {:.1}% ({} articles)",
        aggregate.negative_percent, aggregate.negative_count
    );
    let _ = writeln!(out, "   Total Articles: {}\n", aggregate.total);

    let _ = writeln!(out, "Recent Articles:\n");
    for (i, article) in sentiment.articles.iter().take(ARTICLES_SHOWN).enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, truncate(&article.title, TITLE_WIDTH));
        let _ = writeln!(
            out,
            "   {} ({:+.3})",
            article.sentiment.label.to_string().to_uppercase(),
            article.sentiment.compound
        );
        let published: String = article.published_at.chars().take(10).collect();
        let _ = writeln!(out, "   {} | {}\n", article.source_name, published);
    }

    out
}

/// Format a raw market-cap string in humanized dollar form.
///
/// Unparsable input is echoed back unchanged.
#[must_use]
pub fn format_market_cap(raw: &str) -> String {
    let Ok(market_cap) = raw.parse::<f64>() else {
        return raw.to_string();
    };

    if market_cap >= 1e12 {
        format!("${:.2}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("${:.2}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.2}M", market_cap / 1e6)
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = market_cap.round().max(0.0) as u64;
        format!("${}", group_thousands(rounded))
    }
}

/// Insert `,` thousands separators into an integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate to at most `width` characters, appending an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width).collect();
        format!("{cut}...")
    }
}
