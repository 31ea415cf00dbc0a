mod report;

use clap::Parser;

use stocksent_core::load_app_config;
use stocksent_providers::{AlphaVantageClient, NewsApiClient};
use stocksent_sentiment::{analyze_articles, SentimentAnalyzer};

#[derive(Debug, Parser)]
#[command(name = "stocksent")]
#[command(about = "Stock quote and news sentiment report")]
struct Cli {
    /// Ticker symbol to analyze, e.g. AAPL
    symbol: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let quotes = AlphaVantageClient::new(
        &config.alpha_vantage_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let news = NewsApiClient::new(
        &config.news_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    // One analyzer per process; the lexicon load is not free.
    let analyzer = SentimentAnalyzer::new();

    tracing::info!(symbol = %cli.symbol, "fetching stock data");
    let Some(quote) = quotes.global_quote(&cli.symbol).await? else {
        anyhow::bail!("could not fetch stock data for {}", cli.symbol);
    };

    let company = quotes.company_overview(&quote.symbol).await;

    tracing::info!(company = %company.name, "fetching news articles");
    let articles = news
        .fetch_news(
            &company.name,
            config.news_window_days,
            config.news_max_articles,
        )
        .await;
    tracing::info!(count = articles.len(), "analyzing sentiment");

    let sentiment = analyze_articles(&analyzer, articles);

    print!("{}", report::render_report(&quote, &company, &sentiment));

    Ok(())
}
