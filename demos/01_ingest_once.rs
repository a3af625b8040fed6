use std::sync::Arc;
use std::time::Duration;

use finews_rs::{
    FeedClient, IngestConfig, MemoryStore, NewsIngestor, NewsService, RefreshContext,
    RetryConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Read NEWS_FEEDS / REQUEST_TIMEOUT etc. from the environment.
    let cfg = IngestConfig::from_env()?;

    // 2. A client with a per-request timeout and the default retry policy.
    let client = FeedClient::builder()
        .timeout(Duration::from_secs(10))
        .retry_config(RetryConfig::default())
        .build()?;

    // 3. Wire the ingestor to an in-memory store.
    let store = Arc::new(MemoryStore::new());
    let ingestor = NewsIngestor::builder(store.clone())
        .feeds(cfg.feeds.clone())
        .source(client)
        .build()?;

    println!("--- Refreshing {} feed(s) ---", ingestor.feeds().len());
    let ctx = RefreshContext::background().with_timeout(cfg.request_timeout * 4);
    let report = ingestor.refresh(&ctx, cfg.max_articles).await?;
    println!(
        "fetched {} item(s), {} feed(s) failed, stored {}/{}",
        report.fetched, report.failed_feeds, report.persisted, report.processed
    );
    println!();

    // 4. Read back the freshest headlines.
    println!("--- Latest headlines ---");
    for h in NewsService::new(store).latest(10).await? {
        println!(
            "  [{:<7}] {:+.2} {} ({})",
            h.trend.as_str(),
            h.sentiment,
            h.title,
            h.tickers.join(", ")
        );
    }

    Ok(())
}
