use std::sync::Arc;
use std::time::Duration;

use finews_rs::{IngestConfig, MemoryStore, NewsIngestor, NewsService, RefreshScheduler, logging};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Short interval so a couple of scheduled refreshes happen during the demo.
    let mut cfg = IngestConfig::from_env()?;
    cfg.poll_interval = Duration::from_secs(20);
    logging::init(&cfg);

    let store = Arc::new(MemoryStore::new());
    let ingestor = NewsIngestor::builder(store.clone())
        .feeds(cfg.feeds.clone())
        .build()?;

    let shutdown = CancellationToken::new();
    let handle = RefreshScheduler::from_config(Arc::new(ingestor), &cfg)?.spawn(shutdown.clone());

    let news = NewsService::new(store.clone());
    for _ in 0..3 {
        tokio::time::sleep(Duration::from_secs(20)).await;
        let latest = news.latest(3).await?;
        println!("--- {} stored, top {} ---", store.len().await, latest.len());
        for h in latest {
            println!("  {} [{}] {}", h.published_at.format("%H:%M"), h.trend, h.title);
        }
    }

    shutdown.cancel();
    handle.await?;
    Ok(())
}
