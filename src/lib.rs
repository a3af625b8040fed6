//! finews-rs: financial news ingestion.
//!
//! Polls a configured list of RSS/Atom feeds, scores every article for
//! sentiment, tags it with the ticker symbols it mentions, and upserts it
//! into a store under an id derived from its content, so repeated runs over
//! the same items are idempotent.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use finews_rs::{MemoryStore, NewsIngestor, NewsService, RefreshContext};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let ingestor = NewsIngestor::new(store.clone(), ["https://feeds.a.dj.com/rss/RSSMarketsMain"])?;
//!
//! let ctx = RefreshContext::background().with_timeout(std::time::Duration::from_secs(10));
//! let report = ingestor.refresh(&ctx, 20).await?;
//! println!("stored {} articles", report.persisted);
//!
//! for h in NewsService::new(store).latest(5).await? {
//!     println!("[{}] {} ({})", h.trend, h.title, h.tickers.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod feed;
pub mod ingest;
#[cfg(feature = "tracing-subscriber")]
pub mod logging;
pub mod news;
pub mod scheduler;
pub mod sentiment;
pub mod store;
pub mod tickers;

pub use config::IngestConfig;
pub use crate::core::{
    ArticleStore, Backoff, FeedClient, FeedClientBuilder, FeedSource, FnError, RetryConfig,
    SentimentAnalyzer, SymbolRecognizer, Tickers, Trend,
};
pub use feed::{FeedBuilder, FeedItem, ParsedFeed};
pub use ingest::{Article, NewsIngestor, NewsIngestorBuilder, RefreshContext, RefreshReport};
pub use news::{NewsArticle, NewsHeadline, NewsService};
pub use scheduler::RefreshScheduler;
pub use sentiment::{Lexicon, LexiconAnalyzer};
pub use store::MemoryStore;
pub use tickers::{DEFAULT_FALLBACK_TICKER, SymbolLexicon};
