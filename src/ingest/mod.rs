//! The news ingestion pipeline.
//!
//! A refresh fetches every configured feed in order, ranks the collected
//! items newest first, keeps the top `max_articles`, scores each one for
//! sentiment and tickers, and upserts it under a content-derived id so that
//! re-ingesting the same item overwrites rather than duplicates.
//!
//! Failures are split by blast radius: a feed that cannot be fetched or a
//! record that cannot be written is logged and skipped; only a bad argument
//! or a run that collected nothing at all fails the call.

mod article;
mod context;
mod identity;

pub use article::Article;
pub use context::RefreshContext;
pub use identity::{deterministic_id, truncate_summary};

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::core::{
    ArticleStore, FeedClient, FeedSource, FnError, SentimentAnalyzer, SymbolRecognizer, Tickers,
    Trend, client::DEFAULT_FEED_URL,
};
use crate::feed::ParsedFeed;
use crate::news::NewsArticle;
use crate::sentiment::LexiconAnalyzer;
use crate::tickers::{DEFAULT_FALLBACK_TICKER, SymbolLexicon};

/// Default cap on stored summary length, in bytes.
pub const DEFAULT_SUMMARY_LIMIT: usize = 280;

/// Counters describing one completed refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Candidate articles collected across all feeds.
    pub fetched: usize,
    /// Feeds skipped because the fetch or parse failed.
    pub failed_feeds: usize,
    /// Articles kept after ranking and handed to the store.
    pub processed: usize,
    /// Upserts that succeeded.
    pub persisted: usize,
    /// Upserts that failed and were skipped.
    pub failed_records: usize,
}

/// Pulls syndication feeds and maps them into persisted, scored articles.
///
/// Holds no state between calls apart from its collaborators, so a single
/// instance may be shared behind an `Arc` and refreshed from any task.
pub struct NewsIngestor {
    feeds: Vec<String>,
    source: Arc<dyn FeedSource>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    recognizer: Arc<dyn SymbolRecognizer>,
    store: Arc<dyn ArticleStore>,
    summary_limit: usize,
    fallback_ticker: String,
}

impl std::fmt::Debug for NewsIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsIngestor")
            .field("feeds", &self.feeds)
            .field("summary_limit", &self.summary_limit)
            .field("fallback_ticker", &self.fallback_ticker)
            .finish_non_exhaustive()
    }
}

impl NewsIngestor {
    /// Starts building an ingestor that writes to `store`.
    pub fn builder(store: Arc<dyn ArticleStore>) -> NewsIngestorBuilder {
        NewsIngestorBuilder::new(store)
    }

    /// An ingestor with the default HTTP client, analyzer and symbol lexicon.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built.
    pub fn new<I, S>(store: Arc<dyn ArticleStore>, feeds: I) -> Result<Self, FnError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(store).feeds(feeds).build()
    }

    /// The feed URLs polled by [`refresh`](Self::refresh), in order.
    #[must_use]
    pub fn feeds(&self) -> &[String] {
        &self.feeds
    }

    /// Downloads the feeds and upserts the `max_articles` freshest articles.
    ///
    /// Feeds are fetched one at a time in configuration order under `ctx`.
    ///
    /// # Errors
    ///
    /// - [`FnError::InvalidArgument`] if `max_articles <= 0`; nothing is fetched or written.
    /// - [`FnError::NoData`] if no feed produced a single item; nothing is written.
    ///
    /// Per-feed and per-record failures are logged and reflected in the
    /// returned [`RefreshReport`], never returned as errors.
    #[tracing::instrument(skip(self, ctx), fields(feeds = self.feeds.len()), err)]
    pub async fn refresh(
        &self,
        ctx: &RefreshContext,
        max_articles: i64,
    ) -> Result<RefreshReport, FnError> {
        let limit = usize::try_from(max_articles)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                FnError::InvalidArgument(format!(
                    "max_articles must be positive, got {max_articles}"
                ))
            })?;

        let mut report = RefreshReport::default();
        let mut articles: Vec<Article> = Vec::new();

        for url in &self.feeds {
            match ctx.run(url, self.source.fetch_feed(url)).await {
                Ok(ParsedFeed { title, items }) => {
                    let now = Utc::now();
                    articles.extend(
                        items
                            .into_iter()
                            .map(|item| Article::from_item(&title, item, now)),
                    );
                }
                Err(err) => {
                    report.failed_feeds += 1;
                    warn!(feed = %url, error = %err, "rss fetch failed");
                }
            }
        }

        if articles.is_empty() {
            return Err(FnError::NoData);
        }
        report.fetched = articles.len();

        article::rank(&mut articles);
        articles.truncate(limit);

        for art in articles {
            let title = art.title.clone();
            let record = self.to_record(art);
            report.processed += 1;
            match self.store.upsert_article(record).await {
                Ok(()) => report.persisted += 1,
                Err(err) => {
                    report.failed_records += 1;
                    warn!(title = %title, error = %err, "upsert article failed");
                }
            }
        }

        info!(
            articles = report.processed,
            persisted = report.persisted,
            failed_feeds = report.failed_feeds,
            "news refresh complete"
        );
        Ok(report)
    }

    /// Scores and shapes one candidate into the stored record.
    #[must_use]
    pub fn to_record(&self, art: Article) -> NewsArticle {
        let text = art.scoring_text();

        let raw = self.analyzer.polarity(&text);
        let sentiment_score = if raw.is_finite() {
            raw.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        let tickers = Tickers::from_matches(self.recognizer.recognize(&text), &self.fallback_ticker);
        let id = deterministic_id(&art.link, &art.title, art.published_at);
        let summary = truncate_summary(&art.summary, self.summary_limit).to_string();

        NewsArticle {
            id,
            title: art.title,
            source: art.source,
            summary,
            sentiment_score,
            trend: Trend::from_score(sentiment_score),
            tickers: tickers.joined(),
            url: art.link,
            published_at: art.published_at,
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`NewsIngestor`].
pub struct NewsIngestorBuilder {
    store: Arc<dyn ArticleStore>,
    feeds: Vec<String>,
    source: Option<Arc<dyn FeedSource>>,
    analyzer: Option<Arc<dyn SentimentAnalyzer>>,
    recognizer: Option<Arc<dyn SymbolRecognizer>>,
    summary_limit: usize,
    fallback_ticker: String,
}

impl NewsIngestorBuilder {
    fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            feeds: Vec::new(),
            source: None,
            analyzer: None,
            recognizer: None,
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            fallback_ticker: DEFAULT_FALLBACK_TICKER.to_string(),
        }
    }

    /// Feed URLs to poll, in order. Blank entries are dropped; an empty list
    /// falls back to a single default feed.
    #[must_use]
    pub fn feeds<I, S>(mut self, feeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feeds = feeds
            .into_iter()
            .map(Into::into)
            .map(|s: String| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Replaces the HTTP feed client.
    #[must_use]
    pub fn source(mut self, source: impl FeedSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Replaces the sentiment analyzer.
    #[must_use]
    pub fn analyzer(mut self, analyzer: impl SentimentAnalyzer + 'static) -> Self {
        self.analyzer = Some(Arc::new(analyzer));
        self
    }

    /// Replaces the ticker recognizer.
    #[must_use]
    pub fn recognizer(mut self, recognizer: impl SymbolRecognizer + 'static) -> Self {
        self.recognizer = Some(Arc::new(recognizer));
        self
    }

    /// Maximum stored summary length in bytes. Default: 280.
    #[must_use]
    pub const fn summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    /// Symbol stored when no ticker is recognized. Default: `SPY`.
    #[must_use]
    pub fn fallback_ticker(mut self, symbol: impl Into<String>) -> Self {
        self.fallback_ticker = symbol.into();
        self
    }

    /// Builds the ingestor.
    ///
    /// # Errors
    ///
    /// Returns [`FnError::InvalidArgument`] for a blank fallback ticker, or an
    /// HTTP error if the default feed client cannot be built.
    pub fn build(self) -> Result<NewsIngestor, FnError> {
        let fallback_ticker = self.fallback_ticker.trim().to_uppercase();
        if fallback_ticker.is_empty() {
            return Err(FnError::InvalidArgument(
                "fallback ticker must not be blank".into(),
            ));
        }

        let feeds = if self.feeds.is_empty() {
            vec![DEFAULT_FEED_URL.to_string()]
        } else {
            self.feeds
        };

        let source: Arc<dyn FeedSource> = match self.source {
            Some(s) => s,
            None => Arc::new(FeedClient::try_default()?),
        };

        Ok(NewsIngestor {
            feeds,
            source,
            analyzer: self
                .analyzer
                .unwrap_or_else(|| Arc::new(LexiconAnalyzer::default())),
            recognizer: self
                .recognizer
                .unwrap_or_else(|| Arc::new(SymbolLexicon::default())),
            store: self.store,
            summary_limit: self.summary_limit,
            fallback_ticker,
        })
    }
}
