use futures::future::BoxFuture;

use crate::core::FnError;
use crate::feed::ParsedFeed;
use crate::news::NewsArticle;

/// A source of parsed syndication documents.
///
/// Implemented by [`FeedClient`](crate::FeedClient) over HTTP. Tests and
/// embedders can substitute any other source (files, caches, fakes) without
/// touching the ingestor.
pub trait FeedSource: Send + Sync {
    /// Fetches and parses the feed at `url`.
    ///
    /// # Errors
    /// Fails on network errors, non-2xx responses and malformed documents.
    fn fetch_feed<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ParsedFeed, FnError>>;
}

/// Scores the emotional valence of a piece of text.
pub trait SentimentAnalyzer: Send + Sync {
    /// Returns a compound polarity score in `[-1, 1]`, positive meaning favorable.
    fn polarity(&self, text: &str) -> f64;
}

/// Recognizes ticker symbols mentioned in free text.
///
/// The default implementation is a closed allow-list
/// ([`SymbolLexicon`](crate::SymbolLexicon)); richer recognizers (entity
/// taggers, securities databases) plug in behind the same contract.
pub trait SymbolRecognizer: Send + Sync {
    /// Returns matched symbols in first-seen order. May be empty.
    fn recognize(&self, text: &str) -> Vec<String>;
}

/// The persistence collaborator for ingested articles.
///
/// Upserts must be idempotent on `id`: writing the same id twice leaves one
/// row holding the last write.
pub trait ArticleStore: Send + Sync {
    /// Inserts the record, or replaces the one already stored under its id.
    ///
    /// # Errors
    /// Returns [`FnError::Store`] if the write was rejected.
    fn upsert_article(&self, record: NewsArticle) -> BoxFuture<'_, Result<(), FnError>>;

    /// Returns up to `limit` records, most recently published first.
    ///
    /// # Errors
    /// Returns [`FnError::Store`] if the read failed.
    fn list_latest(&self, limit: usize) -> BoxFuture<'_, Result<Vec<NewsArticle>, FnError>>;
}
