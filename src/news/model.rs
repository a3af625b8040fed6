use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Tickers, Trend};

/// A news article as written to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Stable identifier derived from link, title and publish time.
    pub id: String,
    /// The headline of the article.
    pub title: String,
    /// Display name of the feed the article came from.
    pub source: String,
    /// Description or content, truncated to the ingestor's summary limit.
    pub summary: String,
    /// Compound polarity in `[-1, 1]`.
    pub sentiment_score: f64,
    pub trend: Trend,
    /// Matched symbols joined with `", "`. Never empty when written by the ingestor.
    pub tickers: String,
    /// A direct link to the article.
    pub url: String,
    pub published_at: DateTime<Utc>,
}

impl NewsArticle {
    /// The stored ticker string split back into symbols.
    #[must_use]
    pub fn ticker_list(&self) -> Vec<String> {
        Tickers::parse(&self.tickers)
    }
}

/// Read-side view of a stored article, as rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsHeadline {
    pub id: String,
    pub title: String,
    pub source: String,
    pub summary: String,
    pub sentiment: f64,
    pub trend: Trend,
    pub tickers: Vec<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

impl From<NewsArticle> for NewsHeadline {
    fn from(row: NewsArticle) -> Self {
        let tickers = row.ticker_list();
        Self {
            id: row.id,
            title: row.title,
            source: row.source,
            summary: row.summary,
            sentiment: row.sentiment_score,
            trend: row.trend,
            tickers,
            url: row.url,
            published_at: row.published_at,
        }
    }
}
