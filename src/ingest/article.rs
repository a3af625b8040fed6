use chrono::{DateTime, Utc};

use crate::feed::FeedItem;

/// A candidate article collected during one refresh.
///
/// Lives only until it is scored and written; the persisted shape is
/// [`NewsArticle`](crate::NewsArticle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Display title of the feed the item came from.
    pub source: String,
    /// Description, or full content when the description is empty.
    pub summary: String,
    pub link: String,
    /// Publish time from the feed, or the ingestion time if the item had none.
    pub published_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn from_item(source: &str, item: FeedItem, now: DateTime<Utc>) -> Self {
        let summary = item.summary().to_string();
        Self {
            title: item.title,
            source: source.to_string(),
            summary,
            link: item.link,
            published_at: item.published.unwrap_or(now),
        }
    }

    /// Text scanned for sentiment and tickers.
    pub(crate) fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Orders candidates newest first. Equal timestamps keep their collection
/// order (feed-list order, then document order).
pub(crate) fn rank(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
