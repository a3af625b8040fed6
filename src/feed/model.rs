use chrono::{DateTime, Utc};
use serde::Serialize;

/// A syndication document reduced to the fields the ingestor reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFeed {
    /// The feed's display title (e.g. "Yahoo Finance").
    pub title: String,
    /// Items in document order.
    pub items: Vec<FeedItem>,
}

/// A single entry of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeedItem {
    /// The headline.
    pub title: String,
    /// Canonical URL of the article. Empty if the item had none.
    pub link: String,
    /// Short description (`<description>` / `<summary>`). Empty if absent.
    pub description: String,
    /// Full content (`<content:encoded>` / `<content>`). Empty if absent.
    pub content: String,
    /// Publish time, if the source provided one we could parse.
    pub published: Option<DateTime<Utc>>,
}

impl FeedItem {
    /// The description, or the full content when the description is empty.
    #[must_use]
    pub fn summary(&self) -> &str {
        if self.description.is_empty() {
            &self.content
        } else {
            &self.description
        }
    }
}
