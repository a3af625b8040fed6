//! Mapping from the `feed-rs` document model to [`ParsedFeed`].

use feed_rs::model::{Entry, Feed, Link};
use url::Url;

use crate::feed::model::{FeedItem, ParsedFeed};

pub(crate) fn from_feed(feed: Feed, url: &str) -> ParsedFeed {
    let title = feed
        .title
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title(url));

    ParsedFeed {
        title,
        items: feed.entries.into_iter().map(from_entry).collect(),
    }
}

fn from_entry(entry: Entry) -> FeedItem {
    FeedItem {
        title: entry
            .title
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default(),
        link: canonical_link(&entry.links),
        description: entry
            .summary
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default(),
        content: entry
            .content
            .and_then(|c| c.body)
            .map(|b| b.trim().to_string())
            .unwrap_or_default(),
        published: entry.published.or(entry.updated),
    }
}

// Atom entries may list `self`/`enclosure` links before the article itself.
fn canonical_link(links: &[Link]) -> String {
    links
        .iter()
        .find(|l| l.rel.as_deref().is_none_or(|r| r == "alternate"))
        .or_else(|| links.first())
        .map(|l| l.href.trim().to_string())
        .unwrap_or_default()
}

fn fallback_title(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
