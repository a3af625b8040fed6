//! Centralized constants for default endpoints and UA.

/// Identifies the crate to feed publishers; some reject anonymous clients.
pub(crate) const USER_AGENT: &str = concat!(
    "finews-rs/",
    env!("CARGO_PKG_VERSION"),
    " (+https://crates.io/crates/finews-rs)"
);

/// Feed polled when an ingestor is built with an empty feed list.
pub const DEFAULT_FEED_URL: &str = "https://finance.yahoo.com/news/rssindex";

/// Feeds polled when `NEWS_FEEDS` is not set.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://finance.yahoo.com/news/rssindex",
    "https://feeds.a.dj.com/rss/RSSMarketsMain",
];

/// `Accept` header sent with every feed request.
pub(crate) const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/feed+json, application/xml;q=0.9, text/xml;q=0.8, */*;q=0.5";
