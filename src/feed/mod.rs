//! Feed fetching and parsing.
//!
//! Any RSS 0.9x/1.0/2.0, Atom or JSON Feed document is accepted; parsing is
//! delegated to `feed-rs` and the result reduced to [`ParsedFeed`].

mod api;
mod convert;
mod model;

pub use model::{FeedItem, ParsedFeed};

use futures::future::BoxFuture;

use crate::core::{FeedClient, FeedSource, FnError, RetryConfig};

/// A builder for fetching a single feed.
pub struct FeedBuilder {
    client: FeedClient,
    url: String,
    retry_override: Option<RetryConfig>,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` for a given feed URL.
    pub fn new(client: &FeedClient, url: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            url: url.into(),
            retry_override: None,
        }
    }

    /// Overrides the client's retry policy for this request.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Downloads and parses the feed.
    ///
    /// # Errors
    ///
    /// Returns an `FnError` if the URL is invalid, the request fails, the
    /// server answers with a non-2xx status, or the body is not a feed.
    pub async fn fetch(self) -> Result<ParsedFeed, FnError> {
        api::fetch_feed(&self.client, &self.url, self.retry_override.as_ref()).await
    }
}

impl FeedClient {
    /// Starts a request for the feed at `url`.
    pub fn feed(&self, url: impl Into<String>) -> FeedBuilder {
        FeedBuilder::new(self, url)
    }
}

impl FeedSource for FeedClient {
    fn fetch_feed<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ParsedFeed, FnError>> {
        Box::pin(api::fetch_feed(self, url, None))
    }
}
