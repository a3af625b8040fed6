use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FnError {
    /// A call parameter was out of range (e.g. a non-positive article cap).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No articles could be collected from any configured feed.
    #[error("no articles fetched")]
    NoData,

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not a syndication document we can read.
    #[error("feed parse error: {0}")]
    Feed(String),

    /// The fetch did not finish before the refresh deadline.
    #[error("fetch timed out: {url}")]
    Timeout {
        /// The feed URL that was in flight.
        url: String,
    },

    /// The refresh was cancelled by its caller.
    #[error("refresh cancelled")]
    Cancelled,

    /// The persistence collaborator rejected a write or read.
    #[error("store error: {0}")]
    Store(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration for {key}: {reason}")]
    Config {
        /// The environment key holding the bad value.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<feed_rs::parser::ParseFeedError> for FnError {
    fn from(e: feed_rs::parser::ParseFeedError) -> Self {
        Self::Feed(e.to_string())
    }
}

impl FnError {
    /// True for the per-feed failures a refresh absorbs and skips.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Url(_)
                | Self::Status { .. }
                | Self::Feed(_)
                | Self::Timeout { .. }
                | Self::Cancelled
        )
    }

    /// True for the per-record failures a refresh absorbs and skips.
    #[must_use]
    pub const fn is_persist_failure(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
