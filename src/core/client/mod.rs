//! Public client surface + builder.
//! Internals are split into `retry` (policy + backoff) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use constants::{DEFAULT_FEED_URL, DEFAULT_FEEDS};
pub use retry::{Backoff, RetryConfig};

use crate::core::FnError;
use constants::{FEED_ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response, header::ACCEPT};
use std::time::Duration;

/// HTTP client used to download syndication documents.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    retry: RetryConfig,
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /// Builds a client with default settings.
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn try_default() -> Result<Self, FnError> {
        Self::builder().build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The retry policy applied to requests that do not override it.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Sends `req`, retrying per the active policy.
    ///
    /// Retryable statuses are retried until the budget runs out; the last
    /// response is then returned as-is so the caller can map its status.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, FnError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let req = req.header(ACCEPT, FEED_ACCEPT);
        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt = 0u32;
        loop {
            let Some(this) = req.try_clone() else {
                // streaming bodies cannot be replayed
                return Ok(req.send().await?);
            };

            match this.send().await {
                Ok(resp) => {
                    let code = resp.status().as_u16();
                    if attempt >= cfg.max_retries || !cfg.retry_on_status.contains(&code) {
                        return Ok(resp);
                    }
                    tracing::debug!(status = code, attempt, url = %resp.url(), "retrying feed request");
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if !retryable || attempt >= cfg.max_retries {
                        return Err(e.into());
                    }
                    tracing::debug!(error = %e, attempt, "retrying feed request");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`FeedClient`].
#[derive(Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    http: Option<Client>,
}

impl FeedClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the default retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Use a pre-configured `reqwest::Client` (proxies, custom TLS roots, ...).
    ///
    /// When set, `user_agent`, `timeout` and `connect_timeout` are ignored.
    #[must_use]
    pub fn custom_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    /// Fails if the underlying `reqwest::Client` cannot be built.
    pub fn build(self) -> Result<FeedClient, FnError> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(FeedClient {
            http,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
