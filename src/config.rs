//! Environment-driven configuration for the ingestion service.

use std::time::Duration;

use crate::core::{FnError, client::DEFAULT_FEEDS};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30 * 60);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(4);
const DEFAULT_MAX_ARTICLES: i64 = 20;

/// Runtime settings for feed polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// `APP_ENV`; `development` enables coloured log output.
    pub env: String,
    /// `NEWS_FEEDS`, comma separated.
    pub feeds: Vec<String>,
    /// `NEWS_POLL_INTERVAL`, e.g. `30m`.
    pub poll_interval: Duration,
    /// `REQUEST_TIMEOUT`, the deadline of each scheduled refresh, e.g. `4s`.
    pub request_timeout: Duration,
    /// `NEWS_MAX_ARTICLES`, the per-refresh article cap handed to the ingestor.
    pub max_articles: i64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            feeds: DEFAULT_FEEDS.iter().map(|s| (*s).to_string()).collect(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }
}

impl IngestConfig {
    /// Reads the process environment, defaulting every unset key.
    ///
    /// # Errors
    /// Returns [`FnError::Config`] for a malformed or zero duration, or a
    /// malformed or non-positive article cap.
    pub fn from_env() -> Result<Self, FnError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading keys through `lookup`.
    ///
    /// # Errors
    /// Returns [`FnError::Config`] for a malformed or zero duration, or a
    /// malformed or non-positive article cap.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FnError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let env = lookup("APP_ENV").unwrap_or(defaults.env);
        let feeds = lookup("NEWS_FEEDS").map_or(defaults.feeds, |raw| split_and_clean(&raw));
        let poll_interval = match lookup("NEWS_POLL_INTERVAL") {
            Some(raw) => parse_duration("NEWS_POLL_INTERVAL", &raw)?,
            None => defaults.poll_interval,
        };
        let request_timeout = match lookup("REQUEST_TIMEOUT") {
            Some(raw) => parse_duration("REQUEST_TIMEOUT", &raw)?,
            None => defaults.request_timeout,
        };
        let max_articles = match lookup("NEWS_MAX_ARTICLES") {
            Some(raw) => parse_positive("NEWS_MAX_ARTICLES", &raw)?,
            None => defaults.max_articles,
        };

        Ok(Self {
            env,
            feeds,
            poll_interval,
            request_timeout,
            max_articles,
        })
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.env == "development"
    }
}

fn parse_duration(key: &str, raw: &str) -> Result<Duration, FnError> {
    let dur = humantime::parse_duration(raw.trim()).map_err(|e| FnError::Config {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    if dur.is_zero() {
        return Err(FnError::Config {
            key: key.to_string(),
            reason: "duration must be greater than zero".into(),
        });
    }
    Ok(dur)
}

fn parse_positive(key: &str, raw: &str) -> Result<i64, FnError> {
    let n = raw.trim().parse::<i64>().map_err(|e| FnError::Config {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    if n <= 0 {
        return Err(FnError::Config {
            key: key.to_string(),
            reason: format!("must be greater than zero, got {n}"),
        });
    }
    Ok(n)
}

fn split_and_clean(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
