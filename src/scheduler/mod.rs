//! Periodic driver for [`NewsIngestor::refresh`].

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::IngestConfig;
use crate::core::FnError;
use crate::ingest::{NewsIngestor, RefreshContext};

/// Runs one refresh at startup and then one per `poll_interval`.
///
/// Refreshes never overlap: the next tick is only awaited after the current
/// refresh has returned, and ticks missed meanwhile are not replayed in a burst.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    ingestor: Arc<NewsIngestor>,
    poll_interval: Duration,
    request_timeout: Duration,
    max_articles: i64,
}

impl RefreshScheduler {
    /// # Errors
    ///
    /// Returns [`FnError::InvalidArgument`] for a zero `poll_interval`.
    pub fn new(
        ingestor: Arc<NewsIngestor>,
        poll_interval: Duration,
        request_timeout: Duration,
        max_articles: i64,
    ) -> Result<Self, FnError> {
        if poll_interval.is_zero() {
            return Err(FnError::InvalidArgument(
                "poll interval must be greater than zero".into(),
            ));
        }
        Ok(Self {
            ingestor,
            poll_interval,
            request_timeout,
            max_articles,
        })
    }

    /// # Errors
    ///
    /// Returns [`FnError::InvalidArgument`] for a zero `poll_interval`.
    pub fn from_config(ingestor: Arc<NewsIngestor>, cfg: &IngestConfig) -> Result<Self, FnError> {
        Self::new(
            ingestor,
            cfg.poll_interval,
            cfg.request_timeout,
            cfg.max_articles,
        )
    }

    /// Refreshes until `shutdown` is cancelled.
    ///
    /// The startup refresh is bounded only by `shutdown`; each scheduled one
    /// also by `request_timeout`. Failed refreshes are logged and retried on
    /// the next tick.
    pub async fn run(self, shutdown: CancellationToken) {
        let ctx = RefreshContext::with_token(shutdown.child_token());
        if let Err(err) = self.ingestor.refresh(&ctx, self.max_articles).await {
            warn!(error = %err, "initial news ingest failed");
        }

        let mut ticker = tokio::time::interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => {
                    info!("news scheduler stopped");
                    return;
                }
                _ = ticker.tick() => {
                    let ctx = RefreshContext::with_token(shutdown.child_token())
                        .with_timeout(self.request_timeout);
                    if let Err(err) = self.ingestor.refresh(&ctx, self.max_articles).await {
                        warn!(error = %err, "scheduled news ingest failed");
                    }
                }
            }
        }
    }

    /// Spawns [`run`](Self::run) onto the current Tokio runtime.
    pub fn spawn(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}
