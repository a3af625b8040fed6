use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::core::FnError;

/// Cancellation and deadline scope of one refresh call.
///
/// Every feed fetch races the token and the deadline. Losing that race fails
/// the fetch in flight (and every later one) but leaves articles collected
/// earlier in the call untouched.
#[derive(Debug, Clone, Default)]
pub struct RefreshContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RefreshContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// A context cancelled together with `token`.
    #[must_use]
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets a deadline `timeout` from now.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Cancels the context (and any child token derived from it).
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once the context is cancelled or its deadline has passed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Drives `fut` unless the context ends first.
    pub(crate) async fn run<F, T>(&self, url: &str, fut: F) -> Result<T, FnError>
    where
        F: Future<Output = Result<T, FnError>>,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                    Ok(res) => res,
                    Err(_) => Err(FnError::Timeout {
                        url: url.to_string(),
                    }),
                },
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(FnError::Cancelled),
            res = bounded => res,
        }
    }
}
