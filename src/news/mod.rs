//! Persisted news records and the read-side listing used by the dashboard.

mod model;

pub use model::{NewsArticle, NewsHeadline};

use std::sync::Arc;

use crate::core::{ArticleStore, FnError};

/// Serves the most recent headlines from the article store.
#[derive(Clone)]
pub struct NewsService {
    store: Arc<dyn ArticleStore>,
}

impl NewsService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Returns up to `limit` headlines, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`FnError::InvalidArgument`] for a non-positive `limit`, or the
    /// store's error if the read fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn latest(&self, limit: i64) -> Result<Vec<NewsHeadline>, FnError> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or_else(|| FnError::InvalidArgument(format!("limit must be positive, got {limit}")))?;

        let rows = self.store.list_latest(limit).await?;
        Ok(rows.into_iter().map(NewsHeadline::from).collect())
    }
}
