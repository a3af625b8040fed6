//! In-process article store.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::core::{ArticleStore, FnError};
use crate::news::NewsArticle;

/// An [`ArticleStore`] backed by a map keyed on article id.
///
/// Clones share the same map. Concurrent upserts of one id are serialized by
/// the write lock, so the last writer wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<HashMap<String, NewsArticle>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &str) -> Option<NewsArticle> {
        self.rows.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn upsert(&self, record: NewsArticle) {
        let mut guard = self.rows.write().await;
        guard.insert(record.id.clone(), record);
    }

    async fn latest(&self, limit: usize) -> Vec<NewsArticle> {
        let guard = self.rows.read().await;
        let mut rows: Vec<NewsArticle> = guard.values().cloned().collect();
        drop(guard);
        rows.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        rows.truncate(limit);
        rows
    }
}

impl ArticleStore for MemoryStore {
    fn upsert_article(&self, record: NewsArticle) -> BoxFuture<'_, Result<(), FnError>> {
        Box::pin(async move {
            self.upsert(record).await;
            Ok(())
        })
    }

    fn list_latest(&self, limit: usize) -> BoxFuture<'_, Result<Vec<NewsArticle>, FnError>> {
        Box::pin(async move { Ok(self.latest(limit).await) })
    }
}
