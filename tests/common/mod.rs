#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::{fs, path::Path};

use finews_rs::{
    ArticleStore, FeedClient, FnError, MemoryStore, NewsArticle, RetryConfig,
};
use futures::future::BoxFuture;
use httpmock::{Method::GET, Mock, MockServer};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_feed<'a>(server: &'a MockServer, path: &'a str, fixture_name: &str) -> Mock<'a> {
    let body = fixture(fixture_name);
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/xml")
            .body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &'a str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body("unavailable");
    })
}

/// A client that sends every request once, so failure tests stay fast.
pub fn offline_client() -> FeedClient {
    FeedClient::builder()
        .retry_config(RetryConfig::disabled())
        .build()
        .unwrap()
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("FN_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("FN_RECORD").ok().as_deref() == Some("1")
}

/// Store that remembers write order and can reject chosen titles.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    writes: Arc<Mutex<Vec<NewsArticle>>>,
    reject_containing: Option<String>,
}

impl RecordingStore {
    pub fn rejecting(fragment: &str) -> Self {
        Self {
            reject_containing: Some(fragment.to_string()),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<NewsArticle> {
        self.writes.lock().unwrap().clone()
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.inner
    }
}

impl ArticleStore for RecordingStore {
    fn upsert_article(&self, record: NewsArticle) -> BoxFuture<'_, Result<(), FnError>> {
        Box::pin(async move {
            if let Some(frag) = &self.reject_containing
                && record.title.contains(frag.as_str())
            {
                return Err(FnError::Store(format!("constraint failed for {}", record.id)));
            }
            self.writes.lock().unwrap().push(record.clone());
            self.inner.upsert_article(record).await
        })
    }

    fn list_latest(&self, limit: usize) -> BoxFuture<'_, Result<Vec<NewsArticle>, FnError>> {
        self.inner.list_latest(limit)
    }
}
