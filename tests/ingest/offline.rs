use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use finews_rs::ingest::{DEFAULT_SUMMARY_LIMIT, deterministic_id};
use finews_rs::{
    ArticleStore, FnError, MemoryStore, NewsIngestor, RefreshContext, Tickers, Trend,
};
use httpmock::Method::GET;

use crate::common::{RecordingStore, mock_feed, mock_status, offline_client, setup_server};

fn ingestor(store: Arc<dyn ArticleStore>, feeds: Vec<String>) -> NewsIngestor {
    NewsIngestor::builder(store)
        .feeds(feeds)
        .source(offline_client())
        .build()
        .unwrap()
}

#[tokio::test]
async fn offline_refresh_persists_freshest_articles_in_rank_order() {
    let server = setup_server();
    let wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");
    let tech = mock_feed(&server, "/tech.xml", "feed_tech_atom.xml");

    let store = RecordingStore::default();
    let ing = ingestor(
        Arc::new(store.clone()),
        vec![server.url("/wire.xml"), server.url("/tech.xml")],
    );

    let report = ing.refresh(&RefreshContext::background(), 3).await.unwrap();

    wire.assert();
    tech.assert();
    assert_eq!(report.fetched, 5);
    assert_eq!(report.processed, 3);
    assert_eq!(report.persisted, 3);
    assert_eq!(report.failed_feeds, 0);

    let writes = store.writes();
    let titles: Vec<_> = writes.iter().map(|r| r.title.as_str()).collect();
    // the two 13:30 items tie; feed-list order decides
    assert_eq!(
        titles,
        [
            "NVIDIA (NVDA) beats estimates; MSFT also up",
            "TSLA deliveries disappoint",
            "Apple unveils new chips",
        ]
    );
    assert!(
        writes
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at)
    );
    assert_eq!(writes[0].source, "Markets Wire");
    assert_eq!(writes[1].source, "Tech Desk");
}

#[tokio::test]
async fn offline_refresh_scores_and_tags_each_record() {
    let server = setup_server();
    let _wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");

    let store = RecordingStore::default();
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/wire.xml")]);
    ing.refresh(&RefreshContext::background(), 10).await.unwrap();

    let writes = store.writes();
    assert_eq!(writes.len(), 3);

    let nvda = &writes[0];
    assert_eq!(nvda.tickers, "NVDA, MSFT");
    assert_eq!(nvda.trend, Trend::Bullish);
    assert!(nvda.sentiment_score > 0.2 && nvda.sentiment_score <= 1.0);
    assert_eq!(
        nvda.id,
        deterministic_id(
            "https://wire.example.com/nvda-beats",
            "NVIDIA (NVDA) beats estimates; MSFT also up",
            Utc.with_ymd_and_hms(2025, 10, 14, 13, 30, 0).unwrap(),
        )
    );

    let oil = &writes[1];
    assert_eq!(oil.tickers, "XOM");
    assert_eq!(oil.trend, Trend::Bearish);

    let fed = &writes[2];
    assert_eq!(fed.tickers, "SPY");
    assert_eq!(fed.trend, Trend::Neutral);
    assert_eq!(fed.summary, "Policy makers meet to weigh the path of rates.");
    assert_eq!(fed.url, "https://wire.example.com/fed-minutes");

    for rec in &writes {
        assert!(!Tickers::parse(&rec.tickers).is_empty());
        assert!(rec.summary.len() <= DEFAULT_SUMMARY_LIMIT);
        assert!((-1.0..=1.0).contains(&rec.sentiment_score));
    }
}

#[tokio::test]
async fn offline_cap_above_candidate_count_keeps_everything() {
    let server = setup_server();
    let _wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");
    let _tech = mock_feed(&server, "/tech.xml", "feed_tech_atom.xml");

    let store = MemoryStore::new();
    let ing = ingestor(
        Arc::new(store.clone()),
        vec![server.url("/wire.xml"), server.url("/tech.xml")],
    );

    let report = ing.refresh(&RefreshContext::background(), 50).await.unwrap();
    assert_eq!(report.processed, 5);
    assert_eq!(store.len().await, 5);
}

#[tokio::test]
async fn offline_rerun_is_an_idempotent_upsert() {
    let server = setup_server();
    let wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");

    let store = MemoryStore::new();
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/wire.xml")]);

    ing.refresh(&RefreshContext::background(), 10).await.unwrap();
    let first = store.list_latest(10).await.unwrap();
    ing.refresh(&RefreshContext::background(), 10).await.unwrap();
    let second = store.list_latest(10).await.unwrap();

    wire.assert_hits(2);
    assert_eq!(store.len().await, 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn offline_summary_is_truncated_to_limit() {
    let server = setup_server();
    let _long = mock_feed(&server, "/long.xml", "feed_long_summary.xml");

    let store = RecordingStore::default();
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/long.xml")]);
    ing.refresh(&RefreshContext::background(), 1).await.unwrap();

    let rec = &store.writes()[0];
    assert_eq!(rec.summary.len(), DEFAULT_SUMMARY_LIMIT);
    assert!(rec.summary.starts_with("Stocks drifted"));
    assert!(!rec.summary.ends_with("..."));
}

#[tokio::test]
async fn offline_non_positive_cap_is_rejected_before_any_io() {
    let server = setup_server();
    let wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");

    let store = MemoryStore::new();
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/wire.xml")]);

    for cap in [0, -1] {
        let err = ing
            .refresh(&RefreshContext::background(), cap)
            .await
            .unwrap_err();
        assert!(matches!(err, FnError::InvalidArgument(_)), "cap {cap}: {err}");
    }

    wire.assert_hits(0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn offline_all_feeds_failing_is_no_data() {
    let server = setup_server();
    let down = mock_status(&server, "/down.xml", 500);
    let html = server.mock(|when, then| {
        when.method(GET).path("/page.html");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body>not a feed</body></html>");
    });

    let store = MemoryStore::new();
    let ing = ingestor(
        Arc::new(store.clone()),
        vec![server.url("/down.xml"), server.url("/page.html")],
    );

    let err = ing
        .refresh(&RefreshContext::background(), 20)
        .await
        .unwrap_err();

    down.assert();
    html.assert();
    assert!(matches!(err, FnError::NoData));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn offline_failed_feed_is_skipped() {
    let server = setup_server();
    let missing = mock_status(&server, "/missing.xml", 404);
    let _tech = mock_feed(&server, "/tech.xml", "feed_tech_atom.xml");

    let store = MemoryStore::new();
    let ing = ingestor(
        Arc::new(store.clone()),
        vec![server.url("/missing.xml"), server.url("/tech.xml")],
    );

    let report = ing.refresh(&RefreshContext::background(), 20).await.unwrap();

    missing.assert();
    assert_eq!(report.failed_feeds, 1);
    assert_eq!(report.persisted, 2);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn offline_failed_upsert_is_skipped() {
    let server = setup_server();
    let _wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");

    let store = RecordingStore::rejecting("Oil");
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/wire.xml")]);

    let report = ing.refresh(&RefreshContext::background(), 10).await.unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(report.persisted, 2);
    assert_eq!(report.failed_records, 1);
    let titles: Vec<_> = store.writes().into_iter().map(|r| r.title).collect();
    assert_eq!(
        titles,
        [
            "NVIDIA (NVDA) beats estimates; MSFT also up",
            "Fed minutes due Wednesday",
        ]
    );
}

#[tokio::test]
async fn offline_deadline_keeps_articles_collected_before_it() {
    let server = setup_server();
    let _wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");
    let slow_body = crate::common::fixture("feed_tech_atom.xml");
    let _slow = server.mock(|when, then| {
        when.method(GET).path("/slow.xml");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(slow_body);
    });

    let store = MemoryStore::new();
    let ing = ingestor(
        Arc::new(store.clone()),
        vec![server.url("/wire.xml"), server.url("/slow.xml")],
    );

    let ctx = RefreshContext::background().with_timeout(Duration::from_millis(500));
    let report = ing.refresh(&ctx, 20).await.unwrap();

    assert_eq!(report.failed_feeds, 1);
    assert_eq!(report.persisted, 3);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn offline_cancelled_context_fails_every_feed() {
    let server = setup_server();
    let wire = mock_feed(&server, "/wire.xml", "feed_markets_wire.xml");

    let store = MemoryStore::new();
    let ing = ingestor(Arc::new(store.clone()), vec![server.url("/wire.xml")]);

    let ctx = RefreshContext::background();
    ctx.cancel();
    let err = ing.refresh(&ctx, 20).await.unwrap_err();

    assert!(matches!(err, FnError::NoData));
    wire.assert_hits(0);
    assert!(store.is_empty().await);
}
