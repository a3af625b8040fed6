use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use finews_rs::{
    ArticleStore, FeedItem, FeedSource, FnError, MemoryStore, NewsArticle, NewsIngestor,
    NewsService, ParsedFeed, RefreshContext, SentimentAnalyzer, SymbolLexicon, SymbolRecognizer,
    Trend,
};
use futures::future::BoxFuture;

/// Serves canned feeds keyed by URL; unknown URLs fail like a 404.
struct StaticSource(HashMap<String, ParsedFeed>);

impl FeedSource for StaticSource {
    fn fetch_feed<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<ParsedFeed, FnError>> {
        Box::pin(async move {
            self.0.get(url).cloned().ok_or_else(|| FnError::Status {
                status: 404,
                url: url.to_string(),
            })
        })
    }
}

/// Scores text by the first scripted headline it contains.
struct ScriptedScores(Vec<(&'static str, f64)>);

impl SentimentAnalyzer for ScriptedScores {
    fn polarity(&self, text: &str) -> f64 {
        self.0
            .iter()
            .find(|(title, _)| text.starts_with(title))
            .map_or(0.0, |(_, s)| *s)
    }
}

async fn rows(store: &MemoryStore) -> Vec<NewsArticle> {
    store.list_latest(usize::MAX).await.unwrap()
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 14, hour, minute, 0).unwrap()
}

fn item(title: &str, description: &str, published: DateTime<Utc>) -> FeedItem {
    FeedItem {
        title: title.into(),
        link: format!(
            "https://desk.example.com/{}",
            title.to_lowercase().replace(' ', "-")
        ),
        description: description.into(),
        content: String::new(),
        published: Some(published),
    }
}

fn source(items: Vec<FeedItem>) -> StaticSource {
    let feed = ParsedFeed {
        title: "Desk".into(),
        items,
    };
    StaticSource(HashMap::from([("https://desk.example.com/rss".to_string(), feed)]))
}

#[tokio::test]
async fn trends_follow_strict_thresholds() {
    let items = vec![
        item("Alpha", "", at(12, 0)),
        item("Beta", "", at(11, 0)),
        item("Gamma", "", at(10, 0)),
        item("Delta", "", at(9, 0)),
        item("Epsilon", "", at(8, 0)),
    ];
    let analyzer = ScriptedScores(vec![
        ("Alpha", 0.78),
        ("Beta", 0.21),
        ("Gamma", -0.12),
        ("Delta", 0.20),
        ("Epsilon", -0.21),
    ]);

    let store = MemoryStore::new();
    let ing = NewsIngestor::builder(Arc::new(store.clone()))
        .feeds(["https://desk.example.com/rss"])
        .source(source(items))
        .analyzer(analyzer)
        .build()
        .unwrap();
    ing.refresh(&RefreshContext::background(), 10).await.unwrap();

    let rows = rows(&store).await;
    let trends: Vec<_> = rows.iter().map(|r| (r.title.as_str(), r.trend)).collect();
    assert_eq!(
        trends,
        [
            ("Alpha", Trend::Bullish),
            ("Beta", Trend::Bullish),
            ("Gamma", Trend::Neutral),
            ("Delta", Trend::Neutral),
            ("Epsilon", Trend::Bearish),
        ]
    );
}

#[tokio::test]
async fn tickers_are_ordered_unique_and_never_empty() {
    let items = vec![
        item(
            "NVIDIA (NVDA) beats estimates; MSFT also up",
            "NVDA and MSFT lead again",
            at(12, 0),
        ),
        item("Bond yields ease", "Treasuries rally into the close", at(11, 0)),
    ];

    let store = MemoryStore::new();
    let ing = NewsIngestor::builder(Arc::new(store.clone()))
        .feeds(["https://desk.example.com/rss"])
        .source(source(items))
        .recognizer(SymbolLexicon::new(["NVDA", "MSFT"]))
        .build()
        .unwrap();
    ing.refresh(&RefreshContext::background(), 10).await.unwrap();

    let headlines = NewsService::new(Arc::new(store)).latest(10).await.unwrap();
    assert_eq!(headlines[0].tickers, vec!["NVDA", "MSFT"]);
    assert_eq!(headlines[1].tickers, vec!["SPY"]);
}

struct DollarTags;

impl SymbolRecognizer for DollarTags {
    fn recognize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|w| w.strip_prefix('$'))
            .map(str::to_uppercase)
            .collect()
    }
}

#[tokio::test]
async fn custom_recognizer_and_fallback_are_honored() {
    let items = vec![
        item("Traders pile into $pltr and $pltr again", "", at(12, 0)),
        item("Quiet session", "", at(11, 0)),
    ];

    let store = MemoryStore::new();
    let ing = NewsIngestor::builder(Arc::new(store.clone()))
        .feeds(["https://desk.example.com/rss"])
        .source(source(items))
        .recognizer(DollarTags)
        .fallback_ticker("qqq")
        .build()
        .unwrap();
    ing.refresh(&RefreshContext::background(), 10).await.unwrap();

    let rows = rows(&store).await;
    assert_eq!(rows[0].tickers, "PLTR");
    assert_eq!(rows[1].tickers, "QQQ");
}

#[tokio::test]
async fn independent_ingestors_derive_identical_ids() {
    let items = vec![item("Alpha", "one", at(12, 0)), item("Beta", "two", at(11, 0))];

    let mut ids = Vec::new();
    for _ in 0..2 {
        let store = MemoryStore::new();
        let ing = NewsIngestor::builder(Arc::new(store.clone()))
            .feeds(["https://desk.example.com/rss"])
            .source(source(items.clone()))
            .build()
            .unwrap();
        ing.refresh(&RefreshContext::background(), 10).await.unwrap();
        let rows = rows(&store).await;
        ids.push(rows.into_iter().map(|r| r.id).collect::<Vec<_>>());
    }

    assert_eq!(ids[0], ids[1]);
    assert_eq!(ids[0].len(), 2);
}
