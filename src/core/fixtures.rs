//! Recording helper for persisting fetched feed bodies as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("FN_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Derives a file-system-safe fixture name from a feed URL,
/// e.g. `https://feeds.a.dj.com/rss/RSSMarketsMain` -> `feed_feeds_a_dj_com_rss_RSSMarketsMain`.
pub(crate) fn fixture_name(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let slug: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("feed_{}", slug.trim_matches('_'))
}

pub(crate) fn record_fixture(url: &str, ext: &str, body: &[u8]) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{}.{}", fixture_name(url), ext));

    let mut file = fs::File::create(&path)?;
    file.write_all(body)?;
    if env::var("FN_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("FN_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
