//! Stable article identity and summary bounding.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// Derives the article id: a name-based (v5) UUID in the URL namespace over
/// `link|title|published`, with `published` rendered as RFC 3339 in UTC at
/// second precision. Identical inputs always yield the same id.
#[must_use]
pub fn deterministic_id(link: &str, title: &str, published: DateTime<Utc>) -> String {
    let name = format!(
        "{link}|{title}|{}",
        published.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
}

/// Cuts `input` to at most `limit` bytes without splitting a character.
/// No ellipsis is appended.
#[must_use]
pub fn truncate_summary(input: &str, limit: usize) -> &str {
    if input.len() <= limit {
        return input;
    }
    let mut end = limit;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}
