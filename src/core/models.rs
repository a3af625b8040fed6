use serde::{Deserialize, Serialize};
use std::fmt;

/* ----- TREND (derived from the compound sentiment score) ----- */

/// Market direction implied by an article's tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Neutral,
    Bearish,
}

impl Trend {
    /// Strictly above `0.2` is bullish, strictly below `-0.2` is bearish.
    /// Both boundary values themselves are neutral.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.2 {
            Self::Bullish
        } else if score < -0.2 {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Neutral => "neutral",
            Self::Bearish => "bearish",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ----- TICKERS (shared by ingest/ and news/) ----- */

/// Separator used when tickers are stored as a single string.
pub const TICKER_SEPARATOR: &str = ", ";

/// Ordered, de-duplicated, never-empty list of ticker symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tickers(Vec<String>);

impl Tickers {
    /// Builds the list from recognizer output, keeping first-seen order.
    /// An empty match set collapses to `[fallback]`.
    pub fn from_matches<I, S>(matches: I, fallback: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for m in matches {
            let m = m.into();
            if !m.is_empty() && !out.contains(&m) {
                out.push(m);
            }
        }
        if out.is_empty() {
            out.push(fallback.to_string());
        }
        Self(out)
    }

    /// Splits a stored ticker string back into symbols.
    ///
    /// Blank entries are dropped and symbols are uppercased. Unlike
    /// [`Tickers::from_matches`] this may return an empty vector, since
    /// rows written by other tools are not guaranteed to carry a symbol.
    #[must_use]
    pub fn parse(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(TICKER_SEPARATOR)
    }
}

impl fmt::Display for Tickers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
