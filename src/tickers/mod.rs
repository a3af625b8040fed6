//! Ticker-symbol recognition against a closed allow-list.

use std::collections::HashSet;

use crate::core::SymbolRecognizer;

/// Symbol substituted when an article mentions no recognized ticker.
pub const DEFAULT_FALLBACK_TICKER: &str = "SPY";

/// Symbols recognized by [`SymbolLexicon::default`].
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "AAPL", "GOOGL", "META", "MSFT", "NVDA", "AMZN", "TSLA", "SPY", "QQQ", "LMT", "XOM", "NFLX",
    "ORCL", "AMD", "INTC", "AVGO", "JPM", "BAC",
];

const MIN_SYMBOL_LEN: usize = 2;
const MAX_SYMBOL_LEN: usize = 5;

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | ';' | ':' | '(' | ')' | '"' | '\'' | '?' | '!'
        )
}

/// A fixed set of recognized ticker symbols.
///
/// Matching is naive: every token of the text is uppercased and looked up,
/// so common words that happen to be symbols ("meta", "amd") match too.
#[derive(Debug, Clone)]
pub struct SymbolLexicon {
    symbols: HashSet<String>,
}

impl Default for SymbolLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS.iter().copied())
    }
}

impl SymbolLexicon {
    /// Builds a lexicon from `symbols`; entries are trimmed and uppercased.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|s| s.as_ref().trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Tokens of `text` that are known symbols, uppercased, first-seen order, no repeats.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for token in text.split(is_separator).filter(|t| !t.is_empty()) {
            let upper = token.to_uppercase();
            let len = upper.chars().count();
            if !(MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN).contains(&len) {
                continue;
            }
            if !self.symbols.contains(&upper) || found.contains(&upper) {
                continue;
            }
            found.push(upper);
        }
        found
    }
}

impl SymbolRecognizer for SymbolLexicon {
    fn recognize(&self, text: &str) -> Vec<String> {
        self.extract(text)
    }
}
