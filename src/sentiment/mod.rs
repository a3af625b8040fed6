//! Rule-based sentiment scoring.
//!
//! [`LexiconAnalyzer`] produces a VADER-style compound polarity score:
//! per-word valences are adjusted for intensifiers, negation, capitalised
//! emphasis, contrastive "but" and exclamation marks, summed, and then
//! normalised into `[-1, 1]`.

mod lexicon;

pub use lexicon::Lexicon;

use lexicon::{CAPS_INCR, NEGATION_SCALAR};

use crate::core::SentimentAnalyzer;

/// Normalisation constant: approximates the maximum expected raw sum.
const ALPHA: f64 = 15.0;
/// Emphasis added per exclamation mark, up to [`MAX_EXCLAMATIONS`].
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Boosters further away from the word they modify count for less.
const DISTANCE_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Lexicon-driven sentiment analyzer.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_all_caps(&self) -> bool {
        self.raw.chars().count() > 1
            && self.raw.chars().any(char::is_alphabetic)
            && !self.raw.chars().any(char::is_lowercase)
    }
}

impl LexiconAnalyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Adds or overrides a word valence (`-4..=4`).
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.lexicon.insert(word, valence);
    }

    /// Scores `text`; see the module docs for the rules applied.
    #[must_use]
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let caps_count = tokens.iter().filter(|t| t.is_all_caps()).count();
        let caps_differential = caps_count > 0 && caps_count < tokens.len();

        let mut valences: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, _)| self.token_valence(&tokens, i, caps_differential))
            .collect();

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        let emphasis = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCR;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        normalize(sum)
    }

    fn token_valence(&self, tokens: &[Token<'_>], i: usize, caps_differential: bool) -> f64 {
        let tok = &tokens[i];
        if self.lexicon.booster(&tok.lower).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(&tok.lower) else {
            return 0.0;
        };
        let sign = valence.signum();

        if caps_differential && tok.is_all_caps() {
            valence += sign * CAPS_INCR;
        }

        for (distance, damping) in DISTANCE_DAMPING.iter().enumerate() {
            let Some(j) = i.checked_sub(distance + 1) else {
                break;
            };
            let prev = &tokens[j];
            if let Some(incr) = self.lexicon.booster(&prev.lower) {
                let mut scalar = incr * sign;
                if caps_differential && prev.is_all_caps() {
                    scalar += sign * CAPS_INCR;
                }
                valence += scalar * damping;
            }
            if self.lexicon.is_negation(&prev.lower) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        self.compound(text)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
