//! Valence tables for rule-based sentiment scoring.
//!
//! Word valences use the `-4..=4` scale of the VADER lexicon: general
//! sentiment words keep their usual weights, market vocabulary is added
//! with weights tuned for headlines.

use std::collections::{HashMap, HashSet};

/// Added to the valence of a word preceded by an intensifier (subtracted for a dampener).
pub(crate) const BOOSTER_INCR: f64 = 0.293;
/// Added to an ALL-CAPS sentiment word when the text is otherwise mixed case.
pub(crate) const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a word within three tokens after a negation.
pub(crate) const NEGATION_SCALAR: f64 = -0.74;

const WORDS: &[(&str, f64)] = &[
    // general positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("positive", 2.6),
    ("win", 2.8),
    ("wins", 2.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("strong", 2.3),
    ("stronger", 2.2),
    ("optimistic", 2.4),
    ("optimism", 2.5),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("happy", 2.7),
    ("hope", 1.9),
    ("hopes", 1.6),
    ("love", 3.2),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("opportunity", 1.8),
    ("opportunities", 1.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improves", 1.8),
    ("improvement", 2.0),
    ("approve", 2.0),
    ("approved", 1.8),
    ("approval", 2.2),
    ("boost", 1.7),
    ("boosts", 1.3),
    ("robust", 1.4),
    ("solid", 1.5),
    ("healthy", 1.7),
    ("stable", 1.2),
    ("innovative", 1.9),
    ("favorable", 2.1),
    ("upbeat", 2.1),
    ("resilient", 1.9),
    ("welcome", 2.0),
    // market positive
    ("bullish", 2.9),
    ("beat", 1.6),
    ("beats", 1.7),
    ("exceed", 2.0),
    ("exceeds", 2.0),
    ("exceeded", 2.0),
    ("surge", 2.3),
    ("surges", 2.3),
    ("surged", 2.3),
    ("soar", 2.6),
    ("soars", 2.6),
    ("soared", 2.6),
    ("rally", 2.2),
    ("rallies", 2.2),
    ("rallied", 2.2),
    ("jump", 1.4),
    ("jumps", 1.4),
    ("jumped", 1.4),
    ("gain", 2.0),
    ("gains", 1.8),
    ("gained", 1.6),
    ("rise", 1.3),
    ("rises", 1.3),
    ("rising", 1.2),
    ("climb", 1.2),
    ("climbs", 1.2),
    ("growth", 1.8),
    ("grow", 1.5),
    ("grows", 1.5),
    ("profit", 1.9),
    ("profits", 1.9),
    ("profitable", 2.2),
    ("record", 1.2),
    ("upgrade", 2.0),
    ("upgraded", 2.0),
    ("outperform", 2.2),
    ("outperforms", 2.2),
    ("rebound", 1.6),
    ("rebounds", 1.6),
    ("recovery", 1.7),
    ("recovers", 1.6),
    ("breakthrough", 2.4),
    ("dividend", 0.9),
    ("buyback", 1.1),
    ("upside", 1.6),
    ("high", 0.8),
    ("higher", 1.0),
    ("tops", 1.3),
    // general negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("negative", -2.7),
    ("fail", -2.5),
    ("fails", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("lose", -1.7),
    ("loses", -1.8),
    ("lost", -1.3),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("weakness", -1.7),
    ("fear", -2.2),
    ("fears", -1.8),
    ("worry", -1.9),
    ("worries", -1.8),
    ("concern", -1.2),
    ("concerns", -1.3),
    ("risk", -1.1),
    ("risks", -1.1),
    ("risky", -1.4),
    ("threat", -2.4),
    ("threatens", -2.1),
    ("crisis", -3.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("warning", -1.4),
    ("warns", -1.6),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("disappoint", -2.0),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("pessimistic", -1.5),
    ("panic", -2.3),
    ("scandal", -2.7),
    ("fraud", -3.0),
    ("scam", -2.8),
    ("lawsuit", -1.6),
    ("probe", -1.0),
    ("investigation", -0.9),
    ("penalty", -1.9),
    ("fine", 0.8),
    ("fined", -1.8),
    ("layoffs", -2.0),
    ("cuts", -1.2),
    ("cut", -1.1),
    ("volatile", -1.1),
    ("turmoil", -2.4),
    ("chaos", -2.7),
    ("war", -2.9),
    ("recession", -2.4),
    ("inflation", -1.0),
    ("debt", -1.5),
    ("default", -1.6),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.8),
    // market negative
    ("bearish", -2.9),
    ("miss", -1.6),
    ("misses", -1.6),
    ("missed", -1.6),
    ("plunge", -2.4),
    ("plunges", -2.4),
    ("plunged", -2.4),
    ("crash", -2.9),
    ("crashes", -2.9),
    ("tumble", -2.1),
    ("tumbles", -2.1),
    ("slump", -2.0),
    ("slumps", -2.0),
    ("slide", -1.3),
    ("slides", -1.3),
    ("sink", -1.4),
    ("sinks", -1.4),
    ("drop", -1.1),
    ("drops", -1.1),
    ("dropped", -1.1),
    ("fall", -1.2),
    ("falls", -1.2),
    ("fell", -1.2),
    ("decline", -1.3),
    ("declines", -1.3),
    ("declined", -1.3),
    ("loss", -1.3),
    ("losses", -1.7),
    ("downgrade", -1.9),
    ("downgraded", -1.9),
    ("underperform", -1.8),
    ("selloff", -2.0),
    ("downturn", -1.8),
    ("downside", -1.4),
    ("lower", -0.8),
    ("slowdown", -1.4),
    ("shortfall", -1.8),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCR),
    ("completely", BOOSTER_INCR),
    ("considerably", BOOSTER_INCR),
    ("deeply", BOOSTER_INCR),
    ("dramatically", BOOSTER_INCR),
    ("enormously", BOOSTER_INCR),
    ("especially", BOOSTER_INCR),
    ("exceptionally", BOOSTER_INCR),
    ("extremely", BOOSTER_INCR),
    ("highly", BOOSTER_INCR),
    ("hugely", BOOSTER_INCR),
    ("incredibly", BOOSTER_INCR),
    ("majorly", BOOSTER_INCR),
    ("massively", BOOSTER_INCR),
    ("most", BOOSTER_INCR),
    ("really", BOOSTER_INCR),
    ("remarkably", BOOSTER_INCR),
    ("sharply", BOOSTER_INCR),
    ("significantly", BOOSTER_INCR),
    ("so", BOOSTER_INCR),
    ("strongly", BOOSTER_INCR),
    ("substantially", BOOSTER_INCR),
    ("totally", BOOSTER_INCR),
    ("very", BOOSTER_INCR),
    ("almost", -BOOSTER_INCR),
    ("barely", -BOOSTER_INCR),
    ("hardly", -BOOSTER_INCR),
    ("marginally", -BOOSTER_INCR),
    ("modestly", -BOOSTER_INCR),
    ("partly", -BOOSTER_INCR),
    ("scarcely", -BOOSTER_INCR),
    ("slightly", -BOOSTER_INCR),
    ("somewhat", -BOOSTER_INCR),
];

const NEGATIONS: &[&str] = &[
    "ain't", "aint", "aren't", "arent", "cannot", "can't", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "hasn't", "hasnt", "haven't",
    "havent", "isn't", "isnt", "neither", "never", "no", "nor", "not", "nothing", "nowhere",
    "shouldn't", "shouldnt", "wasn't", "wasnt", "weren't", "werent", "without", "won't",
    "wont", "wouldn't", "wouldnt",
];

/// Word valences plus the modifier vocabularies.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|(w, v)| ((*w).to_string(), *v)).collect(),
            boosters: BOOSTERS.iter().map(|(w, v)| ((*w).to_string(), *v)).collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Valence of a lowercase word, if it carries sentiment.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Increment contributed by an intensifier or dampener.
    #[must_use]
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Adds or replaces a word. Valences outside `-4..=4` are clamped.
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-4.0, 4.0));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
