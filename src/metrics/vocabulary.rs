use std::collections::HashSet;

/// Hedging cues counted by the Hedging Frequency metric.
pub const HEDGE_WORDS: &[&str] = &[
    "may", "might", "could", "seems", "appears", "suggest", "likely", "possible", "possibly", "probable", "probably", "assume",
    "indicative", "tends", "often", "sometimes", "somewhat",
];

/// Word endings that mark a nominalisation.
pub const NOMINAL_SUFFIXES: &[&str] = &["ion", "ment", "ity", "ness", "ance", "ence", "ship"];

/// Word lists used by the lexical metrics.
///
/// Built once at startup and shared read-only; all matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    hedge_words: HashSet<String>,
    nominal_suffixes: Vec<String>,
}

impl Vocabulary {
    pub fn new<H, S>(hedge_words: H, nominal_suffixes: S) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            hedge_words: hedge_words.into_iter().map(|word| word.as_ref().to_lowercase()).collect(),
            nominal_suffixes: nominal_suffixes.into_iter().map(|suffix| suffix.as_ref().to_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn is_hedge(&self, word: &str) -> bool {
        self.hedge_words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn is_nominalisation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.nominal_suffixes.iter().any(|suffix| lower.ends_with(suffix.as_str()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(HEDGE_WORDS, NOMINAL_SUFFIXES)
    }
}
