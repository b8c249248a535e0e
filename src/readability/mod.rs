//! Classic readability formulas.
//!
//! The formulas operate on a [`TextStatistics`] snapshot (word, sentence,
//! syllable and hard-word counts) so that the word list and sentence
//! segmentation are computed once per text. All formulas return `0.0` when
//! the text has no words or no sentences.
//!
//! Difficult words follow the Dale-Chall convention: a distinct word is
//! difficult when it is not on the easy-word list and reaches a syllable
//! threshold.

use crate::text::count_syllables;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum number of sentences for the SMOG index to be meaningful.
const SMOG_MIN_SENTENCES: usize = 3;

/// Words with at least this many syllables are polysyllables.
pub const POLYSYLLABLE_SYLLABLES: usize = 3;

/// Syllable threshold for the difficult words reported as Complex Word Count.
pub const DIFFICULT_WORD_SYLLABLES: usize = 2;

/// Syllable threshold for the difficult words used by the Gunning Fog index.
pub const FOG_WORD_SYLLABLES: usize = 3;

/// The Dale-Chall list of words familiar to most fourth-grade readers, one per line.
static EASY_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| include_str!("easy_words.txt").lines().collect());

/// Whether `word` (lowercase) is on the Dale-Chall easy-word list.
#[must_use]
pub fn is_easy_word(word: &str) -> bool {
    EASY_WORDS.contains(word)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStatistics {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,

    /// Words of [`POLYSYLLABLE_SYLLABLES`] or more syllables, every occurrence counted
    pub polysyllables: usize,

    /// Distinct difficult words of [`DIFFICULT_WORD_SYLLABLES`] or more syllables
    pub difficult_words: usize,

    /// Distinct difficult words of [`FOG_WORD_SYLLABLES`] or more syllables
    pub fog_words: usize,
}

impl TextStatistics {
    #[must_use]
    pub fn new(words: &[&str], sentences: usize) -> Self {
        let mut syllables = 0;
        let mut polysyllables = 0;
        let mut difficult = HashSet::new();
        let mut fog = HashSet::new();

        for word in words {
            let count = count_syllables(word);
            syllables += count;
            if count >= POLYSYLLABLE_SYLLABLES {
                polysyllables += 1;
            }

            if count >= DIFFICULT_WORD_SYLLABLES {
                let lower = word.to_lowercase();
                if !is_easy_word(&lower) {
                    if count >= FOG_WORD_SYLLABLES {
                        let _ = fog.insert(lower.clone());
                    }
                    let _ = difficult.insert(lower);
                }
            }
        }

        Self {
            words: words.len(),
            sentences,
            syllables,
            polysyllables,
            difficult_words: difficult.len(),
            fog_words: fog.len(),
        }
    }

    const fn is_empty(&self) -> bool {
        self.words == 0 || self.sentences == 0
    }

    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    fn fog_word_percentage(&self) -> f64 {
        100.0 * self.fog_words as f64 / self.words as f64
    }
}

#[must_use]
pub fn flesch_reading_ease(stats: &TextStatistics) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }

    84.6f64.mul_add(-stats.syllables_per_word(), 1.015f64.mul_add(-stats.words_per_sentence(), 206.835))
}

#[must_use]
pub fn flesch_kincaid_grade(stats: &TextStatistics) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }

    0.39f64.mul_add(stats.words_per_sentence(), 11.8 * stats.syllables_per_word()) - 15.59
}

#[must_use]
pub fn gunning_fog(stats: &TextStatistics) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }

    0.4 * (stats.words_per_sentence() + stats.fog_word_percentage())
}

/// SMOG grade; texts of fewer than three sentences score `0.0`.
#[must_use]
pub fn smog_index(stats: &TextStatistics) -> f64 {
    if stats.is_empty() || stats.sentences < SMOG_MIN_SENTENCES {
        return 0.0;
    }

    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    let per_thirty = stats.polysyllables as f64 * 30.0 / stats.sentences as f64;
    1.043f64.mul_add(per_thirty.sqrt(), 3.1291)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    fn stats(words: usize, sentences: usize, syllables: usize, polysyllables: usize) -> TextStatistics {
        TextStatistics {
            words,
            sentences,
            syllables,
            polysyllables,
            difficult_words: polysyllables,
            fog_words: polysyllables,
        }
    }

    #[test]
    fn test_statistics_from_words() {
        let stats = TextStatistics::new(&["One", "sentence", "here"], 1);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.syllables, 4);
        assert_eq!(stats.polysyllables, 0);
        assert_eq!(stats.difficult_words, 0);
    }

    #[test]
    fn test_difficult_words_include_two_syllable_words() {
        let stats = TextStatistics::new(&["Enzymes", "bind", "proteins"], 1);
        assert_eq!(stats.difficult_words, 2);
        assert_eq!(stats.fog_words, 0);
        assert_eq!(stats.polysyllables, 0);
    }

    #[test]
    fn test_easy_words_are_not_difficult() {
        assert!(is_easy_word("garden"));
        assert!(is_easy_word("butterfly"));
        let stats = TextStatistics::new(&["The", "garden", "butterfly", "flew"], 1);
        assert_eq!(stats.difficult_words, 0);
        assert_eq!(stats.polysyllables, 1);
    }

    #[test]
    fn test_difficult_words_are_counted_once() {
        let stats = TextStatistics::new(&["Protein", "binds", "protein", "molecules"], 1);
        assert_eq!(stats.difficult_words, 2);
        assert_eq!(stats.fog_words, 1);
    }

    #[test]
    fn test_polysyllables_counted() {
        let stats = TextStatistics::new(&["readability", "is", "important"], 1);
        assert_eq!(stats.polysyllables, 2);
    }

    #[test]
    fn test_empty_statistics_score_zero() {
        let empty = TextStatistics::default();
        assert_close(flesch_reading_ease(&empty), 0.0);
        assert_close(flesch_kincaid_grade(&empty), 0.0);
        assert_close(gunning_fog(&empty), 0.0);
        assert_close(smog_index(&empty), 0.0);
    }

    #[test]
    fn test_flesch_reading_ease() {
        // 10 words, 2 sentences, 15 syllables
        let s = stats(10, 2, 15, 1);
        assert_close(flesch_reading_ease(&s), 206.835 - 1.015 * 5.0 - 84.6 * 1.5);
    }

    #[test]
    fn test_flesch_kincaid_grade() {
        let s = stats(10, 2, 15, 1);
        assert_close(flesch_kincaid_grade(&s), 0.39 * 5.0 + 11.8 * 1.5 - 15.59);
    }

    #[test]
    fn test_gunning_fog() {
        let s = stats(10, 2, 15, 1);
        assert_close(gunning_fog(&s), 0.4 * (5.0 + 10.0));
    }

    #[test]
    fn test_smog_requires_three_sentences() {
        assert_close(smog_index(&stats(10, 2, 15, 4)), 0.0);
    }

    #[test]
    fn test_smog_index() {
        let s = stats(30, 3, 45, 3);
        assert_close(smog_index(&s), 1.043 * 30.0f64.sqrt() + 3.1291);
    }
}
