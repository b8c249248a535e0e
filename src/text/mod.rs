//! Low-level text analysis.
//!
//! This module splits free text into sentences and tokens and estimates the
//! number of syllables in English words. Everything here is a pure function
//! of its input; the metrics layer builds on these primitives.
//!
//! # Implementation Model
//!
//! - [`split_sentences`] walks the text looking for terminal punctuation
//!   followed by whitespace and a plausible sentence start, skipping
//!   well-known abbreviations, initials and decimal numbers.
//! - [`tokenize`] produces Treebank-like tokens: runs of word characters
//!   (with inner hyphens, apostrophes and periods), split clitics such as
//!   `n't` and `'s`, and single-character punctuation.
//! - [`count_syllables`] is a vowel-group heuristic with the usual English
//!   adjustments (silent final `e`, `-le`, `-ed`, `-es`, vowel hiatus).

mod sentences;
mod syllables;
mod token;

pub use sentences::split_sentences;
pub use syllables::count_syllables;
pub use token::{Token, TokenKind, tokenize, words};
