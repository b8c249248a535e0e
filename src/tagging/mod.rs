//! Part-of-speech and dependency tagging.
//!
//! The metrics layer only needs two things from a tagger: the universal
//! part-of-speech tag of every token, used for lexical density, and whether a
//! sentence contains a passive nominal subject. [`Tagger`] captures that
//! contract so alternative taggers can be plugged in.
//!
//! [`LexiconTagger`] is the built-in implementation. It combines a
//! closed-class [`Lexicon`] (optionally extended from a TOML file) with
//! suffix heuristics for open-class words and a pattern matcher for passive
//! constructions.

mod dependency;
mod lexicon;
mod lexicon_tagger;
mod part_of_speech;
mod passive;
mod tagged_token;
mod tagger;

pub use dependency::Dependency;
pub use lexicon::Lexicon;
pub use lexicon_tagger::LexiconTagger;
pub use part_of_speech::PartOfSpeech;
pub use tagged_token::TaggedToken;
pub use tagger::Tagger;
