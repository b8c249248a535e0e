use super::{Dependency, TaggedToken};

/// A part-of-speech and dependency tagger.
///
/// Implementations are loaded once and shared read-only across all texts.
pub trait Tagger {
    /// Tag every token of `text`, punctuation included.
    fn tag<'a>(&self, text: &'a str) -> Vec<TaggedToken<'a>>;

    /// Whether `sentence` contains a passive nominal subject.
    fn has_passive_subject(&self, sentence: &str) -> bool {
        self.tag(sentence).iter().any(|token| token.dep == Dependency::PassiveNominalSubject)
    }
}
