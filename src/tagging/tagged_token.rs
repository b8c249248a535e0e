use super::{Dependency, PartOfSpeech};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    pub text: &'a str,
    pub pos: PartOfSpeech,
    pub dep: Dependency,
}

impl<'a> TaggedToken<'a> {
    #[must_use]
    pub const fn new(text: &'a str, pos: PartOfSpeech) -> Self {
        Self {
            text,
            pos,
            dep: Dependency::Unspecified,
        }
    }
}
