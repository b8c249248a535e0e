use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    #[serde(rename = "PROPN")]
    #[strum(serialize = "PROPN")]
    ProperNoun,
    Verb,
    #[serde(rename = "AUX")]
    #[strum(serialize = "AUX")]
    Auxiliary,
    #[serde(rename = "ADJ")]
    #[strum(serialize = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    #[strum(serialize = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    #[strum(serialize = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    #[strum(serialize = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    #[strum(serialize = "ADP")]
    Adposition,
    #[serde(rename = "CCONJ")]
    #[strum(serialize = "CCONJ")]
    CoordinatingConjunction,
    #[serde(rename = "SCONJ")]
    #[strum(serialize = "SCONJ")]
    SubordinatingConjunction,
    #[serde(rename = "PART")]
    #[strum(serialize = "PART")]
    Particle,
    #[serde(rename = "NUM")]
    #[strum(serialize = "NUM")]
    Numeral,
    #[serde(rename = "PUNCT")]
    #[strum(serialize = "PUNCT")]
    Punctuation,
    #[serde(rename = "SYM")]
    #[strum(serialize = "SYM")]
    Symbol,
    #[serde(rename = "INTJ")]
    #[strum(serialize = "INTJ")]
    Interjection,
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Other,
}

impl PartOfSpeech {
    /// Nouns, verbs, adjectives and adverbs carry lexical content.
    #[must_use]
    pub const fn is_content_word(self) -> bool {
        matches!(self, Self::Noun | Self::Verb | Self::Adjective | Self::Adverb)
    }

    /// Tags that can head a grammatical subject.
    #[must_use]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Pronoun | Self::Numeral)
    }

    /// Tags from the closed word classes.
    #[must_use]
    pub const fn is_closed_class(self) -> bool {
        !matches!(
            self,
            Self::Noun | Self::ProperNoun | Self::Verb | Self::Adjective | Self::Adverb | Self::Interjection | Self::Other
        )
    }
}
