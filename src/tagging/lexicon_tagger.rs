use super::lexicon::normalize;
use super::passive::mark_passives;
use super::{Lexicon, PartOfSpeech, TaggedToken, Tagger};
use crate::Result;
use crate::text::{Token, TokenKind, tokenize};
use camino::Utf8Path;

const LOG_TARGET: &str = "    tagger";

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ities", "ance", "ence", "ship", "ism", "ist", "ogy", "ogies",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "ive", "able", "ible", "ial", "ical", "al", "ic", "ary", "ent", "ant", "ish", "ular",
];
const VERB_SUFFIXES: &[&str] = &["ize", "izes", "ise", "ises", "ify", "ifies"];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];
const DO_FORMS: &[&str] = &["do", "does", "did"];
const NEGATIONS: &[&str] = &["not", "n't"];

/// Characters that end a sentence or open a new one, so the following word may be capitalized.
const SENTENCE_OPENERS: &[&str] = &[".", "!", "?", ":", "\"", "“", "(", "["];

const SYMBOLS: &str = "%$+=<>#&*/\\^|~@";

/// A rule-based tagger driven by a closed-class [`Lexicon`].
///
/// Closed-class words come from the lexicon; open-class words are guessed
/// from capitalization and suffixes. A small set of contextual rules then
/// resolves the ambiguous function words (*to*, *have*, *do*, *'s*) and marks
/// passive constructions.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    lexicon: Lexicon,
}

impl LexiconTagger {
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Build a tagger from the built-in lexicon, extended by `lexicon_path` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon file cannot be read or parsed.
    pub fn load(lexicon_path: Option<&Utf8Path>) -> Result<Self> {
        let lexicon = match lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::builtin(),
        };

        log::debug!(target: LOG_TARGET, "Tagger ready with {} lexicon entries", lexicon.len());
        Ok(Self::new(lexicon))
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Whether a normalized word looks like a past participle.
    #[must_use]
    pub fn is_past_participle(&self, word: &str) -> bool {
        if self.lexicon.is_irregular_participle(word) {
            return true;
        }

        word.chars().count() > 3
            && word.ends_with("ed")
            && !word.ends_with("eed")
            && self.lexicon.lookup(word).is_none_or(|pos| pos == PartOfSpeech::Verb)
    }

    fn initial_tag(&self, token: &Token<'_>, lower: &str, sentence_initial: bool, previous: Option<PartOfSpeech>) -> PartOfSpeech {
        match token.kind {
            TokenKind::Punctuation => {
                if token.text.chars().all(|c| SYMBOLS.contains(c)) {
                    PartOfSpeech::Symbol
                } else {
                    PartOfSpeech::Punctuation
                }
            }
            TokenKind::Number => PartOfSpeech::Numeral,
            TokenKind::Other => self.lexicon.lookup(lower).unwrap_or_else(|| {
                if let Some((_, last)) = lower.rsplit_once('-')
                    && !last.is_empty()
                {
                    self.lexicon.lookup(last).unwrap_or_else(|| self.guess_open_class(last, previous))
                } else if lower.chars().any(|c| c.is_ascii_digit()) {
                    PartOfSpeech::ProperNoun
                } else {
                    PartOfSpeech::Other
                }
            }),
            TokenKind::Word => {
                let capitalized = token.text.starts_with(char::is_uppercase);
                match self.lexicon.lookup(lower) {
                    Some(pos) if capitalized && !sentence_initial && !pos.is_closed_class() => PartOfSpeech::ProperNoun,
                    Some(pos) => pos,
                    None if (capitalized && !sentence_initial) || is_acronym(token.text) => PartOfSpeech::ProperNoun,
                    None => self.guess_open_class(lower, previous),
                }
            }
        }
    }

    fn guess_open_class(&self, lower: &str, previous: Option<PartOfSpeech>) -> PartOfSpeech {
        if self.is_past_participle(lower) {
            return PartOfSpeech::Verb;
        }

        let singular = lower.strip_suffix('s').unwrap_or(lower);
        if NOUN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix) || singular.ends_with(suffix)) {
            PartOfSpeech::Noun
        } else if lower.ends_with("ly") {
            PartOfSpeech::Adverb
        } else if lower.len() > 4 && lower.ends_with("ing") {
            if previous == Some(PartOfSpeech::Determiner) {
                PartOfSpeech::Noun
            } else {
                PartOfSpeech::Verb
            }
        } else if VERB_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            PartOfSpeech::Verb
        } else if ADJECTIVE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        }
    }

    /// Resolve function words whose class depends on their neighbours.
    fn apply_context(&self, tagged: &mut [TaggedToken<'_>], lower: &[String]) {
        for i in 0..tagged.len() {
            let word = lower[i].as_str();
            let next = tagged.get(i + 1).map(|token| token.pos);

            if word == "to" {
                tagged[i].pos = if matches!(next, Some(PartOfSpeech::Verb | PartOfSpeech::Auxiliary)) {
                    PartOfSpeech::Particle
                } else {
                    PartOfSpeech::Adposition
                };
            } else if HAVE_FORMS.contains(&word) {
                let mut j = i + 1;
                while j < tagged.len() && (tagged[j].pos == PartOfSpeech::Adverb || NEGATIONS.contains(&lower[j].as_str())) {
                    j += 1;
                }
                let perfect = j < tagged.len() && (lower[j] == "been" || self.is_past_participle(&lower[j]));
                tagged[i].pos = if perfect { PartOfSpeech::Auxiliary } else { PartOfSpeech::Verb };
            } else if DO_FORMS.contains(&word) {
                let negated = lower.get(i + 1).is_some_and(|following| NEGATIONS.contains(&following.as_str()));
                tagged[i].pos = if negated { PartOfSpeech::Auxiliary } else { PartOfSpeech::Verb };
            } else if word == "'s" {
                let after_pronoun = i > 0 && tagged[i - 1].pos == PartOfSpeech::Pronoun;
                tagged[i].pos = if after_pronoun { PartOfSpeech::Auxiliary } else { PartOfSpeech::Particle };
            }
        }
    }
}

fn is_acronym(text: &str) -> bool {
    text.chars().count() >= 2 && text.chars().all(char::is_uppercase)
}

impl Tagger for LexiconTagger {
    fn tag<'a>(&self, text: &'a str) -> Vec<TaggedToken<'a>> {
        let tokens = tokenize(text);
        let lower: Vec<String> = tokens.iter().map(|token| normalize(token.text)).collect();

        let mut tagged: Vec<TaggedToken<'a>> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let sentence_initial = i == 0 || SENTENCE_OPENERS.contains(&tokens[i - 1].text);
            let previous = tagged.last().map(|t| t.pos);
            let pos = self.initial_tag(token, &lower[i], sentence_initial, previous);
            tagged.push(TaggedToken::new(token.text, pos));
        }

        self.apply_context(&mut tagged, &lower);

        let participles: Vec<bool> = tagged
            .iter()
            .zip(&lower)
            .map(|(token, word)| matches!(token.pos, PartOfSpeech::Verb | PartOfSpeech::Adjective) && self.is_past_participle(word))
            .collect();
        mark_passives(&mut tagged, &lower, |i| participles[i]);

        log::trace!(target: LOG_TARGET, "Tagged {} tokens", tagged.len());
        tagged
    }
}
