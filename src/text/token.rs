use regex::Regex;
use std::sync::LazyLock;

/// Word characters joined by inner hyphens, apostrophes or periods, or any single other character.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:['’\-.]\w+)*|\S").expect("token pattern should be a valid regex"));

/// Clitics split from the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Made only of alphabetic characters
    Word,

    /// Digits, optionally with decimal points
    Number,

    /// A single non-alphanumeric character
    Punctuation,

    /// Anything else (clitics, hyphenated compounds, alphanumerics)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, kind: classify(text) }
    }

    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

fn classify(text: &str) -> TokenKind {
    if !text.is_empty() && text.chars().all(char::is_alphabetic) {
        TokenKind::Word
    } else if text.starts_with(|c: char| c.is_ascii_digit()) && text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        TokenKind::Number
    } else if text.chars().count() == 1 && !text.chars().all(char::is_alphanumeric) {
        TokenKind::Punctuation
    } else {
        TokenKind::Other
    }
}

/// Split text into tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for m in TOKEN_PATTERN.find_iter(text) {
        let (stem, clitic) = split_clitic(m.as_str());
        if !stem.is_empty() {
            tokens.push(Token::new(stem));
        }
        if let Some(clitic) = clitic {
            tokens.push(Token::new(clitic));
        }
    }

    tokens
}

/// Alphabetic word tokens of the text, in order.
pub fn words(text: &str) -> Vec<&str> {
    tokenize(text).into_iter().filter(Token::is_word).map(|token| token.text).collect()
}

fn split_clitic(token: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        if token.len() <= clitic.len() {
            continue;
        }

        // Case-insensitive so that shouted text such as "DON'T" splits too
        let split = token.len() - clitic.len();
        if token.is_char_boundary(split) && token[split..].eq_ignore_ascii_case(clitic) {
            return (&token[..split], Some(&token[split..]));
        }
    }

    (token, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(texts("One sentence here."), vec!["One", "sentence", "here", "."]);
    }

    #[test]
    fn test_words_skip_punctuation() {
        assert_eq!(words("This may possibly work."), vec!["This", "may", "possibly", "work"]);
    }

    #[test]
    fn test_contraction_split() {
        assert_eq!(texts("They don't know"), vec!["They", "do", "n't", "know"]);
        assert_eq!(words("They don't know"), vec!["They", "do", "know"]);
    }

    #[test]
    fn test_possessive_split() {
        assert_eq!(texts("the model's output"), vec!["the", "model", "'s", "output"]);
    }

    #[test]
    fn test_uppercase_contraction() {
        assert_eq!(texts("DON'T"), vec!["DO", "N'T"]);
    }

    #[test]
    fn test_hyphenated_is_not_a_word() {
        let tokens = tokenize("a well-known result");
        assert_eq!(tokens[1].text, "well-known");
        assert_eq!(tokens[1].kind, TokenKind::Other);
        assert_eq!(words("a well-known result"), vec!["a", "result"]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("about 3.5 or 1000 units");
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(words("about 3.5 or 1000 units"), vec!["about", "or", "units"]);
    }

    #[test]
    fn test_alphanumeric_is_other() {
        let tokens = tokenize("COVID19 cases");
        assert_eq!(tokens[0].kind, TokenKind::Other);
    }

    #[test]
    fn test_punctuation_kind() {
        let tokens = tokenize("(p < 0.05)");
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
        assert_eq!(tokens[4].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_unicode_letters_are_words() {
        assert_eq!(words("naïve café"), vec!["naïve", "café"]);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
        assert!(words("   ").is_empty());
    }
}
