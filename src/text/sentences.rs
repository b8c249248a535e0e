/// Lowercased words (without their final period) that do not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "al", "approx", "cf", "dept", "dr", "e.g", "esp", "fig", "figs", "i.e", "inc", "jr", "ltd", "mr", "mrs", "ms", "prof", "resp",
    "sr", "viz", "vs",
];

/// Abbreviations that only hold before a number ("no. 5", "pp. 12"); elsewhere they may be ordinary words.
const NUMBERED_ABBREVIATIONS: &[&str] = &[
    "ca", "ch", "eq", "eqs", "no", "nos", "pp", "ref", "refs", "sec", "tab", "vol",
];

const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

const fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’')
}

fn can_start_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘')
}

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let mut next = i + 1;
        while next < chars.len() && (is_terminator(chars[next].1) || is_closer(chars[next].1)) {
            next += 1;
        }

        let end = chars.get(next).map_or(text.len(), |&(offset, _)| offset);
        if is_boundary(&chars, next) && !(c == '.' && ends_with_abbreviation(&text[start..pos], next_visible(&chars, next))) {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }

        i = next;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn next_visible(chars: &[(usize, char)], from: usize) -> Option<char> {
    chars.get(from..)?.iter().map(|&(_, c)| c).find(|c| !c.is_whitespace())
}

fn is_boundary(chars: &[(usize, char)], next: usize) -> bool {
    let Some(&(_, following)) = chars.get(next) else {
        return true;
    };

    if !following.is_whitespace() {
        return false;
    }

    next_visible(chars, next).is_none_or(can_start_sentence)
}

fn ends_with_abbreviation(preceding: &str, following: Option<char>) -> bool {
    let last_word = preceding
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '[')
        .next()
        .unwrap_or_default();

    let mut letters = last_word.chars();
    if let (Some(first), None) = (letters.next(), letters.next())
        && first.is_alphabetic()
        && first.is_uppercase()
    {
        // an initial such as the "J" in "J. Smith"
        return true;
    }

    let lower = last_word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
        || (NUMBERED_ABBREVIATIONS.contains(&lower.as_str()) && following.is_some_and(|c| c.is_ascii_digit()))
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
