/// Suffixes after which an internal silent `e` does not form its own syllable (e.g. "likely", "statement").
const SILENT_E_SUFFIXES: &[&str] = &["ly", "ment", "ful", "ness", "less"];

/// Vowel pairs that are usually pronounced as two syllables.
const HIATUS_PAIRS: &[&str] = &["ia", "io", "iu", "ua"];

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in an English word.
///
/// Non-alphabetic characters are ignored. Any word with at least one letter
/// has at least one syllable; a word without letters has none.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).flat_map(char::to_lowercase).collect();
    if letters.is_empty() {
        return 0;
    }

    if letters.len() <= 3 {
        return 1;
    }

    let mut count = vowel_groups(&letters);
    let text: String = letters.iter().collect();

    if ends_with_silent_e(&letters) {
        count = count.saturating_sub(1);
    }

    if let Some(stem) = text.strip_suffix("ed")
        && !stem.ends_with(['t', 'd'])
        && stem.ends_with(|c: char| !is_vowel(c))
    {
        count = count.saturating_sub(1);
    }

    if let Some(stem) = text.strip_suffix("es")
        && stem.ends_with(|c: char| !is_vowel(c))
        && !stem.ends_with(['s', 'x', 'z', 'c', 'g'])
        && !stem.ends_with("ch")
        && !stem.ends_with("sh")
    {
        count = count.saturating_sub(1);
    }

    for suffix in SILENT_E_SUFFIXES {
        if let Some(stem) = text.strip_suffix(suffix)
            && let Some(before_e) = stem.strip_suffix('e')
            && before_e.ends_with(|c: char| !is_vowel(c))
            && before_e.chars().any(is_vowel)
        {
            count = count.saturating_sub(1);
        }
    }

    count += hiatus_count(&letters);
    count.max(1)
}

fn vowel_groups(letters: &[char]) -> usize {
    let mut groups = 0;
    let mut previous_vowel = false;
    for (i, &c) in letters.iter().enumerate() {
        // a leading y is a consonant ("yield")
        let vowel = is_vowel(c) && !(c == 'y' && i == 0);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    groups
}

fn ends_with_silent_e(letters: &[char]) -> bool {
    match letters {
        [.., before, 'l', 'e'] if !is_vowel(*before) => false,
        [.., before, 'e'] => !is_vowel(*before),
        _ => false,
    }
}

fn hiatus_count(letters: &[char]) -> usize {
    letters
        .windows(3)
        .filter(|window| {
            let pair: String = window[1..].iter().collect();
            HIATUS_PAIRS.contains(&pair.as_str()) && !is_blocking_consonant(window[0], window[1])
        })
        .count()
        + usize::from(letters.len() >= 2 && HIATUS_PAIRS.contains(&letters[..2].iter().collect::<String>().as_str()))
}

/// Consonants that merge with a following vowel pair ("nation", "quality", "language").
const fn is_blocking_consonant(consonant: char, first_vowel: char) -> bool {
    match first_vowel {
        'i' => matches!(consonant, 't' | 's' | 'c' | 'g' | 'x'),
        'u' => matches!(consonant, 'q' | 'g'),
        _ => false,
    }
}
