use super::{Dependency, PartOfSpeech, TaggedToken};

const BE_FORMS: &[&str] = &["be", "is", "am", "are", "was", "were", "been", "being", "'s", "'re", "'m"];
const GET_FORMS: &[&str] = &["get", "gets", "got", "gotten", "getting"];
const NEGATIONS: &[&str] = &["not", "n't", "never"];
const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];

/// Words outside the nominal tags that can stand as the subject of a passive clause.
const SUBJECT_WORDS: &[&str] = &["this", "that", "these", "those", "which", "who", "all", "both", "each"];

fn is_be(token: &TaggedToken<'_>, lower: &str) -> bool {
    BE_FORMS.contains(&lower) && token.pos == PartOfSpeech::Auxiliary
}

/// Mark passive auxiliaries and passive subjects.
///
/// A form of *be* or *get*, optionally followed by adverbs, negation or
/// further forms of *be*, followed by a past participle is a passive
/// construction. The last auxiliary of the chain becomes `auxpass`, and the
/// nearest preceding nominal in the same clause becomes `nsubjpass`.
/// Infinitival passives ("to be tested") have no subject.
pub fn mark_passives(tokens: &mut [TaggedToken<'_>], lower: &[String], is_participle: impl Fn(usize) -> bool) {
    let mut i = 0;
    while i < tokens.len() {
        if !is_be(&tokens[i], &lower[i]) && !GET_FORMS.contains(&lower[i].as_str()) {
            i += 1;
            continue;
        }

        let mut auxiliary = i;
        let mut j = i + 1;
        while j < tokens.len() {
            if tokens[j].pos == PartOfSpeech::Adverb || NEGATIONS.contains(&lower[j].as_str()) {
                j += 1;
            } else if is_be(&tokens[j], &lower[j]) {
                auxiliary = j;
                j += 1;
            } else {
                break;
            }
        }

        if j < tokens.len() && is_participle(j) {
            tokens[auxiliary].dep = Dependency::PassiveAuxiliary;
            if let Some(subject) = find_subject(tokens, lower, i) {
                tokens[subject].dep = Dependency::PassiveNominalSubject;
            }
        }

        i = j.max(i + 1);
    }
}

fn find_subject(tokens: &[TaggedToken<'_>], lower: &[String], chain_start: usize) -> Option<usize> {
    // back over modals, perfect auxiliaries, adverbs and negation ("may not have been")
    let mut start = chain_start;
    while start > 0 {
        let previous = &tokens[start - 1];
        let previous_lower = lower[start - 1].as_str();
        if previous.pos == PartOfSpeech::Auxiliary
            || previous.pos == PartOfSpeech::Adverb
            || NEGATIONS.contains(&previous_lower)
            || HAVE_FORMS.contains(&previous_lower)
        {
            start -= 1;
        } else {
            break;
        }
    }

    if start > 0 && lower[start - 1] == "to" {
        return None;
    }

    for index in (0..start).rev() {
        let token = &tokens[index];
        if token.pos == PartOfSpeech::Punctuation && matches!(token.text, ";" | ":") {
            return None;
        }

        if token.pos.is_nominal() || SUBJECT_WORDS.contains(&lower[index].as_str()) {
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens<'a>(tagged: &[(&'a str, PartOfSpeech)]) -> (Vec<TaggedToken<'a>>, Vec<String>) {
        let tokens = tagged.iter().map(|(text, pos)| TaggedToken::new(text, *pos)).collect();
        let lower = tagged.iter().map(|(text, _)| text.to_lowercase()).collect();
        (tokens, lower)
    }

    fn deps(tokens: &[TaggedToken<'_>]) -> Vec<Dependency> {
        tokens.iter().map(|t| t.dep).collect()
    }

    use PartOfSpeech::{Adverb, Auxiliary, Determiner, Noun, Particle, Pronoun, Punctuation, Verb};

    #[test]
    fn test_simple_passive() {
        let (mut t, lower) = tokens(&[("Samples", Noun), ("were", Auxiliary), ("analysed", Verb), (".", Punctuation)]);
        mark_passives(&mut t, &lower, |i| i == 2);
        assert_eq!(
            deps(&t),
            vec![Dependency::PassiveNominalSubject, Dependency::PassiveAuxiliary, Dependency::Unspecified, Dependency::Unspecified]
        );
    }

    #[test]
    fn test_adverb_between_auxiliary_and_participle() {
        let (mut t, lower) = tokens(&[("It", Pronoun), ("was", Auxiliary), ("widely", Adverb), ("reported", Verb)]);
        mark_passives(&mut t, &lower, |i| i == 3);
        assert_eq!(t[0].dep, Dependency::PassiveNominalSubject);
        assert_eq!(t[1].dep, Dependency::PassiveAuxiliary);
    }

    #[test]
    fn test_perfect_passive_marks_last_auxiliary() {
        let (mut t, lower) = tokens(&[
            ("The", Determiner),
            ("model", Noun),
            ("has", Auxiliary),
            ("been", Auxiliary),
            ("trained", Verb),
        ]);
        mark_passives(&mut t, &lower, |i| i == 4);
        assert_eq!(t[1].dep, Dependency::PassiveNominalSubject);
        assert_eq!(t[2].dep, Dependency::Unspecified);
        assert_eq!(t[3].dep, Dependency::PassiveAuxiliary);
    }

    #[test]
    fn test_copula_with_adjective_is_not_passive() {
        let (mut t, lower) = tokens(&[("Results", Noun), ("were", Auxiliary), ("formal", PartOfSpeech::Adjective)]);
        mark_passives(&mut t, &lower, |_| false);
        assert!(t.iter().all(|token| token.dep == Dependency::Unspecified));
    }

    #[test]
    fn test_infinitival_passive_has_no_subject() {
        let (mut t, lower) = tokens(&[
            ("Samples", Noun),
            ("need", Verb),
            ("to", Particle),
            ("be", Auxiliary),
            ("tested", Verb),
        ]);
        mark_passives(&mut t, &lower, |i| i == 4);
        assert_eq!(t[3].dep, Dependency::PassiveAuxiliary);
        assert!(t.iter().all(|token| token.dep != Dependency::PassiveNominalSubject));
    }

    #[test]
    fn test_clause_boundary_stops_subject_search() {
        let (mut t, lower) = tokens(&[("Data", Noun), (";", Punctuation), ("were", Auxiliary), ("lost", Verb)]);
        mark_passives(&mut t, &lower, |i| i == 3);
        assert_eq!(t[0].dep, Dependency::Unspecified);
        assert_eq!(t[2].dep, Dependency::PassiveAuxiliary);
    }

    #[test]
    fn test_demonstrative_subject() {
        let (mut t, lower) = tokens(&[("This", Determiner), ("is", Auxiliary), ("not", Particle), ("known", Verb)]);
        mark_passives(&mut t, &lower, |i| i == 3);
        assert_eq!(t[0].dep, Dependency::PassiveNominalSubject);
    }
}
