use super::{DecimalPlaces, MetricKind, MetricSet, MetricValue, Vocabulary};
use crate::readability::{TextStatistics, flesch_kincaid_grade, flesch_reading_ease, gunning_fog, smog_index};
use crate::tagging::Tagger;
use crate::text::{split_sentences, words};

/// `numerator / denominator`, or zero when the denominator is zero.
#[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn percentage(numerator: usize, denominator: usize) -> f64 {
    ratio(numerator, denominator) * 100.0
}

/// Compute every metric for one text.
///
/// Empty or whitespace-only text yields zero for every metric. The tagger is
/// run once per sentence to detect passive subjects and once over the whole
/// text to count content words.
#[must_use]
pub fn compute_metrics<T: Tagger + ?Sized>(text: &str, tagger: &T, vocabulary: &Vocabulary, decimal_places: &DecimalPlaces) -> MetricSet {
    let sentences = split_sentences(text);
    let words = words(text);
    let stats = TextStatistics::new(&words, sentences.len());

    let hedges = words.iter().filter(|word| vocabulary.is_hedge(word)).count();
    let nominalisations = words.iter().filter(|word| vocabulary.is_nominalisation(word)).count();

    let passive_sentences = sentences.iter().filter(|sentence| tagger.has_passive_subject(sentence)).count();

    let content_words = if words.is_empty() {
        0
    } else {
        tagger.tag(text).iter().filter(|token| token.pos.is_content_word()).count()
    };

    MetricSet::from_fn(|kind| {
        let raw = match kind {
            MetricKind::WordCount => return MetricValue::Count(stats.words as u64),
            MetricKind::SentenceCount => return MetricValue::Count(stats.sentences as u64),
            MetricKind::SyllableCount => return MetricValue::Count(stats.syllables as u64),
            MetricKind::ComplexWordCount => return MetricValue::Count(stats.difficult_words as u64),
            MetricKind::HedgingFrequency => return MetricValue::Count(hedges as u64),
            MetricKind::AverageSentenceLength => ratio(stats.words, stats.sentences),
            MetricKind::FleschReadingEase => flesch_reading_ease(&stats),
            MetricKind::FleschKincaidGradeLevel => flesch_kincaid_grade(&stats),
            MetricKind::GunningFogIndex => gunning_fog(&stats),
            MetricKind::SmogIndex => smog_index(&stats),
            MetricKind::HedgingPercentage => percentage(hedges, stats.words),
            MetricKind::PassiveVoiceRatio => ratio(passive_sentences, stats.sentences),
            MetricKind::NominalisationRate => percentage(nominalisations, stats.words),
            MetricKind::LexicalDensity => percentage(content_words, stats.words),
        };

        decimal_places.round(kind, raw)
    })
}
