use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One of the derived columns appended to every row, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount, IntoStaticStr)]
pub enum MetricKind {
    #[strum(serialize = "Word Count")]
    WordCount,
    #[strum(serialize = "Sentence Count")]
    SentenceCount,
    #[strum(serialize = "Average Sentence Length")]
    AverageSentenceLength,
    #[strum(serialize = "Flesch Reading Ease")]
    FleschReadingEase,
    #[strum(serialize = "Flesch-Kincaid Grade Level")]
    FleschKincaidGradeLevel,
    #[strum(serialize = "Syllable Count")]
    SyllableCount,
    #[strum(serialize = "Gunning Fog Index")]
    GunningFogIndex,
    #[strum(serialize = "Complex Word Count")]
    ComplexWordCount,
    #[strum(serialize = "SMOG Index")]
    SmogIndex,
    #[strum(serialize = "Hedging Frequency")]
    HedgingFrequency,
    #[strum(serialize = "Hedging %")]
    HedgingPercentage,
    #[strum(serialize = "Passive Voice Ratio")]
    PassiveVoiceRatio,
    #[strum(serialize = "Nominalisation Rate")]
    NominalisationRate,
    #[strum(serialize = "Lexical Density")]
    LexicalDensity,
}

impl MetricKind {
    /// Column header of the metric.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Metrics that are plain counts and are written as integers.
    #[must_use]
    pub const fn is_count(self) -> bool {
        matches!(
            self,
            Self::WordCount | Self::SentenceCount | Self::SyllableCount | Self::ComplexWordCount | Self::HedgingFrequency
        )
    }

    /// Precision used when the configuration does not say otherwise; `None` for counts.
    #[must_use]
    pub const fn default_decimal_places(self) -> Option<u32> {
        match self {
            Self::WordCount | Self::SentenceCount | Self::SyllableCount | Self::ComplexWordCount | Self::HedgingFrequency => None,
            Self::AverageSentenceLength
            | Self::FleschReadingEase
            | Self::FleschKincaidGradeLevel
            | Self::GunningFogIndex
            | Self::SmogIndex
            | Self::HedgingPercentage
            | Self::PassiveVoiceRatio => Some(2),
            Self::NominalisationRate | Self::LexicalDensity => Some(4),
        }
    }
}
