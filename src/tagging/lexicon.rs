use super::PartOfSpeech;
use crate::Result;
use camino::Utf8Path;
use ohno::{EnrichableExt, IntoAppError, bail};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;

const LOG_TARGET: &str = "   lexicon";

const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "both", "each", "either", "every", "neither", "no", "some", "such", "the", "these", "this", "those",
    "all",
];

const PRONOUNS: &[&str] = &[
    "anybody", "anyone", "anything", "everybody", "everyone", "everything", "he", "her", "hers", "herself", "him", "himself", "his",
    "i", "it", "its", "itself", "me", "mine", "my", "myself", "nobody", "nothing", "our", "ours", "ourselves", "she", "somebody",
    "someone", "something", "their", "theirs", "them", "themselves", "there", "they", "us", "we", "what", "which", "who", "whom",
    "whose", "you", "your", "yours", "yourself", "yourselves",
];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "amongst", "around", "as", "at", "before", "behind",
    "below", "beneath", "beside", "besides", "between", "beyond", "by", "despite", "down", "during", "except", "for", "from", "in",
    "inside", "into", "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "per", "regarding", "through",
    "throughout", "to", "toward", "towards", "under", "underneath", "unlike", "up", "upon", "via", "with", "within", "without",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "but", "nor", "or", "plus"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "although", "because", "if", "once", "since", "than", "that", "though", "unless", "until", "whereas", "whether", "while",
];

const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "can", "could", "is", "may", "might", "must", "ought", "shall", "should", "was", "were",
    "will", "would", "'re", "'m", "'ll", "'ve", "'d", "ca", "wo",
];

const PARTICLES: &[&str] = &["not", "n't", "'s"];

const NUMERALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve", "twenty", "thirty",
    "forty", "fifty", "hundred", "thousand", "million", "billion",
];

const ADVERBS: &[&str] = &[
    "again", "almost", "already", "also", "always", "away", "back", "else", "even", "ever", "further", "furthermore", "hence",
    "here", "however", "indeed", "instead", "just", "least", "less", "maybe", "meanwhile", "moreover", "more", "most", "much",
    "nevertheless", "never", "nonetheless", "now", "often", "only", "otherwise", "perhaps", "quite", "rather", "so", "sometimes",
    "somewhat", "soon", "still", "then", "therefore", "thus", "together", "too", "very", "well", "yet",
];

const ADJECTIVES: &[&str] = &[
    "able", "best", "better", "big", "broad", "clear", "complex", "current", "different", "early", "easy", "few", "first", "free",
    "full", "good", "great", "hard", "high", "important", "key", "large", "last", "late", "likely", "little", "long", "low", "main",
    "major", "many", "minor", "new", "next", "novel", "old", "open", "other", "own", "possible", "probable", "real", "recent",
    "same", "second", "several", "short", "simple", "small", "strong", "third", "true", "unlikely", "weak", "whole", "wide", "worse",
    "worst", "young",
];

const VERBS: &[&str] = &[
    "appear", "appears", "assume", "assumes", "become", "becomes", "did", "do", "does", "doing", "done", "find", "finds", "get",
    "gets", "getting", "give", "gives", "had", "has", "have", "having", "indicate", "indicates", "know", "knows", "make", "makes",
    "propose", "proposes", "provide", "provides", "remain", "remains", "seem", "seems", "show", "shows", "suggest", "suggests",
    "take", "takes", "tend", "tends", "use", "uses",
];

const INTERJECTIONS: &[&str] = &["oh", "yes", "hello"];

/// Past participles that do not end in `-ed`, plus `-eed` words that are participles.
const IRREGULAR_PARTICIPLES: &[&str] = &[
    "agreed", "begun", "bent", "bitten", "born", "borne", "bought", "bound", "broadcast", "broken", "brought", "built", "burnt",
    "cast", "caught", "chosen", "cost", "cut", "dealt", "decreed", "done", "drawn", "driven", "dug", "eaten", "fallen", "fed", "felt",
    "fled", "forbidden", "forecast", "forgotten", "found", "freed", "frozen", "given", "gotten", "ground", "grown", "guaranteed",
    "held", "hidden", "hit", "hung", "kept", "known", "laid", "learnt", "led", "left", "lent", "let", "lost", "made", "meant", "met",
    "mistaken", "overseen", "overtaken", "paid", "proven", "put", "quit", "read", "ridden", "risen", "run", "said", "seen", "sent",
    "set", "shaken", "shed", "shot", "shown", "shrunk", "shut", "sold", "sought", "spent", "split", "spoken", "spread", "spun",
    "stolen", "struck", "stuck", "sunk", "sworn", "taken", "taught", "thought", "thrown", "told", "torn", "undergone", "understood",
    "undertaken", "upset", "withdrawn", "won", "worn", "written",
];

/// Word classes and irregular participles used by the lexicon tagger.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, PartOfSpeech>,
    participles: HashSet<String>,
}

/// On-disk lexicon extension.
///
/// ```toml
/// participles = ["outgrown"]
///
/// [words]
/// assay = "NOUN"
/// via = "ADP"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    words: BTreeMap<String, PartOfSpeech>,

    #[serde(default)]
    participles: Vec<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    #[must_use]
    pub fn builtin() -> Self {
        let classes: &[(&[&str], PartOfSpeech)] = &[
            (ADPOSITIONS, PartOfSpeech::Adposition),
            (ADJECTIVES, PartOfSpeech::Adjective),
            (ADVERBS, PartOfSpeech::Adverb),
            (VERBS, PartOfSpeech::Verb),
            (NUMERALS, PartOfSpeech::Numeral),
            (INTERJECTIONS, PartOfSpeech::Interjection),
            (COORDINATING_CONJUNCTIONS, PartOfSpeech::CoordinatingConjunction),
            (SUBORDINATING_CONJUNCTIONS, PartOfSpeech::SubordinatingConjunction),
            (PRONOUNS, PartOfSpeech::Pronoun),
            (DETERMINERS, PartOfSpeech::Determiner),
            (AUXILIARIES, PartOfSpeech::Auxiliary),
            (PARTICLES, PartOfSpeech::Particle),
        ];

        let mut words = HashMap::new();
        for (list, pos) in classes {
            for word in *list {
                let _ = words.insert((*word).to_string(), *pos);
            }
        }

        Self {
            words,
            participles: IRREGULAR_PARTICIPLES.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    /// The built-in lexicon extended with the entries of a TOML lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading lexicon file '{path}'"))?;
        let file: LexiconFile = toml::from_str(&text).into_app_err_with(|| format!("parsing lexicon file '{path}'"))?;

        let mut lexicon = Self::builtin();
        lexicon
            .merge(file)
            .map_err(|e| e.enrich_with(|| format!("loading lexicon file '{path}'")))?;

        log::info!(target: LOG_TARGET, "Loaded lexicon '{path}' ({} words, {} participles)", lexicon.words.len(), lexicon.participles.len());
        Ok(lexicon)
    }

    /// Add or override entries from TOML lexicon text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid lexicon or contains empty words.
    pub fn merge_toml(&mut self, text: &str) -> Result<()> {
        let file: LexiconFile = toml::from_str(text).into_app_err("parsing lexicon")?;
        self.merge(file)
    }

    fn merge(&mut self, file: LexiconFile) -> Result<()> {
        for (word, pos) in file.words {
            let word = normalize(word.trim());
            if word.is_empty() {
                bail!("lexicon contains an empty word");
            }
            log::trace!(target: LOG_TARGET, "Lexicon entry '{word}' tagged {pos}");
            let _ = self.words.insert(word, pos);
        }

        for participle in file.participles {
            let participle = normalize(participle.trim());
            if participle.is_empty() {
                bail!("lexicon contains an empty participle");
            }
            let _ = self.participles.insert(participle);
        }

        Ok(())
    }

    /// Tag of a normalized (lowercase) word, if the lexicon knows it.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<PartOfSpeech> {
        self.words.get(word).copied()
    }

    #[must_use]
    pub fn is_irregular_participle(&self, word: &str) -> bool {
        self.participles.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercase a word and fold typographic apostrophes.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}
