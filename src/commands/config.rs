use crate::Result;
use crate::metrics::{DecimalPlaces, HEDGE_WORDS, MetricKind, NOMINAL_SUFFIXES, Vocabulary};
use crate::tagging::LexiconTagger;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use strum::IntoEnumIterator;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "abstract-metrics.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Column holding the text to analyse
    #[serde(default = "default_text_column")]
    pub text_column: String,

    /// Columns that must exist in the input table
    #[serde(default = "default_required_columns")]
    pub required_columns: Vec<String>,

    /// Words counted as hedging cues
    #[serde(default = "default_hedge_words")]
    pub hedge_words: Vec<String>,

    /// Word endings counted as nominalisations
    #[serde(default = "default_nominal_suffixes")]
    pub nominal_suffixes: Vec<String>,

    /// Decimal places per metric column name
    #[serde(default = "default_decimal_places")]
    pub decimal_places: BTreeMap<String, u32>,

    /// Optional lexicon file extending the built-in tagger lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<Utf8PathBuf>,
}

/// Columns A to J of the abstracts export.
const REQUIRED_COLUMNS: &[&str] = &[
    "Year",
    "Source Title",
    "Page Count",
    "Cited by",
    "DOI",
    "Abstract",
    "Publisher",
    "Document Status",
    "Document Type",
    "Open Access",
];

fn default_text_column() -> String {
    "Abstract".to_string()
}

fn default_required_columns() -> Vec<String> {
    REQUIRED_COLUMNS.iter().map(ToString::to_string).collect()
}

fn default_hedge_words() -> Vec<String> {
    HEDGE_WORDS.iter().map(ToString::to_string).collect()
}

fn default_nominal_suffixes() -> Vec<String> {
    NOMINAL_SUFFIXES.iter().map(ToString::to_string).collect()
}

fn default_decimal_places() -> BTreeMap<String, u32> {
    MetricKind::iter()
        .filter_map(|kind| kind.default_decimal_places().map(|places| (kind.name().to_string(), places)))
        .collect()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `abstract-metrics.toml` in `base_dir` is used if it exists.
    /// A relative `lexicon` path is resolved against the directory of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let mut config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config
            .validate()
            .map_err(|e| e.enrich_with(|| format!("validating configuration file '{final_path}'")))?;

        if let Some(lexicon) = &config.lexicon
            && lexicon.is_relative()
            && let Some(dir) = final_path.parent()
        {
            config.lexicon = Some(dir.join(lexicon));
        }

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a column name, word or suffix is empty, or if the decimal places are invalid
    pub fn validate(&self) -> Result<()> {
        if self.text_column.trim().is_empty() {
            return Err(app_err!("text_column must not be empty"));
        }

        if self.required_columns.iter().any(|column| column.trim().is_empty()) {
            return Err(app_err!("required_columns must not contain empty names"));
        }

        if self.hedge_words.iter().any(|word| word.trim().is_empty()) {
            return Err(app_err!("hedge_words must not contain empty words"));
        }

        if self.nominal_suffixes.iter().any(|suffix| suffix.trim().is_empty()) {
            return Err(app_err!("nominal_suffixes must not contain empty suffixes"));
        }

        let _ = self.decimal_places()?;
        Ok(())
    }

    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(&self.hedge_words, &self.nominal_suffixes)
    }

    /// # Errors
    ///
    /// Returns an error if a metric name is unknown, names a count, or has too many places
    pub fn decimal_places(&self) -> Result<DecimalPlaces> {
        DecimalPlaces::from_names(self.decimal_places.iter().map(|(name, places)| (name.as_str(), *places)))
    }

    /// Load the tagger, including the configured lexicon file if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon file is missing or malformed
    pub fn tagger(&self) -> Result<LexiconTagger> {
        LexiconTagger::load(self.lexicon.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
