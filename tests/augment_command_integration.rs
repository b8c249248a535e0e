//! Integration tests driving the command line end to end.
//!
//! Each test runs [`abstract_metrics::run`] with a capturing host against
//! files in a temporary directory.

use abstract_metrics::Host;
use abstract_metrics::table::Table;
use camino::Utf8PathBuf;
use std::fs;

const FIXTURE: &str = "tests/fixtures/abstracts.csv";

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join(name)
}

/// Write the default configuration into `dir` so tests don't depend on the working directory.
fn default_config(dir: &tempfile::TempDir) -> Utf8PathBuf {
    let path = temp_path(dir, "abstract-metrics.toml");
    let mut host = TestHost::new();
    abstract_metrics::run(&mut host, ["abstract-metrics", "--default-config", path.as_str()]).expect("default config should be written");
    path
}

fn augment(input: &str, output: &str, config: &str, extra: &[&str]) -> (TestHost, abstract_metrics::Result<()>) {
    let mut args = vec!["abstract-metrics", input, output, "--config", config, "--no-progress"];
    args.extend_from_slice(extra);

    let mut host = TestHost::new();
    let result = abstract_metrics::run(&mut host, args);
    (host, result)
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_augment_fixture() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = default_config(&dir);
    let output = temp_path(&dir, "out.csv");

    let (host, result) = augment(FIXTURE, output.as_str(), config.as_str(), &[]);
    result.expect("augmenting the fixture should succeed");
    assert_eq!(host.output_str(), format!("Metrics added and saved to: {output}\n"));

    let text = fs::read_to_string(&output).unwrap();
    let header = text.lines().next().unwrap();
    insta::assert_snapshot!(header, @"Year,Source Title,Page Count,Cited by,DOI,Abstract,Publisher,Document Status,Document Type,Open Access,Word Count,Sentence Count,Average Sentence Length,Flesch Reading Ease,Flesch-Kincaid Grade Level,Syllable Count,Gunning Fog Index,Complex Word Count,SMOG Index,Hedging Frequency,Hedging %,Passive Voice Ratio,Nominalisation Rate,Lexical Density");

    let table = Table::read(&output).unwrap();
    assert_eq!(table.len(), 3);

    let first = &table.rows()[0];
    assert_eq!(&first[5], "One sentence here.");
    assert_eq!(&first[10], "3");
    assert_eq!(&first[11], "1");
    assert_eq!(&first[12], "3.00");

    let empty = &table.rows()[1];
    assert_eq!(&empty[1], "Studies in Text, Style and Structure");
    assert_eq!(empty.iter().skip(10).collect::<Vec<_>>().join(","), "0,0,0.00,0.00,0.00,0,0.00,0,0.00,0,0.00,0.00,0.0000,0.0000");

    let last = &table.rows()[2];
    assert_eq!(&last[11], "3");
    assert_eq!(&last[19], "2");
    assert_eq!(&last[21], "0.33");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_original_columns_unchanged() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = default_config(&dir);
    let output = temp_path(&dir, "out.csv");

    let (_host, result) = augment(FIXTURE, output.as_str(), config.as_str(), &[]);
    result.unwrap();

    let input = Table::read(&Utf8PathBuf::from(FIXTURE)).unwrap();
    let augmented = Table::read(&output).unwrap();
    assert_eq!(input.len(), augmented.len());
    for (before, after) in input.rows().iter().zip(augmented.rows()) {
        let width = input.headers().len();
        assert_eq!(before.iter().collect::<Vec<_>>(), after.iter().take(width).collect::<Vec<_>>());
        assert_eq!(after.len(), width + 14);
    }
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_augmenting_output_again_is_identical() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = default_config(&dir);
    let once = temp_path(&dir, "once.csv");
    let twice = temp_path(&dir, "twice.csv");

    augment(FIXTURE, once.as_str(), config.as_str(), &[]).1.unwrap();
    augment(once.as_str(), twice.as_str(), config.as_str(), &[]).1.unwrap();

    assert_eq!(fs::read_to_string(&once).unwrap(), fs::read_to_string(&twice).unwrap());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_missing_required_column_fails_without_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = default_config(&dir);
    let input = temp_path(&dir, "in.csv");
    let output = temp_path(&dir, "out.csv");
    fs::write(&input, "Year,Abstract\n2020,Some text.\n").unwrap();

    let (host, result) = augment(input.as_str(), output.as_str(), config.as_str(), &[]);
    let error = result.unwrap_err().to_string();
    assert!(error.contains("missing required column 'Source Title'"), "{error}");
    assert!(host.output_str().is_empty());
    assert!(!output.exists());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_custom_text_column_and_configuration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = temp_path(&dir, "custom.toml");
    fs::write(
        &config,
        r#"
text_column = "Summary"
required_columns = ["Summary"]
hedge_words = ["perhaps"]

[decimal_places]
"Hedging %" = 1
"#,
    )
    .unwrap();

    let input = temp_path(&dir, "in.csv");
    let output = temp_path(&dir, "out.csv");
    fs::write(&input, "Id,Summary,Notes\n1,Perhaps it may work.,x\n").unwrap();

    augment(input.as_str(), output.as_str(), config.as_str(), &[]).1.unwrap();
    let table = Table::read(&output).unwrap();
    let row = &table.rows()[0];
    assert_eq!(&row[3], "4");
    assert_eq!(&row[12], "1");
    assert_eq!(&row[13], "25.0");
    assert_eq!(&row[5], "4");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_text_column_flag_overrides_configuration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = temp_path(&dir, "custom.toml");
    fs::write(&config, "required_columns = []\n").unwrap();

    let input = temp_path(&dir, "in.csv");
    let output = temp_path(&dir, "out.csv");
    fs::write(&input, "Body\nTwo words.\n").unwrap();

    augment(input.as_str(), output.as_str(), config.as_str(), &["--text-column", "Body"]).1.unwrap();
    let table = Table::read(&output).unwrap();
    assert_eq!(&table.rows()[0][1], "2");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_missing_lexicon_fails_without_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = temp_path(&dir, "custom.toml");
    fs::write(&config, "lexicon = \"no-such-lexicon.toml\"\n").unwrap();
    let output = temp_path(&dir, "out.csv");

    let (host, result) = augment(FIXTURE, output.as_str(), config.as_str(), &[]);
    assert!(result.is_err());
    assert!(host.output_str().is_empty());
    assert!(!output.exists());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_validate_reports_problems() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = temp_path(&dir, "bad.toml");
    fs::write(&config, "[decimal_places]\n\"Readability\" = 2\n").unwrap();

    let mut host = TestHost::new();
    let result = abstract_metrics::run(&mut host, ["abstract-metrics", "--validate-config", "--config", config.as_str()]);
    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("Configuration validation failed"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_default_config_then_validate() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = temp_path(&dir, "generated.toml");

    let mut host = TestHost::new();
    abstract_metrics::run(&mut host, ["abstract-metrics", "--default-config", config.as_str()]).unwrap();
    assert_eq!(host.output_str(), format!("Generated default configuration file: {config}\n"));

    let mut host = TestHost::new();
    abstract_metrics::run(&mut host, ["abstract-metrics", "--validate-config", "-c", config.as_str()]).unwrap();
    assert_eq!(host.output_str(), format!("Configuration file is valid\nConfig file: {config}\n"));
    assert_eq!(host.exit_code, None);
}
