use super::common::{ColorMode, CommonArgs};
use super::config::Config;
use super::{Host, ProgressReporter};
use crate::Result;
use crate::table::{AugmentOptions, Table, augment};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::bail;
use std::io::{IsTerminal, Write, stderr};

const LOG_TARGET: &str = "  abstract";

#[derive(Args, Debug, Clone)]
pub struct AugmentArgs {
    /// CSV file with one text per row
    #[arg(value_name = "INPUT", required_unless_present_any = ["default_config", "validate_config"])]
    pub input: Option<Utf8PathBuf>,

    /// Where to write the CSV file with the metric columns appended
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["default_config", "validate_config"])]
    pub output: Option<Utf8PathBuf>,

    /// Column holding the text to analyse [default: from configuration]
    #[arg(long, value_name = "NAME")]
    pub text_column: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Don't show a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Read the input table, append the metric columns and write the output table.
///
/// # Errors
///
/// Returns an error if the configuration or lexicon is invalid, the input cannot be read, a required column is
/// missing, or the output cannot be written. Nothing is written when an error occurs.
pub fn process_table<H: Host>(host: &mut H, args: &AugmentArgs, common: &CommonArgs) -> Result<()> {
    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        bail!("both an input and an output path are required");
    };

    let config = Config::load(Utf8Path::new("."), common.config.as_ref())?;
    let vocabulary = config.vocabulary();
    let decimal_places = config.decimal_places()?;
    let tagger = config.tagger()?;
    let text_column = args.text_column.as_deref().unwrap_or(&config.text_column);

    let table = Table::read(input)?;

    let options = AugmentOptions {
        text_column,
        required_columns: &config.required_columns,
        vocabulary: &vocabulary,
        decimal_places: &decimal_places,
    };

    let visible = !args.no_progress && stderr().is_terminal();
    let reporter = ProgressReporter::new(table.len() as u64, visible, args.color.use_colors());
    let result = augment(&table, &tagger, &options, |rows| reporter.set_position(rows));
    reporter.done();

    let augmented = result?;
    augmented.write(output)?;

    log::info!(target: LOG_TARGET, "Processed {} rows", augmented.len());
    let _ = writeln!(host.output(), "Metrics added and saved to: {output}");
    Ok(())
}
