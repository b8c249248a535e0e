//! Command dispatch logic for abstract-metrics

use super::augment::{AugmentArgs, process_table};
use super::common::{CommonArgs, init_logging};
use super::init::{InitArgs, init_config};
use super::validate::{ValidateArgs, validate_config};
use crate::{Host, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "abstract-metrics", author, version, long_about = None)]
#[command(about = "Append readability and linguistic metrics to a CSV of abstracts")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    augment: AugmentArgs,

    #[command(flatten)]
    common: CommonArgs,

    /// Write the default configuration file to PATH and exit
    #[arg(long, value_name = "PATH", help_heading = "Configuration", conflicts_with = "validate_config")]
    default_config: Option<Utf8PathBuf>,

    /// Check the configuration file and its lexicon, then exit
    #[arg(long, help_heading = "Configuration")]
    validate_config: bool,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// operation. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed operation fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.common.log_level);

    if let Some(output) = cli.default_config {
        return init_config(host, &InitArgs { output });
    }

    if cli.validate_config {
        return validate_config(host, &ValidateArgs { config: cli.common.config });
    }

    process_table(host, &cli.augment, &cli.common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["abstract-metrics", "in.csv", "out.csv"]).unwrap();
        assert_eq!(cli.augment.input, Some(Utf8PathBuf::from("in.csv")));
        assert_eq!(cli.augment.output, Some(Utf8PathBuf::from("out.csv")));
        assert!(!cli.validate_config);
    }

    #[test]
    fn test_paths_required_for_processing() {
        assert!(Cli::try_parse_from(["abstract-metrics"]).is_err());
        assert!(Cli::try_parse_from(["abstract-metrics", "in.csv"]).is_err());
    }

    #[test]
    fn test_paths_optional_for_configuration_modes() {
        let cli = Cli::try_parse_from(["abstract-metrics", "--default-config", "cfg.toml"]).unwrap();
        assert_eq!(cli.default_config, Some(Utf8PathBuf::from("cfg.toml")));

        let cli = Cli::try_parse_from(["abstract-metrics", "--validate-config", "-c", "cfg.toml"]).unwrap();
        assert!(cli.validate_config);
        assert_eq!(cli.common.config, Some(Utf8PathBuf::from("cfg.toml")));
    }

    #[test]
    fn test_configuration_modes_conflict() {
        assert!(Cli::try_parse_from(["abstract-metrics", "--default-config", "cfg.toml", "--validate-config"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "abstract-metrics",
            "in.csv",
            "out.csv",
            "--text-column",
            "Summary",
            "--log-level",
            "debug",
            "--color",
            "never",
            "--no-progress",
        ])
        .unwrap();
        assert_eq!(cli.augment.text_column.as_deref(), Some("Summary"));
        assert_eq!(cli.common.log_level, crate::commands::LogLevel::Debug);
        assert_eq!(cli.augment.color, crate::commands::ColorMode::Never);
        assert!(cli.augment.no_progress);
    }
}
