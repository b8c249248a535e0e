use super::Host;
use super::config::{Config, DEFAULT_CONFIG_FILE};
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `abstract-metrics.toml`)
    pub config: Option<Utf8PathBuf>,
}

/// Validates a configuration file by loading it and the lexicon it refers to
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded, parsed or validated, or if its lexicon cannot be loaded
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<()> {
    let config = Config::load(base_dir, config_path)?;
    let _ = config.tagger()?;
    Ok(())
}

/// Check the configuration and report the outcome on the host.
///
/// # Errors
///
/// Returns the validation error after reporting it and requesting exit code 1
pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match validate_config_inner(&base_dir, config_path) {
        Ok(()) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            let default_path = base_dir.join(DEFAULT_CONFIG_FILE);
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else if default_path.exists() {
                let _ = writeln!(host.output(), "Config file: {default_path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
