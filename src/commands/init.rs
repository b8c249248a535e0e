use super::Host;
use super::config::Config;
use crate::Result;
use camino::Utf8PathBuf;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Output configuration file path
    pub output: Utf8PathBuf,
}

/// Write the default configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    Config::save_default(&args.output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {}", args.output);
    Ok(())
}
