//! Command-line interface and orchestration for abstract-metrics
//!
//! This module implements the CLI and coordinates the other modules to turn an
//! input CSV into an augmented one. It handles argument parsing, configuration
//! management, logging and progress reporting.
//!
//! # Implementation Model
//!
//! The `run` function parses command-line arguments using clap and routes to
//! one of three handlers:
//!
//! - **augment** (the default): load the configuration and tagger, read the
//!   input table, append the metric columns and write the output table
//! - **init** (`--default-config`): write the embedded default configuration
//! - **validate** (`--validate-config`): load the configuration and its lexicon
//!   and report any problem
//!
//! All output goes through a [`Host`] so the commands can be exercised in
//! tests without touching the real stdout, stderr or process exit.
//!
//! Configuration is a TOML file (`abstract-metrics.toml` by default) holding the
//! text column, required columns, hedge words, nominal suffixes, decimal
//! places and an optional lexicon file.

mod augment;
mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod run;
mod validate;

pub use augment::{AugmentArgs, process_table};
pub use common::{ColorMode, CommonArgs, LogLevel};
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
