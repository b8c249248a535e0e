//! Append readability and linguistic metrics to a CSV of abstracts.
//!
//! ```bash
//! abstract-metrics papers.csv papers-with-metrics.csv
//! ```
//!
//! Every row gains fourteen columns (word and sentence counts, Flesch, Gunning
//! Fog and SMOG scores, hedging, passive voice, nominalisation and lexical
//! density) computed from its `Abstract` column. Run with `--help` for the
//! available options and `--default-config <PATH>` for a commented
//! configuration file.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use abstract_metrics::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that writes to the real stdout and stderr.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
