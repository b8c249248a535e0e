#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for abstract-metrics
//!
//! This library computes readability and linguistic metrics for free text and
//! appends them, one column per metric, to CSV tables of article abstracts.
//!
//! # Module Organization
//!
//! - [`text`]: Sentence splitting, tokenization and syllable counting
//! - [`readability`]: Flesch, Flesch-Kincaid, Gunning Fog and SMOG formulas
//! - [`tagging`]: Part-of-speech and passive-voice tagging
//! - [`metrics`]: The per-text metric set
//! - [`table`]: CSV loading, saving and augmentation
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod metrics;
pub mod readability;
pub mod table;
pub mod tagging;
pub mod text;

pub use crate::commands::{Host, run};
