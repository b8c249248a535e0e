//! Per-text metrics.
//!
//! [`compute_metrics`] turns one text into a [`MetricSet`]: the fourteen
//! values, in [`MetricKind`] order, that are appended to every row of the
//! table. The computation is a pure function of the text given a tagger, a
//! [`Vocabulary`] and the [`DecimalPlaces`] map.
//!
//! # Implementation Model
//!
//! Counts (words, sentences, syllables, complex words, hedges) are stored as
//! integers; every other metric is rounded once, at the end, to the precision
//! configured for it and keeps that precision when rendered. Rates use a zero
//! denominator guard, so empty text produces zeros rather than errors.

mod compute;
mod decimal_places;
mod metric_kind;
mod metric_set;
mod metric_value;
mod vocabulary;

pub use compute::compute_metrics;
pub use decimal_places::{DecimalPlaces, MAX_DECIMAL_PLACES, round_to};
pub use metric_kind::MetricKind;
pub use metric_set::MetricSet;
pub use metric_value::MetricValue;
pub use vocabulary::{HEDGE_WORDS, NOMINAL_SUFFIXES, Vocabulary};
