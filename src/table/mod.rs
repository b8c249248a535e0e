//! Table loading, saving and augmentation.
//!
//! A [`Table`] is the whole CSV held in memory. [`augment`] walks it row by
//! row, computes the metrics of each row's text column and returns a new
//! table with the metric columns appended after the input columns.

mod augment;
mod records;

pub use augment::{AugmentOptions, augment};
pub use records::Table;
