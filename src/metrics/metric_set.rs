use super::{MetricKind, MetricValue};
use strum::IntoEnumIterator;

/// The values of every [`MetricKind`] for one text, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSet {
    values: Vec<MetricValue>,
}

impl MetricSet {
    /// Build a set by evaluating `f` once per metric, in column order.
    pub fn from_fn(f: impl FnMut(MetricKind) -> MetricValue) -> Self {
        Self {
            values: MetricKind::iter().map(f).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, kind: MetricKind) -> MetricValue {
        self.values[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, MetricValue)> + '_ {
        MetricKind::iter().zip(self.values.iter().copied())
    }

    /// Values rendered as CSV fields, in column order.
    pub fn fields(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(ToString::to_string)
    }
}
