use core::fmt::{Display, Formatter};

/// The value of one metric for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(u64),

    /// A score already rounded to `places` decimal places
    Score { value: f64, places: u32 },
}

impl MetricValue {
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counts are far below 2^52")]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(count) => count as f64,
            Self::Score { value, .. } => value,
        }
    }
}

impl Display for MetricValue {
    /// Counts are written as integers and scores with exactly their precision (`3.00`).
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Score { value, places } => write!(f, "{value:.prec$}", prec = places as usize),
        }
    }
}
