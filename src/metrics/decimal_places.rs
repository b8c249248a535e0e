use super::{MetricKind, MetricValue};
use crate::Result;
use core::str::FromStr;
use ohno::bail;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Largest precision that still fits within an `f64`'s significant digits.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Number of decimal places each non-count metric is rounded to.
///
/// Non-count metrics without an entry are rounded to whole numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalPlaces {
    places: BTreeMap<MetricKind, u32>,
}

impl DecimalPlaces {
    /// Build the map from `(column name, places)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown column names, count metrics, or precisions above [`MAX_DECIMAL_PLACES`].
    pub fn from_names<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Result<Self> {
        let mut places = BTreeMap::new();
        for (name, value) in entries {
            let Ok(kind) = MetricKind::from_str(name) else {
                bail!("unknown metric '{name}' in decimal places");
            };

            if kind.is_count() {
                bail!("metric '{name}' is a count and cannot be rounded");
            }

            if value > MAX_DECIMAL_PLACES {
                bail!("metric '{name}' has {value} decimal places, the maximum is {MAX_DECIMAL_PLACES}");
            }

            let _ = places.insert(kind, value);
        }

        Ok(Self { places })
    }

    #[must_use]
    pub fn places(&self, kind: MetricKind) -> u32 {
        self.places.get(&kind).copied().unwrap_or(0)
    }

    /// Round a raw score to the precision configured for `kind`.
    #[must_use]
    pub fn round(&self, kind: MetricKind, value: f64) -> MetricValue {
        let places = self.places(kind);
        MetricValue::Score {
            value: round_to(value, places),
            places,
        }
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self {
            places: MetricKind::iter()
                .filter_map(|kind| kind.default_decimal_places().map(|places| (kind, places)))
                .collect(),
        }
    }
}

/// Round half to even at `places` decimal places.
///
/// Values too large to scale are returned unchanged and negative zero becomes zero.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    #[expect(clippy::cast_possible_wrap, reason = "places never exceeds MAX_DECIMAL_PLACES")]
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round_ties_even() / factor;
    if rounded.abs() < f64::MIN_POSITIVE { 0.0 } else { rounded }
}
