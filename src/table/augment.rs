use super::Table;
use crate::Result;
use crate::metrics::{DecimalPlaces, MetricKind, Vocabulary, compute_metrics};
use crate::tagging::Tagger;
use core::str::FromStr;
use csv::StringRecord;
use ohno::bail;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "   augment";

/// Settings for [`augment`].
#[derive(Debug, Clone, Copy)]
pub struct AugmentOptions<'a> {
    /// Column holding the text to analyse
    pub text_column: &'a str,

    /// Columns that must be present before any row is processed
    pub required_columns: &'a [String],

    pub vocabulary: &'a Vocabulary,
    pub decimal_places: &'a DecimalPlaces,
}

/// Append the metric columns to every row of `table`.
///
/// The input columns are kept in order, followed by one column per
/// [`MetricKind`]. Input columns that already carry a metric name are
/// recomputed rather than duplicated, so augmenting an augmented table
/// reproduces it. Empty or missing text yields zero metrics.
///
/// `on_row` is called with the number of rows completed so far.
///
/// # Errors
///
/// Returns an error if a required column or the text column is missing, or if a row has more fields than the header.
pub fn augment<T: Tagger + ?Sized>(
    table: &Table,
    tagger: &T,
    options: &AugmentOptions<'_>,
    mut on_row: impl FnMut(usize),
) -> Result<Table> {
    for name in options.required_columns {
        if table.column_index(name).is_none() {
            bail!("input is missing required column '{name}'");
        }
    }

    let Some(text_index) = table.column_index(options.text_column) else {
        bail!("input is missing text column '{}'", options.text_column);
    };

    let mut kept = Vec::new();
    for (index, header) in table.headers().iter().enumerate() {
        if MetricKind::from_str(header).is_ok() {
            log::warn!(target: LOG_TARGET, "Replacing existing metric column '{header}'");
        } else {
            kept.push(index);
        }
    }

    let mut headers: StringRecord = kept.iter().map(|&index| &table.headers()[index]).collect();
    for kind in MetricKind::iter() {
        headers.push_field(kind.name());
    }

    let width = table.headers().len();
    log::info!(target: LOG_TARGET, "Computing metrics for {} rows from column '{}'", table.len(), options.text_column);

    let mut rows = Vec::with_capacity(table.len());
    for (index, row) in table.rows().iter().enumerate() {
        if row.len() > width {
            bail!("row {} has {} fields but the header has {width}", index + 1, row.len());
        }

        let text = row.get(text_index).unwrap_or_default();
        let metrics = compute_metrics(text, tagger, options.vocabulary, options.decimal_places);
        log::trace!(target: LOG_TARGET, "Row {}: {metrics:?}", index + 1);

        let mut record: StringRecord = kept.iter().map(|&column| row.get(column).unwrap_or_default()).collect();
        for field in metrics.fields() {
            record.push_field(&field);
        }

        rows.push(record);
        on_row(index + 1);
    }

    Ok(Table::new(headers, rows))
}
