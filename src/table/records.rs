use crate::Result;
use camino::Utf8Path;
use csv::StringRecord;
use ohno::{EnrichableExt, IntoAppError};
use std::fs::File;
use std::io::{Read, Write};

const LOG_TARGET: &str = "     table";

/// An in-memory CSV table: one header record and its data rows.
///
/// Rows may be shorter or longer than the header; callers decide how to treat them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    #[must_use]
    pub const fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    /// Load a table from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid CSV.
    pub fn read(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).into_app_err_with(|| format!("opening input file '{path}'"))?;
        let table = Self::from_reader(file).map_err(|e| e.enrich_with(|| format!("reading input file '{path}'")))?;

        log::info!(target: LOG_TARGET, "Read {} rows and {} columns from '{path}'", table.len(), table.headers.len());
        Ok(table)
    }

    /// # Errors
    ///
    /// Returns an error if the data is not valid CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers().into_app_err("reading CSV header")?.clone();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.into_app_err_with(|| format!("reading CSV row {}", index + 1))?;
            rows.push(record);
        }

        Ok(Self { headers, rows })
    }

    /// Save the table as a CSV file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write(&self, path: &Utf8Path) -> Result<()> {
        let file = File::create(path).into_app_err_with(|| format!("creating output file '{path}'"))?;
        self.to_writer(file).map_err(|e| e.enrich_with(|| format!("writing output file '{path}'")))?;

        log::info!(target: LOG_TARGET, "Wrote {} rows and {} columns to '{path}'", self.len(), self.headers.len());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        writer.write_record(&self.headers).into_app_err("writing CSV header")?;
        for (index, row) in self.rows.iter().enumerate() {
            writer.write_record(row).into_app_err_with(|| format!("writing CSV row {}", index + 1))?;
        }

        writer.flush().into_app_err("flushing CSV output")?;
        Ok(())
    }

    #[must_use]
    pub const fn headers(&self) -> &StringRecord {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with the given header.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}
