//! CSV report loading.

use super::read_text;
use crate::prelude::*;
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A header-delimited CSV table held in memory.
///
/// The first line names the columns. Data rows may carry more or fewer
/// fields than the header; a short row only matters to a column it does not
/// reach.
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl CsvTable {
    /// Loads a comma-delimited UTF-8 file. A leading byte-order mark is ignored.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        let mut table = Self::parse(&text).map_err(|e| AuditError::csv(path, e))?;
        table.path = path.to_path_buf();
        debug!(
            columns = table.headers.len(),
            rows = table.rows.len(),
            "Loaded CSV"
        );
        Ok(table)
    }

    /// Parses CSV text whose first line is the header row.
    pub fn parse(text: &str) -> std::result::Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(b',')
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            path: PathBuf::new(),
            headers,
            rows,
        })
    }

    /// File the table was loaded from; empty for parsed text.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Position of `column` in the header, if present.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw values of the column at `index`, one per data row.
    ///
    /// Yields `None` for a row too short to have that field.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(move |row| row.get(index))
    }
}
