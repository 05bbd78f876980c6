//! Raw string table as read from a CSV source.

use crate::error::{McdaError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A rectangular table of raw cells with a header row.
///
/// Header and data cells are kept verbatim so that the result writer can
/// reproduce the original input columns unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, rejecting rows whose width differs from the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some(i) = rows.iter().position(|r| r.len() != headers.len()) {
            return Err(McdaError::InputUnreadable(format!(
                "row {} has {} fields, header has {}",
                i + 1,
                rows[i].len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Reads a CSV file with a header row.
///
/// Missing files, malformed CSV and ragged rows all map to
/// [`McdaError::InputUnreadable`].
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading input table");
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            McdaError::InputUnreadable(format!(
                "'{}' not found. Please check the file path.",
                path.display()
            ))
        } else {
            McdaError::InputUnreadable(format!("'{}': {e}", path.display()))
        }
    })?;
    read_table_from_reader(file)
}

/// Reads a CSV table from any byte source.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(McdaError::InputUnreadable("missing header row".into()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "input table parsed"
    );
    Table::new(headers, rows)
}

fn unreadable(e: csv::Error) -> McdaError {
    McdaError::InputUnreadable(e.to_string())
}
