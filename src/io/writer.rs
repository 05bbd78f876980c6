//! Result table serialization.

use super::table::Table;
use crate::error::{McdaError, Result};
use crate::topsis::RankedResult;
use std::path::Path;
use tracing::debug;

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Writes the input table with `Topsis Score` and `Rank` appended to
/// `path`.
///
/// The CSV is assembled in memory first, so a failure never leaves a
/// partially written file behind.
pub fn write_result<P: AsRef<Path>>(
    path: P,
    table: &Table,
    result: &RankedResult,
    precision: u32,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_result(table, result, precision)?;
    std::fs::write(path, bytes)
        .map_err(|e| McdaError::OutputUnwritable(format!("'{}': {e}", path.display())))?;
    debug!(path = %path.display(), rows = result.len(), "result table written");
    Ok(())
}

/// Serializes the result table to CSV bytes.
pub fn render_result(table: &Table, result: &RankedResult, precision: u32) -> Result<Vec<u8>> {
    if table.row_count() != result.len() {
        return Err(McdaError::OutputUnwritable(format!(
            "{} table rows but {} ranked alternatives",
            table.row_count(),
            result.len()
        )));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    let header = table
        .headers()
        .iter()
        .map(String::as_str)
        .chain([SCORE_COLUMN, RANK_COLUMN]);
    writer.write_record(header).map_err(unwritable)?;

    let digits = precision as usize;
    for (row, ranked) in table.rows().iter().zip(&result.alternatives) {
        let score = format!("{:.digits$}", ranked.score);
        let rank = ranked.rank.to_string();
        let record = row
            .iter()
            .map(String::as_str)
            .chain([score.as_str(), rank.as_str()]);
        writer.write_record(record).map_err(unwritable)?;
    }

    writer
        .into_inner()
        .map_err(|e| McdaError::OutputUnwritable(e.to_string()))
}

fn unwritable(e: csv::Error) -> McdaError {
    McdaError::OutputUnwritable(e.to_string())
}
