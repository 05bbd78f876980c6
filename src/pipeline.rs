//! End-to-end file pipeline: read → validate → rank → write.

use crate::error::{McdaError, Result};
use crate::io::write_result;
use crate::topsis::{RankedResult, TopsisConfig, TopsisEngine};
use crate::validate::validate_file;
use std::path::Path;
use tracing::info;

/// Ranks the alternatives in the CSV at `input` and writes the annotated
/// table to `output`.
///
/// Nothing is written unless every step succeeds.
pub fn rank_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    weights: &str,
    impacts: &str,
    output: Q,
    config: &TopsisConfig,
) -> Result<RankedResult> {
    config.validate().map_err(McdaError::InvalidConfig)?;

    let (table, problem) = validate_file(input, weights, impacts)?;
    let result = TopsisEngine::rank(&problem, config);
    write_result(output, &table, &result, config.precision)?;

    if let Some(best) = result.best() {
        info!(best = %best.label, score = best.score, "ranking written");
    }
    Ok(result)
}
