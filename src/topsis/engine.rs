//! TOPSIS computation.
//!
//! [`TopsisEngine`] runs the full pipeline:
//! vector normalization → weighting → ideal points → distances →
//! closeness → rounding → ranking.

use super::config::TopsisConfig;
use super::ranking::assign_ranks;
use super::types::{RankedAlternative, RankedResult, TopsisAnalysis};
use crate::problem::DecisionProblem;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes TOPSIS on validated decision problems.
///
/// Stateless: every call is a pure function of its arguments, so
/// independent problems may be ranked concurrently without coordination.
///
/// # Usage
///
/// ```
/// use u_topsis::problem::{DecisionProblem, Impact};
/// use u_topsis::topsis::{TopsisConfig, TopsisEngine};
///
/// let problem = DecisionProblem::from_rows(
///     vec![
///         ("A", vec![250.0, 16.0, 12.0, 5.0]),
///         ("B", vec![200.0, 16.0, 8.0, 3.0]),
///         ("C", vec![300.0, 32.0, 16.0, 4.0]),
///         ("D", vec![275.0, 32.0, 8.0, 4.0]),
///     ],
///     vec![0.25; 4],
///     vec![Impact::Benefit, Impact::Benefit, Impact::Cost, Impact::Benefit],
/// )
/// .unwrap();
///
/// let result = TopsisEngine::rank(&problem, &TopsisConfig::default());
/// assert_eq!(result.best().unwrap().label, "D");
/// ```
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks every alternative of `problem`.
    ///
    /// `config` should pass [`TopsisConfig::validate`]; precision is capped
    /// at [`MAX_PRECISION`](super::config::MAX_PRECISION) regardless.
    pub fn rank(problem: &DecisionProblem, config: &TopsisConfig) -> RankedResult {
        debug_assert!(config.validate().is_ok(), "invalid TopsisConfig");

        let analysis = Self::analyze(problem);
        let scores: Vec<f64> = analysis
            .closeness
            .iter()
            .map(|c| config.round(c.unwrap_or(config.degenerate_score)))
            .collect();
        let ranks = assign_ranks(&scores, config.tie_policy);

        let alternatives = problem
            .labels()
            .iter()
            .zip(scores)
            .zip(ranks)
            .map(|((label, score), rank)| RankedAlternative {
                label: label.clone(),
                score,
                rank,
            })
            .collect();

        debug!(
            alternatives = problem.alternative_count(),
            criteria = problem.criterion_count(),
            "topsis ranking complete"
        );
        RankedResult { alternatives }
    }

    /// Ranks several independent problems with the same configuration.
    ///
    /// With the `parallel` feature the problems are distributed over the
    /// rayon thread pool; output order always matches input order.
    pub fn rank_many(problems: &[DecisionProblem], config: &TopsisConfig) -> Vec<RankedResult> {
        #[cfg(feature = "parallel")]
        let results: Vec<RankedResult> = problems
            .par_iter()
            .map(|p| Self::rank(p, config))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<RankedResult> = problems
            .iter()
            .map(|p| Self::rank(p, config))
            .collect();
        results
    }

    /// Computes every intermediate quantity up to the unrounded closeness.
    pub fn analyze(problem: &DecisionProblem) -> TopsisAnalysis {
        let n = problem.criterion_count();

        // 1. Vector normalization, one Euclidean norm per column. `hypot`
        // never squares a value, so extreme magnitudes neither overflow nor
        // flush to zero.
        let zero_columns: Vec<bool> = (0..n)
            .map(|j| problem.column(j).all(|v| v == 0.0))
            .collect();
        let column_norms: Vec<f64> = (0..n)
            .map(|j| problem.column(j).fold(0.0, f64::hypot))
            .collect();
        for (j, &zero) in zero_columns.iter().enumerate() {
            if zero {
                warn!(
                    criterion = %problem.criteria()[j],
                    "criterion column is all zeros; it will not affect the ranking"
                );
            }
        }

        // 2. Weighting
        let weighted: Vec<Vec<f64>> = problem
            .matrix()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_norms)
                    .zip(problem.weights())
                    .zip(&zero_columns)
                    .map(|(((&v, &norm), &w), &zero)| if zero { 0.0 } else { v / norm * w })
                    .collect()
            })
            .collect();

        // 3. Ideal points
        let (ideal_best, ideal_worst): (Vec<f64>, Vec<f64>) = problem
            .impacts()
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (min, max) = weighted.iter().map(|row| row[j]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                );
                impact.ideal_pair(min, max)
            })
            .unzip();

        // 4. Distances
        let distance_best: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean(row, &ideal_best))
            .collect();
        let distance_worst: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean(row, &ideal_worst))
            .collect();

        // 5. Closeness; 0 / 0 is left for the caller to resolve
        let closeness: Vec<Option<f64>> = distance_best
            .iter()
            .zip(&distance_worst)
            .enumerate()
            .map(|(i, (&db, &dw))| {
                let total = db + dw;
                if total == 0.0 {
                    debug!(
                        alternative = %problem.labels()[i],
                        "alternative coincides with both ideal points"
                    );
                    None
                } else {
                    let c = dw / total;
                    debug_assert!(c.is_finite(), "non-finite closeness for row {i}");
                    Some(c)
                }
            })
            .collect();

        TopsisAnalysis {
            column_norms,
            weighted,
            ideal_best,
            ideal_worst,
            distance_best,
            distance_worst,
            closeness,
        }
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |acc, (x, y)| acc.hypot(x - y))
}
