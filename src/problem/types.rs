//! The validated decision problem consumed by the engine.

use super::impact::Impact;
use crate::error::{McdaError, Result};

/// A well-formed decision problem: M labelled alternatives scored on N
/// weighted, directed criteria.
///
/// # Invariants
///
/// - `N >= 2` and `M >= 1`
/// - every matrix row has exactly N finite values
/// - `weights.len() == impacts.len() == N`, every weight positive and finite
/// - `labels.len() == M`, `criteria.len() == N`
///
/// The only ways to obtain one are [`DecisionProblem::new`],
/// [`DecisionProblem::from_rows`] and [`crate::validate::validate`], all
/// of which enforce the invariants. There is no mutable access afterwards.
///
/// # Examples
///
/// ```
/// use u_topsis::problem::{DecisionProblem, Impact};
///
/// let problem = DecisionProblem::from_rows(
///     vec![("A", vec![250.0, 16.0]), ("B", vec![200.0, 32.0])],
///     vec![1.0, 1.0],
///     vec![Impact::Benefit, Impact::Cost],
/// )
/// .unwrap();
/// assert_eq!(problem.alternative_count(), 2);
/// assert_eq!(problem.criterion_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionProblem {
    labels: Vec<String>,
    criteria: Vec<String>,
    matrix: Vec<Vec<f64>>,
    weights: Vec<f64>,
    impacts: Vec<Impact>,
}

impl DecisionProblem {
    /// Builds a problem, checking every invariant.
    pub fn new(
        labels: Vec<String>,
        criteria: Vec<String>,
        matrix: Vec<Vec<f64>>,
        weights: Vec<f64>,
        impacts: Vec<Impact>,
    ) -> Result<Self> {
        let n = criteria.len();
        if n < 2 {
            return Err(McdaError::InsufficientColumns { found: n + 1 });
        }
        if matrix.is_empty() {
            return Err(McdaError::InputUnreadable(
                "decision matrix has no alternatives".into(),
            ));
        }
        if labels.len() != matrix.len() {
            return Err(McdaError::InputUnreadable(format!(
                "{} labels for {} matrix rows",
                labels.len(),
                matrix.len()
            )));
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(McdaError::InputUnreadable(format!(
                    "row {} has {} values, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(McdaError::NonNumericCriterion {
                    column: criteria[j].clone(),
                    row: i + 1,
                    value: row[j].to_string(),
                });
            }
        }

        if weights.len() != n || impacts.len() != n {
            return Err(McdaError::ArityMismatch {
                expected: n,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }
        if let Some(w) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(McdaError::InvalidWeightFormat(w.to_string()));
        }

        Ok(Self {
            labels,
            criteria,
            matrix,
            weights,
            impacts,
        })
    }

    /// Builds a problem from `(label, values)` rows, naming criteria
    /// `C1..CN`.
    pub fn from_rows<L: Into<String>>(
        rows: Vec<(L, Vec<f64>)>,
        weights: Vec<f64>,
        impacts: Vec<Impact>,
    ) -> Result<Self> {
        let n = rows.first().map_or(weights.len(), |(_, v)| v.len());
        let criteria = (1..=n).map(|j| format!("C{j}")).collect();
        let (labels, matrix): (Vec<String>, Vec<Vec<f64>>) = rows
            .into_iter()
            .map(|(l, v)| (l.into(), v))
            .unzip();
        Self::new(labels, criteria, matrix, weights, impacts)
    }

    /// Alternative labels, in row order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Criterion names, in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// The M × N decision matrix.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Number of alternatives (M).
    pub fn alternative_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of criteria (N).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Iterates over the values of criterion column `j`.
    ///
    /// # Panics
    /// Panics if `j >= criterion_count()`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.matrix.iter().map(move |row| row[j])
    }
}
