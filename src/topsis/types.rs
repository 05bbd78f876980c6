//! Engine outputs.

/// Score and rank of one alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedAlternative {
    /// Label carried unchanged from the input.
    pub label: String,

    /// Relative closeness to the ideal, in `[0, 1]`, rounded to the
    /// configured precision.
    pub score: f64,

    /// 1-based rank; 1 is the most preferred.
    pub rank: usize,
}

/// Ranking of every alternative, in input row order (not sorted by rank).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    pub alternatives: Vec<RankedAlternative>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.score).collect()
    }

    pub fn ranks(&self) -> Vec<usize> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }

    /// Alternatives ordered by rank; ties keep input order.
    pub fn sorted_by_rank(&self) -> Vec<&RankedAlternative> {
        let mut sorted: Vec<&RankedAlternative> = self.alternatives.iter().collect();
        sorted.sort_by_key(|a| a.rank);
        sorted
    }

    /// The first rank-1 alternative in input order.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.alternatives.iter().find(|a| a.rank == 1)
    }
}

/// Intermediate quantities of one TOPSIS run.
///
/// Useful for explaining a ranking: which criteria pull an alternative
/// towards or away from the ideal point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisAnalysis {
    /// Euclidean norm of each criterion column.
    pub column_norms: Vec<f64>,

    /// Weighted normalized matrix, M × N.
    pub weighted: Vec<Vec<f64>>,

    /// Ideal best value per criterion.
    pub ideal_best: Vec<f64>,

    /// Ideal worst value per criterion.
    pub ideal_worst: Vec<f64>,

    /// Distance of each alternative to the ideal best point.
    pub distance_best: Vec<f64>,

    /// Distance of each alternative to the ideal worst point.
    pub distance_worst: Vec<f64>,

    /// Unrounded closeness coefficient per alternative. `None` marks the
    /// `0 / 0` case where both distances vanish.
    pub closeness: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RankedResult {
        RankedResult {
            alternatives: vec![
                RankedAlternative {
                    label: "A".into(),
                    score: 0.4,
                    rank: 2,
                },
                RankedAlternative {
                    label: "B".into(),
                    score: 0.8,
                    rank: 1,
                },
                RankedAlternative {
                    label: "C".into(),
                    score: 0.4,
                    rank: 2,
                },
            ],
        }
    }

    #[test]
    fn test_sorted_by_rank_is_stable() {
        let r = result();
        let labels: Vec<&str> = r.sorted_by_rank().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_best() {
        assert_eq!(result().best().map(|a| a.label.as_str()), Some("B"));
        assert!(RankedResult { alternatives: vec![] }.best().is_none());
    }

    #[test]
    fn test_accessors() {
        let r = result();
        assert_eq!(r.len(), 3);
        assert_eq!(r.ranks(), vec![2, 1, 2]);
        assert_eq!(r.scores(), vec![0.4, 0.8, 0.4]);
    }
}
