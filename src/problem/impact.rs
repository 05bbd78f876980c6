//! Optimization direction of a criterion.

use crate::error::McdaError;
use std::fmt;
use std::str::FromStr;

/// Whether higher or lower values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Impact {
    /// Higher is better (`+`).
    Benefit,

    /// Lower is better (`-`).
    Cost,
}

impl Impact {
    /// Returns the wire symbol for this impact.
    pub fn symbol(self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }

    /// Picks `(ideal_best, ideal_worst)` from a column's extremes.
    pub(crate) fn ideal_pair(self, min: f64, max: f64) -> (f64, f64) {
        match self {
            Impact::Benefit => (max, min),
            Impact::Cost => (min, max),
        }
    }
}

impl FromStr for Impact {
    type Err = McdaError;

    /// Parses a single token. Surrounding whitespace is ignored; anything
    /// other than `+` or `-` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(McdaError::InvalidImpactSymbol(other.to_string())),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
