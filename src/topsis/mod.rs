//! TOPSIS ranking engine.
//!
//! Technique for Order of Preference by Similarity to Ideal Solution.
//! Alternatives are ranked by their relative closeness to an ideal-best
//! point and distance from an ideal-worst point, both built per criterion
//! from the weighted, vector-normalized decision matrix.
//!
//! # Key Types
//!
//! - [`TopsisEngine`]: runs the algorithm on a [`DecisionProblem`]
//! - [`TopsisConfig`]: reporting precision, tie policy, `0 / 0` score
//! - [`RankedResult`]: per-alternative score and rank, input order
//! - [`TopsisAnalysis`]: intermediate quantities of a run
//!
//! # References
//!
//! - Hwang & Yoon (1981), *Multiple Attribute Decision Making: Methods and
//!   Applications*
//!
//! [`DecisionProblem`]: crate::problem::DecisionProblem

mod config;
mod engine;
mod ranking;
mod types;

pub use config::{TiePolicy, TopsisConfig, MAX_PRECISION};
pub use engine::TopsisEngine;
pub use ranking::assign_ranks;
pub use types::{RankedAlternative, RankedResult, TopsisAnalysis};
