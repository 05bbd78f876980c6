//! Multi-criteria decision analysis with TOPSIS.
//!
//! Given alternatives scored on several weighted criteria, each either a
//! benefit (higher is better) or a cost (lower is better), the crate
//! computes one composite closeness score in `[0, 1]` and a rank per
//! alternative.
//!
//! - **Validation** ([`validate`]): structural and semantic checks on the
//!   raw table, weights and impacts; produces a [`problem::DecisionProblem`].
//! - **TOPSIS** ([`topsis`]): vector normalization, weighting, ideal
//!   points, Euclidean distances, closeness and ranking.
//! - **I/O** ([`io`]): CSV reading and result writing.
//! - **Pipeline** ([`pipeline`]): the file-to-file composition used by the
//!   `topsis` binary.
//!
//! # Architecture
//!
//! The engine is a pure function of a validated problem and an explicit
//! [`topsis::TopsisConfig`]; it holds no state between calls and performs
//! no I/O. All fallible work happens before it (validation) or after it
//! (writing).
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public data types
//! - `parallel`: [`topsis::TopsisEngine::rank_many`] fans out over rayon

pub mod error;
pub mod io;
pub mod pipeline;
pub mod problem;
pub mod topsis;
pub mod validate;

pub use error::{McdaError, Result};
