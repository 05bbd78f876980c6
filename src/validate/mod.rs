//! Validation of raw decision input.
//!
//! Turns a string [`Table`](crate::io::Table) plus the weights and
//! impacts parameters into a [`DecisionProblem`](crate::problem::DecisionProblem).
//! All string → number coercion happens here, once; the engine only ever
//! sees a homogeneous numeric matrix.

mod validator;

pub use validator::{parse_impacts, parse_weights, validate, validate_file};
