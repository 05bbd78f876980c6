//! Decision problem data model.
//!
//! A [`DecisionProblem`] bundles the decision matrix (alternatives ×
//! criteria), one positive weight per criterion and one [`Impact`]
//! (optimization direction) per criterion. It is immutable once built and
//! is the sole input of the ranking engine.

mod impact;
mod types;

pub use impact::Impact;
pub use types::DecisionProblem;
