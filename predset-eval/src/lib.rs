//! Bounded evaluation over predicate sets. When changing the scan semantics,
//! please verify if `docs/set-algebra.md` needs to be updated as well.

mod constants;
mod error;
mod evaluator;

// Re-exports
pub use error::Error;
pub use evaluator::{Evaluator, EvaluatorConfig};
