//! Rule evaluator for compiled labeler rule sets
//!
//! Evaluates every rule of a [`pr_labeler_compiler::RuleSet`] against a
//! PR context snapshot and returns the labels to apply. Evaluation is a
//! pure function of its inputs; the evaluator holds no mutable state.

pub mod error;
pub mod executor;
pub mod predicate;

pub use error::EvaluationError;
pub use executor::{EvaluationLimits, RuleEvaluator};
pub use predicate::{Evaluate, FieldMatch, Negate};
