//! Evaluation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Invalid context: {0}")]
    InvalidContext(#[from] serde_json::Error),

    #[error("Context too large: {field} size {actual} exceeds limit {limit}")]
    ContextTooLarge {
        field: &'static str,
        actual: usize,
        limit: usize,
    },
}
