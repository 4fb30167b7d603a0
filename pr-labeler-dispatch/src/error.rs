//! Dispatch error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Failed to trigger workflow `{workflow}`: {reason}")]
    TriggerFailed { workflow: String, reason: String },
}
