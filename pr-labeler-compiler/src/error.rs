//! Configuration error types
//!
//! Every variant is raised while loading a document, before any PR is
//! evaluated. Rule-level variants identify the rule by position and label.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed document: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule #{index}: label must not be empty")]
    EmptyLabel { index: usize },

    #[error("Rule #{index} ({label}): `when` must contain at least one predicate")]
    EmptyWhen { index: usize, label: String },

    #[error("Rule #{index} ({label}): unknown predicate `{name}`")]
    UnknownPredicate {
        index: usize,
        label: String,
        name: String,
    },

    #[error("Rule #{index} ({label}): invalid pattern for `{predicate}`: {source}")]
    InvalidPattern {
        index: usize,
        label: String,
        predicate: String,
        #[source]
        source: regex::Error,
    },

    #[error("Event `{event}` scope `{scope}`: {reason}")]
    InvalidEvent {
        event: String,
        scope: String,
        reason: String,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
