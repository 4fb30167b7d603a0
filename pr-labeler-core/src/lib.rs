//! Core domain models for the PR labeler
//!
//! This crate contains the shared data structures used across
//! the labeler: the configuration document, PR context snapshots,
//! predicate names, event bindings and evaluation results.

pub mod error;
pub mod events;
pub mod models;
pub mod ordered;
pub mod predicate;

pub use error::CoreError;
pub use events::{EventBinding, EventScope, EventTable};
pub use models::*;
pub use ordered::OrderedMap;
pub use predicate::{Polarity, PredicateField, PredicateName};
