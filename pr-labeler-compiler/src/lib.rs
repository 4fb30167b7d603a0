//! Loader and compiler for labeler configuration documents
//!
//! This crate parses a labeler document, validates every rule and event
//! binding, and compiles the regex patterns once so that a bad document
//! is rejected at startup instead of during evaluation.

pub mod compiler;
pub mod error;
pub mod loader;
pub mod ruleset;

pub use compiler::RuleCompiler;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use ruleset::{CompiledRule, LabelerConfig, Predicate, RuleSet};
