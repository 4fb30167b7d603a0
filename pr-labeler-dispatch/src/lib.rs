//! Event dispatch for the PR labeler
//!
//! Maps incoming events to the workflows bound to them and hands each
//! workflow to a [`WorkflowTrigger`]. Provides an in-memory recording
//! trigger (for tests and dry runs) and a logging trigger.

pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod memory;
pub mod traits;

pub use dispatcher::EventDispatcher;
pub use error::DispatchError;
pub use logging::LoggingTrigger;
pub use memory::RecordingTrigger;
pub use traits::{WorkflowRequest, WorkflowTrigger};
