//! Trigger trait defining the interface to the workflow runner

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DispatchError;

/// A single request to run a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    /// Unique identifier
    pub id: Uuid,
    /// Workflow identifier, e.g. `bench-turborepo.yml`
    pub workflow: String,
    /// Event that caused the request
    pub event: String,
    /// Scope key the action was bound under
    pub scope: String,
    /// Scopes carried by the event payload
    pub packages: Vec<String>,
    pub requested_at: DateTime<Utc>,
}

impl WorkflowRequest {
    pub fn new(
        workflow: impl Into<String>,
        event: impl Into<String>,
        scope: impl Into<String>,
        packages: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            workflow: workflow.into(),
            event: event.into(),
            scope: scope.into(),
            packages,
            requested_at: Utc::now(),
        }
    }
}

/// Hands workflow requests to a CI runner
#[async_trait]
pub trait WorkflowTrigger: Send + Sync {
    /// Request that a workflow runs. Failures are reported, never retried.
    async fn trigger(&self, request: &WorkflowRequest) -> Result<(), DispatchError>;
}
