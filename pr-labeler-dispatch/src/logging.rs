//! Trigger that only logs requests

use async_trait::async_trait;

use crate::{DispatchError, WorkflowRequest, WorkflowTrigger};

/// Logs every request and reports success
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTrigger;

impl LoggingTrigger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorkflowTrigger for LoggingTrigger {
    async fn trigger(&self, request: &WorkflowRequest) -> Result<(), DispatchError> {
        tracing::info!(
            id = %request.id,
            workflow = %request.workflow,
            event = %request.event,
            scope = %request.scope,
            "Workflow triggered"
        );
        Ok(())
    }
}
