//! In-memory trigger for development and testing

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;

use crate::{DispatchError, WorkflowRequest, WorkflowTrigger};

/// Records every request it receives instead of running anything
pub struct RecordingTrigger {
    requests: RwLock<Vec<WorkflowRequest>>,
    failing: RwLock<HashSet<String>>,
}

impl RecordingTrigger {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            failing: RwLock::new(HashSet::new()),
        }
    }

    /// Make every future request for `workflow` fail
    pub fn fail_workflow(&self, workflow: impl Into<String>) {
        self.failing.write().insert(workflow.into());
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<WorkflowRequest> {
        self.requests.read().clone()
    }

    /// Workflow names received so far, oldest first
    pub fn workflows(&self) -> Vec<String> {
        self.requests
            .read()
            .iter()
            .map(|r| r.workflow.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.requests.write().clear();
    }
}

impl Default for RecordingTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkflowTrigger for RecordingTrigger {
    async fn trigger(&self, request: &WorkflowRequest) -> Result<(), DispatchError> {
        if self.failing.read().contains(&request.workflow) {
            return Err(DispatchError::TriggerFailed {
                workflow: request.workflow.clone(),
                reason: "workflow marked as failing".to_string(),
            });
        }

        self.requests.write().push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let trigger = RecordingTrigger::new();

        for workflow in ["a.yml", "b.yml"] {
            let request = WorkflowRequest::new(workflow, "onPublish", "turbo", vec![]);
            trigger.trigger(&request).await.unwrap();
        }

        assert_eq!(trigger.workflows(), vec!["a.yml", "b.yml"]);
        assert_eq!(trigger.requests()[0].event, "onPublish");

        trigger.clear();
        assert!(trigger.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failing_workflow_is_not_recorded() {
        let trigger = RecordingTrigger::new();
        trigger.fail_workflow("broken.yml");

        let request = WorkflowRequest::new("broken.yml", "onPublish", "turbo", vec![]);
        let err = trigger.trigger(&request).await.unwrap_err();

        assert!(matches!(err, DispatchError::TriggerFailed { ref workflow, .. } if workflow == "broken.yml"));
        assert!(trigger.workflows().is_empty());
    }
}
