//! Event dispatcher

use pr_labeler_core::{EventPayload, EventTable};
use std::sync::Arc;

use crate::{DispatchError, WorkflowRequest, WorkflowTrigger};

/// Resolves events to bound workflows and triggers them in document order
pub struct EventDispatcher {
    events: Arc<EventTable>,
    trigger: Arc<dyn WorkflowTrigger>,
}

impl EventDispatcher {
    pub fn new(events: Arc<EventTable>, trigger: Arc<dyn WorkflowTrigger>) -> Self {
        Self { events, trigger }
    }

    /// Workflows that `dispatch` would trigger, without triggering them
    pub fn plan(&self, event_name: &str, payload: &EventPayload) -> Vec<String> {
        self.events
            .get(event_name)
            .map(|binding| binding.workflows_for(&payload.packages))
            .unwrap_or_default()
    }

    /// Trigger every workflow bound to the event
    ///
    /// Stops at the first trigger failure and returns it. Workflows
    /// triggered before the failure are not rolled back.
    pub async fn dispatch(
        &self,
        event_name: &str,
        payload: &EventPayload,
    ) -> Result<Vec<String>, DispatchError> {
        let Some(binding) = self.events.get(event_name) else {
            tracing::debug!(event = event_name, "No bindings for event");
            return Ok(Vec::new());
        };

        let mut triggered = Vec::new();
        for scope in &binding.scopes {
            for action in scope.fired_by(&payload.packages) {
                let request = WorkflowRequest::new(
                    action.run_workflow.clone(),
                    event_name,
                    scope.key.clone(),
                    payload.packages.clone(),
                );

                if let Err(e) = self.trigger.trigger(&request).await {
                    tracing::warn!(
                        event = event_name,
                        workflow = %request.workflow,
                        already_triggered = ?triggered,
                        "Dispatch aborted: {}",
                        e
                    );
                    return Err(e);
                }
                triggered.push(request.workflow);
            }
        }

        tracing::info!(
            event = event_name,
            count = triggered.len(),
            "Dispatched event to workflows: {:?}",
            triggered
        );

        Ok(triggered)
    }
}
