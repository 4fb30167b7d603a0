//! Application state shared across handlers

use pr_labeler_compiler::{ConfigError, ConfigLoader, LabelerConfig};
use pr_labeler_dispatch::{EventDispatcher, LoggingTrigger, RecordingTrigger, WorkflowTrigger};
use pr_labeler_executor::RuleEvaluator;
use std::sync::Arc;

use crate::settings::{ServerSettings, TriggerKind};

/// Shared application state
pub struct AppState {
    pub config: LabelerConfig,
    pub evaluator: RuleEvaluator,
    pub dispatcher: EventDispatcher,
}

impl AppState {
    /// Create with the logging trigger
    pub fn new(config: LabelerConfig) -> Self {
        Self::with_trigger(config, Arc::new(LoggingTrigger::new()))
    }

    /// Create with a custom workflow trigger
    pub fn with_trigger(config: LabelerConfig, trigger: Arc<dyn WorkflowTrigger>) -> Self {
        let dispatcher = EventDispatcher::new(config.events.clone(), trigger);
        Self {
            config,
            evaluator: RuleEvaluator::new(),
            dispatcher,
        }
    }

    /// Load the labeler document named by the settings
    ///
    /// Fails if the document is invalid; the server must not start with
    /// a partially valid rule set.
    pub async fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        let config = ConfigLoader::new().load(&settings.config_path).await?;

        let trigger: Arc<dyn WorkflowTrigger> = match settings.trigger {
            TriggerKind::Log => Arc::new(LoggingTrigger::new()),
            TriggerKind::Record => Arc::new(RecordingTrigger::new()),
        };

        Ok(Self::with_trigger(config, trigger))
    }
}
