//! Event bindings: which workflows run when an event fires

use serde::{Deserialize, Serialize};

use crate::{Action, ActionWhen};

/// Actions bound to one scope key of an event (e.g. a package name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventScope {
    pub key: String,
    pub actions: Vec<Action>,
}

impl EventScope {
    /// Workflows of this scope that fire for the given event scopes
    pub fn fired_by<'a>(&'a self, packages: &'a [String]) -> impl Iterator<Item = &'a Action> + 'a {
        self.actions
            .iter()
            .filter(move |action| self.fires(action.when, packages))
    }

    fn fires(&self, when: ActionWhen, packages: &[String]) -> bool {
        match when {
            // An unscoped event reaches every scope
            ActionWhen::Any => packages.is_empty() || packages.iter().any(|p| *p == self.key),
            ActionWhen::All => !packages.is_empty() && packages.iter().all(|p| *p == self.key),
        }
    }
}

/// All scopes bound to a named event, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBinding {
    pub event_name: String,
    pub scopes: Vec<EventScope>,
}

impl EventBinding {
    /// Ordered workflow names triggered by an event with the given scopes
    pub fn workflows_for(&self, packages: &[String]) -> Vec<String> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.fired_by(packages))
            .map(|action| action.run_workflow.clone())
            .collect()
    }
}

/// Immutable table of every event binding in a loaded document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTable {
    bindings: Vec<EventBinding>,
}

impl EventTable {
    pub fn new(bindings: Vec<EventBinding>) -> Self {
        Self { bindings }
    }

    pub fn get(&self, event_name: &str) -> Option<&EventBinding> {
        self.bindings.iter().find(|b| b.event_name == event_name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
