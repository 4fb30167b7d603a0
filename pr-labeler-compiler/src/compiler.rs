//! Rule compiler
//!
//! Turns raw document rules into [`CompiledRule`]s, rejecting unknown
//! predicate names, empty `when` blocks and invalid regex patterns.

use pr_labeler_core::{Action, EventBinding, EventScope, EventTable, OrderedMap, PredicateName, RawRule};
use regex::RegexBuilder;

use crate::{CompiledRule, ConfigError, Predicate, RuleSet};

/// Default upper bound on the compiled size of a single pattern (1 MiB)
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1024 * 1024;

/// Compiler for labeler rules and event bindings
pub struct RuleCompiler {
    pattern_size_limit: usize,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self {
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    /// Cap the compiled size of each pattern; oversized patterns are rejected
    pub fn with_size_limit(pattern_size_limit: usize) -> Self {
        Self { pattern_size_limit }
    }

    /// Compile every rule, failing on the first invalid one
    pub fn compile_rules(&self, rules: &[RawRule]) -> Result<RuleSet, ConfigError> {
        let compiled = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| self.compile_rule(index, rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RuleSet::new(compiled))
    }

    /// Compile a single rule found at `index` in the document
    pub fn compile_rule(&self, index: usize, rule: &RawRule) -> Result<CompiledRule, ConfigError> {
        let label = rule.label.trim();
        if label.is_empty() {
            return Err(ConfigError::EmptyLabel { index });
        }

        if rule.when.is_empty() {
            return Err(ConfigError::EmptyWhen {
                index,
                label: label.to_string(),
            });
        }

        let mut predicates = Vec::with_capacity(rule.when.len());
        for (key, pattern) in rule.when.iter() {
            let name: PredicateName = key.parse().map_err(|_| ConfigError::UnknownPredicate {
                index,
                label: label.to_string(),
                name: key.to_string(),
            })?;

            let regex = RegexBuilder::new(pattern)
                .size_limit(self.pattern_size_limit)
                .build()
                .map_err(|source| ConfigError::InvalidPattern {
                    index,
                    label: label.to_string(),
                    predicate: key.to_string(),
                    source,
                })?;

            predicates.push(Predicate::new(name, regex));
        }

        tracing::debug!(
            index,
            label,
            condition = ?rule.condition,
            predicates = predicates.len(),
            "Compiled rule"
        );

        Ok(CompiledRule {
            index,
            label: label.to_string(),
            condition: rule.condition,
            predicates,
        })
    }

    /// Build the event table, rejecting actions without a workflow
    pub fn compile_events(
        &self,
        events: &OrderedMap<OrderedMap<Vec<Action>>>,
    ) -> Result<EventTable, ConfigError> {
        let mut bindings = Vec::with_capacity(events.len());

        for (event_name, scopes) in events.iter() {
            let mut compiled_scopes = Vec::with_capacity(scopes.len());
            for (key, actions) in scopes.iter() {
                if let Some(action) = actions.iter().find(|a| a.run_workflow.trim().is_empty()) {
                    return Err(ConfigError::InvalidEvent {
                        event: event_name.to_string(),
                        scope: key.to_string(),
                        reason: format!("action with `when: {:?}` has an empty runWorkflow", action.when),
                    });
                }
                compiled_scopes.push(EventScope {
                    key: key.to_string(),
                    actions: actions.clone(),
                });
            }
            bindings.push(EventBinding {
                event_name: event_name.to_string(),
                scopes: compiled_scopes,
            });
        }

        Ok(EventTable::new(bindings))
    }
}

impl Default for RuleCompiler {
    fn default() -> Self {
        Self::new()
    }
}
