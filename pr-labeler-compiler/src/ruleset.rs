//! Compiled, immutable rule set

use pr_labeler_core::{
    Condition, EventTable, Polarity, PredicateField, PredicateName, RuleSummary, Settings,
};
use regex::Regex;
use std::sync::Arc;

/// A predicate with its pattern compiled
#[derive(Debug, Clone)]
pub struct Predicate {
    name: PredicateName,
    pattern: Regex,
}

impl Predicate {
    pub fn new(name: PredicateName, pattern: Regex) -> Self {
        Self { name, pattern }
    }

    pub fn name(&self) -> PredicateName {
        self.name
    }

    pub fn field(&self) -> PredicateField {
        self.name.field()
    }

    pub fn polarity(&self) -> Polarity {
        self.name.polarity()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// A validated rule ready for evaluation
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Position in the source document
    pub index: usize,
    pub label: String,
    pub condition: Condition,
    /// Never empty
    pub predicates: Vec<Predicate>,
}

impl CompiledRule {
    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            index: self.index,
            label: self.label.clone(),
            condition: self.condition,
            predicates: self.predicates.iter().map(Predicate::name).collect(),
        }
    }
}

/// Ordered collection of compiled rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CompiledRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules.iter().map(CompiledRule::summary).collect()
    }
}

/// Handle to a loaded document
///
/// Built once at startup and shared by reference; cloning only bumps
/// reference counts.
#[derive(Debug, Clone)]
pub struct LabelerConfig {
    pub rules: Arc<RuleSet>,
    pub events: Arc<EventTable>,
    pub settings: Arc<Settings>,
}

impl LabelerConfig {
    pub fn new(rules: RuleSet, events: EventTable, settings: Settings) -> Self {
        Self {
            rules: Arc::new(rules),
            events: Arc::new(events),
            settings: Arc::new(settings),
        }
    }
}
