//! Core domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::{OrderedMap, PredicateName};

/// Default location of the CODEOWNERS file handed to ownership resolvers
pub const DEFAULT_CODE_OWNERS_PATH: &str = ".github/CODEOWNERS";

/// Top-level configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelerDocument {
    /// Label rules and their settings
    #[serde(default)]
    pub labeler: LabelerSection,
    /// Event name -> scope key -> bound actions
    #[serde(default)]
    pub events: OrderedMap<OrderedMap<Vec<Action>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelerSection {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub labels: Vec<RawRule>,
}

/// Settings passed through to collaborators of the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Where the CODEOWNERS resolver reads ownership from
    #[serde(default = "default_code_owners_path")]
    pub code_owners_path: String,
}

fn default_code_owners_path() -> String {
    DEFAULT_CODE_OWNERS_PATH.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            code_owners_path: default_code_owners_path(),
        }
    }
}

/// How a rule combines its predicate results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    #[serde(rename = "AND", alias = "and")]
    And,
    #[serde(rename = "OR", alias = "or")]
    Or,
}

impl Condition {
    /// Combine per-predicate results
    pub fn combine<I: IntoIterator<Item = bool>>(self, results: I) -> bool {
        let mut results = results.into_iter();
        match self {
            Condition::And => results.all(|r| r),
            Condition::Or => results.any(|r| r),
        }
    }
}

/// A rule exactly as written in the document, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRule {
    pub label: String,
    #[serde(default)]
    pub condition: Condition,
    /// Predicate name -> regex pattern. Names are validated at load time.
    #[serde(default)]
    pub when: OrderedMap<String>,
}

/// When a bound action fires relative to the event's scopes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionWhen {
    #[default]
    Any,
    All,
}

/// A workflow bound to an event scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Action {
    pub run_workflow: String,
    #[serde(default)]
    pub when: ActionWhen,
}

/// Snapshot of a pull request supplied by the host for one evaluation
///
/// Every field may be absent or `null`; such strings read as empty and
/// such collections as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrContext {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_login: String,
    pub author_company: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub changed_file_paths: Vec<String>,
    /// File path -> owner handles, precomputed by a CODEOWNERS resolver
    #[serde(deserialize_with = "null_as_default")]
    pub file_owners: BTreeMap<String, BTreeSet<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PrContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_author(mut self, login: impl Into<String>) -> Self {
        self.author_login = login.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.author_company = Some(company.into());
        self
    }

    pub fn with_changed_file(mut self, path: impl Into<String>) -> Self {
        self.changed_file_paths.push(path.into());
        self
    }

    pub fn with_owner(mut self, path: impl Into<String>, owner: impl Into<String>) -> Self {
        self.file_owners
            .entry(path.into())
            .or_default()
            .insert(owner.into());
        self
    }

    pub fn company(&self) -> &str {
        self.author_company.as_deref().unwrap_or("")
    }

    /// Union of all owner handles across every file
    pub fn owners(&self) -> BTreeSet<&str> {
        self.file_owners
            .values()
            .flat_map(|owners| owners.iter().map(String::as_str))
            .collect()
    }
}

/// Payload of an incoming event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    /// Scopes the event concerns, e.g. the packages being published
    pub packages: Vec<String>,
}

impl EventPayload {
    pub fn for_packages<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of a single predicate within a matched rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateOutcome {
    pub name: PredicateName,
    pub matched: bool,
}

/// A rule that matched during evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Position of the rule in the rule set
    pub index: usize,
    pub label: String,
    pub predicates: Vec<PredicateOutcome>,
}

/// Result of evaluating a rule set against a PR context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Unique per evaluation, for correlating a result with its log line
    pub id: Uuid,
    /// Labels to apply, deduplicated
    pub labels: BTreeSet<String>,
    pub matched_rules: Vec<RuleMatch>,
    pub rules_evaluated: usize,
    pub evaluation_time_us: u64,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    pub fn new(matched_rules: Vec<RuleMatch>, rules_evaluated: usize, evaluation_time_us: u64) -> Self {
        let labels = matched_rules.iter().map(|m| m.label.clone()).collect();
        Self {
            id: Uuid::new_v4(),
            labels,
            matched_rules,
            rules_evaluated,
            evaluation_time_us,
            evaluated_at: Utc::now(),
        }
    }
}

/// Response listing the workflows an event triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub event: String,
    pub workflows: Vec<String>,
}

/// Summary of a loaded rule, as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub index: usize,
    pub label: String,
    pub condition: Condition,
    pub predicates: Vec<PredicateName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_defaults_to_and() {
        let rule: RawRule = serde_yaml::from_str("label: x\nwhen:\n  isPRTitleMatch: foo\n")
            .expect("valid rule");
        assert_eq!(rule.condition, Condition::And);
    }

    #[test]
    fn test_condition_combine() {
        assert!(Condition::And.combine([true, true]));
        assert!(!Condition::And.combine([true, false]));
        assert!(Condition::Or.combine([false, true]));
        assert!(!Condition::Or.combine([false, false]));
    }

    #[test]
    fn test_pr_context_missing_fields_default() {
        let ctx: PrContext = serde_json::from_str(r#"{"title": "fix"}"#).expect("valid context");
        assert_eq!(ctx.title, "fix");
        assert_eq!(ctx.company(), "");
        assert!(ctx.changed_file_paths.is_empty());
        assert!(ctx.owners().is_empty());
    }

    #[test]
    fn test_pr_context_null_fields_read_as_empty() {
        let ctx: PrContext = serde_json::from_str(
            r#"{
                "title": "fix",
                "body": null,
                "authorLogin": null,
                "authorCompany": null,
                "changedFilePaths": null,
                "fileOwners": null
            }"#,
        )
        .expect("null fields accepted");
        assert_eq!(ctx, PrContext::new().with_title("fix"));
    }

    #[test]
    fn test_owners_are_unioned() {
        let ctx = PrContext::new()
            .with_owner("a.rs", "@team-a")
            .with_owner("b.rs", "@team-a")
            .with_owner("b.rs", "@team-b");
        let owners: Vec<_> = ctx.owners().into_iter().collect();
        assert_eq!(owners, vec!["@team-a", "@team-b"]);
    }

    #[test]
    fn test_settings_default_code_owners_path() {
        let doc: LabelerDocument = serde_yaml::from_str("labeler:\n  labels: []\n").expect("valid");
        assert_eq!(doc.labeler.settings.code_owners_path, ".github/CODEOWNERS");
    }

    #[test]
    fn test_action_when_defaults_to_any() {
        let action: Action = serde_yaml::from_str("runWorkflow: bench.yml\n").expect("valid");
        assert_eq!(action.when, ActionWhen::Any);
    }
}
