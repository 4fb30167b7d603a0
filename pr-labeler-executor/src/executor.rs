//! Rule evaluator

use crate::{Evaluate, EvaluationError};
use pr_labeler_compiler::{CompiledRule, RuleSet};
use pr_labeler_core::{EvaluationResult, PrContext, PredicateOutcome, RuleMatch};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::time::Instant;

/// Upper bounds on the size of a PR context accepted for evaluation
#[derive(Debug, Clone)]
pub struct EvaluationLimits {
    /// Maximum number of changed files (default: 3000)
    pub max_changed_files: usize,
    /// Maximum length in bytes of any searched string: title, body, login,
    /// company, each changed path and each owner handle (default: 1MB)
    pub max_text_bytes: usize,
}

impl Default for EvaluationLimits {
    fn default() -> Self {
        Self {
            max_changed_files: 3000,
            max_text_bytes: 1024 * 1024, // 1MB
        }
    }
}

/// Evaluates compiled rule sets against PR contexts
#[derive(Debug, Clone, Default)]
pub struct RuleEvaluator {
    limits: EvaluationLimits,
}

impl RuleEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: EvaluationLimits) -> Self {
        Self { limits }
    }

    /// Evaluate every rule and collect the labels of those that match
    pub fn evaluate(
        &self,
        rules: &RuleSet,
        ctx: &PrContext,
    ) -> Result<EvaluationResult, EvaluationError> {
        self.check_limits(ctx)?;
        let start = Instant::now();

        let matched_rules: Vec<RuleMatch> = rules
            .iter()
            .filter_map(|rule| evaluate_rule(rule, ctx))
            .collect();

        let evaluation_time_us = start.elapsed().as_micros() as u64;
        let result = EvaluationResult::new(matched_rules, rules.len(), evaluation_time_us);

        tracing::debug!(
            rules = result.rules_evaluated,
            labels = ?result.labels,
            "Evaluated rule set in {}us",
            evaluation_time_us
        );

        Ok(result)
    }

    /// Only the deduplicated labels
    pub fn labels(
        &self,
        rules: &RuleSet,
        ctx: &PrContext,
    ) -> Result<BTreeSet<String>, EvaluationError> {
        self.evaluate(rules, ctx).map(|result| result.labels)
    }

    /// Evaluate a context supplied as raw JSON
    pub fn evaluate_json(
        &self,
        rules: &RuleSet,
        ctx: &serde_json::Value,
    ) -> Result<EvaluationResult, EvaluationError> {
        let ctx = PrContext::deserialize(ctx)?;
        self.evaluate(rules, &ctx)
    }

    fn check_limits(&self, ctx: &PrContext) -> Result<(), EvaluationError> {
        if ctx.changed_file_paths.len() > self.limits.max_changed_files {
            return Err(EvaluationError::ContextTooLarge {
                field: "changedFilePaths",
                actual: ctx.changed_file_paths.len(),
                limit: self.limits.max_changed_files,
            });
        }

        let longest_path = ctx.changed_file_paths.iter().map(String::len).max();
        let longest_owner = ctx.owners().into_iter().map(str::len).max();
        let text_fields = [
            ("title", ctx.title.len()),
            ("body", ctx.body.len()),
            ("authorLogin", ctx.author_login.len()),
            ("authorCompany", ctx.company().len()),
            ("changedFilePaths", longest_path.unwrap_or(0)),
            ("fileOwners", longest_owner.unwrap_or(0)),
        ];
        for (field, actual) in text_fields {
            if actual > self.limits.max_text_bytes {
                return Err(EvaluationError::ContextTooLarge {
                    field,
                    actual,
                    limit: self.limits.max_text_bytes,
                });
            }
        }

        Ok(())
    }
}

/// Evaluate one rule, returning the match details when it fires
fn evaluate_rule(rule: &CompiledRule, ctx: &PrContext) -> Option<RuleMatch> {
    let outcomes: Vec<PredicateOutcome> = rule
        .predicates
        .iter()
        .map(|predicate| PredicateOutcome {
            name: predicate.name(),
            matched: predicate.evaluate(ctx),
        })
        .collect();

    let matched = rule.condition.combine(outcomes.iter().map(|o| o.matched));

    tracing::debug!(
        index = rule.index,
        label = %rule.label,
        condition = ?rule.condition,
        matched,
        "Evaluated rule"
    );

    matched.then(|| RuleMatch {
        index: rule.index,
        label: rule.label.clone(),
        predicates: outcomes,
    })
}
