//! Predicate evaluation against a PR context
//!
//! Every predicate is a regex search over one context field. Collection
//! fields match when any element matches. Negated predicates wrap the
//! positive test in [`Negate`], so `isNotX` is always exactly `!isX`.

use pr_labeler_compiler::Predicate;
use pr_labeler_core::{Polarity, PrContext, PredicateField};
use regex::Regex;

/// A boolean test over a PR context
pub trait Evaluate {
    fn evaluate(&self, ctx: &PrContext) -> bool;
}

/// Positive regex search over a single context field
#[derive(Debug, Clone, Copy)]
pub struct FieldMatch<'a> {
    pub field: PredicateField,
    pub pattern: &'a Regex,
}

impl Evaluate for FieldMatch<'_> {
    fn evaluate(&self, ctx: &PrContext) -> bool {
        match self.field {
            PredicateField::AnyFilePath => ctx
                .changed_file_paths
                .iter()
                .any(|path| self.pattern.is_match(path)),
            PredicateField::Body => self.pattern.is_match(&ctx.body),
            PredicateField::Title => self.pattern.is_match(&ctx.title),
            PredicateField::Author => self.pattern.is_match(&ctx.author_login),
            PredicateField::AuthorCompany => self.pattern.is_match(ctx.company()),
            PredicateField::AnyFileOwner => ctx
                .owners()
                .into_iter()
                .any(|owner| self.pattern.is_match(owner)),
        }
    }
}

/// Logical inverse of the wrapped predicate
#[derive(Debug, Clone, Copy)]
pub struct Negate<P>(pub P);

impl<P: Evaluate> Evaluate for Negate<P> {
    fn evaluate(&self, ctx: &PrContext) -> bool {
        !self.0.evaluate(ctx)
    }
}

impl Evaluate for Predicate {
    fn evaluate(&self, ctx: &PrContext) -> bool {
        let base = FieldMatch {
            field: self.field(),
            pattern: self.pattern(),
        };
        match self.polarity() {
            Polarity::Positive => base.evaluate(ctx),
            Polarity::Negated => Negate(base).evaluate(ctx),
        }
    }
}
