//! # First-Match Rule Tables
//!
//! Risk precedence and jurisdiction classification are ordered lists of
//! `(predicate, outcome)` pairs. The first rule whose predicate holds
//! decides the outcome; when none holds, the table's fallback does.
//!
//! Tables are `const`-constructible from `'static` slices, so each domain
//! declares its precedence as a single literal whose order is the
//! precedence. Nothing is accumulated or averaged.

use std::fmt;

use serde::Serialize;

/// One precedence rule.
pub struct Rule<I, O> {
    /// Stable identifier, reported in the classification trace.
    pub id: &'static str,
    /// Human-readable explanation of why the rule fires.
    pub reason: &'static str,
    /// Predicate over the table input. Must be pure.
    pub when: fn(&I) -> bool,
    /// Outcome when this rule is the first to match.
    pub outcome: O,
}

/// Outcome used when no rule matches.
#[derive(Debug)]
pub struct Fallback<O> {
    /// Stable identifier of the fallback.
    pub id: &'static str,
    /// Human-readable explanation.
    pub reason: &'static str,
    /// Fallback outcome.
    pub outcome: O,
}

/// An ordered, first-match-wins rule table.
pub struct RuleTable<I: 'static, O: 'static> {
    rules: &'static [Rule<I, O>],
    fallback: Fallback<O>,
}

/// The result of evaluating a [`RuleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatch<O> {
    /// Selected outcome.
    pub outcome: O,
    /// Id of the rule (or fallback) that decided it.
    pub rule_id: &'static str,
    /// Reason text of that rule.
    pub reason: &'static str,
}

impl<I: 'static, O: Copy + 'static> RuleTable<I, O> {
    /// Build a table from rules in precedence order and a fallback.
    pub const fn new(rules: &'static [Rule<I, O>], fallback: Fallback<O>) -> Self {
        Self { rules, fallback }
    }

    /// Evaluate rules in order; the first match wins.
    pub fn evaluate(&self, input: &I) -> RuleMatch<O> {
        self.rules
            .iter()
            .find(|rule| (rule.when)(input))
            .map(|rule| RuleMatch {
                outcome: rule.outcome,
                rule_id: rule.id,
                reason: rule.reason,
            })
            .unwrap_or(RuleMatch {
                outcome: self.fallback.outcome,
                rule_id: self.fallback.id,
                reason: self.fallback.reason,
            })
    }

    /// Rules in precedence order (excluding the fallback).
    pub fn rules(&self) -> &'static [Rule<I, O>] {
        self.rules
    }

    /// Rule ids in precedence order, fallback last.
    pub fn ids(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.id)
            .chain(std::iter::once(self.fallback.id))
            .collect()
    }
}

impl<I, O: fmt::Debug> fmt::Debug for Rule<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl<I: 'static, O: fmt::Debug + 'static> fmt::Debug for RuleTable<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules)
            .field("fallback", &self.fallback)
            .finish()
    }
}
