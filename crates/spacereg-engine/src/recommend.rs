//! # Recommendation Generator
//!
//! Deterministic rule firing over the profile, the gap list and the score.
//! Domain rules are evaluated first, then the [`baseline_rules`] shared by
//! every domain. Rules may co-fire; a rule id is emitted at most once. The
//! output is stable-sorted by priority (1 = most urgent).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{AssessmentStatus, RiskLevel};
use spacereg_corpus::RegulationTag;

use crate::gaps::Gap;
use crate::scoring::ComplianceScore;

/// Bucketed remediation timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Act now.
    #[serde(rename = "immediate")]
    Immediate,
    /// Within 30 days.
    #[serde(rename = "30_days")]
    Days30,
    /// Within 90 days.
    #[serde(rename = "90_days")]
    Days90,
    /// Continuous activity.
    #[serde(rename = "ongoing")]
    Ongoing,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Immediate => "Immediate",
            Self::Days30 => "30 days",
            Self::Days90 => "90 days",
            Self::Ongoing => "Ongoing",
        })
    }
}

/// One prioritized action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Id of the rule that produced it.
    pub id: &'static str,
    /// Short title.
    pub title: &'static str,
    /// What to do.
    pub action: &'static str,
    /// 1 is the most urgent.
    pub priority: u8,
    /// When to do it.
    pub timeframe: Timeframe,
    /// Gaps this recommendation addresses.
    pub gap_ids: Vec<&'static str>,
}

/// Inputs a recommendation rule may inspect.
#[derive(Debug)]
pub struct RecommendationContext<'a, P, R: Ord> {
    /// The assessed profile.
    pub profile: &'a P,
    /// Risk-ordered gaps.
    pub gaps: &'a [Gap<R>],
    /// Score breakdown.
    pub score: &'a ComplianceScore<R>,
}

impl<'a, P, R: RegulationTag> RecommendationContext<'a, P, R> {
    /// Whether any gap satisfies `pred`.
    pub fn any_gap(&self, pred: impl Fn(&Gap<R>) -> bool) -> bool {
        self.gaps.iter().any(pred)
    }

    /// Whether the gap list contains `requirement_id`.
    pub fn has_gap(&self, requirement_id: &str) -> bool {
        self.gaps.iter().any(|g| g.requirement_id == requirement_id)
    }
}

/// A recommendation rule.
pub struct RecommendationRule<P, R: Ord> {
    /// Stable id; emitted at most once per assessment.
    pub id: &'static str,
    /// Short title.
    pub title: &'static str,
    /// What to do.
    pub action: &'static str,
    /// 1 is the most urgent.
    pub priority: u8,
    /// When to do it.
    pub timeframe: Timeframe,
    /// Firing condition.
    pub when: fn(&RecommendationContext<'_, P, R>) -> bool,
    /// Which gaps the recommendation links to.
    pub addresses: fn(&Gap<R>) -> bool,
}

impl<P, R: Ord> fmt::Debug for RecommendationRule<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("timeframe", &self.timeframe)
            .finish_non_exhaustive()
    }
}

impl<P, R: RegulationTag> RecommendationRule<P, R> {
    fn fire(&self, gaps: &[Gap<R>]) -> Recommendation {
        Recommendation {
            id: self.id,
            title: self.title,
            action: self.action,
            priority: self.priority,
            timeframe: self.timeframe,
            gap_ids: gaps
                .iter()
                .filter(|g| (self.addresses)(g))
                .map(|g| g.requirement_id)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Baseline rules
// ---------------------------------------------------------------------------

fn critical_gaps<P, R: RegulationTag>(ctx: &RecommendationContext<'_, P, R>) -> bool {
    ctx.any_gap(is_critical)
}

fn high_gaps<P, R: RegulationTag>(ctx: &RecommendationContext<'_, P, R>) -> bool {
    ctx.any_gap(is_high)
}

fn unassessed<P, R: RegulationTag>(ctx: &RecommendationContext<'_, P, R>) -> bool {
    ctx.any_gap(is_unassessed)
}

fn mandatory_shortfall<P, R: RegulationTag>(ctx: &RecommendationContext<'_, P, R>) -> bool {
    ctx.score.mandatory < 100
        && ctx.any_gap(is_mandatory)
        && !ctx.any_gap(|g| g.risk_level >= RiskLevel::High)
}

fn no_gaps<P, R: RegulationTag>(ctx: &RecommendationContext<'_, P, R>) -> bool {
    ctx.gaps.is_empty()
}

fn is_critical<R>(gap: &Gap<R>) -> bool {
    gap.risk_level == RiskLevel::Critical
}

fn is_high<R>(gap: &Gap<R>) -> bool {
    gap.risk_level == RiskLevel::High
}

fn is_unassessed<R>(gap: &Gap<R>) -> bool {
    gap.current_status == AssessmentStatus::NotAssessed
}

fn is_mandatory<R>(gap: &Gap<R>) -> bool {
    gap.mandatory
}

fn none<R>(_: &Gap<R>) -> bool {
    false
}

/// Generic rules appended after every domain's own rules.
pub fn baseline_rules<P, R: RegulationTag>() -> [RecommendationRule<P, R>; 5] {
    [
        RecommendationRule {
            id: "baseline-critical-gaps",
            title: "Close critical-risk gaps",
            action: "Remediate every critical-risk requirement before further controlled activity",
            priority: 1,
            timeframe: Timeframe::Immediate,
            when: critical_gaps::<P, R>,
            addresses: is_critical::<R>,
        },
        RecommendationRule {
            id: "baseline-high-gaps",
            title: "Close high-risk gaps",
            action: "Assign owners and remediation plans for every high-risk requirement",
            priority: 2,
            timeframe: Timeframe::Days30,
            when: high_gaps::<P, R>,
            addresses: is_high::<R>,
        },
        RecommendationRule {
            id: "baseline-unassessed",
            title: "Complete the assessment",
            action: "Assess every applicable requirement that has no recorded status",
            priority: 3,
            timeframe: Timeframe::Days30,
            when: unassessed::<P, R>,
            addresses: is_unassessed::<R>,
        },
        RecommendationRule {
            id: "baseline-mandatory-shortfall",
            title: "Reach full mandatory compliance",
            action: "Close the remaining medium- and low-risk mandatory requirements",
            priority: 3,
            timeframe: Timeframe::Days90,
            when: mandatory_shortfall::<P, R>,
            addresses: is_mandatory::<R>,
        },
        RecommendationRule {
            id: "baseline-periodic-review",
            title: "Schedule periodic review",
            action: "Re-run the assessment whenever the organization profile or the regulations change",
            priority: 4,
            timeframe: Timeframe::Ongoing,
            when: no_gaps::<P, R>,
            addresses: none::<R>,
        },
    ]
}

/// Fire domain rules, then baseline rules; dedupe by id; sort by priority.
pub fn recommend<P, R: RegulationTag>(
    domain_rules: &[RecommendationRule<P, R>],
    ctx: &RecommendationContext<'_, P, R>,
) -> Vec<Recommendation> {
    let baseline = baseline_rules::<P, R>();
    let mut emitted: BTreeSet<&'static str> = BTreeSet::new();
    let mut out = Vec::new();

    for rule in domain_rules.iter().chain(baseline.iter()) {
        if emitted.contains(rule.id) || !(rule.when)(ctx) {
            continue;
        }
        emitted.insert(rule.id);
        out.push(rule.fire(ctx.gaps));
    }

    out.sort_by_key(|r| r.priority);
    out
}
