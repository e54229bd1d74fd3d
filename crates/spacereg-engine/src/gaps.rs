//! # Gap Analyzer
//!
//! Every applicable requirement whose effective status is neither
//! `compliant` nor `not_applicable` becomes a [`Gap`]. Gaps are ordered by
//! risk level, critical first, with corpus order kept among equal risk.

use serde::Serialize;

use spacereg_core::{AssessmentStatus, RequirementCategory, RiskLevel};
use spacereg_corpus::{RegulationTag, Requirement};

use crate::applicability::Applicable;
use crate::snapshot::StatusIndex;

/// An applicable requirement not yet fully satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap<R> {
    /// Requirement id.
    pub requirement_id: &'static str,
    /// Requirement title.
    pub title: &'static str,
    /// Regulation tag.
    pub regulation: R,
    /// Requirement category.
    pub category: RequirementCategory,
    /// Requirement risk level.
    pub risk_level: RiskLevel,
    /// Whether the requirement is mandatory.
    pub mandatory: bool,
    /// Effective status.
    pub current_status: AssessmentStatus,
    /// Remediation text, prefixed by what the status calls for.
    pub recommendation: String,
    /// Formatted maximum penalty, for penalty-bearing regulations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_penalty: Option<String>,
}

impl<R: RegulationTag> Gap<R> {
    fn new<P>(requirement: &Requirement<P, R>, status: AssessmentStatus) -> Self {
        Self {
            requirement_id: requirement.id,
            title: requirement.title,
            regulation: requirement.regulation,
            category: requirement.category,
            risk_level: requirement.risk_level,
            mandatory: requirement.mandatory,
            current_status: status,
            recommendation: format!("{} {}", action_prefix(status), requirement.recommendation),
            potential_penalty: requirement.penalty_reference().map(|p| p.describe()),
        }
    }
}

fn action_prefix(status: AssessmentStatus) -> &'static str {
    match status {
        AssessmentStatus::Partial => "Complete:",
        AssessmentStatus::NonCompliant => "Implement:",
        // Only gap statuses reach here.
        _ => "Assess:",
    }
}

/// Build the risk-ordered gap list.
pub fn analyze<P, R: RegulationTag>(
    applicable: &Applicable<'_, P, R>,
    statuses: &StatusIndex<'_>,
) -> Vec<Gap<R>> {
    let mut gaps: Vec<Gap<R>> = applicable
        .with_statuses(statuses)
        .filter(|(_, status)| status.is_gap())
        .map(|(requirement, status)| Gap::new(requirement, status))
        .collect();
    // Stable: corpus order survives within a risk tier.
    gaps.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicability::resolve;
    use crate::snapshot::RequirementAssessment;
    use crate::testkit::*;

    fn gaps_for(snapshot: &[RequirementAssessment]) -> Vec<Gap<Reg>> {
        let corpus = corpus();
        let applicable = resolve(&profile(true), &corpus);
        analyze(&applicable, &StatusIndex::build(snapshot))
    }

    #[test]
    fn fully_compliant_has_no_gaps() {
        let snapshot: Vec<_> = ALL_IDS
            .iter()
            .map(|id| RequirementAssessment::new(*id, AssessmentStatus::Compliant))
            .collect();
        assert!(gaps_for(&snapshot).is_empty());
    }

    #[test]
    fn not_applicable_is_not_a_gap() {
        let snapshot: Vec<_> = ALL_IDS
            .iter()
            .map(|id| RequirementAssessment::new(*id, AssessmentStatus::NotApplicable))
            .collect();
        assert!(gaps_for(&snapshot).is_empty());
    }

    #[test]
    fn ordered_by_risk_then_corpus_order() {
        let gaps = gaps_for(&[]);
        let ids: Vec<&str> = gaps.iter().map(|g| g.requirement_id).collect();
        // Critical, then the two highs in corpus order, then medium, low.
        assert_eq!(ids, vec!["A-REG-1", "A-CLS-1", "A-LIC-1", "B-REC-1", "B-TRN-1"]);
        assert!(gaps
            .windows(2)
            .all(|w| w[0].risk_level >= w[1].risk_level));
    }

    #[test]
    fn recommendation_prefix_follows_status() {
        let snapshot = vec![
            RequirementAssessment::new("A-REG-1", AssessmentStatus::Partial),
            RequirementAssessment::new("A-CLS-1", AssessmentStatus::NonCompliant),
        ];
        let gaps = gaps_for(&snapshot);
        assert_eq!(gaps[0].recommendation, "Complete: Register with the authority");
        assert_eq!(gaps[1].recommendation, "Implement: Classify all controlled items");
        let unassessed = gaps.iter().find(|g| g.requirement_id == "B-REC-1").unwrap();
        assert!(unassessed.recommendation.starts_with("Assess: "));
        assert_eq!(unassessed.current_status, AssessmentStatus::NotAssessed);
    }

    #[test]
    fn penalty_only_for_penalty_bearing_regulations() {
        let gaps = gaps_for(&[]);
        let alpha = gaps.iter().find(|g| g.regulation == Reg::Alpha).unwrap();
        let penalty = alpha.potential_penalty.as_deref().unwrap();
        assert!(penalty.contains('$'));
        assert_eq!(penalty, "Up to $1,000 per violation (Alpha Act s.1)");
        let beta = gaps.iter().find(|g| g.regulation == Reg::Beta).unwrap();
        assert!(beta.potential_penalty.is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let gaps = gaps_for(&[]);
        let json = serde_json::to_value(&gaps[0]).unwrap();
        assert_eq!(json["requirementId"], "A-REG-1");
        assert_eq!(json["riskLevel"], "critical");
        assert_eq!(json["currentStatus"], "not_assessed");
    }
}
