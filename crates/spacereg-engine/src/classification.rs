//! Risk and jurisdiction classification output.
//!
//! Both classifiers are first-match rule tables over the profile alone; the
//! classification never depends on assessment statuses.

use serde::Serialize;

use spacereg_core::RiskLevel;

use crate::rules::RuleMatch;

/// Overall risk level plus the domain's jurisdiction analog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskClassification<J> {
    /// Overall risk level.
    pub overall_risk: RiskLevel,
    /// Jurisdiction tag (or domain analog).
    pub jurisdiction: J,
    /// Which rules fired, in words.
    pub reason: String,
    /// Id of the risk rule that fired.
    pub risk_rule: &'static str,
    /// Id of the jurisdiction rule that fired.
    pub jurisdiction_rule: &'static str,
}

impl<J: Copy> RiskClassification<J> {
    /// Combine the two rule-table results.
    pub fn from_matches(risk: RuleMatch<RiskLevel>, jurisdiction: RuleMatch<J>) -> Self {
        Self {
            overall_risk: risk.outcome,
            jurisdiction: jurisdiction.outcome,
            reason: format!(
                "{} [{}]; {} [{}]",
                risk.reason, risk.rule_id, jurisdiction.reason, jurisdiction.rule_id
            ),
            risk_rule: risk.rule_id,
            jurisdiction_rule: jurisdiction.rule_id,
        }
    }
}
