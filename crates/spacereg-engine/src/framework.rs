//! # Domain Frameworks
//!
//! The seam between the generic engine and one regulatory domain.
//!
//! A [`Framework`] is built once per process (its corpus validated at
//! construction) and then only borrowed. Every method is a pure function of
//! its arguments and the framework's frozen data, so one instance can serve
//! concurrent assessments without locking.

use std::fmt;

use serde::Serialize;

use spacereg_core::{RegulatoryDomain, RiskLevel, ValidationError};
use spacereg_corpus::{Corpus, RegulationTag};

use crate::applicability::Applicable;
use crate::recommend::RecommendationRule;
use crate::rules::{RuleMatch, RuleTable};

/// A caller-supplied organization profile.
///
/// Optional fields default to `false`/empty; only a missing primary
/// classification is an error.
pub trait Profile: 'static {
    /// Check that the mandatory primary classification is present.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// One regulatory domain plugged into the engine.
pub trait Framework: Send + Sync {
    /// Organization profile for this domain.
    type Profile: Profile;
    /// Regulation tag of this domain's requirements.
    type Regulation: RegulationTag;
    /// Jurisdiction analog reported in the classification.
    type Jurisdiction: Copy + fmt::Debug + fmt::Display + PartialEq + Serialize;
    /// Structured output of this domain's sub-assessors.
    type Findings: fmt::Debug + Serialize;

    /// Domain identity.
    fn domain(&self) -> RegulatoryDomain;

    /// The frozen requirement corpus.
    fn corpus(&self) -> &Corpus<Self::Profile, Self::Regulation>;

    /// Ordered risk-precedence table.
    fn risk_rules(&self) -> &RuleTable<Self::Profile, RiskLevel>;

    /// Overall risk level for a profile. First matching rule wins.
    fn classify_risk(&self, profile: &Self::Profile) -> RuleMatch<RiskLevel> {
        self.risk_rules().evaluate(profile)
    }

    /// Jurisdiction (or domain analog) for a profile.
    fn classify_jurisdiction(&self, profile: &Self::Profile) -> RuleMatch<Self::Jurisdiction>;

    /// Run the domain's sub-assessors. Independent of assessment statuses.
    fn findings(
        &self,
        profile: &Self::Profile,
        applicable: &Applicable<'_, Self::Profile, Self::Regulation>,
    ) -> Self::Findings;

    /// Domain recommendation rules, evaluated before the baseline rules.
    fn recommendation_rules(&self) -> &[RecommendationRule<Self::Profile, Self::Regulation>];
}
