//! # Requirements
//!
//! A [`Requirement`] is a single regulatory obligation. Its applicability is
//! a named predicate over the domain's profile type, fixed when the corpus
//! is authored. The name is kept alongside the function pointer so corpus
//! listings and debug output can say *why* a requirement applies.

use std::fmt;

use serde::Serialize;

use spacereg_core::{RequirementCategory, RiskLevel};

use crate::penalty::PenaltyReference;
use crate::regulation::RegulationTag;

/// Named applicability predicate over a profile of type `P`.
pub struct Applicability<P> {
    /// Human-readable predicate name, e.g. `"has_itar_items"`.
    pub name: &'static str,
    /// The predicate itself. Must be pure.
    pub test: fn(&P) -> bool,
}

impl<P> Applicability<P> {
    /// Pair a predicate with its name.
    pub const fn new(name: &'static str, test: fn(&P) -> bool) -> Self {
        Self { name, test }
    }

    /// Evaluate the predicate.
    pub fn applies(&self, profile: &P) -> bool {
        (self.test)(profile)
    }
}

impl<P> Clone for Applicability<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Applicability<P> {}

impl<P> fmt::Debug for Applicability<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Applicability").field(&self.name).finish()
    }
}

/// One regulatory obligation within a domain corpus.
pub struct Requirement<P, R> {
    /// Unique id within the corpus, e.g. `"ITAR-REG-001"`.
    pub id: &'static str,
    /// Regulation this requirement belongs to.
    pub regulation: R,
    /// Functional category.
    pub category: RequirementCategory,
    /// Short title.
    pub title: &'static str,
    /// Risk weight used in scoring and gap ordering.
    pub risk_level: RiskLevel,
    /// Whether the requirement counts toward the mandatory score.
    pub mandatory: bool,
    /// When the requirement applies.
    pub applicability: Applicability<P>,
    /// Remediation guidance shown on gaps.
    pub recommendation: &'static str,
    /// Evidence an assessor would expect to see.
    pub evidence: &'static [&'static str],
    /// Penalty override. Falls back to the regulation's default.
    pub penalty: Option<PenaltyReference>,
}

impl<P, R: RegulationTag> Requirement<P, R> {
    /// Whether this requirement applies to `profile`.
    pub fn applies_to(&self, profile: &P) -> bool {
        self.applicability.applies(profile)
    }

    /// Effective penalty: the requirement's own, else the regulation's.
    pub fn penalty_reference(&self) -> Option<PenaltyReference> {
        self.penalty.or_else(|| self.regulation.penalty())
    }

    /// Serializable view of this requirement.
    pub fn summary(&self) -> RequirementSummary<R> {
        RequirementSummary {
            id: self.id,
            regulation: self.regulation,
            category: self.category,
            title: self.title,
            risk_level: self.risk_level,
            mandatory: self.mandatory,
            applies_when: self.applicability.name,
            recommendation: self.recommendation,
            evidence: self.evidence,
            penalty: self.penalty_reference(),
        }
    }
}

impl<P, R: fmt::Debug> fmt::Debug for Requirement<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("id", &self.id)
            .field("regulation", &self.regulation)
            .field("category", &self.category)
            .field("risk_level", &self.risk_level)
            .field("mandatory", &self.mandatory)
            .field("applicability", &self.applicability)
            .finish_non_exhaustive()
    }
}

/// Profile-independent, serializable view of a [`Requirement`].
///
/// Used for corpus listings and as the input to the corpus digest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSummary<R> {
    /// Requirement id.
    pub id: &'static str,
    /// Regulation tag.
    pub regulation: R,
    /// Functional category.
    pub category: RequirementCategory,
    /// Short title.
    pub title: &'static str,
    /// Risk weight.
    pub risk_level: RiskLevel,
    /// Mandatory flag.
    pub mandatory: bool,
    /// Name of the applicability predicate.
    pub applies_when: &'static str,
    /// Remediation guidance.
    pub recommendation: &'static str,
    /// Expected evidence.
    pub evidence: &'static [&'static str],
    /// Effective penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<PenaltyReference>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Minimal regulation tag and profile shared by corpus tests.

    use serde::{Deserialize, Serialize};
    use spacereg_core::Money;

    use super::*;

    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    pub enum Reg {
        Alpha,
        Beta,
    }

    impl fmt::Display for Reg {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.code())
        }
    }

    impl RegulationTag for Reg {
        fn code(self) -> &'static str {
            match self {
                Self::Alpha => "ALPHA",
                Self::Beta => "BETA",
            }
        }

        fn penalty(self) -> Option<PenaltyReference> {
            match self {
                Self::Alpha => Some(PenaltyReference::per_violation(
                    Money::usd(1_000),
                    "Alpha Act s.1",
                )),
                Self::Beta => None,
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct Profile {
        pub flag: bool,
    }

    pub fn always(_: &Profile) -> bool {
        true
    }

    pub fn flagged(p: &Profile) -> bool {
        p.flag
    }

    pub fn requirement(id: &'static str, regulation: Reg) -> Requirement<Profile, Reg> {
        Requirement {
            id,
            regulation,
            category: RequirementCategory::Registration,
            title: "Register",
            risk_level: RiskLevel::High,
            mandatory: true,
            applicability: Applicability::new("always", always),
            recommendation: "Register with the authority",
            evidence: &["Registration letter"],
            penalty: None,
        }
    }
}
