//! Corpus authoring helpers shared by the domain modules.

use spacereg_core::{RequirementCategory, RiskLevel};
use spacereg_corpus::{Applicability, Requirement};

/// Named applicability predicate.
pub(crate) const fn on<P>(name: &'static str, test: fn(&P) -> bool) -> Applicability<P> {
    Applicability::new(name, test)
}

/// A requirement that inherits its regulation's penalty.
#[allow(clippy::too_many_arguments)]
pub(crate) const fn req<P, R>(
    id: &'static str,
    regulation: R,
    category: RequirementCategory,
    title: &'static str,
    risk_level: RiskLevel,
    mandatory: bool,
    applicability: Applicability<P>,
    recommendation: &'static str,
    evidence: &'static [&'static str],
) -> Requirement<P, R> {
    Requirement {
        id,
        regulation,
        category,
        title,
        risk_level,
        mandatory,
        applicability,
        recommendation,
        evidence,
        penalty: None,
    }
}

