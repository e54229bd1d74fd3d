//! # Assessment Orchestrator
//!
//! The single entry point external callers use. [`assess`] validates the
//! profile, then runs resolution, scoring, classification, gap analysis,
//! the domain's sub-assessors and recommendation generation, and returns
//! one immutable [`AssessmentReport`].
//!
//! Validation is the only failure mode. A validation error is returned
//! before any other work happens, so there are no partial reports.

use serde::Serialize;

use spacereg_core::{CorpusDigest, RegulatoryDomain, ValidationError};

use crate::applicability::{resolve, Applicable};
use crate::classification::RiskClassification;
use crate::framework::{Framework, Profile};
use crate::gaps::{analyze, Gap};
use crate::recommend::{recommend, Recommendation, RecommendationContext};
use crate::scoring::{score, ComplianceScore, StatusCounts};
use crate::snapshot::{RequirementAssessment, StatusIndex};

/// Everything the engine derives for one (profile, snapshot) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport<R: Ord, J, X> {
    /// Domain assessed.
    pub domain: RegulatoryDomain,
    /// Version of the corpus used.
    pub corpus_version: String,
    /// Fingerprint of the corpus used.
    pub corpus_digest: CorpusDigest,
    /// Applicable requirement ids in corpus order.
    pub applicable_requirements: Vec<&'static str>,
    /// Score breakdown.
    pub score: ComplianceScore<R>,
    /// Status histogram over the applicable set.
    pub status_counts: StatusCounts,
    /// Risk-ordered gaps.
    pub gaps: Vec<Gap<R>>,
    /// Risk and jurisdiction classification.
    pub classification: RiskClassification<J>,
    /// Domain sub-assessor output.
    pub findings: X,
    /// Prioritized actions.
    pub recommendations: Vec<Recommendation>,
}

/// The report type produced by framework `F`.
pub type ReportOf<F> = AssessmentReport<
    <F as Framework>::Regulation,
    <F as Framework>::Jurisdiction,
    <F as Framework>::Findings,
>;

/// Assess `profile` against `framework` with the given status snapshot.
pub fn assess<F: Framework>(
    framework: &F,
    profile: &F::Profile,
    snapshot: &[RequirementAssessment],
) -> Result<ReportOf<F>, ValidationError> {
    profile.validate()?;

    let corpus = framework.corpus();
    let applicable = resolve(profile, corpus);
    let statuses = StatusIndex::build(snapshot);
    log_unmatched(framework.domain(), &applicable, &statuses, |id| corpus.contains(id));

    let score = score(&applicable, &statuses);
    let status_counts = StatusCounts::tally(&applicable, &statuses);
    let classification = RiskClassification::from_matches(
        framework.classify_risk(profile),
        framework.classify_jurisdiction(profile),
    );
    let gaps = analyze(&applicable, &statuses);
    let findings = framework.findings(profile, &applicable);
    let recommendations = recommend(
        framework.recommendation_rules(),
        &RecommendationContext {
            profile,
            gaps: &gaps,
            score: &score,
        },
    );

    tracing::debug!(
        domain = %framework.domain(),
        applicable = applicable.len(),
        overall = score.overall,
        mandatory = score.mandatory,
        gaps = gaps.len(),
        risk = %classification.overall_risk,
        jurisdiction = %classification.jurisdiction,
        recommendations = recommendations.len(),
        "assessment complete"
    );

    Ok(AssessmentReport {
        domain: framework.domain(),
        corpus_version: corpus.version().to_string(),
        corpus_digest: corpus.digest().clone(),
        applicable_requirements: applicable.ids(),
        score,
        status_counts,
        gaps,
        classification,
        findings,
        recommendations,
    })
}

fn log_unmatched<P, R: spacereg_corpus::RegulationTag>(
    domain: RegulatoryDomain,
    applicable: &Applicable<'_, P, R>,
    statuses: &StatusIndex<'_>,
    in_corpus: impl Fn(&str) -> bool,
) {
    for id in statuses.ids() {
        if applicable.contains(id) {
            continue;
        }
        if in_corpus(id) {
            tracing::debug!(domain = %domain, requirement_id = id, "ignoring status for inapplicable requirement");
        } else {
            tracing::debug!(domain = %domain, requirement_id = id, "ignoring status for unknown requirement");
        }
    }
}

/// A framework bound to the engine.
///
/// Thin owner around a [`Framework`]; every method borrows immutably, so a
/// shared `&Engine<F>` can serve concurrent callers.
#[derive(Debug)]
pub struct Engine<F> {
    framework: F,
}

impl<F: Framework> Engine<F> {
    /// Wrap a constructed framework.
    pub fn new(framework: F) -> Self {
        Self { framework }
    }

    /// The wrapped framework.
    pub fn framework(&self) -> &F {
        &self.framework
    }

    /// Domain of the wrapped framework.
    pub fn domain(&self) -> RegulatoryDomain {
        self.framework.domain()
    }

    /// Requirements applicable to `profile`, in corpus order.
    pub fn resolve<'a>(&'a self, profile: &F::Profile) -> Applicable<'a, F::Profile, F::Regulation> {
        resolve(profile, self.framework.corpus())
    }

    /// Run a full assessment.
    pub fn assess(
        &self,
        profile: &F::Profile,
        snapshot: &[RequirementAssessment],
    ) -> Result<ReportOf<F>, ValidationError> {
        assess(&self.framework, profile, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::*;
    use spacereg_core::{AssessmentStatus, RiskLevel};

    fn engine() -> Engine<TestFramework> {
        Engine::new(TestFramework::new())
    }

    #[test]
    fn validation_error_returned_before_any_work() {
        let mut p = profile(true);
        p.kinds.clear();
        let err = engine().assess(&p, &[]).unwrap_err();
        assert_eq!(err.to_string(), "At least one kind is required");
    }

    #[test]
    fn fully_compliant_report() {
        let snapshot: Vec<_> = ALL_IDS
            .iter()
            .map(|id| RequirementAssessment::new(*id, AssessmentStatus::Compliant))
            .collect();
        let report = engine().assess(&profile(true), &snapshot).unwrap();
        assert_eq!(report.score.overall, 100);
        assert!(report.gaps.is_empty());
        assert_eq!(report.status_counts.compliant, ALL_IDS.len());
        assert_eq!(report.recommendations[0].id, "baseline-periodic-review");
        assert_eq!(report.findings.applicable, ALL_IDS.len());
    }

    #[test]
    fn classification_independent_of_statuses() {
        let e = engine();
        let empty = e.assess(&profile(true), &[]).unwrap();
        let snapshot: Vec<_> = ALL_IDS
            .iter()
            .map(|id| RequirementAssessment::new(*id, AssessmentStatus::Compliant))
            .collect();
        let done = e.assess(&profile(true), &snapshot).unwrap();
        assert_eq!(empty.classification, done.classification);
        assert_eq!(done.classification.overall_risk, RiskLevel::High);
    }

    #[test]
    fn report_carries_corpus_identity() {
        let e = engine();
        let report = e.assess(&profile(false), &[]).unwrap();
        assert_eq!(report.corpus_version, "test-1");
        assert_eq!(&report.corpus_digest, e.framework().corpus.digest());
        assert_eq!(report.applicable_requirements, e.resolve(&profile(false)).ids());
        assert_eq!(report.domain, e.domain());
    }

    #[test]
    fn repeated_calls_serialize_identically() {
        let e = engine();
        let snapshot = vec![
            RequirementAssessment::new("A-REG-1", AssessmentStatus::Partial),
            RequirementAssessment::new("B-REC-1", AssessmentStatus::NonCompliant),
            RequirementAssessment::new("GONE-1", AssessmentStatus::Compliant),
        ];
        let a = serde_json::to_string(&e.assess(&profile(true), &snapshot).unwrap()).unwrap();
        let b = serde_json::to_string(&e.assess(&profile(true), &snapshot).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn report_json_shape() {
        let report = engine().assess(&profile(true), &[]).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "domain",
            "corpusVersion",
            "corpusDigest",
            "applicableRequirements",
            "score",
            "statusCounts",
            "gaps",
            "classification",
            "findings",
            "recommendations",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["corpusDigest"].as_str().unwrap().len() == 64);
        assert!(json["score"]["byRegulation"].get("Alpha").is_some());
        assert_eq!(json["classification"]["overallRisk"], "high");
    }
}
