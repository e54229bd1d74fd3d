//! Small two-regulation domain used by the engine's unit tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{Money, RegulatoryDomain, RequirementCategory, RiskLevel, ValidationError};
use spacereg_corpus::{Applicability, Corpus, PenaltyReference, RegulationTag, Requirement};

use crate::applicability::Applicable;
use crate::framework::{Framework, Profile};
use crate::recommend::{RecommendationContext, RecommendationRule, Timeframe};
use crate::rules::{Fallback, Rule, RuleMatch, RuleTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Default)]
pub struct TestProfile {
    pub kinds: Vec<String>,
    pub exporting: bool,
}

impl Profile for TestProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.kinds.is_empty() {
            return Err(ValidationError::MissingClassification { field: "kind" });
        }
        Ok(())
    }
}

pub fn profile(exporting: bool) -> TestProfile {
    TestProfile {
        kinds: vec!["manufacturer".to_string()],
        exporting,
    }
}

fn always(_: &TestProfile) -> bool {
    true
}

fn exporting(p: &TestProfile) -> bool {
    p.exporting
}

/// Every requirement id, in corpus order.
pub const ALL_IDS: &[&str] = &["A-REG-1", "A-CLS-1", "A-LIC-1", "B-REC-1", "B-TRN-1"];

#[allow(clippy::too_many_arguments)]
fn req(
    id: &'static str,
    regulation: Reg,
    category: RequirementCategory,
    title: &'static str,
    risk_level: RiskLevel,
    mandatory: bool,
    applicability: Applicability<TestProfile>,
    recommendation: &'static str,
    evidence: &'static [&'static str],
) -> Requirement<TestProfile, Reg> {
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

pub fn corpus() -> Corpus<TestProfile, Reg> {
    let always = Applicability::new("always", always);
    Corpus::new(
        RegulatoryDomain::ExportControl,
        "test-1",
        vec![
            req(
                "A-REG-1",
                Reg::Alpha,
                RequirementCategory::Registration,
                "Register with the authority",
                RiskLevel::Critical,
                true,
                always,
                "Register with the authority",
                &["Registration letter"],
            ),
            req(
                "A-CLS-1",
                Reg::Alpha,
                RequirementCategory::Classification,
                "Classify items",
                RiskLevel::High,
                true,
                always,
                "Classify all controlled items",
                &["Classification memo"],
            ),
            req(
                "A-LIC-1",
                Reg::Alpha,
                RequirementCategory::Licensing,
                "Obtain an export licence",
                RiskLevel::High,
                true,
                Applicability::new("exporting", exporting),
                "Apply for an export licence",
                &["Licence", "Registration letter"],
            ),
            req(
                "B-REC-1",
                Reg::Beta,
                RequirementCategory::Recordkeeping,
                "Keep records",
                RiskLevel::Medium,
                true,
                always,
                "Keep export records for five years",
                &["Records policy"],
            ),
            req(
                "B-TRN-1",
                Reg::Beta,
                RequirementCategory::Training,
                "Train staff",
                RiskLevel::Low,
                false,
                always,
                "Train staff annually",
                &["Training log"],
            ),
        ],
    )
    .expect("test corpus is valid")
}

fn register_gap(ctx: &RecommendationContext<'_, TestProfile, Reg>) -> bool {
    ctx.profile.exporting && ctx.has_gap("A-REG-1")
}

fn is_registration(gap: &crate::gaps::Gap<Reg>) -> bool {
    gap.requirement_id == "A-REG-1"
}

pub fn test_rules() -> Vec<RecommendationRule<TestProfile, Reg>> {
    vec![RecommendationRule {
        id: "register-now",
        title: "Register",
        action: "Register with the authority before exporting",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: register_gap,
        addresses: is_registration,
    }]
}

static RISK: RuleTable<TestProfile, RiskLevel> = RuleTable::new(
    &[Rule {
        id: "exporting",
        reason: "exports controlled items",
        when: exporting,
        outcome: RiskLevel::High,
    }],
    Fallback {
        id: "baseline",
        reason: "no export activity",
        outcome: RiskLevel::Low,
    },
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Domestic,
    Foreign,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domestic => "domestic",
            Self::Foreign => "foreign",
        })
    }
}

static SCOPE: RuleTable<TestProfile, Scope> = RuleTable::new(
    &[Rule {
        id: "foreign",
        reason: "exports abroad",
        when: exporting,
        outcome: Scope::Foreign,
    }],
    Fallback {
        id: "domestic",
        reason: "domestic only",
        outcome: Scope::Domestic,
    },
);

#[derive(Debug, Serialize)]
pub struct TestFindings {
    pub applicable: usize,
}

pub struct TestFramework {
    pub corpus: Corpus<TestProfile, Reg>,
    rules: Vec<RecommendationRule<TestProfile, Reg>>,
}

impl fmt::Debug for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestFramework").finish_non_exhaustive()
    }
}

impl TestFramework {
    pub fn new() -> Self {
        Self {
            corpus: corpus(),
            rules: test_rules(),
        }
    }
}

impl Framework for TestFramework {
    type Profile = TestProfile;
    type Regulation = Reg;
    type Jurisdiction = Scope;
    type Findings = TestFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::ExportControl
    }

    fn corpus(&self) -> &Corpus<TestProfile, Reg> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<TestProfile, RiskLevel> {
        &RISK
    }

    fn classify_jurisdiction(&self, profile: &TestProfile) -> RuleMatch<Scope> {
        SCOPE.evaluate(profile)
    }

    fn findings(
        &self,
        _profile: &TestProfile,
        applicable: &Applicable<'_, TestProfile, Reg>,
    ) -> TestFindings {
        TestFindings {
            applicable: applicable.len(),
        }
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<TestProfile, Reg>] {
        &self.rules
    }
}
