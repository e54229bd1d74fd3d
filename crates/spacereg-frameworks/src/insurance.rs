//! # Insurance and Liability
//!
//! Third-party liability cover required by national space laws (the French
//! LOS, the UK Space Industry Act), the EU Space Act insurance chapter and
//! the state-liability regime of the 1972 Liability Convention.
//!
//! ## Coverage adequacy
//!
//! The governing minimum comes from [`InsuranceConfig`]: the licensing
//! state's entry when one exists, otherwise the configured default. An
//! insured profile that declares no cover amount is treated as
//! underinsured. Adequacy is the jurisdiction analog of this domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{
    normalize_country, Money, RegulatoryDomain, RequirementCategory as Cat, RiskLevel,
    ValidationError,
};
use spacereg_corpus::{Corpus, CorpusResult, PenaltyReference, RegulationTag};
use spacereg_engine::{
    Applicable, Fallback, Framework, Gap, Profile, RecommendationContext, RecommendationRule, Rule,
    RuleMatch, RuleTable, Timeframe,
};

use crate::authoring::{on, req};
use crate::config::InsuranceConfig;

/// Current corpus version.
pub const VERSION: &str = "2024.1";

/// Fine for operating without authorization under the French LOS.
pub const LOS_FINE: PenaltyReference =
    PenaltyReference::aggregate(Money::eur(200_000), "LOS Art. 11");

/// Activity the cover must protect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuredActivity {
    /// Launch and early orbit.
    Launch,
    /// Routine in-orbit operations.
    InOrbitOperations,
    /// Controlled or uncontrolled re-entry.
    Reentry,
    /// Servicing, refuelling or removal of other objects.
    InOrbitServicing,
}

/// Insurance posture of one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsuranceProfile {
    /// Insured activities. At least one is required.
    pub activities: Vec<InsuredActivity>,
    /// ISO country code of the licensing state.
    pub licensing_state: Option<String>,
    /// Places services on the EU market.
    pub eu_market: bool,
    /// Holds third-party liability cover.
    pub has_third_party_liability: bool,
    /// Third-party liability limit in euros.
    pub third_party_cover_eur: Option<u64>,
    /// Holds launch insurance.
    pub has_launch_insurance: bool,
    /// Holds in-orbit insurance.
    pub has_in_orbit_insurance: bool,
    /// Insured value of the spacecraft in euros.
    pub satellite_value_eur: Option<u64>,
}

impl Profile for InsuranceProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.activities.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "insured activity",
            });
        }
        Ok(())
    }
}

impl InsuranceProfile {
    fn does(&self, activity: InsuredActivity) -> bool {
        self.activities.contains(&activity)
    }

    /// Normalized licensing state, if any.
    pub fn state(&self) -> Option<String> {
        self.licensing_state
            .as_deref()
            .map(normalize_country)
            .filter(|s| !s.is_empty())
    }

    fn licensed_in(&self, code: &str) -> bool {
        self.state().as_deref() == Some(code)
    }

    fn in_orbit(&self) -> bool {
        self.does(InsuredActivity::InOrbitOperations) || self.does(InsuredActivity::InOrbitServicing)
    }
}

/// Insurance regime a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceRegime {
    /// French Space Operations Act (LOS, 2008).
    FrenchSpaceOperationsAct,
    /// UK Space Industry Act 2018.
    UkSpaceIndustryAct,
    /// EU Space Act insurance chapter.
    EuSpaceAct,
    /// Convention on International Liability for Damage Caused by Space
    /// Objects (1972).
    LiabilityConvention,
}

impl fmt::Display for InsuranceRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for InsuranceRegime {
    fn code(self) -> &'static str {
        match self {
            Self::FrenchSpaceOperationsAct => "LOS",
            Self::UkSpaceIndustryAct => "SIA 2018",
            Self::EuSpaceAct => "EU Space Act",
            Self::LiabilityConvention => "Liability Convention",
        }
    }

    fn penalty(self) -> Option<PenaltyReference> {
        match self {
            Self::FrenchSpaceOperationsAct => Some(LOS_FINE),
            Self::UkSpaceIndustryAct | Self::EuSpaceAct | Self::LiabilityConvention => None,
        }
    }
}

// ── Coverage adequacy ───────────────────────────────────────────────────────

/// Third-party liability cover against the governing minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageAdequacy {
    /// Cover meets the minimum.
    Adequate,
    /// Cover is below the minimum or undeclared.
    Underinsured,
    /// No third-party liability cover.
    Uninsured,
}

impl fmt::Display for CoverageAdequacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Adequate => "adequate",
            Self::Underinsured => "underinsured",
            Self::Uninsured => "uninsured",
        })
    }
}

/// Facts the adequacy table is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageInput {
    /// Holds third-party liability cover.
    pub insured: bool,
    /// Declared limit; zero when undeclared.
    pub cover_eur: u64,
    /// Governing minimum.
    pub minimum_eur: u64,
}

impl CoverageInput {
    /// Combine a profile with the configured minimum for its state.
    pub fn new(profile: &InsuranceProfile, config: &InsuranceConfig) -> Self {
        let (minimum_eur, _) = config.minimum_for(profile.state().as_deref());
        Self {
            insured: profile.has_third_party_liability,
            cover_eur: profile.third_party_cover_eur.unwrap_or(0),
            minimum_eur,
        }
    }
}

fn uninsured(c: &CoverageInput) -> bool {
    !c.insured
}

fn below_minimum(c: &CoverageInput) -> bool {
    c.cover_eur < c.minimum_eur
}

/// Coverage adequacy, first match wins.
pub static COVERAGE_ADEQUACY: RuleTable<CoverageInput, CoverageAdequacy> = RuleTable::new(
    &[
        Rule {
            id: "no-cover",
            reason: "no third-party liability cover",
            when: uninsured,
            outcome: CoverageAdequacy::Uninsured,
        },
        Rule {
            id: "below-minimum",
            reason: "declared cover below the governing minimum",
            when: below_minimum,
            outcome: CoverageAdequacy::Underinsured,
        },
    ],
    Fallback {
        id: "meets-minimum",
        reason: "declared cover meets the governing minimum",
        outcome: CoverageAdequacy::Adequate,
    },
);

// ── Risk ────────────────────────────────────────────────────────────────────

fn no_tpl(p: &InsuranceProfile) -> bool {
    !p.has_third_party_liability
}

fn launch_uninsured(p: &InsuranceProfile) -> bool {
    p.does(InsuredActivity::Launch) && !p.has_launch_insurance
}

fn no_licensing_state(p: &InsuranceProfile) -> bool {
    p.state().is_none()
}

fn reentry(p: &InsuranceProfile) -> bool {
    p.does(InsuredActivity::Reentry)
}

/// Overall insurance risk, first match wins.
pub static RISK_RULES: RuleTable<InsuranceProfile, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "no-third-party-liability",
            reason: "no third-party liability cover",
            when: no_tpl,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "launch-uninsured",
            reason: "launch activity without launch insurance",
            when: launch_uninsured,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "no-licensing-state",
            reason: "no licensing state recorded",
            when: no_licensing_state,
            outcome: RiskLevel::Medium,
        },
        Rule {
            id: "reentry-activity",
            reason: "re-entry exposes third parties on the ground",
            when: reentry,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "covered",
        reason: "third-party liability cover in place",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

fn always(_: &InsuranceProfile) -> bool {
    true
}

fn france(p: &InsuranceProfile) -> bool {
    p.licensed_in("FR")
}

fn united_kingdom(p: &InsuranceProfile) -> bool {
    p.licensed_in("GB")
}

fn eu(p: &InsuranceProfile) -> bool {
    p.eu_market
}

fn in_orbit(p: &InsuranceProfile) -> bool {
    p.in_orbit()
}

fn launches(p: &InsuranceProfile) -> bool {
    p.does(InsuredActivity::Launch)
}

/// Build the insurance corpus.
pub fn corpus() -> CorpusResult<Corpus<InsuranceProfile, InsuranceRegime>> {
    use InsuranceRegime::{EuSpaceAct, FrenchSpaceOperationsAct, LiabilityConvention, UkSpaceIndustryAct};
    use RiskLevel::{Critical, High, Medium};

    Corpus::new(
        RegulatoryDomain::Insurance,
        VERSION,
        vec![
            req(
                "LOS-TPL-001",
                FrenchSpaceOperationsAct,
                Cat::Coverage,
                "Third-party liability insurance or guarantee",
                Critical,
                true,
                on("licensed_in_fr", france),
                "Hold third-party liability cover up to the LOS ceiling for the authorized operation",
                &["Insurance certificate", "Financial guarantee"],
            ),
            req(
                "LOS-AUTH-001",
                FrenchSpaceOperationsAct,
                Cat::Licensing,
                "Space operation authorization",
                High,
                true,
                on("licensed_in_fr", france),
                "Obtain authorization from the minister responsible for space before the operation",
                &["LOS authorization"],
            ),
            req(
                "SIA-TPL-001",
                UkSpaceIndustryAct,
                Cat::Coverage,
                "Operator liability insurance",
                Critical,
                true,
                on("licensed_in_gb", united_kingdom),
                "Insure operator liability to the amount set in the licence",
                &["Insurance certificate"],
            ),
            req(
                "SIA-LIC-001",
                UkSpaceIndustryAct,
                Cat::Licensing,
                "Operator licence",
                High,
                true,
                on("licensed_in_gb", united_kingdom),
                "Hold a UK operator licence for each licensable activity",
                &["Operator licence"],
            ),
            req(
                "EUSA-INS-001",
                EuSpaceAct,
                Cat::Coverage,
                "Minimum third-party liability cover",
                High,
                true,
                on("eu_market", eu),
                "Hold third-party liability cover at or above the governing minimum",
                &["Insurance certificate"],
            ),
            req(
                "INS-IOO-001",
                EuSpaceAct,
                Cat::Coverage,
                "In-orbit third-party liability",
                Medium,
                false,
                on("in_orbit", in_orbit),
                "Extend liability cover to in-orbit collisions and servicing operations",
                &["In-orbit policy schedule"],
            ),
            req(
                "LIAB-IND-001",
                LiabilityConvention,
                Cat::Governance,
                "Recourse arrangement with the launching state",
                Medium,
                true,
                on("always", always),
                "Document the indemnification and recourse terms agreed with the launching state",
                &["Recourse agreement"],
            ),
            req(
                "INS-LCH-001",
                LiabilityConvention,
                Cat::Coverage,
                "Launch third-party cover",
                High,
                true,
                on("launches", launches),
                "Insure third-party damage on the ground and in airspace during launch",
                &["Launch insurance policy"],
            ),
        ],
    )
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// Where the governing minimum came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumSource {
    /// The licensing state's configured minimum.
    LicensingState,
    /// The configured default.
    Default,
}

/// Insurance sub-assessor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceFindings {
    /// Normalized licensing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licensing_state: Option<String>,
    /// Governing third-party liability minimum.
    pub governing_minimum: Money,
    /// Source of the minimum.
    pub minimum_source: MinimumSource,
    /// Declared cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_cover: Option<Money>,
    /// Amount missing to reach the minimum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<Money>,
    /// Adequacy of the declared cover.
    pub adequacy: CoverageAdequacy,
    /// Policies the activities call for.
    pub recommended_policies: Vec<&'static str>,
}

/// Run the insurance sub-assessors.
pub fn findings(profile: &InsuranceProfile, config: &InsuranceConfig) -> InsuranceFindings {
    let licensing_state = profile.state();
    let (minimum, from_state) = config.minimum_for(licensing_state.as_deref());
    let input = CoverageInput::new(profile, config);
    let current_cover = profile
        .has_third_party_liability
        .then_some(profile.third_party_cover_eur)
        .flatten()
        .map(Money::eur);

    let shortfall = (input.cover_eur < minimum).then(|| Money::eur(minimum - input.cover_eur));

    let mut recommended_policies = vec!["Third-party liability"];
    if profile.does(InsuredActivity::Launch) {
        recommended_policies.push("Launch insurance");
    }
    if profile.in_orbit() {
        recommended_policies.push("In-orbit insurance");
    }
    if profile.does(InsuredActivity::Reentry) {
        recommended_policies.push("Re-entry third-party liability");
    }
    if profile.satellite_value_eur.is_some_and(|v| v > 0) {
        recommended_policies.push("Spacecraft property insurance");
    }

    InsuranceFindings {
        licensing_state,
        governing_minimum: Money::eur(minimum),
        minimum_source: if from_state {
            MinimumSource::LicensingState
        } else {
            MinimumSource::Default
        },
        current_cover,
        shortfall,
        adequacy: COVERAGE_ADEQUACY.evaluate(&input).outcome,
        recommended_policies,
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

type Ctx<'a> = RecommendationContext<'a, InsuranceProfile, InsuranceRegime>;

fn tpl_missing(ctx: &Ctx<'_>) -> bool {
    no_tpl(ctx.profile)
}

fn is_tpl(gap: &Gap<InsuranceRegime>) -> bool {
    matches!(gap.requirement_id, "LOS-TPL-001" | "SIA-TPL-001" | "EUSA-INS-001")
}

fn coverage_gaps(ctx: &Ctx<'_>) -> bool {
    ctx.any_gap(is_coverage)
}

fn is_coverage(gap: &Gap<InsuranceRegime>) -> bool {
    gap.category == Cat::Coverage
}

fn launch_cover_missing(ctx: &Ctx<'_>) -> bool {
    launch_uninsured(ctx.profile)
}

fn is_launch_cover(gap: &Gap<InsuranceRegime>) -> bool {
    gap.requirement_id == "INS-LCH-001"
}

/// Insurance domain recommendation rules.
pub static RECOMMENDATION_RULES: &[RecommendationRule<InsuranceProfile, InsuranceRegime>] = &[
    RecommendationRule {
        id: "ins-obtain-tpl",
        title: "Obtain third-party liability cover",
        action: "Place third-party liability cover at or above the governing minimum before operating",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: tpl_missing,
        addresses: is_tpl,
    },
    RecommendationRule {
        id: "ins-coverage-gaps",
        title: "Close coverage gaps",
        action: "Review policy schedules against every applicable coverage obligation",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: coverage_gaps,
        addresses: is_coverage,
    },
    RecommendationRule {
        id: "ins-launch-insurance",
        title: "Insure the launch",
        action: "Bind launch third-party and property cover before the launch campaign starts",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: launch_cover_missing,
        addresses: is_launch_cover,
    },
];

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The insurance framework.
#[derive(Debug)]
pub struct Insurance {
    corpus: Corpus<InsuranceProfile, InsuranceRegime>,
    config: InsuranceConfig,
}

impl Insurance {
    /// Build the framework, validating its corpus.
    pub fn new(config: &InsuranceConfig) -> CorpusResult<Self> {
        Ok(Self {
            corpus: corpus()?,
            config: config.clone(),
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &InsuranceConfig {
        &self.config
    }
}

impl Framework for Insurance {
    type Profile = InsuranceProfile;
    type Regulation = InsuranceRegime;
    type Jurisdiction = CoverageAdequacy;
    type Findings = InsuranceFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::Insurance
    }

    fn corpus(&self) -> &Corpus<InsuranceProfile, InsuranceRegime> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<InsuranceProfile, RiskLevel> {
        &RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &InsuranceProfile) -> RuleMatch<CoverageAdequacy> {
        COVERAGE_ADEQUACY.evaluate(&CoverageInput::new(profile, &self.config))
    }

    fn findings(
        &self,
        profile: &InsuranceProfile,
        _applicable: &Applicable<'_, InsuranceProfile, InsuranceRegime>,
    ) -> InsuranceFindings {
        findings(profile, &self.config)
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<InsuranceProfile, InsuranceRegime>] {
        RECOMMENDATION_RULES
    }
}
