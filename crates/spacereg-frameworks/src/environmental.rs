//! # Environmental Footprint
//!
//! Environmental Footprint Declarations under the EU Space Act, REACH
//! authorization of hydrazine and other substances of very high concern,
//! ISO 14001 environmental management and CSRD sustainability reporting.
//!
//! The jurisdiction analog is the [`DeclarationScope`]: launch providers,
//! large organizations and hydrazine users file the full declaration,
//! everyone else the simplified one.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{
    OrganizationSize, RegulatoryDomain, RequirementCategory as Cat, RiskLevel, ValidationError,
};
use spacereg_corpus::{Corpus, CorpusResult, PenaltyReference, RegulationTag};
use spacereg_engine::{
    Applicable, Fallback, Framework, Gap, Profile, RecommendationContext, RecommendationRule, Rule,
    RuleMatch, RuleTable, Timeframe,
};

use crate::authoring::{on, req};

/// Current corpus version.
pub const VERSION: &str = "2024.1";

/// Environmental role of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalOperatorType {
    /// Provides launch services.
    LaunchProvider,
    /// Operates satellites.
    SatelliteOperator,
    /// Builds spacecraft.
    SpacecraftManufacturer,
    /// Supplies propellants or propulsion systems.
    PropulsionSupplier,
}

/// Environmental facts about one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentalProfile {
    /// Primary classification. At least one is required.
    pub operator_types: Vec<EnvironmentalOperatorType>,
    /// Explicit size class.
    pub organization_size: Option<OrganizationSize>,
    /// Headcount.
    pub employee_count: Option<u32>,
    /// Annual turnover in euros.
    pub annual_turnover_eur: Option<u64>,
    /// Places products or services on the EU market.
    pub eu_market: bool,
    /// Securities listed on an EU regulated market.
    pub is_listed: bool,
    /// Uses hydrazine or its derivatives.
    pub uses_hydrazine: bool,
    /// Uses other toxic propellants (MON, UDMH, MMH).
    pub uses_other_toxic_propellants: bool,
    /// Propellant mass per mission in kilograms.
    pub propellant_mass_kg_per_mission: Option<u64>,
    /// Launches or missions per year.
    pub launches_per_year: Option<u32>,
    /// A lifecycle assessment has been performed.
    pub has_lifecycle_assessment: bool,
    /// Operates a certified environmental management system.
    pub has_environmental_management_system: bool,
    /// Holds a REACH authorization for hydrazine use.
    pub reach_authorized: bool,
}

impl Profile for EnvironmentalProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.operator_types.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "operator type",
            });
        }
        Ok(())
    }
}

impl EnvironmentalProfile {
    /// Effective size class.
    pub fn size(&self) -> OrganizationSize {
        OrganizationSize::resolve(
            self.organization_size,
            self.employee_count,
            self.annual_turnover_eur,
        )
    }

    fn is(&self, kind: EnvironmentalOperatorType) -> bool {
        self.operator_types.contains(&kind)
    }

    /// Uses any hazardous propellant.
    pub fn uses_hazardous_propellants(&self) -> bool {
        self.uses_hydrazine || self.uses_other_toxic_propellants
    }

    /// Propellant mass per year. One mission is assumed when the cadence is
    /// unknown.
    pub fn annual_propellant_kg(&self) -> Option<u64> {
        self.propellant_mass_kg_per_mission
            .map(|kg| kg.saturating_mul(u64::from(self.launches_per_year.unwrap_or(1))))
    }

    /// Subject to CSRD sustainability reporting.
    pub fn csrd_in_scope(&self) -> bool {
        self.eu_market && (self.size() == OrganizationSize::Large || self.is_listed)
    }
}

/// Environmental regime a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentalRegime {
    /// EU Space Act environmental footprint chapter.
    EuSpaceAct,
    /// REACH Regulation (EC) 1907/2006.
    Reach,
    /// ISO 14001 environmental management.
    Iso14001,
    /// Corporate Sustainability Reporting Directive.
    Csrd,
}

impl fmt::Display for EnvironmentalRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for EnvironmentalRegime {
    fn code(self) -> &'static str {
        match self {
            Self::EuSpaceAct => "EU Space Act",
            Self::Reach => "REACH",
            Self::Iso14001 => "ISO 14001",
            Self::Csrd => "CSRD",
        }
    }

    // Sanctions are set by member-state law.
    fn penalty(self) -> Option<PenaltyReference> {
        None
    }
}

// ── Declaration scope ───────────────────────────────────────────────────────

/// Depth of the Environmental Footprint Declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationScope {
    /// Full lifecycle declaration.
    Full,
    /// Simplified declaration.
    Simplified,
}

impl fmt::Display for DeclarationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Simplified => "simplified",
        })
    }
}

fn launch_provider(p: &EnvironmentalProfile) -> bool {
    p.is(EnvironmentalOperatorType::LaunchProvider)
}

fn large(p: &EnvironmentalProfile) -> bool {
    p.size() == OrganizationSize::Large
}

fn hydrazine(p: &EnvironmentalProfile) -> bool {
    p.uses_hydrazine
}

/// Declaration scope, first match wins.
pub static DECLARATION_SCOPE: RuleTable<EnvironmentalProfile, DeclarationScope> = RuleTable::new(
    &[
        Rule {
            id: "launch-provider",
            reason: "launch services carry the full declaration",
            when: launch_provider,
            outcome: DeclarationScope::Full,
        },
        Rule {
            id: "large-entity",
            reason: "large organization",
            when: large,
            outcome: DeclarationScope::Full,
        },
        Rule {
            id: "hydrazine-user",
            reason: "uses hydrazine",
            when: hydrazine,
            outcome: DeclarationScope::Full,
        },
    ],
    Fallback {
        id: "simplified",
        reason: "small or medium operator without hydrazine or launch activity",
        outcome: DeclarationScope::Simplified,
    },
);

// ── Risk ────────────────────────────────────────────────────────────────────

fn hydrazine_unauthorized(p: &EnvironmentalProfile) -> bool {
    p.eu_market && p.uses_hydrazine && !p.reach_authorized
}

fn eu_without_footprint(p: &EnvironmentalProfile) -> bool {
    p.eu_market && !p.has_lifecycle_assessment
}

fn hazardous(p: &EnvironmentalProfile) -> bool {
    p.uses_hazardous_propellants()
}

/// Overall environmental risk, first match wins.
pub static RISK_RULES: RuleTable<EnvironmentalProfile, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "hydrazine-without-authorization",
            reason: "hydrazine used on the EU market without REACH authorization",
            when: hydrazine_unauthorized,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "eu-market-without-footprint",
            reason: "EU market activity without a lifecycle assessment",
            when: eu_without_footprint,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "hazardous-propellants",
            reason: "uses hazardous propellants",
            when: hazardous,
            outcome: RiskLevel::Medium,
        },
        Rule {
            id: "launch-operations",
            reason: "conducts launch operations",
            when: launch_provider,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "low-footprint",
        reason: "no hazardous substances or launch activity",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

fn always(_: &EnvironmentalProfile) -> bool {
    true
}

fn eu(p: &EnvironmentalProfile) -> bool {
    p.eu_market
}

fn eu_full_declaration(p: &EnvironmentalProfile) -> bool {
    p.eu_market && DECLARATION_SCOPE.evaluate(p).outcome == DeclarationScope::Full
}

fn eu_hydrazine(p: &EnvironmentalProfile) -> bool {
    p.eu_market && p.uses_hydrazine
}

fn eu_hazardous(p: &EnvironmentalProfile) -> bool {
    p.eu_market && p.uses_hazardous_propellants()
}

fn csrd(p: &EnvironmentalProfile) -> bool {
    p.csrd_in_scope()
}

fn eu_launch(p: &EnvironmentalProfile) -> bool {
    p.eu_market && launch_provider(p)
}

/// Build the environmental corpus.
pub fn corpus() -> CorpusResult<Corpus<EnvironmentalProfile, EnvironmentalRegime>> {
    use EnvironmentalRegime::{Csrd, EuSpaceAct, Iso14001, Reach};
    use RiskLevel::{Critical, High, Low, Medium};

    Corpus::new(
        RegulatoryDomain::Environmental,
        VERSION,
        vec![
            req(
                "EUSA-EFP-001",
                EuSpaceAct,
                Cat::EnvironmentalAssessment,
                "Environmental Footprint Declaration",
                High,
                true,
                on("eu_market", eu),
                "Submit an Environmental Footprint Declaration based on a lifecycle assessment",
                &["Lifecycle assessment", "Environmental Footprint Declaration"],
            ),
            req(
                "EUSA-EFP-002",
                EuSpaceAct,
                Cat::EnvironmentalAssessment,
                "Full lifecycle declaration",
                Medium,
                true,
                on("eu_full_declaration", eu_full_declaration),
                "Extend the declaration to launch, operations and end-of-life phases",
                &["Full-scope lifecycle inventory"],
            ),
            req(
                "REACH-HYD-001",
                Reach,
                Cat::HazardousSubstances,
                "Hydrazine authorization",
                Critical,
                true,
                on("eu_hydrazine", eu_hydrazine),
                "Obtain or rely on a REACH Annex XIV authorization covering hydrazine use",
                &["REACH authorization decision", "Use conditions record"],
            ),
            req(
                "REACH-SDS-001",
                Reach,
                Cat::HazardousSubstances,
                "Safety data sheets and exposure controls",
                High,
                true,
                on("eu_hazardous_propellants", eu_hazardous),
                "Maintain safety data sheets and exposure scenarios for every hazardous propellant",
                &["Safety data sheets", "Exposure scenarios"],
            ),
            req(
                "ISO-EMS-001",
                Iso14001,
                Cat::Governance,
                "Environmental management system",
                Low,
                false,
                on("always", always),
                "Operate an ISO 14001 environmental management system",
                &["EMS manual", "ISO 14001 certificate"],
            ),
            req(
                "CSRD-ESRS-001",
                Csrd,
                Cat::Reporting,
                "Sustainability statement",
                High,
                true,
                on("csrd_in_scope", csrd),
                "Publish an ESRS-compliant sustainability statement in the management report",
                &["Sustainability statement", "Double materiality assessment"],
            ),
            req(
                "CSRD-ESRS-002",
                Csrd,
                Cat::Reporting,
                "Limited assurance of sustainability information",
                Medium,
                true,
                on("csrd_in_scope", csrd),
                "Engage an assurance provider for the sustainability statement",
                &["Assurance report"],
            ),
            req(
                "EUSA-LNC-001",
                EuSpaceAct,
                Cat::EnvironmentalAssessment,
                "Launch site environmental impact",
                High,
                true,
                on("eu_launch_provider", eu_launch),
                "Assess atmospheric emissions and launch-site impacts for each launch campaign",
                &["Launch environmental impact assessment"],
            ),
        ],
    )
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// Environmental sub-assessor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalFindings {
    /// Hazardous substances in use.
    pub hazardous_substances: Vec<&'static str>,
    /// Propellant mass per year, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_propellant_kg: Option<u64>,
    /// Required declaration depth.
    pub declaration_scope: DeclarationScope,
    /// CSRD reporting applies.
    pub csrd_in_scope: bool,
}

/// Run the environmental sub-assessors.
pub fn findings(profile: &EnvironmentalProfile) -> EnvironmentalFindings {
    let mut hazardous_substances = Vec::new();
    if profile.uses_hydrazine {
        hazardous_substances.push("Hydrazine");
    }
    if profile.uses_other_toxic_propellants {
        hazardous_substances.push("Other toxic propellants");
    }
    EnvironmentalFindings {
        hazardous_substances,
        annual_propellant_kg: profile.annual_propellant_kg(),
        declaration_scope: DECLARATION_SCOPE.evaluate(profile).outcome,
        csrd_in_scope: profile.csrd_in_scope(),
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

type Ctx<'a> = RecommendationContext<'a, EnvironmentalProfile, EnvironmentalRegime>;

fn authorization_missing(ctx: &Ctx<'_>) -> bool {
    hydrazine_unauthorized(ctx.profile)
}

fn is_reach(gap: &Gap<EnvironmentalRegime>) -> bool {
    gap.regulation == EnvironmentalRegime::Reach
}

fn lifecycle_missing(ctx: &Ctx<'_>) -> bool {
    eu_without_footprint(ctx.profile)
}

fn is_footprint(gap: &Gap<EnvironmentalRegime>) -> bool {
    gap.category == Cat::EnvironmentalAssessment
}

fn hydrazine_in_use(ctx: &Ctx<'_>) -> bool {
    ctx.profile.uses_hydrazine
}

fn is_hydrazine(gap: &Gap<EnvironmentalRegime>) -> bool {
    gap.requirement_id == "REACH-HYD-001"
}

/// Environmental domain recommendation rules.
pub static RECOMMENDATION_RULES: &[RecommendationRule<EnvironmentalProfile, EnvironmentalRegime>] = &[
    RecommendationRule {
        id: "env-reach-authorization",
        title: "Secure REACH authorization for hydrazine",
        action: "Apply for, or confirm coverage under, an Annex XIV authorization before further hydrazine use",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: authorization_missing,
        addresses: is_reach,
    },
    RecommendationRule {
        id: "env-lifecycle-assessment",
        title: "Perform a lifecycle assessment",
        action: "Commission a space-specific lifecycle assessment to support the footprint declaration",
        priority: 2,
        timeframe: Timeframe::Days90,
        when: lifecycle_missing,
        addresses: is_footprint,
    },
    RecommendationRule {
        id: "env-green-propellant",
        title: "Evaluate green propellant alternatives",
        action: "Assess ADN- or HAN-based propellants as a hydrazine replacement for future missions",
        priority: 3,
        timeframe: Timeframe::Ongoing,
        when: hydrazine_in_use,
        addresses: is_hydrazine,
    },
];

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The environmental footprint framework.
#[derive(Debug)]
pub struct Environmental {
    corpus: Corpus<EnvironmentalProfile, EnvironmentalRegime>,
}

impl Environmental {
    /// Build the framework, validating its corpus.
    pub fn new() -> CorpusResult<Self> {
        Ok(Self { corpus: corpus()? })
    }
}

impl Framework for Environmental {
    type Profile = EnvironmentalProfile;
    type Regulation = EnvironmentalRegime;
    type Jurisdiction = DeclarationScope;
    type Findings = EnvironmentalFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::Environmental
    }

    fn corpus(&self) -> &Corpus<EnvironmentalProfile, EnvironmentalRegime> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<EnvironmentalProfile, RiskLevel> {
        &RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &EnvironmentalProfile) -> RuleMatch<DeclarationScope> {
        DECLARATION_SCOPE.evaluate(profile)
    }

    fn findings(
        &self,
        profile: &EnvironmentalProfile,
        _applicable: &Applicable<'_, EnvironmentalProfile, EnvironmentalRegime>,
    ) -> EnvironmentalFindings {
        findings(profile)
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<EnvironmentalProfile, EnvironmentalRegime>] {
        RECOMMENDATION_RULES
    }
}
