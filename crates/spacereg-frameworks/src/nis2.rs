//! # NIS2 (Directive (EU) 2022/2555)
//!
//! Space is an Annex I sector of high criticality. Operators of ground
//! infrastructure supporting space-based services fall in scope when they
//! provide services in the Union and either exceed the SME size cap or are
//! the sole provider of the service in a Member State.
//!
//! The jurisdiction analog is the entity classification: essential,
//! important or out of scope. It drives supervision and the fine ceiling.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{
    Money, OrganizationSize, RegulatoryDomain, RequirementCategory as Cat, RiskLevel,
    ValidationError,
};
use spacereg_corpus::{Corpus, CorpusResult, PenaltyReference, RegulationTag};
use spacereg_engine::{
    Applicable, Fallback, Framework, Gap, Profile, RecommendationContext, RecommendationRule, Rule,
    RuleMatch, RuleTable, Timeframe,
};

use crate::authoring::{on, req};

/// Current corpus version.
pub const VERSION: &str = "2024.1";

/// Art. 34(4) ceiling for essential entities.
pub const ESSENTIAL_FINE: PenaltyReference =
    PenaltyReference::aggregate(Money::eur(10_000_000), "NIS2 Art. 34(4)")
        .or("or 2% of worldwide annual turnover");

/// Art. 34(5) ceiling for important entities.
pub const IMPORTANT_FINE: PenaltyReference =
    PenaltyReference::aggregate(Money::eur(7_000_000), "NIS2 Art. 34(5)")
        .or("or 1.4% of worldwide annual turnover");

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Role of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nis2EntityType {
    /// Operates satellites and their control infrastructure.
    SatelliteOperator,
    /// Operates ground stations or mission control.
    GroundSegmentOperator,
    /// Provides launch services.
    LaunchServiceProvider,
    /// Distributes space-derived data or services.
    SpaceDataProvider,
    /// Manufactures space components.
    ComponentManufacturer,
    /// University or research body.
    ResearchOrganization,
}

/// NIS2 posture of one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nis2Profile {
    /// Primary classification. At least one is required.
    pub entity_types: Vec<Nis2EntityType>,
    /// Explicit size class; derived from headcount and turnover when absent.
    pub organization_size: Option<OrganizationSize>,
    /// Headcount.
    pub employee_count: Option<u32>,
    /// Annual turnover in euros.
    pub annual_turnover_eur: Option<u64>,
    /// Provides services in the Union.
    pub provides_services_in_eu: bool,
    /// Has a main establishment in the Union.
    pub established_in_eu: bool,
    /// Operates ground infrastructure supporting space-based services.
    pub operates_ground_infrastructure: bool,
    /// Sole provider of the service in a Member State.
    pub sole_provider_in_member_state: bool,
    /// Registered with the competent authority.
    pub registered_with_authority: bool,
    /// Has designated a representative in the Union.
    pub has_eu_representative: bool,
    /// Has documented Art. 21 risk-management measures.
    pub has_risk_management_measures: bool,
    /// Has an incident response and reporting procedure.
    pub has_incident_response_plan: bool,
    /// Has business continuity and crisis plans.
    pub has_business_continuity_plan: bool,
    /// Has a supplier security policy.
    pub has_supply_chain_policy: bool,
    /// Management body members have completed cybersecurity training.
    pub management_trained: bool,
    /// Uses encryption for data at rest and in transit.
    pub uses_encryption: bool,
    /// Uses multi-factor authentication.
    pub uses_multi_factor_auth: bool,
}

impl Profile for Nis2Profile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.entity_types.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "entity type",
            });
        }
        Ok(())
    }
}

impl Nis2Profile {
    /// Effective size class.
    pub fn size(&self) -> OrganizationSize {
        OrganizationSize::resolve(
            self.organization_size,
            self.employee_count,
            self.annual_turnover_eur,
        )
    }

    /// Operates in the Annex I space sector.
    pub fn in_space_sector(&self) -> bool {
        self.operates_ground_infrastructure
            || self.entity_types.iter().any(|t| {
                matches!(
                    t,
                    Nis2EntityType::SatelliteOperator | Nis2EntityType::GroundSegmentOperator
                )
            })
    }

    /// Entity classification.
    pub fn classification(&self) -> Nis2Classification {
        ENTITY_CLASSIFICATION.evaluate(self).outcome
    }

    /// Essential or important.
    pub fn in_scope(&self) -> bool {
        self.classification() != Nis2Classification::OutOfScope
    }

    /// In scope without an establishment in the Union.
    pub fn needs_eu_representative(&self) -> bool {
        self.in_scope() && !self.established_in_eu
    }
}

// ---------------------------------------------------------------------------
// Provisions
// ---------------------------------------------------------------------------

/// NIS2 article a requirement implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nis2Provision {
    /// Governance.
    Art20,
    /// Cybersecurity risk-management measures.
    Art21,
    /// Reporting obligations.
    Art23,
    /// Jurisdiction and representation.
    Art26,
    /// Registry of entities.
    Art27,
}

impl fmt::Display for Nis2Provision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for Nis2Provision {
    fn code(self) -> &'static str {
        match self {
            Self::Art20 => "NIS2 Art. 20",
            Self::Art21 => "NIS2 Art. 21",
            Self::Art23 => "NIS2 Art. 23",
            Self::Art26 => "NIS2 Art. 26",
            Self::Art27 => "NIS2 Art. 27",
        }
    }

    // Art. 34 fines cover Arts. 21 and 23; the rest is left to national law.
    fn penalty(self) -> Option<PenaltyReference> {
        match self {
            Self::Art21 | Self::Art23 => Some(ESSENTIAL_FINE),
            Self::Art20 | Self::Art26 | Self::Art27 => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Entity classification under Art. 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nis2Classification {
    /// Essential entity.
    Essential,
    /// Important entity.
    Important,
    /// Not subject to the Directive.
    OutOfScope,
}

impl fmt::Display for Nis2Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Essential => "essential",
            Self::Important => "important",
            Self::OutOfScope => "out_of_scope",
        })
    }
}

fn no_eu_services(p: &Nis2Profile) -> bool {
    !p.provides_services_in_eu
}

fn outside_space_sector(p: &Nis2Profile) -> bool {
    !p.in_space_sector()
}

fn sole_provider(p: &Nis2Profile) -> bool {
    p.sole_provider_in_member_state
}

fn large(p: &Nis2Profile) -> bool {
    p.size() == OrganizationSize::Large
}

fn medium(p: &Nis2Profile) -> bool {
    p.size() == OrganizationSize::Medium
}

/// Entity classification, first match wins.
pub static ENTITY_CLASSIFICATION: RuleTable<Nis2Profile, Nis2Classification> = RuleTable::new(
    &[
        Rule {
            id: "no-eu-services",
            reason: "provides no services in the Union",
            when: no_eu_services,
            outcome: Nis2Classification::OutOfScope,
        },
        Rule {
            id: "outside-space-sector",
            reason: "operates no ground infrastructure supporting space-based services",
            when: outside_space_sector,
            outcome: Nis2Classification::OutOfScope,
        },
        Rule {
            id: "sole-provider",
            reason: "sole provider of the service in a Member State",
            when: sole_provider,
            outcome: Nis2Classification::Essential,
        },
        Rule {
            id: "large-entity",
            reason: "large entity in a sector of high criticality",
            when: large,
            outcome: Nis2Classification::Essential,
        },
        Rule {
            id: "medium-entity",
            reason: "medium-sized entity in a sector of high criticality",
            when: medium,
            outcome: Nis2Classification::Important,
        },
    ],
    Fallback {
        id: "below-size-cap",
        reason: "micro or small entity below the size cap",
        outcome: Nis2Classification::OutOfScope,
    },
);

fn missing_risk_measures(p: &Nis2Profile) -> bool {
    p.in_scope() && !p.has_risk_management_measures
}

fn missing_incident_reporting(p: &Nis2Profile) -> bool {
    p.in_scope() && !p.has_incident_response_plan
}

fn essential(p: &Nis2Profile) -> bool {
    p.classification() == Nis2Classification::Essential
}

fn important(p: &Nis2Profile) -> bool {
    p.classification() == Nis2Classification::Important
}

/// Overall NIS2 risk, first match wins.
pub static RISK_RULES: RuleTable<Nis2Profile, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "no-risk-management-measures",
            reason: "in-scope entity without Art. 21 risk-management measures",
            when: missing_risk_measures,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "no-incident-reporting",
            reason: "in-scope entity without an incident reporting procedure",
            when: missing_incident_reporting,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "essential-entity",
            reason: "essential entity under ex-ante supervision",
            when: essential,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "important-entity",
            reason: "important entity under ex-post supervision",
            when: important,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "out-of-scope",
        reason: "not subject to NIS2",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

fn in_scope(p: &Nis2Profile) -> bool {
    p.in_scope()
}

fn needs_representative(p: &Nis2Profile) -> bool {
    p.needs_eu_representative()
}

/// Build the NIS2 corpus.
pub fn corpus() -> CorpusResult<Corpus<Nis2Profile, Nis2Provision>> {
    use Nis2Provision::{Art20, Art21, Art23, Art26, Art27};
    use RiskLevel::{Critical, High, Medium};

    let scoped = on("in_scope", in_scope);
    Corpus::new(
        RegulatoryDomain::Nis2,
        VERSION,
        vec![
            req(
                "N2-REG-001",
                Art27,
                Cat::Registration,
                "Registration with the competent authority",
                High,
                true,
                scoped,
                "Submit entity name, sector, contact details and IP ranges to the national registry",
                &["Registry submission confirmation"],
            ),
            req(
                "N2-REP-001",
                Art26,
                Cat::Registration,
                "EU representative designation",
                High,
                true,
                on("needs_eu_representative", needs_representative),
                "Designate in writing a representative established in a Member State where services are offered",
                &["Representative mandate"],
            ),
            req(
                "N2-GOV-001",
                Art20,
                Cat::Governance,
                "Management body approval and oversight",
                High,
                true,
                scoped,
                "Have the management body approve the risk-management measures and oversee their implementation",
                &["Board approval minutes", "Cybersecurity oversight reports"],
            ),
            req(
                "N2-GOV-002",
                Art20,
                Cat::Training,
                "Management body cybersecurity training",
                Medium,
                true,
                scoped,
                "Enrol management body members in regular cybersecurity training",
                &["Training attendance records"],
            ),
            req(
                "N2-RSK-001",
                Art21,
                Cat::RiskManagement,
                "Cybersecurity risk-management measures",
                Critical,
                true,
                scoped,
                "Adopt an all-hazards risk analysis and information system security policy",
                &["Risk analysis", "Information security policy"],
            ),
            req(
                "N2-RSK-002",
                Art21,
                Cat::IncidentResponse,
                "Incident handling",
                High,
                true,
                scoped,
                "Define incident detection, triage, response and recovery procedures",
                &["Incident handling procedure"],
            ),
            req(
                "N2-RSK-003",
                Art21,
                Cat::RiskManagement,
                "Business continuity and crisis management",
                High,
                true,
                scoped,
                "Maintain backup management, disaster recovery and crisis management plans",
                &["Business continuity plan", "Disaster recovery test reports"],
            ),
            req(
                "N2-SUP-001",
                Art21,
                Cat::SupplyChain,
                "Supply chain security",
                High,
                true,
                scoped,
                "Assess direct suppliers' security practices and set contractual security requirements",
                &["Supplier security assessments", "Supplier contract clauses"],
            ),
            req(
                "N2-SEC-001",
                Art21,
                Cat::TechnicalSecurity,
                "Cryptography and encryption",
                Medium,
                true,
                scoped,
                "Define policies for cryptography and, where appropriate, encryption",
                &["Cryptography policy"],
            ),
            req(
                "N2-SEC-002",
                Art21,
                Cat::TechnicalSecurity,
                "Multi-factor authentication",
                Medium,
                false,
                scoped,
                "Use multi-factor or continuous authentication where appropriate",
                &["Authentication configuration records"],
            ),
            req(
                "N2-RPT-001",
                Art23,
                Cat::Reporting,
                "Early warning within 24 hours",
                Critical,
                true,
                scoped,
                "Send an early warning to the CSIRT within 24 hours of becoming aware of a significant incident",
                &["Incident reporting procedure", "CSIRT contact list"],
            ),
            req(
                "N2-RPT-002",
                Art23,
                Cat::Reporting,
                "Incident notification within 72 hours",
                High,
                true,
                scoped,
                "Submit an incident notification with an initial assessment within 72 hours",
                &["Incident reporting procedure"],
            ),
            req(
                "N2-RPT-003",
                Art23,
                Cat::Reporting,
                "Final report within one month",
                Medium,
                true,
                scoped,
                "Submit a final report with root cause and mitigation within one month of the notification",
                &["Final incident report template"],
            ),
        ],
    )
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// Art. 23 reporting deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentTimeline {
    /// Early warning deadline.
    pub early_warning_hours: u16,
    /// Incident notification deadline.
    pub notification_hours: u16,
    /// Final report deadline.
    pub final_report: &'static str,
}

/// Art. 23 deadlines.
pub const INCIDENT_TIMELINE: IncidentTimeline = IncidentTimeline {
    early_warning_hours: 24,
    notification_hours: 72,
    final_report: "1 month",
};

/// Supervisory regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Supervision {
    /// Proactive supervision (Art. 32).
    ExAnte,
    /// Reactive supervision (Art. 33).
    ExPost,
    /// Not supervised under NIS2.
    Unsupervised,
}

/// Maximum administrative fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FineExposure {
    /// Statutory ceiling.
    pub reference: PenaltyReference,
    /// Turnover-based ceiling, when turnover is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover_ceiling: Option<Money>,
    /// The higher of the fixed and turnover-based ceilings.
    pub maximum: Money,
    /// Rendered ceiling.
    pub description: String,
}

impl FineExposure {
    fn for_classification(class: Nis2Classification, turnover_eur: Option<u64>) -> Option<Self> {
        let (reference, per_mille) = match class {
            Nis2Classification::Essential => (ESSENTIAL_FINE, 20),
            Nis2Classification::Important => (IMPORTANT_FINE, 14),
            Nis2Classification::OutOfScope => return None,
        };
        let turnover_ceiling =
            turnover_eur.map(|t| Money::eur(t.saturating_mul(per_mille) / 1000));
        let maximum = match turnover_ceiling {
            Some(ceiling) if ceiling.amount > reference.max_civil.amount => ceiling,
            _ => reference.max_civil,
        };
        Some(Self {
            reference,
            turnover_ceiling,
            maximum,
            description: reference.describe(),
        })
    }
}

/// NIS2 sub-assessor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nis2Findings {
    /// Entity classification.
    pub classification: Nis2Classification,
    /// Effective size class.
    pub entity_size: OrganizationSize,
    /// Reporting deadlines, when in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_reporting: Option<IncidentTimeline>,
    /// Fine ceiling, when in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fine: Option<FineExposure>,
    /// Supervisory regime.
    pub supervision: Supervision,
    /// A representative in the Union must be designated.
    pub eu_representative_required: bool,
}

/// Run the NIS2 sub-assessors.
pub fn findings(profile: &Nis2Profile) -> Nis2Findings {
    let classification = profile.classification();
    let in_scope = classification != Nis2Classification::OutOfScope;
    Nis2Findings {
        classification,
        entity_size: profile.size(),
        incident_reporting: in_scope.then_some(INCIDENT_TIMELINE),
        maximum_fine: FineExposure::for_classification(classification, profile.annual_turnover_eur),
        supervision: match classification {
            Nis2Classification::Essential => Supervision::ExAnte,
            Nis2Classification::Important => Supervision::ExPost,
            Nis2Classification::OutOfScope => Supervision::Unsupervised,
        },
        eu_representative_required: profile.needs_eu_representative(),
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

type Ctx<'a> = RecommendationContext<'a, Nis2Profile, Nis2Provision>;

fn unregistered(ctx: &Ctx<'_>) -> bool {
    ctx.profile.in_scope() && !ctx.profile.registered_with_authority
}

fn is_registration(gap: &Gap<Nis2Provision>) -> bool {
    gap.requirement_id == "N2-REG-001"
}

fn no_incident_process(ctx: &Ctx<'_>) -> bool {
    ctx.profile.in_scope() && !ctx.profile.has_incident_response_plan
}

fn is_reporting(gap: &Gap<Nis2Provision>) -> bool {
    gap.regulation == Nis2Provision::Art23 || gap.category == Cat::IncidentResponse
}

fn representative_missing(ctx: &Ctx<'_>) -> bool {
    ctx.profile.needs_eu_representative() && !ctx.profile.has_eu_representative
}

fn is_representative(gap: &Gap<Nis2Provision>) -> bool {
    gap.requirement_id == "N2-REP-001"
}

fn untrained_management(ctx: &Ctx<'_>) -> bool {
    ctx.profile.in_scope() && !ctx.profile.management_trained
}

fn is_governance(gap: &Gap<Nis2Provision>) -> bool {
    gap.regulation == Nis2Provision::Art20
}

/// NIS2 domain recommendation rules.
pub static RECOMMENDATION_RULES: &[RecommendationRule<Nis2Profile, Nis2Provision>] = &[
    RecommendationRule {
        id: "n2-register",
        title: "Register with the competent authority",
        action: "Submit the Art. 27 registration to the national competent authority",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: unregistered,
        addresses: is_registration,
    },
    RecommendationRule {
        id: "n2-incident-reporting",
        title: "Establish 24h/72h incident reporting",
        action: "Set up an incident reporting procedure that meets the 24-hour early warning and 72-hour notification deadlines",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: no_incident_process,
        addresses: is_reporting,
    },
    RecommendationRule {
        id: "n2-eu-representative",
        title: "Designate an EU representative",
        action: "Mandate a representative established in a Member State where services are offered",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: representative_missing,
        addresses: is_representative,
    },
    RecommendationRule {
        id: "n2-management-accountability",
        title: "Train and engage the management body",
        action: "Have management approve the risk measures and complete cybersecurity training",
        priority: 3,
        timeframe: Timeframe::Days90,
        when: untrained_management,
        addresses: is_governance,
    },
];

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The NIS2 framework.
#[derive(Debug)]
pub struct Nis2 {
    corpus: Corpus<Nis2Profile, Nis2Provision>,
}

impl Nis2 {
    /// Build the framework, validating its corpus.
    pub fn new() -> CorpusResult<Self> {
        Ok(Self { corpus: corpus()? })
    }
}

impl Framework for Nis2 {
    type Profile = Nis2Profile;
    type Regulation = Nis2Provision;
    type Jurisdiction = Nis2Classification;
    type Findings = Nis2Findings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::Nis2
    }

    fn corpus(&self) -> &Corpus<Nis2Profile, Nis2Provision> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<Nis2Profile, RiskLevel> {
        &RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &Nis2Profile) -> RuleMatch<Nis2Classification> {
        ENTITY_CLASSIFICATION.evaluate(profile)
    }

    fn findings(
        &self,
        profile: &Nis2Profile,
        _applicable: &Applicable<'_, Nis2Profile, Nis2Provision>,
    ) -> Nis2Findings {
        findings(profile)
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<Nis2Profile, Nis2Provision>] {
        RECOMMENDATION_RULES
    }
}
