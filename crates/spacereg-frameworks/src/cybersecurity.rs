//! # Space Cybersecurity
//!
//! The EU Space Act cybersecurity chapter, the NIS2 technical measures as
//! they apply to space operators, ISO/IEC 27001 and the CCSDS space link
//! security recommendations. The jurisdiction analog is the assurance level
//! the organization must evidence.

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
use crate::nis2::ESSENTIAL_FINE;

/// Current corpus version.
pub const VERSION: &str = "2024.1";

/// Role of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyberEntityType {
    /// Operates satellites.
    SatelliteOperator,
    /// Operates ground stations or mission control.
    GroundSegmentOperator,
    /// Provides launch services.
    LaunchProvider,
    /// Manufactures spacecraft or components.
    ComponentManufacturer,
    /// Distributes space-derived data or services.
    SpaceDataProvider,
}

/// Cybersecurity posture of one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CyberProfile {
    /// Primary classification. At least one is required.
    pub entity_types: Vec<CyberEntityType>,
    /// Explicit size class.
    pub organization_size: Option<OrganizationSize>,
    /// Headcount.
    pub employee_count: Option<u32>,
    /// Annual turnover in euros.
    pub annual_turnover_eur: Option<u64>,
    /// Provides services in the Union.
    pub provides_services_in_eu: bool,
    /// Serves government, defence or critical-infrastructure customers.
    pub serves_critical_users: bool,
    /// Operates a telecommand uplink.
    pub has_command_link: bool,
    /// Telecommands are authenticated and encrypted.
    pub has_telecommand_encryption: bool,
    /// Operates an information security management system.
    pub has_isms: bool,
    /// Has an incident response plan.
    pub has_incident_response_plan: bool,
    /// Runs penetration tests.
    pub performs_penetration_testing: bool,
    /// Monitors the ground segment continuously.
    pub has_security_monitoring: bool,
    /// Has supplier security requirements.
    pub has_supply_chain_security: bool,
}

impl Profile for CyberProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.entity_types.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "entity type",
            });
        }
        Ok(())
    }
}

impl CyberProfile {
    /// Effective size class.
    pub fn size(&self) -> OrganizationSize {
        OrganizationSize::resolve(
            self.organization_size,
            self.employee_count,
            self.annual_turnover_eur,
        )
    }

    /// Required assurance level.
    pub fn assurance_level(&self) -> AssuranceLevel {
        ASSURANCE_LEVEL.evaluate(self).outcome
    }
}

/// Cybersecurity framework a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyberFramework {
    /// EU Space Act cybersecurity chapter.
    EuSpaceAct,
    /// NIS2 Art. 21 technical measures.
    Nis2,
    /// ISO/IEC 27001.
    Iso27001,
    /// CCSDS space link security (SDLS, 350.x).
    Ccsds,
}

impl fmt::Display for CyberFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for CyberFramework {
    fn code(self) -> &'static str {
        match self {
            Self::EuSpaceAct => "EU Space Act",
            Self::Nis2 => "NIS2",
            Self::Iso27001 => "ISO/IEC 27001",
            Self::Ccsds => "CCSDS",
        }
    }

    fn penalty(self) -> Option<PenaltyReference> {
        match self {
            Self::Nis2 => Some(ESSENTIAL_FINE),
            Self::EuSpaceAct | Self::Iso27001 | Self::Ccsds => None,
        }
    }
}

// ── Assurance level ─────────────────────────────────────────────────────────

/// Assurance level to evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssuranceLevel {
    /// Baseline hygiene.
    Basic,
    /// Tested controls.
    Substantial,
    /// Continuously monitored, adversary-tested controls.
    High,
}

impl fmt::Display for AssuranceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Basic => "basic",
            Self::Substantial => "substantial",
            Self::High => "high",
        })
    }
}

fn critical_users(p: &CyberProfile) -> bool {
    p.serves_critical_users
}

fn command_link(p: &CyberProfile) -> bool {
    p.has_command_link
}

fn medium_or_larger(p: &CyberProfile) -> bool {
    p.size().is_medium_or_larger()
}

/// Assurance level, first match wins.
pub static ASSURANCE_LEVEL: RuleTable<CyberProfile, AssuranceLevel> = RuleTable::new(
    &[
        Rule {
            id: "critical-users",
            reason: "serves government, defence or critical-infrastructure users",
            when: critical_users,
            outcome: AssuranceLevel::High,
        },
        Rule {
            id: "command-link",
            reason: "operates a telecommand uplink",
            when: command_link,
            outcome: AssuranceLevel::Substantial,
        },
        Rule {
            id: "medium-or-large-entity",
            reason: "medium-sized or larger organization",
            when: medium_or_larger,
            outcome: AssuranceLevel::Substantial,
        },
    ],
    Fallback {
        id: "baseline",
        reason: "small organization without command authority or critical users",
        outcome: AssuranceLevel::Basic,
    },
);

// ── Risk ────────────────────────────────────────────────────────────────────

fn unprotected_telecommand(p: &CyberProfile) -> bool {
    p.has_command_link && !p.has_telecommand_encryption
}

fn high_assurance_unmonitored(p: &CyberProfile) -> bool {
    p.assurance_level() == AssuranceLevel::High && !p.has_security_monitoring
}

fn no_incident_response(p: &CyberProfile) -> bool {
    !p.has_incident_response_plan
}

fn above_basic(p: &CyberProfile) -> bool {
    p.assurance_level() > AssuranceLevel::Basic
}

/// Overall cybersecurity risk, first match wins.
pub static RISK_RULES: RuleTable<CyberProfile, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "unprotected-telecommand",
            reason: "telecommand uplink without authentication and encryption",
            when: unprotected_telecommand,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "high-assurance-unmonitored",
            reason: "high-assurance organization without continuous monitoring",
            when: high_assurance_unmonitored,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "no-incident-response",
            reason: "no incident response plan",
            when: no_incident_response,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "elevated-assurance",
            reason: "substantial or high assurance required",
            when: above_basic,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "basic-assurance",
        reason: "basic assurance with incident response in place",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

fn always(_: &CyberProfile) -> bool {
    true
}

fn eu(p: &CyberProfile) -> bool {
    p.provides_services_in_eu
}

fn eu_medium(p: &CyberProfile) -> bool {
    p.provides_services_in_eu && p.size().is_medium_or_larger()
}

fn eu_substantial(p: &CyberProfile) -> bool {
    p.provides_services_in_eu && p.assurance_level() >= AssuranceLevel::Substantial
}

fn eu_high(p: &CyberProfile) -> bool {
    p.provides_services_in_eu && p.assurance_level() == AssuranceLevel::High
}

/// Build the cybersecurity corpus.
pub fn corpus() -> CorpusResult<Corpus<CyberProfile, CyberFramework>> {
    use CyberFramework::{Ccsds, EuSpaceAct, Iso27001, Nis2};
    use RiskLevel::{Critical, High, Low, Medium};

    Corpus::new(
        RegulatoryDomain::Cybersecurity,
        VERSION,
        vec![
            req(
                "EUSA-CYB-001",
                EuSpaceAct,
                Cat::RiskManagement,
                "Space-segment cybersecurity risk assessment",
                Critical,
                true,
                on("eu_market", eu),
                "Assess threats to space, ground and link segments across the mission lifecycle",
                &["Cybersecurity risk assessment", "Threat model"],
            ),
            req(
                "EUSA-CYB-002",
                EuSpaceAct,
                Cat::IncidentResponse,
                "Incident reporting to the space security authority",
                High,
                true,
                on("eu_market", eu),
                "Notify significant cybersecurity incidents affecting space services",
                &["Incident response plan", "Incident notification procedure"],
            ),
            req(
                "EUSA-CYB-003",
                EuSpaceAct,
                Cat::SupplyChain,
                "Supply chain security for space components",
                High,
                true,
                on("eu_market", eu),
                "Set security requirements for suppliers of flight and ground components",
                &["Supplier security requirements"],
            ),
            req(
                "EUSA-PEN-001",
                EuSpaceAct,
                Cat::TechnicalSecurity,
                "Periodic penetration testing",
                High,
                true,
                on("eu_substantial_assurance", eu_substantial),
                "Penetration-test the ground segment and mission control at the required cadence",
                &["Penetration test reports"],
            ),
            req(
                "EUSA-MON-001",
                EuSpaceAct,
                Cat::TechnicalSecurity,
                "Continuous security monitoring",
                High,
                true,
                on("eu_high_assurance", eu_high),
                "Operate continuous monitoring with defined escalation for ground and link anomalies",
                &["Security monitoring runbook"],
            ),
            req(
                "NIS2-CYB-001",
                Nis2,
                Cat::TechnicalSecurity,
                "Access control and encryption",
                High,
                true,
                on("eu_medium_or_larger", eu_medium),
                "Enforce least-privilege access and encrypt data at rest and in transit",
                &["Access control policy", "Cryptography policy"],
            ),
            req(
                "ISO-ISMS-001",
                Iso27001,
                Cat::Governance,
                "Information security management system",
                Medium,
                false,
                on("always", always),
                "Operate an ISMS with a statement of applicability and internal audits",
                &["Statement of applicability", "Internal audit reports"],
            ),
            req(
                "ISO-ISMS-002",
                Iso27001,
                Cat::Training,
                "Security awareness training",
                Low,
                false,
                on("always", always),
                "Train all staff on security awareness annually",
                &["Training records"],
            ),
            req(
                "CCSDS-TC-001",
                Ccsds,
                Cat::TechnicalSecurity,
                "Authenticated and encrypted telecommand link",
                Critical,
                true,
                on("has_command_link", command_link),
                "Apply the Space Data Link Security protocol to authenticate and encrypt telecommands",
                &["Link security design", "SDLS configuration"],
            ),
            req(
                "CCSDS-KEY-001",
                Ccsds,
                Cat::TechnicalSecurity,
                "Space link key management",
                High,
                true,
                on("has_command_link", command_link),
                "Define key generation, loading, rotation and revocation for on-board keys",
                &["Key management plan"],
            ),
        ],
    )
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// How often penetration tests are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenTestCadence {
    /// Not required at basic assurance.
    NotRequired,
    /// Once a year.
    Annual,
    /// Twice a year.
    SemiAnnual,
}

/// Cybersecurity sub-assessor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CyberFindings {
    /// Required assurance level.
    pub assurance_level: AssuranceLevel,
    /// Control families that must be implemented.
    pub control_families: Vec<&'static str>,
    /// Penetration-test cadence.
    pub penetration_test_cadence: PenTestCadence,
    /// Telecommand protection is required.
    pub telecommand_protection_required: bool,
    /// Telecommand protection is in place.
    pub telecommand_protected: bool,
}

const BASIC_CONTROLS: &[&str] = &[
    "Asset inventory",
    "Access control",
    "Backup and recovery",
    "Incident response",
];

const SUBSTANTIAL_CONTROLS: &[&str] = &[
    "Vulnerability management",
    "Security logging",
    "Supply chain security",
    "Penetration testing",
];

const HIGH_CONTROLS: &[&str] = &[
    "Continuous monitoring",
    "Red-team exercises",
    "Hardware-protected key storage",
];

/// Run the cybersecurity sub-assessors.
pub fn findings(profile: &CyberProfile) -> CyberFindings {
    let level = profile.assurance_level();
    let mut control_families = BASIC_CONTROLS.to_vec();
    if level >= AssuranceLevel::Substantial {
        control_families.extend_from_slice(SUBSTANTIAL_CONTROLS);
    }
    if level == AssuranceLevel::High {
        control_families.extend_from_slice(HIGH_CONTROLS);
    }
    if profile.has_command_link {
        control_families.push("Space link protection");
    }

    CyberFindings {
        assurance_level: level,
        control_families,
        penetration_test_cadence: match level {
            AssuranceLevel::Basic => PenTestCadence::NotRequired,
            AssuranceLevel::Substantial => PenTestCadence::Annual,
            AssuranceLevel::High => PenTestCadence::SemiAnnual,
        },
        telecommand_protection_required: profile.has_command_link,
        telecommand_protected: profile.has_command_link && profile.has_telecommand_encryption,
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

type Ctx<'a> = RecommendationContext<'a, CyberProfile, CyberFramework>;

fn telecommand_exposed(ctx: &Ctx<'_>) -> bool {
    unprotected_telecommand(ctx.profile)
}

fn is_link_security(gap: &Gap<CyberFramework>) -> bool {
    gap.regulation == CyberFramework::Ccsds
}

fn incident_plan_missing(ctx: &Ctx<'_>) -> bool {
    !ctx.profile.has_incident_response_plan
}

fn is_incident(gap: &Gap<CyberFramework>) -> bool {
    gap.category == Cat::IncidentResponse
}

fn monitoring_missing(ctx: &Ctx<'_>) -> bool {
    high_assurance_unmonitored(ctx.profile)
}

fn is_monitoring(gap: &Gap<CyberFramework>) -> bool {
    gap.requirement_id == "EUSA-MON-001"
}

fn pentest_missing(ctx: &Ctx<'_>) -> bool {
    above_basic(ctx.profile) && !ctx.profile.performs_penetration_testing
}

fn is_pentest(gap: &Gap<CyberFramework>) -> bool {
    gap.requirement_id == "EUSA-PEN-001"
}

/// Cybersecurity domain recommendation rules.
pub static RECOMMENDATION_RULES: &[RecommendationRule<CyberProfile, CyberFramework>] = &[
    RecommendationRule {
        id: "cy-protect-telecommand",
        title: "Protect the telecommand link",
        action: "Enable authenticated encryption on the uplink and establish on-board key management",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: telecommand_exposed,
        addresses: is_link_security,
    },
    RecommendationRule {
        id: "cy-incident-response",
        title: "Adopt an incident response plan",
        action: "Write and exercise an incident response plan covering space, ground and link segments",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: incident_plan_missing,
        addresses: is_incident,
    },
    RecommendationRule {
        id: "cy-security-monitoring",
        title: "Monitor the ground segment continuously",
        action: "Stand up continuous security monitoring with 24/7 escalation",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: monitoring_missing,
        addresses: is_monitoring,
    },
    RecommendationRule {
        id: "cy-penetration-testing",
        title: "Start penetration testing",
        action: "Commission penetration tests of mission control and ground stations",
        priority: 3,
        timeframe: Timeframe::Days90,
        when: pentest_missing,
        addresses: is_pentest,
    },
];

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The cybersecurity framework.
#[derive(Debug)]
pub struct Cybersecurity {
    corpus: Corpus<CyberProfile, CyberFramework>,
}

impl Cybersecurity {
    /// Build the framework, validating its corpus.
    pub fn new() -> CorpusResult<Self> {
        Ok(Self { corpus: corpus()? })
    }
}

impl Framework for Cybersecurity {
    type Profile = CyberProfile;
    type Regulation = CyberFramework;
    type Jurisdiction = AssuranceLevel;
    type Findings = CyberFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::Cybersecurity
    }

    fn corpus(&self) -> &Corpus<CyberProfile, CyberFramework> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<CyberProfile, RiskLevel> {
        &RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &CyberProfile) -> RuleMatch<AssuranceLevel> {
        ASSURANCE_LEVEL.evaluate(profile)
    }

    fn findings(
        &self,
        profile: &CyberProfile,
        _applicable: &Applicable<'_, CyberProfile, CyberFramework>,
    ) -> CyberFindings {
        findings(profile)
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<CyberProfile, CyberFramework>] {
        RECOMMENDATION_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_core::AssessmentStatus;
    use spacereg_engine::{assess, RequirementAssessment};

    fn operator() -> CyberProfile {
        CyberProfile {
            entity_types: vec![CyberEntityType::SatelliteOperator],
            provides_services_in_eu: true,
            has_incident_response_plan: true,
            ..Default::default()
        }
    }

    #[test]
    fn assurance_levels() {
        assert_eq!(operator().assurance_level(), AssuranceLevel::Basic);

        let mut p = operator();
        p.has_command_link = true;
        assert_eq!(p.assurance_level(), AssuranceLevel::Substantial);

        let mut p = operator();
        p.organization_size = Some(OrganizationSize::Large);
        assert_eq!(p.assurance_level(), AssuranceLevel::Substantial);

        p.serves_critical_users = true;
        assert_eq!(p.assurance_level(), AssuranceLevel::High);
    }

    #[test]
    fn unprotected_uplink_is_critical() {
        let mut p = operator();
        p.has_command_link = true;
        let m = RISK_RULES.evaluate(&p);
        assert_eq!((m.outcome, m.rule_id), (RiskLevel::Critical, "unprotected-telecommand"));
        p.has_telecommand_encryption = true;
        assert_eq!(RISK_RULES.evaluate(&p).outcome, RiskLevel::Medium);
    }

    #[test]
    fn basic_operator_is_low() {
        assert_eq!(RISK_RULES.evaluate(&operator()).outcome, RiskLevel::Low);
    }

    #[test]
    fn control_families_grow_with_assurance() {
        let basic = findings(&operator());
        assert_eq!(basic.control_families.len(), BASIC_CONTROLS.len());
        assert_eq!(basic.penetration_test_cadence, PenTestCadence::NotRequired);

        let mut p = operator();
        p.serves_critical_users = true;
        p.has_command_link = true;
        let high = findings(&p);
        assert_eq!(
            high.control_families.len(),
            BASIC_CONTROLS.len() + SUBSTANTIAL_CONTROLS.len() + HIGH_CONTROLS.len() + 1
        );
        assert_eq!(high.penetration_test_cadence, PenTestCadence::SemiAnnual);
        assert!(high.telecommand_protection_required);
        assert!(!high.telecommand_protected);
    }

    #[test]
    fn telecommand_recommendation_links_ccsds_gaps() {
        let f = Cybersecurity::new().unwrap();
        let mut p = operator();
        p.has_command_link = true;
        let snapshot = vec![RequirementAssessment::new("CCSDS-TC-001", AssessmentStatus::Partial)];
        let report = assess(&f, &p, &snapshot).unwrap();
        let rec = &report.recommendations[0];
        assert_eq!(rec.id, "cy-protect-telecommand");
        assert_eq!(rec.gap_ids, vec!["CCSDS-TC-001", "CCSDS-KEY-001"]);
        let tc = report.gaps.iter().find(|g| g.requirement_id == "CCSDS-TC-001").unwrap();
        assert!(tc.recommendation.starts_with("Complete:"));
    }
}
