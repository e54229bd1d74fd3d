//! # Requirement Categories
//!
//! One category vocabulary shared by all six domain corpora. Projections
//! such as "required registrations" or "documentation grouped by category"
//! are pure re-groupings of an applicable requirement set by this field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Functional category of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementCategory {
    /// Registration with a regulator or registry.
    Registration,
    /// A license, authorization or agreement that must be obtained.
    Licensing,
    /// Classification of items, entities or data.
    Classification,
    /// Restricted-party or destination screening.
    Screening,
    /// Controls over access to controlled technology.
    TechnologyControl,
    /// Record retention obligations.
    Recordkeeping,
    /// Management accountability and internal programs.
    Governance,
    /// Staff training obligations.
    Training,
    /// Periodic or event-driven reporting to an authority.
    Reporting,
    /// Risk analysis and risk-management measures.
    RiskManagement,
    /// Incident detection, handling and notification.
    IncidentResponse,
    /// Supplier and supply-chain assurance.
    SupplyChain,
    /// Technical security controls.
    TechnicalSecurity,
    /// End-of-life disposal of spacecraft and stages.
    MissionDisposal,
    /// Conjunction assessment and collision avoidance.
    CollisionAvoidance,
    /// Passivation of stored energy sources.
    Passivation,
    /// Environmental footprint and impact assessment.
    EnvironmentalAssessment,
    /// Hazardous substance authorization and handling.
    HazardousSubstances,
    /// Insurance and financial guarantees.
    Coverage,
}

impl RequirementCategory {
    /// Canonical SCREAMING_SNAKE_CASE name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "REGISTRATION",
            Self::Licensing => "LICENSING",
            Self::Classification => "CLASSIFICATION",
            Self::Screening => "SCREENING",
            Self::TechnologyControl => "TECHNOLOGY_CONTROL",
            Self::Recordkeeping => "RECORDKEEPING",
            Self::Governance => "GOVERNANCE",
            Self::Training => "TRAINING",
            Self::Reporting => "REPORTING",
            Self::RiskManagement => "RISK_MANAGEMENT",
            Self::IncidentResponse => "INCIDENT_RESPONSE",
            Self::SupplyChain => "SUPPLY_CHAIN",
            Self::TechnicalSecurity => "TECHNICAL_SECURITY",
            Self::MissionDisposal => "MISSION_DISPOSAL",
            Self::CollisionAvoidance => "COLLISION_AVOIDANCE",
            Self::Passivation => "PASSIVATION",
            Self::EnvironmentalAssessment => "ENVIRONMENTAL_ASSESSMENT",
            Self::HazardousSubstances => "HAZARDOUS_SUBSTANCES",
            Self::Coverage => "COVERAGE",
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
