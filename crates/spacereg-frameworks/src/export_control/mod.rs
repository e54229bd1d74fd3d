//! # Export Control (ITAR / EAR / OFAC)
//!
//! The most detailed domain. Besides the shared engine pipeline it reports
//! the registrations and authorizations an organization needs, deemed-export
//! exposure, screening and Technology Control Plan requirements, potentially
//! available license exceptions, required documentation and worst-case
//! penalty exposure.
//!
//! ## Risk precedence
//!
//! [`classification::RISK_RULES`] is evaluated top to bottom. ITAR items
//! without DDTC registration, and foreign-person access to controlled items
//! without a Technology Control Plan, are critical regardless of every other
//! fact in the profile.

pub mod classification;
pub mod corpus;
pub mod deemed_export;
pub mod documentation;
pub mod license_exceptions;
pub mod penalties;
pub mod profile;
pub mod recommendations;
pub mod regulation;
pub mod screening;
pub mod tcp;

use std::collections::BTreeMap;

use serde::Serialize;

use spacereg_core::{RegulatoryDomain, RiskLevel};
use spacereg_corpus::{Corpus, CorpusResult};
use spacereg_engine::{Applicable, Framework, RecommendationRule, RuleMatch, RuleTable};

use crate::config::ExportControlConfig;

pub use classification::{classify_item, ItemFlags, Jurisdiction};
pub use deemed_export::{DeemedExportAssessment, DeemedExportRisk};
pub use documentation::DocumentSection;
pub use license_exceptions::LicenseException;
pub use penalties::PenaltyExposure;
pub use profile::{CompanyType, ExportControlProfile};
pub use regulation::ExportRegulation;
pub use screening::{ScreeningFrequency, ScreeningList, ScreeningRequirements};
pub use tcp::{TcpPriority, TcpRequirements};

/// Export-control sub-assessor output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportControlFindings {
    /// Registrations the organization must hold.
    pub required_registrations: Vec<&'static str>,
    /// Licenses and agreements the organization must hold.
    pub required_authorizations: Vec<&'static str>,
    /// Foreign-national exposure.
    pub deemed_export: DeemedExportAssessment,
    /// Restricted-party screening requirements.
    pub screening: ScreeningRequirements,
    /// Technology Control Plan determination.
    pub technology_control_plan: TcpRequirements,
    /// Potentially available license exceptions.
    pub license_exceptions: Vec<LicenseException>,
    /// Required documents by programme area.
    pub documentation: BTreeMap<DocumentSection, Vec<&'static str>>,
    /// Worst-case penalty exposure.
    pub penalty_exposure: PenaltyExposure,
}

/// The export-control framework.
#[derive(Debug)]
pub struct ExportControl {
    corpus: Corpus<ExportControlProfile, ExportRegulation>,
    config: ExportControlConfig,
}

impl ExportControl {
    /// Build the framework, validating its corpus.
    pub fn new(config: &ExportControlConfig) -> CorpusResult<Self> {
        Ok(Self {
            corpus: corpus::corpus()?,
            config: config.clone(),
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ExportControlConfig {
        &self.config
    }
}

impl Framework for ExportControl {
    type Profile = ExportControlProfile;
    type Regulation = ExportRegulation;
    type Jurisdiction = Jurisdiction;
    type Findings = ExportControlFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::ExportControl
    }

    fn corpus(&self) -> &Corpus<ExportControlProfile, ExportRegulation> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<ExportControlProfile, RiskLevel> {
        &classification::RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &ExportControlProfile) -> RuleMatch<Jurisdiction> {
        classification::PROFILE_JURISDICTION.evaluate(profile)
    }

    fn findings(
        &self,
        profile: &ExportControlProfile,
        applicable: &Applicable<'_, ExportControlProfile, ExportRegulation>,
    ) -> ExportControlFindings {
        ExportControlFindings {
            required_registrations: applicable.registrations(),
            required_authorizations: applicable.authorizations(),
            deemed_export: deemed_export::assess(profile, &self.config),
            screening: screening::assess(profile, &self.config),
            technology_control_plan: tcp::assess(profile),
            license_exceptions: license_exceptions::available(profile),
            documentation: documentation::required(profile, applicable),
            penalty_exposure: penalties::exposure(profile),
        }
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<ExportControlProfile, ExportRegulation>] {
        recommendations::RULES
    }
}
