//! Export-control organization profile.

use serde::{Deserialize, Serialize};

use spacereg_core::{normalize_country, ValidationError};
use spacereg_engine::Profile;

/// Destinations under comprehensive US embargo.
pub const EMBARGOED_DESTINATIONS: &[&str] = &["CU", "IR", "KP", "SY"];

/// Role of the organization in the space supply chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    /// Builds spacecraft or satellite buses.
    SpacecraftManufacturer,
    /// Provides launch services.
    LaunchProvider,
    /// Supplies components or subsystems.
    ComponentSupplier,
    /// Operates satellites.
    SatelliteOperator,
    /// Operates ground stations or ground segment software.
    GroundSegment,
    /// Develops flight or ground software.
    SoftwareProvider,
    /// University or research laboratory.
    ResearchInstitution,
    /// Downstream data or services provider.
    ServiceProvider,
}

/// Export-control posture of one organization.
///
/// Every field except `company_types` is optional and defaults to
/// `false`/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportControlProfile {
    /// Primary classification. At least one is required.
    pub company_types: Vec<CompanyType>,

    /// Handles USML defense articles or technical data.
    pub has_itar_items: bool,
    /// Handles CCL-listed items.
    pub has_ear_items: bool,
    /// Handles encryption items (Category 5 Part 2).
    pub has_encryption_items: bool,

    /// Ships or transfers items abroad.
    pub exports_internationally: bool,
    /// Destination countries (ISO 3166-1 alpha-2).
    pub export_countries: Vec<String>,
    /// Annual export value in US dollars.
    pub annual_export_value_usd: Option<u64>,

    /// Employs or hosts foreign persons.
    pub has_foreign_nationals: bool,
    /// Nationalities of those foreign persons.
    pub foreign_national_countries: Vec<String>,
    /// Participates in joint ventures with foreign partners.
    pub has_joint_ventures: bool,
    /// Manufactures or integrates abroad.
    pub has_manufacturing_abroad: bool,
    /// Holds defense or government contracts.
    pub has_defense_contracts: bool,
    /// Transfers technology or technical data to third parties.
    pub has_technology_transfer: bool,

    /// Registered with the DDTC.
    pub registered_with_ddtc: bool,
    /// Has a Technology Control Plan in place.
    pub has_tcp: bool,
    /// Operates a documented export compliance program.
    pub has_compliance_program: bool,
    /// Uses automated restricted-party screening.
    pub has_automated_screening: bool,
    /// Has designated an Empowered Official.
    pub has_empowered_official: bool,
    /// Has filed a voluntary self-disclosure.
    pub voluntary_disclosure_filed: bool,

    /// Certifications held (e.g. AS9100).
    pub certifications: Vec<String>,
}

impl Profile for ExportControlProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.company_types.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "company type",
            });
        }
        Ok(())
    }
}

impl ExportControlProfile {
    /// Handles ITAR or EAR controlled items.
    pub fn has_controlled_items(&self) -> bool {
        self.has_itar_items || self.has_ear_items
    }

    /// Exports abroad, by flag or by listing destinations.
    pub fn has_export_activity(&self) -> bool {
        self.exports_internationally || !self.export_countries.is_empty()
    }

    /// Controlled items or any export activity.
    pub fn has_controlled_activity(&self) -> bool {
        self.has_controlled_items() || self.has_export_activity()
    }

    /// Normalized, de-duplicated foreign-national countries in input order.
    pub fn foreign_nationalities(&self) -> Vec<String> {
        dedup_countries(&self.foreign_national_countries)
    }

    /// Export destinations under comprehensive embargo.
    pub fn embargoed_destinations(&self) -> Vec<String> {
        dedup_countries(&self.export_countries)
            .into_iter()
            .filter(|c| EMBARGOED_DESTINATIONS.contains(&c.as_str()))
            .collect()
    }

    /// Ships to at least one embargoed destination.
    pub fn ships_to_embargoed(&self) -> bool {
        !self.embargoed_destinations().is_empty()
    }

    /// Number of structural risk factors beyond item control itself.
    pub fn risk_factor_count(&self) -> usize {
        [
            self.has_foreign_nationals,
            self.has_joint_ventures,
            self.has_defense_contracts,
            self.has_technology_transfer,
            self.has_export_activity(),
            self.ships_to_embargoed(),
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

fn dedup_countries(codes: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(codes.len());
    for code in codes {
        let normalized = normalize_country(code);
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}
