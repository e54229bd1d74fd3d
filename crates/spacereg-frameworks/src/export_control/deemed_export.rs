//! Deemed-export (foreign-national) risk.
//!
//! Releasing controlled technology to a foreign person in the United States
//! is an export to that person's country. Nationalities in the configured
//! restricted set get an explicit license requirement each.

use serde::Serialize;

use crate::config::ExportControlConfig;

use super::profile::ExportControlProfile;

/// One foreign-national exposure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeemedExportRisk {
    /// Nationality (ISO alpha-2), or `None` for unspecified nationalities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Whether the nationality is in the restricted set.
    pub restricted: bool,
    /// What is at risk.
    pub description: String,
}

/// Deemed-export assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeemedExportAssessment {
    /// Foreign persons have potential access.
    pub foreign_national_exposure: bool,
    /// A Technology Control Plan is required.
    pub tcp_required: bool,
    /// Nationalities that fall in the restricted set.
    pub restricted_nationalities: Vec<String>,
    /// Identified exposures. Empty without foreign nationals.
    pub risks: Vec<DeemedExportRisk>,
    /// Licenses that must be obtained before release.
    pub required_licenses: Vec<String>,
    /// Recommended actions.
    pub recommendations: Vec<String>,
}

/// Assess deemed-export exposure.
pub fn assess(profile: &ExportControlProfile, config: &ExportControlConfig) -> DeemedExportAssessment {
    let exposure = profile.has_foreign_nationals;
    let tcp_required = exposure || profile.has_joint_ventures;

    let mut assessment = DeemedExportAssessment {
        foreign_national_exposure: exposure,
        tcp_required,
        restricted_nationalities: Vec::new(),
        risks: Vec::new(),
        required_licenses: Vec::new(),
        recommendations: Vec::new(),
    };

    if !exposure {
        if profile.has_joint_ventures {
            assessment.recommendations.push(
                "Cover joint-venture partner access to technical data in a Technology Control Plan"
                    .to_string(),
            );
        }
        return assessment;
    }

    let nationalities = profile.foreign_nationalities();
    for country in &nationalities {
        if !config.is_restricted(country) {
            continue;
        }
        assessment.restricted_nationalities.push(country.clone());
        assessment.risks.push(DeemedExportRisk {
            country: Some(country.clone()),
            restricted: true,
            description: format!(
                "Release of controlled technology to {country} nationals is a deemed export to a restricted destination"
            ),
        });
        if profile.has_itar_items {
            assessment
                .required_licenses
                .push(format!("DSP-5 license for release of ITAR technical data to {country} nationals"));
        }
        if profile.has_ear_items {
            assessment
                .required_licenses
                .push(format!("BIS deemed export license for {country} nationals"));
        }
        if !profile.has_controlled_items() {
            assessment
                .required_licenses
                .push(format!("License determination for technology released to {country} nationals"));
        }
        assessment.recommendations.push(format!(
            "Restrict {country} nationals from controlled technical data until licenses are granted"
        ));
    }

    if profile.has_controlled_items() && assessment.restricted_nationalities.len() < nationalities.len() {
        assessment.risks.push(DeemedExportRisk {
            country: None,
            restricted: false,
            description: "Foreign-person access to controlled technology requires a license determination per nationality"
                .to_string(),
        });
    }
    if profile.has_controlled_items() && nationalities.is_empty() {
        assessment.risks.push(DeemedExportRisk {
            country: None,
            restricted: false,
            description: "Foreign-person nationalities are not recorded; license needs cannot be determined"
                .to_string(),
        });
        assessment
            .recommendations
            .push("Record the nationality of every foreign person with potential access".to_string());
    }

    if !profile.has_tcp {
        assessment.recommendations.push(
            "Implement a Technology Control Plan before granting foreign persons access to controlled areas or data"
                .to_string(),
        );
    }
    assessment
}
