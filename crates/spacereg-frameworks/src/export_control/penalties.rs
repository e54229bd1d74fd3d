//! Penalty exposure summary.
//!
//! Informational only; nothing here changes a score or a risk level.

use serde::Serialize;

use spacereg_corpus::{PenaltyReference, RegulationTag};

use super::profile::ExportControlProfile;
use super::regulation::ExportRegulation;

/// Worst-case penalty exposure for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyExposure {
    /// Regime with the highest civil maximum among those applicable.
    pub governing_regime: ExportRegulation,
    /// Its statutory maxima.
    pub reference: PenaltyReference,
    /// Rendered civil maximum.
    pub max_civil_penalty: String,
    /// Rendered criminal maximum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_criminal_penalty: Option<String>,
    /// Factors an enforcement agency weighs in mitigation.
    pub mitigating_factors: Vec<&'static str>,
    /// Factors an enforcement agency weighs in aggravation.
    pub aggravating_factors: Vec<&'static str>,
}

fn applicable_regimes(profile: &ExportControlProfile) -> Vec<ExportRegulation> {
    let mut regimes = Vec::with_capacity(3);
    if profile.has_itar_items {
        regimes.push(ExportRegulation::Itar);
    }
    if profile.has_ear_items {
        regimes.push(ExportRegulation::Ear);
    }
    regimes.push(ExportRegulation::Ofac);
    regimes
}

/// Summarize penalty exposure.
pub fn exposure(profile: &ExportControlProfile) -> PenaltyExposure {
    let (governing_regime, reference) = applicable_regimes(profile)
        .into_iter()
        .filter_map(|regime| regime.penalty().map(|penalty| (regime, penalty)))
        .max_by_key(|(_, penalty)| penalty.max_civil.amount)
        .unwrap_or((ExportRegulation::Ofac, super::regulation::OFAC_PENALTY));

    let mut mitigating = Vec::new();
    if profile.has_compliance_program {
        mitigating.push("Documented export compliance program");
    }
    if profile.voluntary_disclosure_filed {
        mitigating.push("Voluntary self-disclosure filed");
    }
    if profile.has_automated_screening {
        mitigating.push("Automated restricted-party screening");
    }

    let mut aggravating = Vec::new();
    if profile.has_itar_items && !profile.registered_with_ddtc {
        aggravating.push("Handling ITAR items without DDTC registration");
    }
    if profile.has_controlled_items() && profile.has_foreign_nationals && !profile.has_tcp {
        aggravating.push("Foreign-person access without a Technology Control Plan");
    }
    if profile.ships_to_embargoed() {
        aggravating.push("Shipments to comprehensively embargoed destinations");
    }

    PenaltyExposure {
        governing_regime,
        max_civil_penalty: reference.describe(),
        max_criminal_penalty: reference.describe_criminal(),
        reference,
        mitigating_factors: mitigating,
        aggravating_factors: aggravating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_control::profile::CompanyType;

    fn base() -> ExportControlProfile {
        ExportControlProfile {
            company_types: vec![CompanyType::GroundSegment],
            ..Default::default()
        }
    }

    #[test]
    fn itar_governs_when_present() {
        let mut p = base();
        p.has_itar_items = true;
        p.has_ear_items = true;
        let e = exposure(&p);
        assert_eq!(e.governing_regime, ExportRegulation::Itar);
        assert_eq!(e.max_civil_penalty, "Up to $1,271,078 per violation (22 U.S.C. 2778)");
        assert_eq!(e.aggravating_factors, vec!["Handling ITAR items without DDTC registration"]);
    }

    #[test]
    fn ofac_exceeds_ear() {
        let mut p = base();
        p.has_ear_items = true;
        assert_eq!(exposure(&p).governing_regime, ExportRegulation::Ofac);
        assert_eq!(exposure(&base()).governing_regime, ExportRegulation::Ofac);
    }

    #[test]
    fn mitigating_factors() {
        let mut p = base();
        p.has_compliance_program = true;
        p.voluntary_disclosure_filed = true;
        p.has_automated_screening = true;
        let e = exposure(&p);
        assert_eq!(e.mitigating_factors.len(), 3);
        assert!(e.aggravating_factors.is_empty());
        assert_eq!(
            e.max_criminal_penalty.as_deref(),
            Some("Up to $1,000,000 and 20 years imprisonment per violation")
        );
    }

    #[test]
    fn embargo_aggravates() {
        let mut p = base();
        p.export_countries = vec!["KP".into()];
        assert!(exposure(&p)
            .aggravating_factors
            .contains(&"Shipments to comprehensively embargoed destinations"));
    }
}
