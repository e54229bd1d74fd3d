//! License exceptions that may be available to a profile.
//!
//! Availability here is a screening hint. Each exception still needs a
//! documented eligibility determination before it is relied on.

use serde::Serialize;

use super::profile::ExportControlProfile;
use super::regulation::ExportRegulation;

/// A potentially available exception or exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseException {
    /// Short code, e.g. `TMP`.
    pub code: &'static str,
    /// Regime granting it.
    pub regulation: ExportRegulation,
    /// Name and citation.
    pub name: &'static str,
    /// Conditions for use.
    pub criteria: &'static str,
}

struct Candidate {
    exception: LicenseException,
    when: fn(&ExportControlProfile) -> bool,
}

const CANDIDATES: &[Candidate] = &[
    Candidate {
        exception: LicenseException {
            code: "TMP",
            regulation: ExportRegulation::Ear,
            name: "Temporary exports (15 CFR 740.9)",
            criteria: "Items return within one year; not available for ITAR articles",
        },
        when: |p| !p.has_itar_items,
    },
    Candidate {
        exception: LicenseException {
            code: "GOV",
            regulation: ExportRegulation::Ear,
            name: "Governments and international organizations (15 CFR 740.11)",
            criteria: "Consignee is a cooperating government agency or US government end user",
        },
        when: |p| p.has_defense_contracts,
    },
    Candidate {
        exception: LicenseException {
            code: "126.4",
            regulation: ExportRegulation::Itar,
            name: "US Government exemption (22 CFR 126.4)",
            criteria: "Export by or for a US government agency under a government contract",
        },
        when: |p| p.has_itar_items && p.has_defense_contracts,
    },
    Candidate {
        exception: LicenseException {
            code: "RPL",
            regulation: ExportRegulation::Ear,
            name: "Servicing and replacement parts (15 CFR 740.10)",
            criteria: "One-for-one replacement of parts for previously exported equipment",
        },
        when: |p| p.has_ear_items,
    },
    Candidate {
        exception: LicenseException {
            code: "ENC",
            regulation: ExportRegulation::Ear,
            name: "Encryption commodities, software and technology (15 CFR 740.17)",
            criteria: "Item classified under Category 5 Part 2 with classification request or self-report filed",
        },
        when: |p| p.has_encryption_items,
    },
    Candidate {
        exception: LicenseException {
            code: "TSU",
            regulation: ExportRegulation::Ear,
            name: "Technology and software unrestricted (15 CFR 740.13)",
            criteria: "Operation technology, sales technology or software updates for lawfully exported items",
        },
        when: |p| p.has_ear_items && p.has_technology_transfer,
    },
];

/// Exceptions potentially available to `profile`, in catalogue order.
pub fn available(profile: &ExportControlProfile) -> Vec<LicenseException> {
    CANDIDATES
        .iter()
        .filter(|candidate| (candidate.when)(profile))
        .map(|candidate| candidate.exception)
        .collect()
}
