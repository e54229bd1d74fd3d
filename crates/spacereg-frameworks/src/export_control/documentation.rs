//! Required documentation, grouped by programme area.

use std::collections::BTreeMap;

use serde::Serialize;

use spacereg_core::RequirementCategory;
use spacereg_engine::Applicable;

use super::profile::ExportControlProfile;
use super::regulation::ExportRegulation;

/// Programme area a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSection {
    /// ITAR programme records.
    Itar,
    /// EAR programme records.
    Ear,
    /// Technology Control Plan.
    TechnologyControlPlan,
    /// Restricted-party screening.
    Screening,
}

/// Baseline plan records whenever foreign persons are involved, listed
/// items or not.
const TCP_DOCUMENTS: &[&str] = &["Technology Control Plan", "Foreign person access log"];

/// Documents required by the applicable requirements and by foreign-person
/// involvement, de-duplicated per section.
pub fn required(
    profile: &ExportControlProfile,
    applicable: &Applicable<'_, ExportControlProfile, ExportRegulation>,
) -> BTreeMap<DocumentSection, Vec<&'static str>> {
    let mut docs = applicable.evidence_by(|requirement| {
        Some(match (requirement.category, requirement.regulation) {
            (RequirementCategory::TechnologyControl, _) => DocumentSection::TechnologyControlPlan,
            (RequirementCategory::Screening, _) | (_, ExportRegulation::Ofac) => {
                DocumentSection::Screening
            }
            (_, ExportRegulation::Itar) => DocumentSection::Itar,
            (_, ExportRegulation::Ear) => DocumentSection::Ear,
        })
    });
    if profile.has_foreign_nationals {
        let section = docs.entry(DocumentSection::TechnologyControlPlan).or_default();
        for doc in TCP_DOCUMENTS {
            if !section.contains(doc) {
                section.push(*doc);
            }
        }
    }
    docs
}
