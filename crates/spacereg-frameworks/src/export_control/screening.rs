//! Restricted-party screening requirements.

use std::fmt;

use serde::Serialize;

use crate::config::ExportControlConfig;

use super::profile::ExportControlProfile;

/// A government restricted-party list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningList {
    /// OFAC Specially Designated Nationals and Blocked Persons.
    Sdn,
    /// BIS Entity List.
    EntityList,
    /// BIS Denied Persons List.
    DeniedPersons,
    /// BIS Unverified List.
    Unverified,
    /// BIS Military End-User List.
    MilitaryEndUser,
    /// State Department AECA Debarred List.
    AecaDebarred,
}

impl fmt::Display for ScreeningList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sdn => "OFAC SDN List",
            Self::EntityList => "BIS Entity List",
            Self::DeniedPersons => "BIS Denied Persons List",
            Self::Unverified => "BIS Unverified List",
            Self::MilitaryEndUser => "BIS Military End-User List",
            Self::AecaDebarred => "AECA Debarred List",
        })
    }
}

/// How often the counterparty base is re-screened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningFrequency {
    /// Every business day.
    Daily,
    /// Weekly batch re-screening.
    Weekly,
}

/// Screening requirements for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRequirements {
    /// Lists that must be screened.
    pub lists: Vec<ScreeningList>,
    /// Red-flag (know-your-customer) review is mandatory.
    pub red_flag_review_required: bool,
    /// Screening must be automated rather than manual.
    pub automated_screening_required: bool,
    /// Automated screening is already in place.
    pub automated_screening_in_place: bool,
    /// Re-screening cadence.
    pub frequency: ScreeningFrequency,
    /// Embargoed destinations found in the export countries.
    pub embargoed_destinations: Vec<String>,
}

/// Determine screening requirements.
pub fn assess(profile: &ExportControlProfile, config: &ExportControlConfig) -> ScreeningRequirements {
    let mut lists = vec![ScreeningList::Sdn];
    if profile.has_export_activity() || profile.has_ear_items {
        lists.extend([
            ScreeningList::EntityList,
            ScreeningList::DeniedPersons,
            ScreeningList::Unverified,
            ScreeningList::MilitaryEndUser,
        ]);
    }
    if profile.has_itar_items {
        lists.push(ScreeningList::AecaDebarred);
    }

    let high_volume = profile
        .annual_export_value_usd
        .is_some_and(|value| value >= config.high_volume_threshold_usd);

    ScreeningRequirements {
        lists,
        red_flag_review_required: profile.has_controlled_activity(),
        automated_screening_required: high_volume,
        automated_screening_in_place: profile.has_automated_screening,
        frequency: if high_volume {
            ScreeningFrequency::Daily
        } else {
            ScreeningFrequency::Weekly
        },
        embargoed_destinations: profile.embargoed_destinations(),
    }
}
