//! # Organization Size
//!
//! EU SME size classes (Commission Recommendation 2003/361/EC), used by the
//! NIS2, cybersecurity and environmental frameworks to scope obligations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size class of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationSize {
    /// Fewer than 10 staff and at most €2M turnover.
    Micro,
    /// Fewer than 50 staff and at most €10M turnover.
    #[default]
    Small,
    /// Fewer than 250 staff and at most €50M turnover.
    Medium,
    /// Everything above the medium thresholds.
    Large,
}

impl OrganizationSize {
    /// Derive the size class from headcount and annual turnover.
    ///
    /// A class applies only when both the headcount and the turnover fall
    /// under its ceilings; otherwise the next class up is tried.
    pub fn from_headcount_and_turnover(employees: u32, turnover_eur: u64) -> Self {
        const CEILINGS: [(OrganizationSize, u32, u64); 3] = [
            (OrganizationSize::Micro, 10, 2_000_000),
            (OrganizationSize::Small, 50, 10_000_000),
            (OrganizationSize::Medium, 250, 50_000_000),
        ];
        CEILINGS
            .iter()
            .find(|(_, max_staff, max_turnover)| employees < *max_staff && turnover_eur <= *max_turnover)
            .map(|(size, _, _)| *size)
            .unwrap_or(OrganizationSize::Large)
    }

    /// Resolve an effective size from an explicit class or raw figures.
    ///
    /// An explicit class wins; otherwise headcount/turnover are used when
    /// both are present; otherwise the default (`Small`).
    pub fn resolve(explicit: Option<Self>, employees: Option<u32>, turnover_eur: Option<u64>) -> Self {
        match (explicit, employees, turnover_eur) {
            (Some(size), _, _) => size,
            (None, Some(e), Some(t)) => Self::from_headcount_and_turnover(e, t),
            (None, Some(e), None) => Self::from_headcount_and_turnover(e, 0),
            _ => Self::default(),
        }
    }

    /// Whether the organization is medium-sized or larger.
    pub fn is_medium_or_larger(self) -> bool {
        self >= Self::Medium
    }
}

impl fmt::Display for OrganizationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        f.write_str(s)
    }
}
