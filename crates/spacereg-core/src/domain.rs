//! # Regulatory Domains — Single Source of Truth
//!
//! Defines the [`RegulatoryDomain`] enum with all six domains the engine is
//! instantiated for. Every crate in the workspace uses this one definition;
//! the compiler enforces exhaustive `match`, so adding a seventh domain
//! forces every dispatch site to address it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A regulatory domain with its own requirement corpus and rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryDomain {
    /// Export control (ITAR, EAR, OFAC sanctions).
    ExportControl,
    /// NIS2 Directive obligations for space-sector entities.
    Nis2,
    /// Space debris mitigation (IADC, ISO 24113, national rules).
    Debris,
    /// Cybersecurity of space and ground segments.
    Cybersecurity,
    /// Environmental footprint of launch and spacecraft activity.
    Environmental,
    /// Third-party liability and mission insurance.
    Insurance,
}

impl RegulatoryDomain {
    /// Return all regulatory domains as a slice, in declaration order.
    pub fn all() -> &'static [RegulatoryDomain] {
        &[
            Self::ExportControl,
            Self::Nis2,
            Self::Debris,
            Self::Cybersecurity,
            Self::Environmental,
            Self::Insurance,
        ]
    }

    /// The total number of regulatory domains.
    pub const COUNT: usize = 6;

    /// The canonical snake_case name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExportControl => "export_control",
            Self::Nis2 => "nis2",
            Self::Debris => "debris",
            Self::Cybersecurity => "cybersecurity",
            Self::Environmental => "environmental",
            Self::Insurance => "insurance",
        }
    }

    /// Human-readable title for reports.
    pub fn title(self) -> &'static str {
        match self {
            Self::ExportControl => "Export Control",
            Self::Nis2 => "NIS2",
            Self::Debris => "Debris Mitigation",
            Self::Cybersecurity => "Cybersecurity",
            Self::Environmental => "Environmental Footprint",
            Self::Insurance => "Insurance",
        }
    }
}

impl fmt::Display for RegulatoryDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegulatoryDomain {
    type Err = ValidationError;

    /// Parse a domain name. Accepts snake_case and kebab-case, any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownDomain(s.to_string()))
    }
}
