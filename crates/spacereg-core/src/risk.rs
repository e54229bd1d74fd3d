//! # Risk Levels
//!
//! [`RiskLevel`] is totally ordered `Low < Medium < High < Critical`. The
//! derived `Ord` follows declaration order, so sorting "by risk descending"
//! is `b.cmp(&a)` everywhere in the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk level of a requirement or of an overall classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Minor administrative exposure.
    Low,
    /// Material exposure that should be planned for.
    Medium,
    /// Serious exposure requiring prompt remediation.
    High,
    /// Exposure that must be remediated immediately.
    Critical,
}

impl RiskLevel {
    /// All levels from most to least severe.
    pub fn descending() -> &'static [RiskLevel] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Scoring multiplier: critical=4, high=3, medium=2, low=1.
    ///
    /// Higher-risk gaps depress a weighted score more than the same number
    /// of lower-risk gaps.
    pub fn multiplier(self) -> u64 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
