//! # Assessment Status & Compliance Weight
//!
//! Each per-requirement assessment carries an [`AssessmentStatus`]. The
//! scoring engine converts it to a compliance weight:
//!
//! ```text
//! compliant = 1.0   partial = 0.5   non_compliant = 0.0   not_assessed = 0.0
//! not_applicable    → excluded from numerator and denominator
//! ```
//!
//! Weights are also exposed in half-units (2/1/0) so the scoring engine can
//! stay in integer arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of one requirement within one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// The requirement is fully satisfied.
    Compliant,
    /// The requirement is partially satisfied.
    Partial,
    /// The requirement is not satisfied.
    NonCompliant,
    /// The requirement has not been assessed yet.
    #[default]
    NotAssessed,
    /// The assessor marked the requirement as not applicable.
    NotApplicable,
}

impl AssessmentStatus {
    /// All statuses in declaration order.
    pub fn all() -> &'static [AssessmentStatus] {
        &[
            Self::Compliant,
            Self::Partial,
            Self::NonCompliant,
            Self::NotAssessed,
            Self::NotApplicable,
        ]
    }

    /// Compliance weight in half-units; `None` for `NotApplicable`.
    pub fn weight_units(self) -> Option<u64> {
        match self {
            Self::Compliant => Some(2),
            Self::Partial => Some(1),
            Self::NonCompliant | Self::NotAssessed => Some(0),
            Self::NotApplicable => None,
        }
    }

    /// Compliance weight in `[0.0, 1.0]`; `None` for `NotApplicable`.
    pub fn compliance_weight(self) -> Option<f64> {
        self.weight_units().map(|units| units as f64 / 2.0)
    }

    /// Whether this status counts toward scoring at all.
    pub fn is_scored(self) -> bool {
        self.weight_units().is_some()
    }

    /// Whether a requirement in this status is an open gap.
    pub fn is_gap(self) -> bool {
        !matches!(self, Self::Compliant | Self::NotApplicable)
    }

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Partial => "partial",
            Self::NonCompliant => "non_compliant",
            Self::NotAssessed => "not_assessed",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
