//! # Validation Errors
//!
//! The engine's only observable failure mode. A profile missing its primary
//! classification is rejected at the orchestrator's entry point and the
//! error propagates to the caller unmodified; every other absent field is
//! defaulted, never rejected.

use thiserror::Error;

/// Validation failures raised at the engine boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The profile lacks its mandatory primary classification.
    ///
    /// `field` is the human-readable singular name of the missing value,
    /// e.g. `"company type"`.
    #[error("At least one {field} is required")]
    MissingClassification {
        /// Human-readable name of the missing classification.
        field: &'static str,
    },

    /// A domain name could not be parsed into a regulatory domain.
    #[error("unknown regulatory domain: \"{0}\"")]
    UnknownDomain(String),
}
