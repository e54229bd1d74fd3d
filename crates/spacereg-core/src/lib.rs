#![deny(missing_docs)]

//! # spacereg-core — Foundational Types for the Compliance Engine
//!
//! This crate defines the primitives every other crate in the workspace
//! depends on. It has no internal crate dependencies, only `serde`,
//! `serde_json`, `thiserror` and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Single [`RegulatoryDomain`] enum.** One definition, six variants,
//!    exhaustive `match` everywhere. No per-domain string constants that can
//!    drift apart.
//!
//! 2. **Ordered enums carry their numeric semantics.** [`RiskLevel`] owns the
//!    risk multiplier and [`AssessmentStatus`] owns the compliance weight, so
//!    the scoring engine never hard-codes either table.
//!
//! 3. **Exact arithmetic.** Compliance weights are exposed in half-units so
//!    scores are computed with integers and are bit-identical everywhere.
//!
//! 4. **[`ValidationError`]** is the only failure an assessment can raise.

pub mod category;
pub mod digest;
pub mod domain;
pub mod error;
pub mod money;
pub mod risk;
pub mod size;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use category::RequirementCategory;
pub use digest::CorpusDigest;
pub use domain::RegulatoryDomain;
pub use error::ValidationError;
pub use money::{Currency, Money};
pub use risk::RiskLevel;
pub use size::OrganizationSize;
pub use status::AssessmentStatus;

/// Normalize an ISO 3166-1 alpha-2 country code for comparison.
///
/// Trims whitespace and upper-cases. Profiles are caller-supplied and are
/// never rejected for casing, so every country comparison goes through here.
pub fn normalize_country(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
