//! # spacereg-corpus — Requirement Corpora
//!
//! A corpus is the static, versioned catalog of requirements for one
//! regulatory domain. It is authored in code alongside the domain's profile
//! type, validated once when the domain framework is constructed, and then
//! treated as frozen, read-only input shared by every assessment.
//!
//! - [`Requirement`]: one obligation, with a named applicability predicate
//!   ([`Applicability`]) fixed at authoring time.
//! - [`RegulationTag`]: the per-domain regulation enum (e.g. ITAR/EAR),
//!   carrying default penalty metadata.
//! - [`PenaltyReference`]: display-only penalty metadata.
//! - [`Corpus`]: the validated, fingerprinted collection.
//!
//! ## Data Format
//!
//! Predicates are plain `fn(&P) -> bool` pointers with a name. There is no
//! runtime expression language: what a requirement applies to is decided
//! where the requirement is written.

pub mod corpus;
pub mod error;
pub mod penalty;
pub mod regulation;
pub mod requirement;

// Re-export primary types.
pub use corpus::Corpus;
pub use error::{CorpusError, CorpusResult};
pub use penalty::{PenaltyBasis, PenaltyReference};
pub use regulation::RegulationTag;
pub use requirement::{Applicability, Requirement, RequirementSummary};
