#![deny(missing_docs)]

//! # spacereg-engine — Compliance Assessment Engine
//!
//! One generic engine shared by every regulatory domain. A domain plugs in
//! through the [`Framework`] trait: it supplies a profile type, a
//! regulation tag, a requirement [`Corpus`](spacereg_corpus::Corpus), a
//! risk-precedence [`RuleTable`], a jurisdiction classifier, a findings
//! object built by its sub-assessors, and its own recommendation rules.
//!
//! ## Pipeline
//!
//! ```text
//! validate ─▶ resolve ─▶ score ─▶ classify ─▶ gaps ─▶ findings ─▶ recommend
//! ```
//!
//! [`assess`] runs the pipeline synchronously and returns one immutable
//! [`AssessmentReport`]. After profile validation nothing can fail: every
//! degenerate input (no applicable requirements, empty snapshot, unknown
//! requirement ids) produces a well-defined report.
//!
//! ## Determinism
//!
//! The engine holds no mutable state and performs no I/O. Scores use exact
//! integer arithmetic, per-regulation maps are ordered, and gap and
//! recommendation sorts are stable, so identical inputs always serialize to
//! identical bytes.

pub mod applicability;
pub mod assessment;
pub mod classification;
pub mod framework;
pub mod gaps;
pub mod recommend;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testkit;

pub use applicability::{resolve, Applicable};
pub use assessment::{assess, AssessmentReport, Engine, ReportOf};
pub use classification::RiskClassification;
pub use framework::{Framework, Profile};
pub use gaps::{analyze, Gap};
pub use recommend::{
    baseline_rules, recommend, Recommendation, RecommendationContext, RecommendationRule,
    Timeframe,
};
pub use rules::{Fallback, Rule, RuleMatch, RuleTable};
pub use scoring::{score, ComplianceScore, StatusCounts};
pub use snapshot::{RequirementAssessment, StatusIndex};
