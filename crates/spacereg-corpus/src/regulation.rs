//! # Regulation Tags
//!
//! Every domain defines its own regulation enum (ITAR/EAR/OFAC for export
//! control, NIS2 articles, debris standards, ...). The engine is generic over
//! [`RegulationTag`], so per-regulation scoring and penalty lookup work the
//! same way in every domain.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::penalty::PenaltyReference;

/// A regulation a requirement belongs to.
///
/// Implemented by small `Copy` enums. `Ord` fixes the iteration order of
/// per-regulation score maps, which keeps serialized output deterministic.
pub trait RegulationTag:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Short code, e.g. `"ITAR"`.
    fn code(self) -> &'static str;

    /// Default penalty for violating a requirement under this regulation.
    ///
    /// `None` for voluntary standards that carry no penalty of their own.
    fn penalty(self) -> Option<PenaltyReference>;
}
