//! # Assessment Snapshots
//!
//! The caller supplies the persisted per-requirement statuses as a flat
//! list of [`RequirementAssessment`] rows. [`StatusIndex`] turns that list
//! into a lookup the scorer and gap analyzer share.
//!
//! ## Resolution
//!
//! - A requirement with no row is `not_assessed`.
//! - Several rows for one requirement: the latest `assessedAt` wins. Equal
//!   or missing timestamps resolve to the later row in snapshot order.
//! - Rows for ids the profile does not make applicable are never consulted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use spacereg_core::AssessmentStatus;

/// One persisted status row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementAssessment {
    /// Requirement this row refers to.
    pub requirement_id: String,
    /// Current status. Missing in input means `not_assessed`.
    #[serde(default)]
    pub status: AssessmentStatus,
    /// Free-form assessor notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the status was last set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
}

impl RequirementAssessment {
    /// A row with the given status and no notes or timestamp.
    pub fn new(requirement_id: impl Into<String>, status: AssessmentStatus) -> Self {
        Self {
            requirement_id: requirement_id.into(),
            status,
            notes: None,
            assessed_at: None,
        }
    }

    /// Attach an assessment timestamp.
    pub fn assessed_at(mut self, at: DateTime<Utc>) -> Self {
        self.assessed_at = Some(at);
        self
    }

    /// Attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn supersedes(&self, existing: &Self) -> bool {
        match (existing.assessed_at, self.assessed_at) {
            (Some(old), Some(new)) => new >= old,
            _ => true,
        }
    }
}

/// Requirement id → effective status row.
#[derive(Debug, Clone, Default)]
pub struct StatusIndex<'s> {
    entries: BTreeMap<&'s str, &'s RequirementAssessment>,
}

impl<'s> StatusIndex<'s> {
    /// Index a snapshot, resolving duplicate rows.
    pub fn build(snapshot: &'s [RequirementAssessment]) -> Self {
        let mut entries: BTreeMap<&'s str, &'s RequirementAssessment> = BTreeMap::new();
        for row in snapshot {
            let id = row.requirement_id.as_str();
            match entries.get(id).copied() {
                Some(existing) => {
                    let replace = row.supersedes(existing);
                    tracing::warn!(
                        requirement_id = id,
                        kept = if replace { row.status.as_str() } else { existing.status.as_str() },
                        discarded = if replace { existing.status.as_str() } else { row.status.as_str() },
                        "duplicate snapshot entries for requirement"
                    );
                    if replace {
                        entries.insert(id, row);
                    }
                }
                None => {
                    entries.insert(id, row);
                }
            }
        }
        Self { entries }
    }

    /// Effective status for `id`; `not_assessed` when absent.
    pub fn status_of(&self, id: &str) -> AssessmentStatus {
        self.entries
            .get(id)
            .map(|row| row.status)
            .unwrap_or(AssessmentStatus::NotAssessed)
    }

    /// Effective row for `id`, if any.
    pub fn get(&self, id: &str) -> Option<&'s RequirementAssessment> {
        self.entries.get(id).copied()
    }

    /// Ids present in the snapshot, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of distinct requirement ids in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
