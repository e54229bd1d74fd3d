//! # Applicability Resolver
//!
//! Filters a corpus down to the requirements whose predicate holds for a
//! profile, preserving corpus order. The projections on [`Applicable`]
//! (registrations, authorizations, evidence grouping) are pure re-groupings
//! of that set and add no applicability logic of their own.

use std::collections::BTreeMap;

use spacereg_core::{AssessmentStatus, RequirementCategory};
use spacereg_corpus::{Corpus, RegulationTag, Requirement};

use crate::snapshot::StatusIndex;

/// The requirements of one corpus that apply to one profile.
#[derive(Debug)]
pub struct Applicable<'c, P, R> {
    requirements: Vec<&'c Requirement<P, R>>,
}

/// Evaluate every requirement's applicability predicate against `profile`.
pub fn resolve<'c, P, R: RegulationTag>(
    profile: &P,
    corpus: &'c Corpus<P, R>,
) -> Applicable<'c, P, R> {
    Applicable {
        requirements: corpus
            .iter()
            .filter(|requirement| requirement.applies_to(profile))
            .collect(),
    }
}

impl<'c, P, R: RegulationTag> Applicable<'c, P, R> {
    /// Wrap an already-filtered list. Order is taken as given.
    pub fn from_requirements(requirements: Vec<&'c Requirement<P, R>>) -> Self {
        Self { requirements }
    }

    /// Number of applicable requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether nothing applies.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Applicable requirements in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &'c Requirement<P, R>> + '_ {
        self.requirements.iter().copied()
    }

    /// Applicable requirement ids in corpus order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.requirements.iter().map(|r| r.id).collect()
    }

    /// Whether `id` is applicable.
    pub fn contains(&self, id: &str) -> bool {
        self.requirements.iter().any(|r| r.id == id)
    }

    /// Pair each applicable requirement with its effective status.
    pub fn with_statuses<'a>(
        &'a self,
        statuses: &'a StatusIndex<'a>,
    ) -> impl Iterator<Item = (&'c Requirement<P, R>, AssessmentStatus)> + 'a {
        self.iter().map(move |r| (r, statuses.status_of(r.id)))
    }

    /// Titles of applicable registration requirements.
    pub fn registrations(&self) -> Vec<&'static str> {
        self.titles_in(RequirementCategory::Registration)
    }

    /// Titles of applicable license/authorization requirements.
    pub fn authorizations(&self) -> Vec<&'static str> {
        self.titles_in(RequirementCategory::Licensing)
    }

    /// Applicable requirements belonging to `regulation`.
    pub fn for_regulation(&self, regulation: R) -> impl Iterator<Item = &'c Requirement<P, R>> + '_ {
        self.iter().filter(move |r| r.regulation == regulation)
    }

    /// Whether any applicable requirement is in `category`.
    pub fn has_category(&self, category: RequirementCategory) -> bool {
        self.requirements.iter().any(|r| r.category == category)
    }

    /// Group evidence documents by a caller-chosen section key.
    ///
    /// Sections are ordered by key; documents keep first-seen order and
    /// appear once per section. `section` returning `None` skips a
    /// requirement.
    pub fn evidence_by<K, F>(&self, section: F) -> BTreeMap<K, Vec<&'static str>>
    where
        K: Ord,
        F: Fn(&Requirement<P, R>) -> Option<K>,
    {
        let mut grouped: BTreeMap<K, Vec<&'static str>> = BTreeMap::new();
        for requirement in self.iter() {
            let Some(key) = section(requirement) else {
                continue;
            };
            let documents = grouped.entry(key).or_default();
            for &document in requirement.evidence {
                if !documents.contains(&document) {
                    documents.push(document);
                }
            }
        }
        grouped
    }

    fn titles_in(&self, category: RequirementCategory) -> Vec<&'static str> {
        self.requirements
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.title)
            .collect()
    }
}
