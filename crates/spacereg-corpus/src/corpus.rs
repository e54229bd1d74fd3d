//! # Corpus
//!
//! A validated, versioned, fingerprinted collection of requirements for one
//! domain. Construction rejects authoring faults (empty or duplicate ids,
//! empty titles, an empty version). After construction the corpus is never
//! mutated, so a `&Corpus` can be shared freely across assessments.
//!
//! ## Fingerprint
//!
//! The [`CorpusDigest`] is SHA-256 over the canonical JSON of the domain,
//! version and requirement summaries in corpus order. Two processes built
//! from the same source produce the same digest, which ties a report to
//! the exact catalog it was computed against.

use std::collections::HashMap;

use serde::Serialize;

use spacereg_core::{CorpusDigest, RegulatoryDomain};

use crate::error::{CorpusError, CorpusResult};
use crate::regulation::RegulationTag;
use crate::requirement::{Requirement, RequirementSummary};

/// The requirement catalog of one domain.
#[derive(Debug)]
pub struct Corpus<P, R> {
    domain: RegulatoryDomain,
    version: String,
    requirements: Vec<Requirement<P, R>>,
    index: HashMap<&'static str, usize>,
    digest: CorpusDigest,
}

#[derive(Serialize)]
struct Fingerprint<'a, R> {
    domain: RegulatoryDomain,
    version: &'a str,
    requirements: Vec<RequirementSummary<R>>,
}

impl<P, R: RegulationTag> Corpus<P, R> {
    /// Validate and freeze a corpus.
    pub fn new(
        domain: RegulatoryDomain,
        version: impl Into<String>,
        requirements: Vec<Requirement<P, R>>,
    ) -> CorpusResult<Self> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(CorpusError::EmptyVersion { domain });
        }
        if requirements.is_empty() {
            return Err(CorpusError::Empty { domain });
        }

        let mut index = HashMap::with_capacity(requirements.len());
        for (position, requirement) in requirements.iter().enumerate() {
            if requirement.id.trim().is_empty() {
                return Err(CorpusError::EmptyRequirementId {
                    domain,
                    index: position,
                });
            }
            if requirement.title.trim().is_empty() {
                return Err(CorpusError::EmptyTitle {
                    domain,
                    id: requirement.id.to_string(),
                });
            }
            if index.insert(requirement.id, position).is_some() {
                return Err(CorpusError::DuplicateRequirementId {
                    domain,
                    id: requirement.id.to_string(),
                });
            }
        }

        let digest = CorpusDigest::of_json(&Fingerprint {
            domain,
            version: &version,
            requirements: requirements.iter().map(Requirement::summary).collect(),
        })?;

        tracing::debug!(
            domain = %domain,
            version = %version,
            requirements = requirements.len(),
            digest = %digest,
            "corpus loaded"
        );

        Ok(Self {
            domain,
            version,
            requirements,
            index,
            digest,
        })
    }

    /// Domain this corpus belongs to.
    pub fn domain(&self) -> RegulatoryDomain {
        self.domain
    }

    /// Corpus version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Content fingerprint.
    pub fn digest(&self) -> &CorpusDigest {
        &self.digest
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Always `false` for a constructed corpus.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Requirements in authoring order.
    pub fn requirements(&self) -> &[Requirement<P, R>] {
        &self.requirements
    }

    /// Iterate requirements in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, Requirement<P, R>> {
        self.requirements.iter()
    }

    /// Look up a requirement by id.
    pub fn get(&self, id: &str) -> Option<&Requirement<P, R>> {
        self.index.get(id).map(|&i| &self.requirements[i])
    }

    /// Whether `id` names a requirement in this corpus.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Serializable listing of every requirement.
    pub fn summaries(&self) -> Vec<RequirementSummary<R>> {
        self.requirements.iter().map(Requirement::summary).collect()
    }

    /// Distinct regulations referenced by this corpus, in tag order.
    pub fn regulations(&self) -> Vec<R> {
        let mut tags: Vec<R> = self.requirements.iter().map(|r| r.regulation).collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

impl<'a, P, R> IntoIterator for &'a Corpus<P, R> {
    type Item = &'a Requirement<P, R>;
    type IntoIter = std::slice::Iter<'a, Requirement<P, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}
