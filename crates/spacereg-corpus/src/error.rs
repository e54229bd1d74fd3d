//! Corpus-specific error types.
//!
//! Corpus faults are data-authoring bugs. They surface once, when a domain
//! framework builds its corpus at process start, and carry the domain and
//! offending id so the authoring mistake can be located directly.

use spacereg_core::RegulatoryDomain;
use thiserror::Error;

/// Errors that can occur while building a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus version string is empty.
    #[error("{domain} corpus has an empty version")]
    EmptyVersion { domain: RegulatoryDomain },

    /// The corpus contains no requirements.
    #[error("{domain} corpus contains no requirements")]
    Empty { domain: RegulatoryDomain },

    /// A requirement has an empty id.
    #[error("{domain} corpus requirement at index {index} has an empty id")]
    EmptyRequirementId {
        domain: RegulatoryDomain,
        index: usize,
    },

    /// Two requirements share an id.
    #[error("{domain} corpus contains duplicate requirement id {id:?}")]
    DuplicateRequirementId {
        domain: RegulatoryDomain,
        id: String,
    },

    /// A requirement has an empty title.
    #[error("{domain} corpus requirement {id:?} has an empty title")]
    EmptyTitle {
        domain: RegulatoryDomain,
        id: String,
    },

    /// Serializing the corpus for its digest failed.
    #[error("failed to serialize corpus for digest: {0}")]
    Digest(#[from] serde_json::Error),
}

/// Result type alias for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
