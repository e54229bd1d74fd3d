//! Framework-level error types.
//!
//! Wraps the lower crates' errors so callers of the registry handle one
//! type. Validation errors render their own message unchanged.

use thiserror::Error;

use spacereg_core::{RegulatoryDomain, ValidationError};
use spacereg_corpus::CorpusError;

/// Errors raised by framework construction, configuration and JSON-level
/// assessment dispatch.
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// The profile failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A built-in corpus failed to build.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Configuration YAML could not be parsed.
    #[error("failed to parse configuration YAML: {0}")]
    ConfigYaml(#[from] serde_yaml::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The profile JSON does not match the domain's profile shape.
    #[error("invalid {domain} profile: {source}")]
    Profile {
        domain: RegulatoryDomain,
        source: serde_json::Error,
    },

    /// A report could not be serialized.
    #[error("failed to serialize {domain} output: {source}")]
    Serialize {
        domain: RegulatoryDomain,
        source: serde_json::Error,
    },
}

/// Result type alias for framework operations.
pub type FrameworkResult<T> = Result<T, FrameworkError>;
