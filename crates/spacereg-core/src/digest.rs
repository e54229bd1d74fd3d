//! # Corpus Digests
//!
//! A [`CorpusDigest`] is the lowercase hex SHA-256 of a corpus' serialized
//! requirement summaries. Assessment reports carry it so a persisted result
//! records exactly which corpus revision it was scored against.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of a requirement corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusDigest(String);

impl CorpusDigest {
    /// Digest raw bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(hash.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Digest the compact JSON serialization of a value.
    ///
    /// Struct fields serialize in declaration order and the workspace only
    /// uses ordered maps in digested values, so equal values always produce
    /// equal digests.
    pub fn of_json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self::of_bytes(&bytes))
    }

    /// The hex digest string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorpusDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.0)
    }
}
