//! # spacereg-cli — Command-Line Interface
//!
//! Thin file-in, JSON-out wrapper around [`spacereg_frameworks::Frameworks`].
//!
//! ## Subcommands
//!
//! - `spacereg domains`: the six regulatory domains and their corpora.
//! - `spacereg corpus`: a domain's requirements, optionally filtered to a
//!   profile.
//! - `spacereg assess`: a full assessment report.
//!
//! ```bash
//! spacereg --config spacereg.yaml assess --domain export_control \
//!     --profile profile.json --statuses statuses.yaml --pretty
//! ```
//!
//! Every handler returns the process exit code. Errors bubble up as
//! `anyhow::Error` and the binary maps them to exit code 1.

pub mod assess;
pub mod corpus;
pub mod domains;
pub mod input;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use spacereg_frameworks::Frameworks;

/// Load the configuration and build every framework.
pub fn build_frameworks(config: Option<&Path>) -> Result<Frameworks> {
    let config = input::load_config(config)?;
    Frameworks::new(&config).context("failed to build regulatory frameworks")
}

/// Serialize `value` as compact or pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let frameworks = build_frameworks(None).unwrap();
        assert_eq!(frameworks.domains().len(), 6);
    }

    #[test]
    fn rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spacereg.yaml");
        std::fs::write(&path, "export_control:\n  high_volume_threshold_usd: 0\n").unwrap();
        let err = build_frameworks(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("greater than zero"));
    }

    #[test]
    fn pretty_and_compact_json() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(to_json(&value, false).unwrap(), r#"{"a":1}"#);
        assert!(to_json(&value, true).unwrap().contains('\n'));
    }
}
