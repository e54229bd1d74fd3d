//! # `spacereg corpus`
//!
//! Prints a domain's requirement corpus with its version and digest. With
//! `--profile`, only the requirements applicable to that profile.
//!
//! ```bash
//! spacereg corpus --domain nis2
//! spacereg corpus --domain export-control --profile profile.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use spacereg_core::RegulatoryDomain;
use spacereg_frameworks::Frameworks;

use crate::input::read_profile;
use crate::to_json;

/// Arguments for `spacereg corpus`.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Regulatory domain (e.g. export_control, nis2, debris).
    #[arg(long)]
    pub domain: RegulatoryDomain,

    /// Restrict the listing to requirements applicable to this profile.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Render the corpus listing as JSON.
pub fn render_corpus(args: &CorpusArgs, frameworks: &Frameworks) -> Result<String> {
    let listing = match &args.profile {
        Some(path) => {
            let profile = read_profile(path)?;
            frameworks
                .applicable_listing(args.domain, profile)
                .with_context(|| format!("cannot resolve {} requirements", args.domain))?
        }
        None => frameworks.corpus_listing(args.domain)?,
    };
    tracing::info!(
        domain = %args.domain,
        requirements = listing.requirements.len(),
        digest = %listing.digest,
        "corpus listed"
    );
    to_json(&listing, args.pretty)
}

/// Execute `spacereg corpus`.
pub fn run_corpus(args: &CorpusArgs, frameworks: &Frameworks) -> Result<u8> {
    println!("{}", render_corpus(args, frameworks)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_frameworks::EngineConfig;

    fn frameworks() -> Frameworks {
        Frameworks::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn full_corpus() {
        let args = CorpusArgs {
            domain: RegulatoryDomain::Debris,
            profile: None,
            pretty: false,
        };
        let out = render_corpus(&args, &frameworks()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["domain"], "debris");
        assert_eq!(value["digest"].as_str().unwrap().len(), 64);
        assert!(!value["requirements"].as_array().unwrap().is_empty());
    }

    #[test]
    fn profile_filters_requirements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, "companyTypes: [satellite_operator]\nhasEarItems: true\n").unwrap();
        let f = frameworks();
        let filtered = render_corpus(
            &CorpusArgs {
                domain: RegulatoryDomain::ExportControl,
                profile: Some(path),
                pretty: false,
            },
            &f,
        )
        .unwrap();
        let filtered: serde_json::Value = serde_json::from_str(&filtered).unwrap();
        let ids: Vec<&str> = filtered["requirements"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["id"].as_str())
            .collect();
        assert!(!ids.contains(&"ITAR-REG-001"));
        assert!(ids.iter().any(|id| id.starts_with("EAR-")));
    }

    #[test]
    fn invalid_profile_reports_validation_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{}").unwrap();
        let err = render_corpus(
            &CorpusArgs {
                domain: RegulatoryDomain::ExportControl,
                profile: Some(path),
                pretty: true,
            },
            &frameworks(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("At least one company type is required"));
    }
}
