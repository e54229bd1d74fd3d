//! # `spacereg assess`
//!
//! Assesses a profile against a domain and prints the report as JSON.
//!
//! ```bash
//! spacereg assess --domain export_control --profile profile.json
//! spacereg assess --domain nis2 --profile nis2.yaml --statuses statuses.yaml --pretty
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use spacereg_core::RegulatoryDomain;
use spacereg_frameworks::Frameworks;

use crate::input::{read_profile, read_snapshot};
use crate::to_json;

/// Arguments for `spacereg assess`.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Regulatory domain (e.g. export_control, nis2, debris).
    #[arg(long)]
    pub domain: RegulatoryDomain,

    /// Organization profile (JSON or YAML).
    #[arg(long)]
    pub profile: PathBuf,

    /// Status snapshot: a list of `{requirementId, status}` rows.
    #[arg(long)]
    pub statuses: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the assessment and render the report.
pub fn render_assessment(args: &AssessArgs, frameworks: &Frameworks) -> Result<String> {
    let profile = read_profile(&args.profile)?;
    let snapshot = read_snapshot(args.statuses.as_deref())?;
    let report = frameworks
        .assess_json(args.domain, profile, &snapshot)
        .with_context(|| format!("{} assessment failed", args.domain))?;
    to_json(&report, args.pretty)
}

/// Execute `spacereg assess`.
pub fn run_assess(args: &AssessArgs, frameworks: &Frameworks) -> Result<u8> {
    println!("{}", render_assessment(args, frameworks)?);
    Ok(0)
}
