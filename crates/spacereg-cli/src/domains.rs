//! # `spacereg domains`
//!
//! Lists the six regulatory domains with their corpus versions.
//!
//! ```bash
//! spacereg domains
//! spacereg domains --json
//! ```

use anyhow::Result;
use clap::Args;

use spacereg_frameworks::Frameworks;

use crate::to_json;

/// Arguments for `spacereg domains`.
#[derive(Args, Debug)]
pub struct DomainsArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Render the domain listing.
pub fn render_domains(args: &DomainsArgs, frameworks: &Frameworks) -> Result<String> {
    let domains = frameworks.domains();
    if args.json {
        return to_json(&domains, true);
    }
    let mut out = String::new();
    for d in &domains {
        out.push_str(&format!(
            "  {:<15} {:<24} v{:<8} {} requirements\n",
            d.domain.as_str(),
            d.title,
            d.corpus_version,
            d.requirement_count
        ));
    }
    out.push_str(&format!("\nTotal: {} domains\n", domains.len()));
    Ok(out)
}

/// Execute `spacereg domains`.
pub fn run_domains(args: &DomainsArgs, frameworks: &Frameworks) -> Result<u8> {
    print!("{}", render_domains(args, frameworks)?);
    Ok(0)
}
