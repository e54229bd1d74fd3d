//! # Framework Registry
//!
//! [`Frameworks`] builds every domain framework once, validating all six
//! corpora, and dispatches JSON-level requests by [`RegulatoryDomain`].
//! Callers that know their domain at compile time should use the typed
//! frameworks directly; the registry serves the CLI and other callers that
//! only have a domain name and a JSON document.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use spacereg_core::{CorpusDigest, RegulatoryDomain};
use spacereg_engine::{Engine, Framework, RequirementAssessment};

use crate::config::EngineConfig;
use crate::cybersecurity::Cybersecurity;
use crate::debris::Debris;
use crate::environmental::Environmental;
use crate::error::{FrameworkError, FrameworkResult};
use crate::export_control::ExportControl;
use crate::insurance::Insurance;
use crate::nis2::Nis2;

/// One entry of the domain listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Domain identity.
    pub domain: RegulatoryDomain,
    /// Human-readable title.
    pub title: &'static str,
    /// Corpus version.
    pub corpus_version: String,
    /// Number of requirements in the corpus.
    pub requirement_count: usize,
}

/// A corpus, or the part of it applicable to one profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusListing {
    /// Domain identity.
    pub domain: RegulatoryDomain,
    /// Corpus version.
    pub version: String,
    /// Corpus fingerprint.
    pub digest: CorpusDigest,
    /// Requirement summaries, in corpus order.
    pub requirements: Vec<Value>,
}

/// Every domain framework, built once.
#[derive(Debug)]
pub struct Frameworks {
    export_control: Engine<ExportControl>,
    nis2: Engine<Nis2>,
    debris: Engine<Debris>,
    cybersecurity: Engine<Cybersecurity>,
    environmental: Engine<Environmental>,
    insurance: Engine<Insurance>,
}

impl Frameworks {
    /// Build all six frameworks.
    pub fn new(config: &EngineConfig) -> FrameworkResult<Self> {
        let frameworks = Self {
            export_control: Engine::new(ExportControl::new(&config.export_control)?),
            nis2: Engine::new(Nis2::new()?),
            debris: Engine::new(Debris::new()?),
            cybersecurity: Engine::new(Cybersecurity::new()?),
            environmental: Engine::new(Environmental::new()?),
            insurance: Engine::new(Insurance::new(&config.insurance)?),
        };
        tracing::debug!(domains = RegulatoryDomain::COUNT, "frameworks built");
        Ok(frameworks)
    }

    /// The export-control engine.
    pub fn export_control(&self) -> &Engine<ExportControl> {
        &self.export_control
    }

    /// The NIS2 engine.
    pub fn nis2(&self) -> &Engine<Nis2> {
        &self.nis2
    }

    /// The debris mitigation engine.
    pub fn debris(&self) -> &Engine<Debris> {
        &self.debris
    }

    /// The cybersecurity engine.
    pub fn cybersecurity(&self) -> &Engine<Cybersecurity> {
        &self.cybersecurity
    }

    /// The environmental footprint engine.
    pub fn environmental(&self) -> &Engine<Environmental> {
        &self.environmental
    }

    /// The insurance engine.
    pub fn insurance(&self) -> &Engine<Insurance> {
        &self.insurance
    }

    /// One entry per domain, in declaration order.
    pub fn domains(&self) -> Vec<DomainInfo> {
        RegulatoryDomain::all()
            .iter()
            .map(|&domain| match domain {
                RegulatoryDomain::ExportControl => info(&self.export_control),
                RegulatoryDomain::Nis2 => info(&self.nis2),
                RegulatoryDomain::Debris => info(&self.debris),
                RegulatoryDomain::Cybersecurity => info(&self.cybersecurity),
                RegulatoryDomain::Environmental => info(&self.environmental),
                RegulatoryDomain::Insurance => info(&self.insurance),
            })
            .collect()
    }

    /// Assess a JSON profile and return the serialized report.
    pub fn assess_json(
        &self,
        domain: RegulatoryDomain,
        profile: Value,
        snapshot: &[RequirementAssessment],
    ) -> FrameworkResult<Value> {
        match domain {
            RegulatoryDomain::ExportControl => assess_value(&self.export_control, profile, snapshot),
            RegulatoryDomain::Nis2 => assess_value(&self.nis2, profile, snapshot),
            RegulatoryDomain::Debris => assess_value(&self.debris, profile, snapshot),
            RegulatoryDomain::Cybersecurity => assess_value(&self.cybersecurity, profile, snapshot),
            RegulatoryDomain::Environmental => assess_value(&self.environmental, profile, snapshot),
            RegulatoryDomain::Insurance => assess_value(&self.insurance, profile, snapshot),
        }
    }

    /// The full corpus of a domain.
    pub fn corpus_listing(&self, domain: RegulatoryDomain) -> FrameworkResult<CorpusListing> {
        match domain {
            RegulatoryDomain::ExportControl => listing(&self.export_control, None),
            RegulatoryDomain::Nis2 => listing(&self.nis2, None),
            RegulatoryDomain::Debris => listing(&self.debris, None),
            RegulatoryDomain::Cybersecurity => listing(&self.cybersecurity, None),
            RegulatoryDomain::Environmental => listing(&self.environmental, None),
            RegulatoryDomain::Insurance => listing(&self.insurance, None),
        }
    }

    /// The requirements of a domain applicable to a JSON profile.
    pub fn applicable_listing(
        &self,
        domain: RegulatoryDomain,
        profile: Value,
    ) -> FrameworkResult<CorpusListing> {
        match domain {
            RegulatoryDomain::ExportControl => listing(&self.export_control, Some(profile)),
            RegulatoryDomain::Nis2 => listing(&self.nis2, Some(profile)),
            RegulatoryDomain::Debris => listing(&self.debris, Some(profile)),
            RegulatoryDomain::Cybersecurity => listing(&self.cybersecurity, Some(profile)),
            RegulatoryDomain::Environmental => listing(&self.environmental, Some(profile)),
            RegulatoryDomain::Insurance => listing(&self.insurance, Some(profile)),
        }
    }
}

// ---------------------------------------------------------------------------
// Generic dispatch
// ---------------------------------------------------------------------------

fn info<F: Framework>(engine: &Engine<F>) -> DomainInfo {
    let corpus = engine.framework().corpus();
    DomainInfo {
        domain: engine.domain(),
        title: engine.domain().title(),
        corpus_version: corpus.version().to_string(),
        requirement_count: corpus.len(),
    }
}

fn parse_profile<F>(engine: &Engine<F>, profile: Value) -> FrameworkResult<F::Profile>
where
    F: Framework,
    F::Profile: DeserializeOwned,
{
    serde_json::from_value(profile).map_err(|source| FrameworkError::Profile {
        domain: engine.domain(),
        source,
    })
}

fn to_value<F: Framework, T: Serialize>(engine: &Engine<F>, value: &T) -> FrameworkResult<Value> {
    serde_json::to_value(value).map_err(|source| FrameworkError::Serialize {
        domain: engine.domain(),
        source,
    })
}

fn assess_value<F>(
    engine: &Engine<F>,
    profile: Value,
    snapshot: &[RequirementAssessment],
) -> FrameworkResult<Value>
where
    F: Framework,
    F::Profile: DeserializeOwned,
{
    let profile = parse_profile(engine, profile)?;
    let report = engine.assess(&profile, snapshot)?;
    tracing::info!(
        domain = %engine.domain(),
        overall = report.score.overall,
        gaps = report.gaps.len(),
        risk = %report.classification.overall_risk,
        "assessment complete"
    );
    to_value(engine, &report)
}

fn listing<F>(engine: &Engine<F>, profile: Option<Value>) -> FrameworkResult<CorpusListing>
where
    F: Framework,
    F::Profile: DeserializeOwned,
{
    let corpus = engine.framework().corpus();
    let profile = match profile {
        Some(value) => {
            let profile = parse_profile(engine, value)?;
            spacereg_engine::Profile::validate(&profile)?;
            Some(profile)
        }
        None => None,
    };

    let requirements = corpus
        .iter()
        .filter(|r| profile.as_ref().map_or(true, |p| r.applies_to(p)))
        .map(|r| to_value(engine, &r.summary()))
        .collect::<FrameworkResult<Vec<_>>>()?;

    Ok(CorpusListing {
        domain: corpus.domain(),
        version: corpus.version().to_string(),
        digest: corpus.digest().clone(),
        requirements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spacereg_core::AssessmentStatus;

    fn frameworks() -> Frameworks {
        Frameworks::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn lists_every_domain_in_order() {
        let domains = frameworks().domains();
        let names: Vec<RegulatoryDomain> = domains.iter().map(|d| d.domain).collect();
        assert_eq!(names, RegulatoryDomain::all());
        assert!(domains.iter().all(|d| d.requirement_count > 0));
    }

    #[test]
    fn assess_json_export_control() {
        let profile = json!({
            "companyTypes": ["spacecraft_manufacturer"],
            "hasItarItems": true,
            "registeredWithDdtc": false
        });
        let snapshot = vec![RequirementAssessment::new("ITAR-REG-001", AssessmentStatus::NonCompliant)];
        let report = frameworks()
            .assess_json(RegulatoryDomain::ExportControl, profile, &snapshot)
            .unwrap();
        assert_eq!(report["domain"], "export_control");
        assert_eq!(report["classification"]["overallRisk"], "critical");
        assert_eq!(report["gaps"][0]["requirementId"], "ITAR-REG-001");
        assert!(report["gaps"][0]["recommendation"]
            .as_str()
            .unwrap()
            .starts_with("Implement:"));
    }

    #[test]
    fn validation_error_passes_through() {
        let err = frameworks()
            .assess_json(RegulatoryDomain::Nis2, json!({}), &[])
            .unwrap_err();
        assert_eq!(err.to_string(), "At least one entity type is required");
    }

    #[test]
    fn malformed_profile_names_domain() {
        let err = frameworks()
            .assess_json(RegulatoryDomain::Debris, json!({"operatorTypes": "nope"}), &[])
            .unwrap_err();
        assert!(matches!(
            err,
            FrameworkError::Profile {
                domain: RegulatoryDomain::Debris,
                ..
            }
        ));
    }

    #[test]
    fn applicable_listing_is_a_subset() {
        let f = frameworks();
        let full = f.corpus_listing(RegulatoryDomain::Insurance).unwrap();
        let subset = f
            .applicable_listing(
                RegulatoryDomain::Insurance,
                json!({"activities": ["launch"], "licensingState": "GB"}),
            )
            .unwrap();
        assert_eq!(full.digest, subset.digest);
        assert!(subset.requirements.len() < full.requirements.len());
        let ids: Vec<&str> = subset
            .requirements
            .iter()
            .filter_map(|r| r["id"].as_str())
            .collect();
        assert!(ids.contains(&"SIA-TPL-001"));
        assert!(!ids.contains(&"LOS-TPL-001"));
    }
}
