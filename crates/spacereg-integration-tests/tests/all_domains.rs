//! # Cross-Domain Behavior
//!
//! Every framework goes through the same engine, so the structural
//! guarantees hold in each domain: validation at the boundary, the score
//! extremes, gap completeness and the baseline recommendations.

use spacereg_core::{AssessmentStatus, RegulatoryDomain, ValidationError};
use spacereg_engine::{assess, Framework, RequirementAssessment};
use spacereg_frameworks::cybersecurity::{CyberEntityType, CyberProfile};
use spacereg_frameworks::debris::{DebrisOperatorType, DebrisProfile};
use spacereg_frameworks::environmental::{EnvironmentalOperatorType, EnvironmentalProfile};
use spacereg_frameworks::export_control::{CompanyType, ExportControlProfile};
use spacereg_frameworks::insurance::{InsuranceProfile, InsuredActivity};
use spacereg_frameworks::nis2::{Nis2EntityType, Nis2Profile};
use spacereg_frameworks::{
    Cybersecurity, Debris, EngineConfig, Environmental, ExportControl, ExportControlConfig,
    Frameworks, Insurance, InsuranceConfig, Nis2,
};

fn mark_all<F: Framework>(
    framework: &F,
    profile: &F::Profile,
    status: AssessmentStatus,
) -> Vec<RequirementAssessment> {
    framework
        .corpus()
        .iter()
        .filter(|r| r.applies_to(profile))
        .map(|r| RequirementAssessment::new(r.id, status))
        .collect()
}

/// Runs the shared structural checks for one framework.
fn check_framework<F>(framework: &F, profile: &F::Profile, field: &'static str)
where
    F: Framework,
    F::Profile: Default,
{
    // Missing primary classification.
    let err = assess(framework, &F::Profile::default(), &[]).unwrap_err();
    assert_eq!(err, ValidationError::MissingClassification { field });
    assert_eq!(err.to_string(), format!("At least one {field} is required"));

    let applicable = framework
        .corpus()
        .iter()
        .filter(|r| r.applies_to(profile))
        .count();
    assert!(applicable > 0, "{}: nothing applies", framework.domain());

    // All compliant.
    let report = assess(
        framework,
        profile,
        &mark_all(framework, profile, AssessmentStatus::Compliant),
    )
    .unwrap();
    assert_eq!(report.domain, framework.domain());
    assert_eq!(report.score.overall, 100);
    assert_eq!(report.score.mandatory, 100);
    assert!(report.score.by_regulation.values().all(|s| *s == 100));
    assert!(report.gaps.is_empty());
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.id == "baseline-periodic-review"));
    assert_eq!(report.status_counts.compliant, applicable);

    // All partial.
    let report = assess(
        framework,
        profile,
        &mark_all(framework, profile, AssessmentStatus::Partial),
    )
    .unwrap();
    assert_eq!(report.score.overall, 50);
    assert_eq!(report.gaps.len(), applicable);
    assert!(report
        .gaps
        .iter()
        .all(|g| g.recommendation.starts_with("Complete:")));

    // All non-compliant.
    let report = assess(
        framework,
        profile,
        &mark_all(framework, profile, AssessmentStatus::NonCompliant),
    )
    .unwrap();
    assert_eq!(report.score.overall, 0);
    assert!(report
        .gaps
        .iter()
        .all(|g| g.recommendation.starts_with("Implement:")));

    // Empty snapshot: everything is an unassessed gap.
    let report = assess(framework, profile, &[]).unwrap();
    assert_eq!(report.gaps.len(), applicable);
    assert_eq!(report.status_counts.not_assessed, applicable);
    assert_eq!(report.applicable_requirements.len(), applicable);
    assert!(report
        .gaps
        .windows(2)
        .all(|w| w[0].risk_level >= w[1].risk_level));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.id == "baseline-unassessed"));
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.id == "baseline-periodic-review"));
    assert!(report
        .recommendations
        .windows(2)
        .all(|w| w[0].priority <= w[1].priority));

    // All not applicable: excluded from scoring entirely.
    let report = assess(
        framework,
        profile,
        &mark_all(framework, profile, AssessmentStatus::NotApplicable),
    )
    .unwrap();
    assert_eq!(report.score.overall, 0);
    assert!(report.score.by_regulation.is_empty());
    assert!(report.gaps.is_empty());
    assert_eq!(report.status_counts.not_applicable, applicable);
}

#[test]
fn export_control_structure() {
    let profile = ExportControlProfile {
        company_types: vec![CompanyType::SatelliteOperator],
        has_ear_items: true,
        exports_internationally: true,
        ..Default::default()
    };
    check_framework(
        &ExportControl::new(&ExportControlConfig::default()).unwrap(),
        &profile,
        "company type",
    );
}

#[test]
fn nis2_structure() {
    let profile = Nis2Profile {
        entity_types: vec![Nis2EntityType::SatelliteOperator],
        employee_count: Some(300),
        provides_services_in_eu: true,
        ..Default::default()
    };
    check_framework(&Nis2::new().unwrap(), &profile, "entity type");
}

#[test]
fn debris_structure() {
    let profile = DebrisProfile {
        operator_types: vec![DebrisOperatorType::ConstellationOperator],
        constellation_size: 200,
        has_propulsion: true,
        eu_market: true,
        ..Default::default()
    };
    check_framework(&Debris::new().unwrap(), &profile, "operator type");
}

#[test]
fn cybersecurity_structure() {
    let profile = CyberProfile {
        entity_types: vec![CyberEntityType::SatelliteOperator],
        provides_services_in_eu: true,
        has_command_link: true,
        ..Default::default()
    };
    check_framework(&Cybersecurity::new().unwrap(), &profile, "entity type");
}

#[test]
fn environmental_structure() {
    let profile = EnvironmentalProfile {
        operator_types: vec![EnvironmentalOperatorType::LaunchProvider],
        eu_market: true,
        uses_hydrazine: true,
        ..Default::default()
    };
    check_framework(&Environmental::new().unwrap(), &profile, "operator type");
}

#[test]
fn insurance_structure() {
    let profile = InsuranceProfile {
        activities: vec![InsuredActivity::Launch, InsuredActivity::InOrbitOperations],
        licensing_state: Some("FR".into()),
        ..Default::default()
    };
    check_framework(
        &Insurance::new(&InsuranceConfig::default()).unwrap(),
        &profile,
        "insured activity",
    );
}

#[test]
fn registry_lists_every_domain_in_order() {
    let frameworks = Frameworks::new(&EngineConfig::default()).unwrap();
    let listed: Vec<RegulatoryDomain> = frameworks.domains().iter().map(|d| d.domain).collect();
    assert_eq!(listed, RegulatoryDomain::all().to_vec());
    assert!(frameworks.domains().iter().all(|d| d.requirement_count > 0));
}

#[test]
fn corpus_digests_are_distinct_per_domain() {
    let frameworks = Frameworks::new(&EngineConfig::default()).unwrap();
    let mut digests: Vec<String> = RegulatoryDomain::all()
        .iter()
        .map(|d| frameworks.corpus_listing(*d).unwrap().digest.to_string())
        .collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), RegulatoryDomain::COUNT);
}

#[test]
fn unknown_snapshot_ids_are_ignored() {
    let f = Nis2::new().unwrap();
    let profile = Nis2Profile {
        entity_types: vec![Nis2EntityType::GroundSegmentOperator],
        employee_count: Some(60),
        provides_services_in_eu: true,
        ..Default::default()
    };
    let baseline = assess(&f, &profile, &[]).unwrap();
    let with_noise = assess(
        &f,
        &profile,
        &[RequirementAssessment::new("NOT-A-REQ", AssessmentStatus::Compliant)],
    )
    .unwrap();
    assert_eq!(baseline.score, with_noise.score);
    assert_eq!(baseline.gaps.len(), with_noise.gaps.len());
}
