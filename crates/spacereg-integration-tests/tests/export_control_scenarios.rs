//! # Export-Control Scenarios
//!
//! End-to-end scenarios through the export-control framework: the worked
//! examples for registered and unregistered ITAR handlers, restricted
//! foreign nationals, and every sub-assessor's structural rules.

use spacereg_core::{AssessmentStatus, RiskLevel};
use spacereg_engine::{assess, Framework, RequirementAssessment};
use spacereg_frameworks::export_control::{
    classify_item, CompanyType, DocumentSection, ExportControlProfile, ExportRegulation,
    Jurisdiction, ScreeningFrequency, TcpPriority,
};
use spacereg_frameworks::{ExportControl, ExportControlConfig};

fn framework() -> ExportControl {
    ExportControl::new(&ExportControlConfig::default()).unwrap()
}

fn manufacturer() -> ExportControlProfile {
    ExportControlProfile {
        company_types: vec![CompanyType::SpacecraftManufacturer],
        has_itar_items: true,
        registered_with_ddtc: true,
        ..Default::default()
    }
}

fn mark_all(
    framework: &ExportControl,
    profile: &ExportControlProfile,
    status: AssessmentStatus,
) -> Vec<RequirementAssessment> {
    framework
        .corpus()
        .iter()
        .filter(|r| r.applies_to(profile))
        .map(|r| RequirementAssessment::new(r.id, status))
        .collect()
}

// =========================================================================
// Worked examples
// =========================================================================

#[test]
fn registered_controlled_profile_fully_compliant() {
    let f = framework();
    let p = manufacturer();
    let report = assess(&f, &p, &mark_all(&f, &p, AssessmentStatus::Compliant)).unwrap();

    assert_eq!(report.score.overall, 100);
    assert_eq!(report.score.mandatory, 100);
    assert!(report.gaps.is_empty());
    assert!(matches!(
        report.classification.overall_risk,
        RiskLevel::Medium | RiskLevel::High
    ));
    assert!(!report.findings.technology_control_plan.required);
}

#[test]
fn unregistered_is_critical_regardless_of_statuses() {
    let f = framework();
    let mut p = manufacturer();
    p.registered_with_ddtc = false;
    // Every risk-reducing flag set.
    p.has_tcp = true;
    p.has_compliance_program = true;
    p.has_empowered_official = true;
    p.has_automated_screening = true;

    for status in [
        AssessmentStatus::Compliant,
        AssessmentStatus::Partial,
        AssessmentStatus::NonCompliant,
        AssessmentStatus::NotAssessed,
    ] {
        let report = assess(&f, &p, &mark_all(&f, &p, status)).unwrap();
        assert_eq!(report.classification.overall_risk, RiskLevel::Critical);
        assert_eq!(report.classification.risk_rule, "itar-unregistered");
    }
}

#[test]
fn restricted_foreign_nationals_need_licenses_and_tcp() {
    let f = framework();
    let mut p = manufacturer();
    p.has_foreign_nationals = true;
    p.foreign_national_countries = vec!["CN".into(), "IR".into()];
    let report = assess(&f, &p, &[]).unwrap();

    let deemed = &report.findings.deemed_export;
    assert!(deemed.foreign_national_exposure);
    assert!(deemed.tcp_required);
    assert!(!deemed.required_licenses.is_empty());
    assert!(!deemed.recommendations.is_empty());
    assert!(deemed.risks.iter().all(|r| r.restricted));
    assert_eq!(deemed.restricted_nationalities, vec!["CN", "IR"]);
}

// =========================================================================
// Sub-assessors
// =========================================================================

#[test]
fn tcp_required_iff_foreign_nationals_or_joint_venture() {
    let f = framework();
    for (foreign, jv) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut p = manufacturer();
        p.has_foreign_nationals = foreign;
        p.has_joint_ventures = jv;
        let report = assess(&f, &p, &[]).unwrap();
        assert_eq!(report.findings.technology_control_plan.required, foreign || jv);
        assert_eq!(report.findings.deemed_export.tcp_required, foreign || jv);
    }
}

#[test]
fn tcp_priority_immediate_only_without_plan() {
    let f = framework();
    let mut p = manufacturer();
    p.has_foreign_nationals = true;
    let without = assess(&f, &p, &[]).unwrap();
    assert_eq!(without.findings.technology_control_plan.priority, TcpPriority::Immediate);

    p.has_tcp = true;
    let with = assess(&f, &p, &[]).unwrap();
    assert_ne!(with.findings.technology_control_plan.priority, TcpPriority::Immediate);
}

#[test]
fn no_foreign_nationals_means_no_deemed_export_risks() {
    let report = assess(&framework(), &manufacturer(), &[]).unwrap();
    assert!(report.findings.deemed_export.risks.is_empty());
    assert!(!report.findings.deemed_export.foreign_national_exposure);
}

#[test]
fn screening_cadence_follows_export_value() {
    let f = framework();
    let mut p = manufacturer();
    p.exports_internationally = true;
    p.annual_export_value_usd = Some(10_000_000);
    let high = assess(&f, &p, &[]).unwrap();
    assert!(high.findings.screening.automated_screening_required);
    assert_eq!(high.findings.screening.frequency, ScreeningFrequency::Daily);
    assert!(high.findings.screening.red_flag_review_required);

    p.annual_export_value_usd = Some(9_999_999);
    let low = assess(&f, &p, &[]).unwrap();
    assert!(!low.findings.screening.automated_screening_required);
    assert_ne!(low.findings.screening.frequency, ScreeningFrequency::Daily);
}

#[test]
fn configured_threshold_changes_screening() {
    let config = ExportControlConfig {
        high_volume_threshold_usd: 1_000,
        ..Default::default()
    };
    let f = ExportControl::new(&config).unwrap();
    let mut p = manufacturer();
    p.exports_internationally = true;
    p.annual_export_value_usd = Some(1_000);
    let report = assess(&f, &p, &[]).unwrap();
    assert!(report.findings.screening.automated_screening_required);
}

#[test]
fn license_exceptions_follow_flags() {
    let f = framework();
    let commercial = ExportControlProfile {
        company_types: vec![CompanyType::ComponentSupplier],
        has_ear_items: true,
        exports_internationally: true,
        ..Default::default()
    };
    let report = assess(&f, &commercial, &[]).unwrap();
    let codes: Vec<&str> = report.findings.license_exceptions.iter().map(|e| e.code).collect();
    assert!(codes.contains(&"TMP"));
    assert!(!codes.contains(&"GOV"));

    let mut defense = commercial.clone();
    defense.has_defense_contracts = true;
    let report = assess(&f, &defense, &[]).unwrap();
    assert!(report.findings.license_exceptions.iter().any(|e| e.code == "GOV"));
    assert!(report
        .findings
        .license_exceptions
        .iter()
        .all(|e| !e.criteria.is_empty()));
}

#[test]
fn documentation_sections() {
    let f = framework();
    let mut p = manufacturer();
    let report = assess(&f, &p, &[]).unwrap();
    let docs = &report.findings.documentation;
    assert!(docs.contains_key(&DocumentSection::Screening));
    assert!(docs.contains_key(&DocumentSection::Itar));
    assert!(!docs.contains_key(&DocumentSection::Ear));
    assert!(!docs.contains_key(&DocumentSection::TechnologyControlPlan));

    p.has_foreign_nationals = true;
    let report = assess(&f, &p, &[]).unwrap();
    assert!(report.findings.documentation[&DocumentSection::TechnologyControlPlan]
        .contains(&"Technology Control Plan"));
}

#[test]
fn foreign_nationals_without_listed_items_still_need_a_plan() {
    let f = framework();
    let p = ExportControlProfile {
        company_types: vec![CompanyType::ResearchInstitution],
        has_foreign_nationals: true,
        foreign_national_countries: vec!["CN".into()],
        ..Default::default()
    };
    let report = assess(&f, &p, &[]).unwrap();

    let tcp = &report.findings.technology_control_plan;
    assert!(tcp.required);
    assert_eq!(tcp.priority, TcpPriority::Immediate);
    assert!(report.recommendations.iter().any(|r| r.id == "ec-create-tcp"));
    assert!(report.findings.documentation[&DocumentSection::TechnologyControlPlan]
        .contains(&"Technology Control Plan"));
}

#[test]
fn penalty_exposure_factors() {
    let f = framework();
    let mut p = manufacturer();
    p.registered_with_ddtc = false;
    let report = assess(&f, &p, &[]).unwrap();
    let exposure = &report.findings.penalty_exposure;
    assert_eq!(exposure.governing_regime, ExportRegulation::Itar);
    assert!(exposure.max_civil_penalty.contains('$'));
    assert!(exposure.max_criminal_penalty.is_some());
    assert!(!exposure.aggravating_factors.is_empty());
    assert!(exposure.mitigating_factors.is_empty());

    p.registered_with_ddtc = true;
    p.has_compliance_program = true;
    p.voluntary_disclosure_filed = true;
    let report = assess(&f, &p, &[]).unwrap();
    let exposure = &report.findings.penalty_exposure;
    assert!(exposure.aggravating_factors.is_empty());
    assert_eq!(exposure.mitigating_factors.len(), 2);
}

#[test]
fn embargoed_destination_is_aggravating() {
    let f = framework();
    let mut p = manufacturer();
    p.exports_internationally = true;
    p.export_countries = vec!["ir".into(), "DE".into()];
    let report = assess(&f, &p, &[]).unwrap();
    assert_eq!(report.findings.screening.embargoed_destinations, vec!["IR"]);
    assert!(report
        .findings
        .penalty_exposure
        .aggravating_factors
        .contains(&"Shipments to comprehensively embargoed destinations"));
    assert!(report.recommendations.iter().any(|r| r.id == "ec-embargo-stop"));
}

#[test]
fn item_jurisdiction_table() {
    assert_eq!(classify_item(true, false, false).outcome, Jurisdiction::ItarOnly);
    assert_eq!(classify_item(false, true, true).outcome, Jurisdiction::EarOnly);
    assert_eq!(classify_item(true, true, false).outcome, Jurisdiction::DualUse);
    assert_eq!(classify_item(false, false, false).rule_id, "ear99");
}

#[test]
fn gaps_carry_penalties_with_currency_symbol() {
    let f = framework();
    let mut p = manufacturer();
    p.has_ear_items = true;
    let report = assess(&f, &p, &[]).unwrap();
    for gap in &report.gaps {
        let penalty = gap.potential_penalty.as_deref().unwrap();
        assert!(penalty.contains('$'), "{}: {penalty}", gap.requirement_id);
    }
    assert!(report.gaps.iter().all(|g| g.recommendation.starts_with("Assess:")));
}

// =========================================================================
// Scoring across regimes
// =========================================================================

#[test]
fn regulations_score_independently() {
    let f = framework();
    let mut p = manufacturer();
    p.has_ear_items = true;
    let snapshot: Vec<RequirementAssessment> = f
        .corpus()
        .iter()
        .filter(|r| r.applies_to(&p))
        .map(|r| {
            let status = match r.regulation {
                ExportRegulation::Ear => AssessmentStatus::NonCompliant,
                _ => AssessmentStatus::Compliant,
            };
            RequirementAssessment::new(r.id, status)
        })
        .collect();
    let report = assess(&f, &p, &snapshot).unwrap();
    assert_eq!(report.score.by_regulation[&ExportRegulation::Itar], 100);
    assert_eq!(report.score.by_regulation[&ExportRegulation::Ear], 0);
    assert!(report.score.overall > 0 && report.score.overall < 100);
    assert!(report.gaps.iter().all(|g| g.regulation == ExportRegulation::Ear));
}

#[test]
fn not_applicable_half_scores_like_compliant_half() {
    let f = framework();
    let p = manufacturer();
    let ids: Vec<&str> = f
        .corpus()
        .iter()
        .filter(|r| r.applies_to(&p))
        .map(|r| r.id)
        .collect();
    let half = ids.len() / 2;
    let mixed: Vec<RequirementAssessment> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let status = if i < half {
                AssessmentStatus::NotApplicable
            } else {
                AssessmentStatus::Compliant
            };
            RequirementAssessment::new(*id, status)
        })
        .collect();
    let report = assess(&f, &p, &mixed).unwrap();
    assert_eq!(report.score.overall, 100);
    assert_eq!(report.status_counts.not_applicable, half);
    assert!(report.gaps.is_empty());
}
