//! Export-control recommendation rules.
//!
//! Evaluated before the baseline rules shared by every domain.

use spacereg_core::{RequirementCategory, RiskLevel};
use spacereg_engine::{Gap, RecommendationContext, RecommendationRule, Timeframe};

use super::profile::ExportControlProfile as P;
use super::regulation::ExportRegulation as R;

type Ctx<'a> = RecommendationContext<'a, P, R>;

fn unregistered_itar(ctx: &Ctx<'_>) -> bool {
    ctx.profile.has_itar_items && !ctx.profile.registered_with_ddtc
}

fn is_registration(gap: &Gap<R>) -> bool {
    gap.requirement_id == "ITAR-REG-001"
}

fn foreign_nationals_without_tcp(ctx: &Ctx<'_>) -> bool {
    ctx.profile.has_foreign_nationals && !ctx.profile.has_tcp
}

fn is_technology_control(gap: &Gap<R>) -> bool {
    gap.category == RequirementCategory::TechnologyControl
}

fn ships_to_embargoed(ctx: &Ctx<'_>) -> bool {
    ctx.profile.ships_to_embargoed()
}

fn is_embargo(gap: &Gap<R>) -> bool {
    gap.requirement_id == "OFAC-SCR-002"
}

fn screening_gaps(ctx: &Ctx<'_>) -> bool {
    ctx.any_gap(is_screening)
}

fn is_screening(gap: &Gap<R>) -> bool {
    gap.category == RequirementCategory::Screening
}

fn no_empowered_official(ctx: &Ctx<'_>) -> bool {
    ctx.profile.has_itar_items && !ctx.profile.has_empowered_official
}

fn is_governance(gap: &Gap<R>) -> bool {
    gap.requirement_id == "ITAR-GOV-001"
}

fn unclassified_items(ctx: &Ctx<'_>) -> bool {
    ctx.any_gap(is_classification)
}

fn is_classification(gap: &Gap<R>) -> bool {
    gap.category == RequirementCategory::Classification && gap.risk_level >= RiskLevel::High
}

fn no_compliance_program(ctx: &Ctx<'_>) -> bool {
    ctx.profile.has_controlled_items() && !ctx.profile.has_compliance_program
}

fn is_program(gap: &Gap<R>) -> bool {
    gap.category == RequirementCategory::Governance
}

/// Domain rules in evaluation order.
pub static RULES: &[RecommendationRule<P, R>] = &[
    RecommendationRule {
        id: "ec-register-ddtc",
        title: "Register with DDTC",
        action: "Register with the Directorate of Defense Trade Controls before any further ITAR activity",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: unregistered_itar,
        addresses: is_registration,
    },
    RecommendationRule {
        id: "ec-create-tcp",
        title: "Implement a Technology Control Plan",
        action: "Restrict foreign-person access to controlled technology under a written Technology Control Plan",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: foreign_nationals_without_tcp,
        addresses: is_technology_control,
    },
    RecommendationRule {
        id: "ec-embargo-stop",
        title: "Stop embargoed shipments",
        action: "Hold all shipments to comprehensively embargoed destinations pending an OFAC license determination",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: ships_to_embargoed,
        addresses: is_embargo,
    },
    RecommendationRule {
        id: "ec-screening-program",
        title: "Close restricted-party screening gaps",
        action: "Screen every counterparty against the applicable government lists and retain the results",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: screening_gaps,
        addresses: is_screening,
    },
    RecommendationRule {
        id: "ec-appoint-empowered-official",
        title: "Appoint an Empowered Official",
        action: "Designate an Empowered Official to sign ITAR license applications",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: no_empowered_official,
        addresses: is_governance,
    },
    RecommendationRule {
        id: "ec-classify-items",
        title: "Complete item classification",
        action: "Finish USML and ECCN classification of every item before the next export",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: unclassified_items,
        addresses: is_classification,
    },
    RecommendationRule {
        id: "ec-compliance-program",
        title: "Document an export compliance program",
        action: "Adopt a written export compliance program with management commitment, audits and training",
        priority: 3,
        timeframe: Timeframe::Days90,
        when: no_compliance_program,
        addresses: is_program,
    },
];
