//! # Export-Control Risk and Jurisdiction Rules
//!
//! Three first-match tables:
//!
//! - [`RISK_RULES`]: overall risk. Registration and technology-control
//!   failures take unconditional precedence over everything below them.
//! - [`ITEM_JURISDICTION`]: one item, from its design and listing.
//! - [`PROFILE_JURISDICTION`]: the whole profile, from which regimes its
//!   items fall under.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::RiskLevel;
use spacereg_engine::{Fallback, Rule, RuleMatch, RuleTable};

use super::profile::ExportControlProfile as P;

/// Which export-control regime(s) govern an item or profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// ITAR only.
    ItarOnly,
    /// EAR only (including EAR99).
    EarOnly,
    /// A single item serving both military and commercial use.
    DualUse,
    /// ITAR programme containing EAR-controlled parts.
    ItarWithEarParts,
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ItarOnly => "itar_only",
            Self::EarOnly => "ear_only",
            Self::DualUse => "dual_use",
            Self::ItarWithEarParts => "itar_with_ear_parts",
        })
    }
}

// ---------------------------------------------------------------------------
// Risk precedence
// ---------------------------------------------------------------------------

fn itar_unregistered(p: &P) -> bool {
    p.has_itar_items && !p.registered_with_ddtc
}

fn foreign_nationals_without_tcp(p: &P) -> bool {
    p.has_controlled_items() && p.has_foreign_nationals && !p.has_tcp
}

fn controlled_manufacturing_abroad(p: &P) -> bool {
    p.has_controlled_items() && p.has_manufacturing_abroad
}

fn controlled_with_multiple_factors(p: &P) -> bool {
    p.has_controlled_items() && p.risk_factor_count() >= 2
}

fn controlled_items(p: &P) -> bool {
    p.has_controlled_items()
}

fn uncontrolled_exposure(p: &P) -> bool {
    p.has_export_activity() || p.has_foreign_nationals
}

/// Overall export-control risk, first match wins.
pub static RISK_RULES: RuleTable<P, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "itar-unregistered",
            reason: "ITAR-controlled items without DDTC registration",
            when: itar_unregistered,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "foreign-nationals-without-tcp",
            reason: "foreign-national access to controlled items without a Technology Control Plan",
            when: foreign_nationals_without_tcp,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "manufacturing-abroad",
            reason: "controlled items manufactured or integrated abroad",
            when: controlled_manufacturing_abroad,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "multiple-risk-factors",
            reason: "controlled items with two or more contributing risk factors",
            when: controlled_with_multiple_factors,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "controlled-items",
            reason: "controlled items with no aggravating factors",
            when: controlled_items,
            outcome: RiskLevel::Medium,
        },
        Rule {
            id: "uncontrolled-exposure",
            reason: "export activity or foreign nationals without listed items",
            when: uncontrolled_exposure,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "no-controlled-activity",
        reason: "no controlled items, exports or foreign nationals",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Item-level jurisdiction
// ---------------------------------------------------------------------------

/// Facts about one item that decide its jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFlags {
    /// Specially designed for military or government use, or on a
    /// restricted list.
    pub military_or_restricted: bool,
    /// A commercial equivalent exists.
    pub commercial_equivalent: bool,
    /// Listed on the Commerce Control List.
    pub controlled_list: bool,
}

fn military_only(i: &ItemFlags) -> bool {
    i.military_or_restricted && !i.commercial_equivalent
}

fn military_and_commercial(i: &ItemFlags) -> bool {
    i.military_or_restricted && i.commercial_equivalent
}

fn commerce_listed(i: &ItemFlags) -> bool {
    i.controlled_list
}

/// Jurisdiction of one item, first match wins.
pub static ITEM_JURISDICTION: RuleTable<ItemFlags, Jurisdiction> = RuleTable::new(
    &[
        Rule {
            id: "military-no-commercial-equivalent",
            reason: "designed for military use with no commercial equivalent",
            when: military_only,
            outcome: Jurisdiction::ItarOnly,
        },
        Rule {
            id: "military-and-commercial",
            reason: "serves both military and commercial use",
            when: military_and_commercial,
            outcome: Jurisdiction::DualUse,
        },
        Rule {
            id: "commerce-control-list",
            reason: "commercial item listed on the Commerce Control List",
            when: commerce_listed,
            outcome: Jurisdiction::EarOnly,
        },
    ],
    Fallback {
        id: "ear99",
        reason: "commercial item not listed (EAR99)",
        outcome: Jurisdiction::EarOnly,
    },
);

/// Classify one item.
pub fn classify_item(
    military_or_restricted: bool,
    commercial_equivalent: bool,
    controlled_list: bool,
) -> RuleMatch<Jurisdiction> {
    ITEM_JURISDICTION.evaluate(&ItemFlags {
        military_or_restricted,
        commercial_equivalent,
        controlled_list,
    })
}

// ---------------------------------------------------------------------------
// Profile-level jurisdiction
// ---------------------------------------------------------------------------

fn itar_and_ear(p: &P) -> bool {
    p.has_itar_items && p.has_ear_items
}

fn itar_only(p: &P) -> bool {
    p.has_itar_items
}

fn ear_only(p: &P) -> bool {
    p.has_ear_items
}

/// Jurisdiction of a whole profile, first match wins.
pub static PROFILE_JURISDICTION: RuleTable<P, Jurisdiction> = RuleTable::new(
    &[
        Rule {
            id: "itar-with-ear-parts",
            reason: "ITAR programme that also handles EAR-controlled parts",
            when: itar_and_ear,
            outcome: Jurisdiction::ItarWithEarParts,
        },
        Rule {
            id: "itar-only",
            reason: "only ITAR-controlled items",
            when: itar_only,
            outcome: Jurisdiction::ItarOnly,
        },
        Rule {
            id: "ear-only",
            reason: "only EAR-controlled items",
            when: ear_only,
            outcome: Jurisdiction::EarOnly,
        },
    ],
    Fallback {
        id: "ear99-default",
        reason: "no listed items; commercial items default to EAR99",
        outcome: Jurisdiction::EarOnly,
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_control::profile::CompanyType;

    fn base() -> P {
        P {
            company_types: vec![CompanyType::SatelliteOperator],
            ..Default::default()
        }
    }

    #[test]
    fn unregistered_itar_is_critical_whatever_else() {
        let mut p = base();
        p.has_itar_items = true;
        p.has_tcp = true;
        p.has_compliance_program = true;
        p.has_automated_screening = true;
        p.has_empowered_official = true;
        let m = RISK_RULES.evaluate(&p);
        assert_eq!(m.outcome, RiskLevel::Critical);
        assert_eq!(m.rule_id, "itar-unregistered");
    }

    #[test]
    fn foreign_nationals_without_tcp_is_critical() {
        let mut p = base();
        p.has_ear_items = true;
        p.has_foreign_nationals = true;
        assert_eq!(RISK_RULES.evaluate(&p).rule_id, "foreign-nationals-without-tcp");
        p.has_tcp = true;
        assert_ne!(RISK_RULES.evaluate(&p).outcome, RiskLevel::Critical);
    }

    #[test]
    fn registration_precedence_is_itar_only() {
        let mut p = base();
        p.has_ear_items = true;
        let m = RISK_RULES.evaluate(&p);
        assert_eq!((m.outcome, m.rule_id), (RiskLevel::Medium, "controlled-items"));
    }

    #[test]
    fn manufacturing_abroad_is_high() {
        let mut p = base();
        p.has_itar_items = true;
        p.registered_with_ddtc = true;
        p.has_manufacturing_abroad = true;
        let m = RISK_RULES.evaluate(&p);
        assert_eq!((m.outcome, m.rule_id), (RiskLevel::High, "manufacturing-abroad"));
    }

    #[test]
    fn bare_controlled_profile_is_medium() {
        let mut p = base();
        p.has_itar_items = true;
        p.registered_with_ddtc = true;
        assert_eq!(RISK_RULES.evaluate(&p).outcome, RiskLevel::Medium);
        p.has_defense_contracts = true;
        p.exports_internationally = true;
        assert_eq!(RISK_RULES.evaluate(&p).outcome, RiskLevel::High);
    }

    #[test]
    fn no_controlled_activity_is_low() {
        assert_eq!(RISK_RULES.evaluate(&base()).outcome, RiskLevel::Low);
        let mut p = base();
        p.exports_internationally = true;
        assert_eq!(RISK_RULES.evaluate(&p).outcome, RiskLevel::Medium);
    }

    #[test]
    fn rule_order_is_precedence() {
        assert_eq!(
            RISK_RULES.ids(),
            vec![
                "itar-unregistered",
                "foreign-nationals-without-tcp",
                "manufacturing-abroad",
                "multiple-risk-factors",
                "controlled-items",
                "uncontrolled-exposure",
                "no-controlled-activity",
            ]
        );
    }

    #[test]
    fn item_jurisdiction() {
        assert_eq!(classify_item(true, false, false).outcome, Jurisdiction::ItarOnly);
        assert_eq!(classify_item(true, false, true).outcome, Jurisdiction::ItarOnly);
        assert_eq!(classify_item(true, true, true).outcome, Jurisdiction::DualUse);
        assert_eq!(classify_item(false, true, true).outcome, Jurisdiction::EarOnly);
        let ear99 = classify_item(false, true, false);
        assert_eq!((ear99.outcome, ear99.rule_id), (Jurisdiction::EarOnly, "ear99"));
    }

    #[test]
    fn profile_jurisdiction() {
        let mut p = base();
        assert_eq!(PROFILE_JURISDICTION.evaluate(&p).outcome, Jurisdiction::EarOnly);
        p.has_ear_items = true;
        assert_eq!(PROFILE_JURISDICTION.evaluate(&p).outcome, Jurisdiction::EarOnly);
        p.has_itar_items = true;
        assert_eq!(
            PROFILE_JURISDICTION.evaluate(&p).outcome,
            Jurisdiction::ItarWithEarParts
        );
        p.has_ear_items = false;
        assert_eq!(PROFILE_JURISDICTION.evaluate(&p).outcome, Jurisdiction::ItarOnly);
    }

    #[test]
    fn jurisdiction_display_matches_serde() {
        for j in [
            Jurisdiction::ItarOnly,
            Jurisdiction::EarOnly,
            Jurisdiction::DualUse,
            Jurisdiction::ItarWithEarParts,
        ] {
            assert_eq!(serde_json::to_string(&j).unwrap(), format!("\"{j}\""));
        }
    }

    proptest::proptest! {
        #[test]
        fn unregistered_itar_precedence_holds(flags in proptest::prelude::any::<[bool; 8]>()) {
            let p = P {
                has_itar_items: true,
                registered_with_ddtc: false,
                has_ear_items: flags[0],
                has_foreign_nationals: flags[1],
                has_tcp: flags[2],
                has_joint_ventures: flags[3],
                has_manufacturing_abroad: flags[4],
                has_compliance_program: flags[5],
                has_automated_screening: flags[6],
                exports_internationally: flags[7],
                ..base()
            };
            proptest::prop_assert_eq!(RISK_RULES.evaluate(&p).rule_id, "itar-unregistered");
        }

        #[test]
        fn profile_jurisdiction_never_dual_use(itar: bool, ear: bool) {
            let p = P { has_itar_items: itar, has_ear_items: ear, ..base() };
            proptest::prop_assert_ne!(PROFILE_JURISDICTION.evaluate(&p).outcome, Jurisdiction::DualUse);
        }
    }
}
