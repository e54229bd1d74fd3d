//! # Space Debris Mitigation
//!
//! IADC guidelines, ISO 24113, the FCC five-year rule and the debris
//! provisions of the EU Space Act. The jurisdiction analog is the disposal
//! pathway the spacecraft can actually follow at end of life.
//!
//! Orbital lifetimes are coarse natural-decay bands for a typical
//! small-satellite ballistic coefficient at mean solar activity. They screen
//! for rule conformance; they are not a decay prediction.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::{Money, RegulatoryDomain, RequirementCategory as Cat, RiskLevel, ValidationError};
use spacereg_corpus::{Corpus, CorpusResult, PenaltyReference, RegulationTag};
use spacereg_engine::{
    Applicable, Fallback, Framework, Gap, Profile, RecommendationContext, RecommendationRule, Rule,
    RuleMatch, RuleTable, Timeframe,
};

use crate::authoring::{on, req};

/// Current corpus version.
pub const VERSION: &str = "2024.1";

/// Highest LEO altitude from which natural decay meets the five-year rule.
pub const NATURAL_DECAY_CEILING_KM: u32 = 450;

/// Fleet size from which constellation-specific obligations apply.
pub const CONSTELLATION_THRESHOLD: u32 = 10;

/// FCC forfeiture ceiling per violation.
pub const FCC_FORFEITURE: PenaltyReference =
    PenaltyReference::per_violation(Money::usd(2_449_575), "47 U.S.C. 503(b)(2)(B)");

// Upper altitude bound (km) and natural lifetime upper bound (years).
const LIFETIME_BANDS: &[(u32, u32)] = &[
    (300, 1),
    (400, 2),
    (450, 5),
    (500, 10),
    (550, 25),
    (600, 40),
    (700, 100),
    (800, 200),
];

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Role of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebrisOperatorType {
    /// Operates one or a few satellites.
    SatelliteOperator,
    /// Operates a constellation.
    ConstellationOperator,
    /// Operates launch vehicles and their orbital stages.
    LaunchProvider,
    /// Provides in-orbit servicing or removal.
    InOrbitServicer,
}

/// Orbital regime of the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitRegime {
    /// Low Earth orbit (below 2,000 km).
    #[default]
    Leo,
    /// Medium Earth orbit.
    Meo,
    /// Geostationary orbit.
    Geo,
    /// Highly elliptical orbit.
    Heo,
}

/// Debris-mitigation posture of one mission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebrisProfile {
    /// Primary classification. At least one is required.
    pub operator_types: Vec<DebrisOperatorType>,
    /// Orbital regime.
    pub orbit: OrbitRegime,
    /// Operational altitude (mean, km).
    pub altitude_km: Option<u32>,
    /// Number of spacecraft in the fleet.
    pub constellation_size: u32,
    /// Spacecraft wet mass.
    pub spacecraft_mass_kg: Option<u32>,
    /// Has manoeuvre capability.
    pub has_propulsion: bool,
    /// Can perform a controlled reentry over an unpopulated area.
    pub controlled_reentry_capable: bool,
    /// Has a documented post-mission disposal plan.
    pub has_disposal_plan: bool,
    /// Has an end-of-life passivation plan.
    pub has_passivation_plan: bool,
    /// Screens conjunctions and acts on them.
    pub has_collision_avoidance: bool,
    /// Has a reentry casualty-risk assessment.
    pub has_casualty_risk_assessment: bool,
    /// Has contracted an active debris removal service.
    pub contracted_removal_service: bool,
    /// Releases mission-related objects (covers, adapters).
    pub releases_mission_objects: bool,
    /// Holds or seeks FCC authorization or US market access.
    pub fcc_licensed: bool,
    /// Provides services in the Union.
    pub eu_market: bool,
}

impl Profile for DebrisProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.operator_types.is_empty() {
            return Err(ValidationError::MissingClassification {
                field: "operator type",
            });
        }
        Ok(())
    }
}

impl DebrisProfile {
    /// Fleet size at or above [`CONSTELLATION_THRESHOLD`].
    pub fn is_constellation(&self) -> bool {
        self.constellation_size >= CONSTELLATION_THRESHOLD
            || self.operator_types.contains(&DebrisOperatorType::ConstellationOperator)
    }

    /// Natural lifetime upper bound in years, if it can be bounded.
    pub fn natural_lifetime_years(&self) -> Option<u32> {
        if self.orbit != OrbitRegime::Leo {
            return None;
        }
        let altitude = self.altitude_km?;
        LIFETIME_BANDS
            .iter()
            .find(|(ceiling, _)| altitude <= *ceiling)
            .map(|(_, years)| *years)
    }

    /// End-of-life disposal pathway.
    pub fn disposal_pathway(&self) -> DisposalPathway {
        DISPOSAL_PATHWAY.evaluate(self).outcome
    }

    /// Ends with an uncontrolled atmospheric reentry.
    pub fn uncontrolled_reentry(&self) -> bool {
        self.orbit == OrbitRegime::Leo
            && matches!(
                self.disposal_pathway(),
                DisposalPathway::NaturalDecay
                    | DisposalPathway::ActiveDeorbit
                    | DisposalPathway::RemovalService
            )
    }

    /// Depends on a removal service nobody has been contracted for.
    pub fn stranded(&self) -> bool {
        self.disposal_pathway() == DisposalPathway::RemovalService && !self.contracted_removal_service
    }
}

// ---------------------------------------------------------------------------
// Standards
// ---------------------------------------------------------------------------

/// Debris standard or regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebrisStandard {
    /// IADC Space Debris Mitigation Guidelines.
    Iadc,
    /// ISO 24113 space debris mitigation requirements.
    Iso24113,
    /// EU Space Act debris provisions.
    EuSpaceAct,
    /// FCC orbital debris rules (47 CFR 25.114, 25.283).
    Fcc,
}

impl fmt::Display for DebrisStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for DebrisStandard {
    fn code(self) -> &'static str {
        match self {
            Self::Iadc => "IADC",
            Self::Iso24113 => "ISO 24113",
            Self::EuSpaceAct => "EU Space Act",
            Self::Fcc => "FCC",
        }
    }

    fn penalty(self) -> Option<PenaltyReference> {
        match self {
            Self::Fcc => Some(FCC_FORFEITURE),
            Self::Iadc | Self::Iso24113 | Self::EuSpaceAct => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Disposal pathway and risk
// ---------------------------------------------------------------------------

/// How the spacecraft leaves its operational orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalPathway {
    /// Targeted reentry over an unpopulated area.
    ControlledReentry,
    /// Re-orbit above the GEO protected region.
    GraveyardOrbit,
    /// Atmospheric drag alone, within five years.
    NaturalDecay,
    /// Propulsive perigee lowering.
    ActiveDeorbit,
    /// Capture by an external removal service.
    RemovalService,
}

impl fmt::Display for DisposalPathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ControlledReentry => "controlled_reentry",
            Self::GraveyardOrbit => "graveyard_orbit",
            Self::NaturalDecay => "natural_decay",
            Self::ActiveDeorbit => "active_deorbit",
            Self::RemovalService => "removal_service",
        })
    }
}

fn controlled_reentry(p: &DebrisProfile) -> bool {
    p.controlled_reentry_capable
}

fn geo_with_propulsion(p: &DebrisProfile) -> bool {
    p.orbit == OrbitRegime::Geo && p.has_propulsion
}

fn low_leo(p: &DebrisProfile) -> bool {
    p.orbit == OrbitRegime::Leo && p.altitude_km.is_some_and(|a| a <= NATURAL_DECAY_CEILING_KM)
}

fn propulsion(p: &DebrisProfile) -> bool {
    p.has_propulsion
}

/// Disposal pathway, first match wins.
pub static DISPOSAL_PATHWAY: RuleTable<DebrisProfile, DisposalPathway> = RuleTable::new(
    &[
        Rule {
            id: "controlled-reentry",
            reason: "capable of a targeted reentry",
            when: controlled_reentry,
            outcome: DisposalPathway::ControlledReentry,
        },
        Rule {
            id: "geo-graveyard",
            reason: "GEO spacecraft with propulsion re-orbits above the protected region",
            when: geo_with_propulsion,
            outcome: DisposalPathway::GraveyardOrbit,
        },
        Rule {
            id: "natural-decay",
            reason: "LEO altitude low enough for drag to deorbit within five years",
            when: low_leo,
            outcome: DisposalPathway::NaturalDecay,
        },
        Rule {
            id: "active-deorbit",
            reason: "propulsion available to lower perigee",
            when: propulsion,
            outcome: DisposalPathway::ActiveDeorbit,
        },
    ],
    Fallback {
        id: "removal-service",
        reason: "no self-disposal capability; external removal required",
        outcome: DisposalPathway::RemovalService,
    },
);

fn no_disposal_plan(p: &DebrisProfile) -> bool {
    !p.has_disposal_plan
}

fn stranded(p: &DebrisProfile) -> bool {
    p.stranded()
}

fn constellation_without_avoidance(p: &DebrisProfile) -> bool {
    p.is_constellation() && !p.has_collision_avoidance
}

fn no_passivation(p: &DebrisProfile) -> bool {
    !p.has_passivation_plan
}

fn casualty_risk_unassessed(p: &DebrisProfile) -> bool {
    p.uncontrolled_reentry() && !p.has_casualty_risk_assessment
}

/// Overall debris risk, first match wins.
pub static RISK_RULES: RuleTable<DebrisProfile, RiskLevel> = RuleTable::new(
    &[
        Rule {
            id: "no-disposal-plan",
            reason: "no documented post-mission disposal plan",
            when: no_disposal_plan,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "stranded-spacecraft",
            reason: "cannot dispose of itself and no removal service is contracted",
            when: stranded,
            outcome: RiskLevel::Critical,
        },
        Rule {
            id: "constellation-without-collision-avoidance",
            reason: "constellation without conjunction screening and avoidance",
            when: constellation_without_avoidance,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "no-passivation",
            reason: "stored energy not removed at end of life",
            when: no_passivation,
            outcome: RiskLevel::High,
        },
        Rule {
            id: "casualty-risk-unassessed",
            reason: "uncontrolled reentry without a casualty-risk assessment",
            when: casualty_risk_unassessed,
            outcome: RiskLevel::Medium,
        },
    ],
    Fallback {
        id: "disposal-posture-in-place",
        reason: "disposal, passivation and collision avoidance addressed",
        outcome: RiskLevel::Low,
    },
);

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

fn always(_: &DebrisProfile) -> bool {
    true
}

fn releases_objects(p: &DebrisProfile) -> bool {
    p.releases_mission_objects
}

fn leo(p: &DebrisProfile) -> bool {
    p.orbit == OrbitRegime::Leo
}

fn geo(p: &DebrisProfile) -> bool {
    p.orbit == OrbitRegime::Geo
}

fn launch_provider(p: &DebrisProfile) -> bool {
    p.operator_types.contains(&DebrisOperatorType::LaunchProvider)
}

fn uncontrolled_reentry(p: &DebrisProfile) -> bool {
    p.uncontrolled_reentry()
}

fn fcc_leo(p: &DebrisProfile) -> bool {
    p.fcc_licensed && p.orbit == OrbitRegime::Leo
}

fn fcc(p: &DebrisProfile) -> bool {
    p.fcc_licensed
}

fn eu(p: &DebrisProfile) -> bool {
    p.eu_market
}

fn eu_constellation(p: &DebrisProfile) -> bool {
    p.eu_market && p.is_constellation()
}

/// Build the debris-mitigation corpus.
pub fn corpus() -> CorpusResult<Corpus<DebrisProfile, DebrisStandard>> {
    use DebrisStandard::{EuSpaceAct, Fcc, Iadc, Iso24113};
    use RiskLevel::{Critical, High, Medium};

    Corpus::new(
        RegulatoryDomain::Debris,
        VERSION,
        vec![
            req(
                "IADC-DSP-001",
                Iadc,
                Cat::MissionDisposal,
                "Post-mission disposal plan",
                Critical,
                true,
                on("always", always),
                "Document how and when the spacecraft will leave its operational orbit",
                &["Post-mission disposal plan"],
            ),
            req(
                "IADC-PAS-001",
                Iadc,
                Cat::Passivation,
                "End-of-life passivation",
                High,
                true,
                on("always", always),
                "Deplete propellant, discharge batteries and safe pressure vessels at end of life",
                &["Passivation procedure"],
            ),
            req(
                "IADC-REL-001",
                Iadc,
                Cat::MissionDisposal,
                "Limit release of mission-related objects",
                Medium,
                true,
                on("releases_mission_objects", releases_objects),
                "Design covers and adapters to stay attached, or justify each released object",
                &["Released objects inventory"],
            ),
            req(
                "IADC-LEO-001",
                Iadc,
                Cat::MissionDisposal,
                "25-year LEO protected region clearance",
                High,
                true,
                on("leo", leo),
                "Leave the LEO protected region within 25 years of end of mission",
                &["Orbital lifetime analysis"],
            ),
            req(
                "IADC-GEO-001",
                Iadc,
                Cat::MissionDisposal,
                "GEO protected region re-orbit",
                High,
                true,
                on("geo", geo),
                "Re-orbit at least 235 km plus solar-pressure margin above GEO at end of life",
                &["Re-orbit manoeuvre plan", "End-of-life propellant budget"],
            ),
            req(
                "IADC-UPS-001",
                Iadc,
                Cat::MissionDisposal,
                "Orbital stage disposal",
                High,
                true,
                on("launch_provider", launch_provider),
                "Deorbit or passivate upper stages and limit their orbital lifetime",
                &["Upper stage disposal analysis"],
            ),
            req(
                "ISO-DSP-001",
                Iso24113,
                Cat::MissionDisposal,
                "Disposal success probability of at least 0.9",
                Medium,
                false,
                on("has_propulsion", propulsion),
                "Demonstrate a disposal success probability of at least 0.9 including reliability of the propulsion chain",
                &["Disposal reliability analysis"],
            ),
            req(
                "ISO-CAS-001",
                Iso24113,
                Cat::RiskManagement,
                "Reentry casualty risk below 1 in 10,000",
                High,
                true,
                on("uncontrolled_reentry", uncontrolled_reentry),
                "Compute the reentry casualty risk with a survivability analysis and keep it below 1 in 10,000",
                &["Casualty risk assessment", "Demise analysis"],
            ),
            req(
                "FCC-5YR-001",
                Fcc,
                Cat::MissionDisposal,
                "Five-year post-mission disposal",
                Critical,
                true,
                on("fcc_leo", fcc_leo),
                "Dispose of the spacecraft within five years of mission end per 47 CFR 25.283(d)",
                &["Orbital debris mitigation statement"],
            ),
            req(
                "FCC-CAV-001",
                Fcc,
                Cat::CollisionAvoidance,
                "Manoeuvrability and conjunction data disclosure",
                High,
                true,
                on("fcc_licensed", fcc),
                "Disclose manoeuvrability and share ephemerides with conjunction screening providers",
                &["Orbital debris mitigation statement", "Ephemeris sharing agreement"],
            ),
            req(
                "EUSA-CAV-001",
                EuSpaceAct,
                Cat::CollisionAvoidance,
                "Collision avoidance service subscription",
                High,
                true,
                on("eu_market", eu),
                "Subscribe to a collision avoidance service and act on high-risk conjunction warnings",
                &["Collision avoidance service contract", "Conjunction response procedure"],
            ),
            req(
                "EUSA-TRK-001",
                EuSpaceAct,
                Cat::Registration,
                "Trackability and space object registration",
                Medium,
                true,
                on("eu_market", eu),
                "Ensure the spacecraft is trackable and registered before launch",
                &["Registration record", "Trackability analysis"],
            ),
            req(
                "EUSA-CON-001",
                EuSpaceAct,
                Cat::MissionDisposal,
                "Constellation end-of-life disposal",
                High,
                true,
                on("eu_constellation", eu_constellation),
                "Plan fleet-level disposal including failed spacecraft",
                &["Constellation disposal plan"],
            ),
        ],
    )
}

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// Conformance with a disposal-time rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conformance {
    /// The planned pathway meets the rule.
    Conforms,
    /// The planned pathway misses the rule.
    DoesNotConform,
    /// The rule does not govern this orbit.
    NotApplicable,
}

impl Conformance {
    fn from_bool(conforms: bool) -> Self {
        if conforms {
            Self::Conforms
        } else {
            Self::DoesNotConform
        }
    }
}

/// Natural orbital lifetime estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalLifetime {
    /// Altitude used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_km: Option<u32>,
    /// Upper bound on natural lifetime, when one exists within 200 years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound_years: Option<u32>,
    /// Explanation.
    pub description: String,
}

/// Debris sub-assessor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebrisFindings {
    /// End-of-life pathway.
    pub disposal_pathway: DisposalPathway,
    /// Natural decay estimate.
    pub orbital_lifetime: OrbitalLifetime,
    /// FCC / EU five-year rule.
    pub five_year_rule: Conformance,
    /// IADC 25-year rule (LEO) or re-orbit rule (GEO).
    pub twenty_five_year_rule: Conformance,
    /// A reentry casualty-risk assessment is required.
    pub casualty_risk_assessment_required: bool,
    /// Conjunction screening and avoidance is required.
    pub collision_avoidance_required: bool,
    /// An active removal service must be contracted.
    pub removal_service_required: bool,
}

fn orbital_lifetime(profile: &DebrisProfile) -> OrbitalLifetime {
    let upper_bound_years = profile.natural_lifetime_years();
    let description = match (profile.orbit, profile.altitude_km, upper_bound_years) {
        (OrbitRegime::Leo, None, _) => "altitude not given; lifetime cannot be bounded".to_string(),
        (OrbitRegime::Leo, Some(altitude), Some(years)) => {
            format!("at most {years} years of natural decay from {altitude} km")
        }
        (OrbitRegime::Leo, Some(altitude), None) => {
            format!("more than 200 years of natural decay from {altitude} km")
        }
        (_, _, _) => "no natural decay within centuries outside LEO".to_string(),
    };
    OrbitalLifetime {
        altitude_km: profile.altitude_km,
        upper_bound_years,
        description,
    }
}

/// Run the debris sub-assessors.
pub fn findings(profile: &DebrisProfile) -> DebrisFindings {
    let pathway = profile.disposal_pathway();
    let lifetime = profile.natural_lifetime_years();
    let removal_ok = pathway == DisposalPathway::RemovalService && profile.contracted_removal_service;
    let self_disposing = matches!(
        pathway,
        DisposalPathway::ControlledReentry | DisposalPathway::ActiveDeorbit
    );

    let (five_year_rule, twenty_five_year_rule) = match profile.orbit {
        OrbitRegime::Leo => (
            Conformance::from_bool(
                self_disposing || removal_ok || pathway == DisposalPathway::NaturalDecay,
            ),
            Conformance::from_bool(
                self_disposing || removal_ok || lifetime.is_some_and(|years| years <= 25),
            ),
        ),
        OrbitRegime::Geo => (
            Conformance::NotApplicable,
            Conformance::from_bool(pathway == DisposalPathway::GraveyardOrbit || removal_ok),
        ),
        OrbitRegime::Meo | OrbitRegime::Heo => {
            (Conformance::NotApplicable, Conformance::NotApplicable)
        }
    };

    DebrisFindings {
        disposal_pathway: pathway,
        orbital_lifetime: orbital_lifetime(profile),
        five_year_rule,
        twenty_five_year_rule,
        casualty_risk_assessment_required: profile.uncontrolled_reentry(),
        collision_avoidance_required: matches!(profile.orbit, OrbitRegime::Leo | OrbitRegime::Geo)
            || profile.is_constellation(),
        removal_service_required: pathway == DisposalPathway::RemovalService,
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

type Ctx<'a> = RecommendationContext<'a, DebrisProfile, DebrisStandard>;

fn plan_missing(ctx: &Ctx<'_>) -> bool {
    !ctx.profile.has_disposal_plan
}

fn is_disposal(gap: &Gap<DebrisStandard>) -> bool {
    gap.category == Cat::MissionDisposal
}

fn removal_needed(ctx: &Ctx<'_>) -> bool {
    ctx.profile.stranded()
}

fn is_clearance(gap: &Gap<DebrisStandard>) -> bool {
    matches!(gap.requirement_id, "IADC-LEO-001" | "FCC-5YR-001" | "IADC-GEO-001")
}

fn avoidance_missing(ctx: &Ctx<'_>) -> bool {
    ctx.profile.is_constellation() && !ctx.profile.has_collision_avoidance
}

fn is_collision_avoidance(gap: &Gap<DebrisStandard>) -> bool {
    gap.category == Cat::CollisionAvoidance
}

fn passivation_missing(ctx: &Ctx<'_>) -> bool {
    !ctx.profile.has_passivation_plan
}

fn is_passivation(gap: &Gap<DebrisStandard>) -> bool {
    gap.category == Cat::Passivation
}

fn casualty_missing(ctx: &Ctx<'_>) -> bool {
    ctx.profile.uncontrolled_reentry() && !ctx.profile.has_casualty_risk_assessment
}

fn is_casualty(gap: &Gap<DebrisStandard>) -> bool {
    gap.requirement_id == "ISO-CAS-001"
}

/// Debris domain recommendation rules.
pub static RECOMMENDATION_RULES: &[RecommendationRule<DebrisProfile, DebrisStandard>] = &[
    RecommendationRule {
        id: "deb-disposal-plan",
        title: "Write a post-mission disposal plan",
        action: "Document the disposal pathway, timeline and propellant reserve before launch",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: plan_missing,
        addresses: is_disposal,
    },
    RecommendationRule {
        id: "deb-removal-service",
        title: "Secure an end-of-life disposal capability",
        action: "Add deorbit propulsion or a drag device, or contract an active debris removal service",
        priority: 1,
        timeframe: Timeframe::Immediate,
        when: removal_needed,
        addresses: is_clearance,
    },
    RecommendationRule {
        id: "deb-collision-avoidance",
        title: "Set up conjunction screening",
        action: "Subscribe the fleet to a collision avoidance service and define manoeuvre decision thresholds",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: avoidance_missing,
        addresses: is_collision_avoidance,
    },
    RecommendationRule {
        id: "deb-passivation",
        title: "Plan end-of-life passivation",
        action: "Define how propellant, batteries and pressurants are safed at end of life",
        priority: 2,
        timeframe: Timeframe::Days30,
        when: passivation_missing,
        addresses: is_passivation,
    },
    RecommendationRule {
        id: "deb-casualty-risk",
        title: "Assess reentry casualty risk",
        action: "Run a demise analysis and confirm casualty risk stays below 1 in 10,000",
        priority: 3,
        timeframe: Timeframe::Days90,
        when: casualty_missing,
        addresses: is_casualty,
    },
];

// ---------------------------------------------------------------------------
// Framework
// ---------------------------------------------------------------------------

/// The debris-mitigation framework.
#[derive(Debug)]
pub struct Debris {
    corpus: Corpus<DebrisProfile, DebrisStandard>,
}

impl Debris {
    /// Build the framework, validating its corpus.
    pub fn new() -> CorpusResult<Self> {
        Ok(Self { corpus: corpus()? })
    }
}

impl Framework for Debris {
    type Profile = DebrisProfile;
    type Regulation = DebrisStandard;
    type Jurisdiction = DisposalPathway;
    type Findings = DebrisFindings;

    fn domain(&self) -> RegulatoryDomain {
        RegulatoryDomain::Debris
    }

    fn corpus(&self) -> &Corpus<DebrisProfile, DebrisStandard> {
        &self.corpus
    }

    fn risk_rules(&self) -> &RuleTable<DebrisProfile, RiskLevel> {
        &RISK_RULES
    }

    fn classify_jurisdiction(&self, profile: &DebrisProfile) -> RuleMatch<DisposalPathway> {
        DISPOSAL_PATHWAY.evaluate(profile)
    }

    fn findings(
        &self,
        profile: &DebrisProfile,
        _applicable: &Applicable<'_, DebrisProfile, DebrisStandard>,
    ) -> DebrisFindings {
        findings(profile)
    }

    fn recommendation_rules(&self) -> &[RecommendationRule<DebrisProfile, DebrisStandard>] {
        RECOMMENDATION_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_engine::assess;

    fn leo_sat(altitude_km: u32) -> DebrisProfile {
        DebrisProfile {
            operator_types: vec![DebrisOperatorType::SatelliteOperator],
            altitude_km: Some(altitude_km),
            has_disposal_plan: true,
            has_passivation_plan: true,
            ..Default::default()
        }
    }

    #[test]
    fn lifetime_bands() {
        assert_eq!(leo_sat(280).natural_lifetime_years(), Some(1));
        assert_eq!(leo_sat(450).natural_lifetime_years(), Some(5));
        assert_eq!(leo_sat(451).natural_lifetime_years(), Some(10));
        assert_eq!(leo_sat(900).natural_lifetime_years(), None);
        let mut geo = leo_sat(35_786);
        geo.orbit = OrbitRegime::Geo;
        assert_eq!(geo.natural_lifetime_years(), None);
    }

    #[test]
    fn pathway_precedence() {
        assert_eq!(leo_sat(400).disposal_pathway(), DisposalPathway::NaturalDecay);

        let mut p = leo_sat(550);
        assert_eq!(p.disposal_pathway(), DisposalPathway::RemovalService);
        p.has_propulsion = true;
        assert_eq!(p.disposal_pathway(), DisposalPathway::ActiveDeorbit);
        p.controlled_reentry_capable = true;
        assert_eq!(p.disposal_pathway(), DisposalPathway::ControlledReentry);

        let mut geo = leo_sat(35_786);
        geo.orbit = OrbitRegime::Geo;
        geo.has_propulsion = true;
        assert_eq!(geo.disposal_pathway(), DisposalPathway::GraveyardOrbit);
    }

    #[test]
    fn five_and_twenty_five_year_rules() {
        let f = findings(&leo_sat(400));
        assert_eq!(f.five_year_rule, Conformance::Conforms);
        assert_eq!(f.twenty_five_year_rule, Conformance::Conforms);

        let f = findings(&leo_sat(520));
        assert_eq!(f.five_year_rule, Conformance::DoesNotConform);
        assert_eq!(f.twenty_five_year_rule, Conformance::Conforms);
        assert!(f.removal_service_required);

        let f = findings(&leo_sat(700));
        assert_eq!(f.twenty_five_year_rule, Conformance::DoesNotConform);

        let mut contracted = leo_sat(700);
        contracted.contracted_removal_service = true;
        assert_eq!(findings(&contracted).five_year_rule, Conformance::Conforms);
    }

    #[test]
    fn geo_rules() {
        let mut geo = leo_sat(35_786);
        geo.orbit = OrbitRegime::Geo;
        let f = findings(&geo);
        assert_eq!(f.five_year_rule, Conformance::NotApplicable);
        assert_eq!(f.twenty_five_year_rule, Conformance::DoesNotConform);
        assert!(!f.casualty_risk_assessment_required);
        geo.has_propulsion = true;
        assert_eq!(findings(&geo).twenty_five_year_rule, Conformance::Conforms);
    }

    #[test]
    fn risk_precedence() {
        let mut p = leo_sat(400);
        p.has_casualty_risk_assessment = true;
        assert_eq!(RISK_RULES.evaluate(&p).outcome, RiskLevel::Low);

        p.has_disposal_plan = false;
        assert_eq!(RISK_RULES.evaluate(&p).rule_id, "no-disposal-plan");

        let stranded = leo_sat(700);
        assert_eq!(RISK_RULES.evaluate(&stranded).rule_id, "stranded-spacecraft");

        let mut fleet = leo_sat(400);
        fleet.constellation_size = 24;
        assert_eq!(
            RISK_RULES.evaluate(&fleet).rule_id,
            "constellation-without-collision-avoidance"
        );
    }

    #[test]
    fn stranded_spacecraft_recommendation() {
        let f = Debris::new().unwrap();
        let mut p = leo_sat(700);
        p.fcc_licensed = true;
        let report = assess(&f, &p, &[]).unwrap();
        assert_eq!(report.classification.overall_risk, RiskLevel::Critical);
        let rec = report
            .recommendations
            .iter()
            .find(|r| r.id == "deb-removal-service")
            .unwrap();
        assert!(rec.gap_ids.contains(&"FCC-5YR-001"));
        let fcc_gap = report.gaps.iter().find(|g| g.requirement_id == "FCC-5YR-001").unwrap();
        assert!(fcc_gap.potential_penalty.as_deref().unwrap().contains('$'));
    }

    #[test]
    fn missing_operator_type_rejected() {
        let err = assess(&Debris::new().unwrap(), &DebrisProfile::default(), &[]).unwrap_err();
        assert_eq!(err.to_string(), "At least one operator type is required");
    }
}
