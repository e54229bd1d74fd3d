//! # Scoring Engine
//!
//! Weighted compliance percentage over the applicable requirements.
//!
//! ```text
//! score = round(100 × Σ(weight × multiplier) / Σ(multiplier))
//!
//! weight:      compliant 1.0, partial 0.5, non_compliant 0, not_assessed 0
//! multiplier:  critical 4, high 3, medium 2, low 1
//! ```
//!
//! `not_applicable` requirements leave both sums. An empty sum scores 0.
//!
//! ## Exactness
//!
//! Weights are carried as integer half-units (2/1/0), so the ratio is a
//! ratio of integers and rounding is exact round-half-up:
//!
//! ```text
//! earned   = Σ units × multiplier
//! possible = Σ 2 × multiplier
//! score    = (200 × earned + possible) / (2 × possible)   (integer division)
//! ```
//!
//! When every entry has the same weight the multipliers cancel, so an
//! all-partial set scores exactly 50 whatever its risk mix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use spacereg_core::AssessmentStatus;
use spacereg_corpus::RegulationTag;

use crate::applicability::Applicable;
use crate::snapshot::StatusIndex;

/// Score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceScore<R: Ord> {
    /// Over every scored applicable requirement.
    pub overall: u8,
    /// Over mandatory requirements only.
    pub mandatory: u8,
    /// Per regulation tag, each computed independently. Tags with nothing
    /// to score are absent.
    pub by_regulation: BTreeMap<R, u8>,
}

/// Status histogram over the applicable set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// `compliant` entries.
    pub compliant: usize,
    /// `partial` entries.
    pub partial: usize,
    /// `non_compliant` entries.
    pub non_compliant: usize,
    /// `not_assessed` entries, including requirements with no snapshot row.
    pub not_assessed: usize,
    /// `not_applicable` entries.
    pub not_applicable: usize,
    /// Applicable requirements.
    pub total: usize,
}

impl StatusCounts {
    /// Count effective statuses across the applicable set.
    pub fn tally<P, R: RegulationTag>(
        applicable: &Applicable<'_, P, R>,
        statuses: &StatusIndex<'_>,
    ) -> Self {
        let mut counts = Self::default();
        for requirement in applicable.iter() {
            counts.record(statuses.status_of(requirement.id));
        }
        counts
    }

    fn record(&mut self, status: AssessmentStatus) {
        self.total += 1;
        match status {
            AssessmentStatus::Compliant => self.compliant += 1,
            AssessmentStatus::Partial => self.partial += 1,
            AssessmentStatus::NonCompliant => self.non_compliant += 1,
            AssessmentStatus::NotAssessed => self.not_assessed += 1,
            AssessmentStatus::NotApplicable => self.not_applicable += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    earned: u64,
    possible: u64,
}

impl Tally {
    fn add(&mut self, units: u64, multiplier: u64) {
        self.earned += units * multiplier;
        self.possible += 2 * multiplier;
    }

    fn is_empty(self) -> bool {
        self.possible == 0
    }

    fn percent(self) -> u8 {
        if self.possible == 0 {
            return 0;
        }
        let rounded = (200 * self.earned + self.possible) / (2 * self.possible);
        // earned <= possible, so rounded <= 100.
        u8::try_from(rounded).unwrap_or(100)
    }
}

/// Score the applicable set against a status snapshot.
pub fn score<P, R: RegulationTag>(
    applicable: &Applicable<'_, P, R>,
    statuses: &StatusIndex<'_>,
) -> ComplianceScore<R> {
    let mut overall = Tally::default();
    let mut mandatory = Tally::default();
    let mut by_regulation: BTreeMap<R, Tally> = BTreeMap::new();

    for (requirement, status) in applicable.with_statuses(statuses) {
        let Some(units) = status.weight_units() else {
            continue;
        };
        let multiplier = requirement.risk_level.multiplier();
        overall.add(units, multiplier);
        if requirement.mandatory {
            mandatory.add(units, multiplier);
        }
        by_regulation
            .entry(requirement.regulation)
            .or_default()
            .add(units, multiplier);
    }

    ComplianceScore {
        overall: overall.percent(),
        mandatory: mandatory.percent(),
        by_regulation: by_regulation
            .into_iter()
            .filter(|(_, tally)| !tally.is_empty())
            .map(|(tag, tally)| (tag, tally.percent()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicability::resolve;
    use crate::snapshot::RequirementAssessment;
    use crate::testkit::*;

    fn all(ids: &[&str], status: AssessmentStatus) -> Vec<RequirementAssessment> {
        ids.iter()
            .map(|id| RequirementAssessment::new(*id, status))
            .collect()
    }

    fn score_of(snapshot: &[RequirementAssessment], exporting: bool) -> ComplianceScore<Reg> {
        let corpus = corpus();
        let applicable = resolve(&profile(exporting), &corpus);
        score(&applicable, &StatusIndex::build(snapshot))
    }

    #[test]
    fn all_compliant_is_100() {
        let s = score_of(&all(ALL_IDS, AssessmentStatus::Compliant), true);
        assert_eq!(s.overall, 100);
        assert_eq!(s.mandatory, 100);
        assert_eq!(s.by_regulation[&Reg::Alpha], 100);
        assert_eq!(s.by_regulation[&Reg::Beta], 100);
    }

    #[test]
    fn all_non_compliant_is_0() {
        let s = score_of(&all(ALL_IDS, AssessmentStatus::NonCompliant), true);
        assert_eq!(s.overall, 0);
        assert_eq!(s.mandatory, 0);
    }

    #[test]
    fn all_partial_is_50() {
        let s = score_of(&all(ALL_IDS, AssessmentStatus::Partial), true);
        assert_eq!(s.overall, 50);
        assert_eq!(s.mandatory, 50);
        assert_eq!(s.by_regulation[&Reg::Alpha], 50);
        assert_eq!(s.by_regulation[&Reg::Beta], 50);
    }

    #[test]
    fn empty_snapshot_scores_zero() {
        let s = score_of(&[], true);
        assert_eq!(s.overall, 0);
        assert_eq!(s.mandatory, 0);
    }

    #[test]
    fn no_applicable_requirements_scores_zero() {
        let applicable = Applicable::<TestProfile, Reg>::from_requirements(Vec::new());
        let s = score(&applicable, &StatusIndex::default());
        assert_eq!(s.overall, 0);
        assert!(s.by_regulation.is_empty());
    }

    #[test]
    fn not_applicable_excluded_from_both_sums() {
        // Alpha compliant, Beta N/A: the Beta half must not dilute the score.
        let mut snapshot = all(&["A-REG-1", "A-CLS-1", "A-LIC-1"], AssessmentStatus::Compliant);
        snapshot.extend(all(&["B-REC-1", "B-TRN-1"], AssessmentStatus::NotApplicable));
        let s = score_of(&snapshot, true);
        assert_eq!(s.overall, 100);
        assert_eq!(s.mandatory, 100);
        assert!(!s.by_regulation.contains_key(&Reg::Beta));
    }

    #[test]
    fn regulations_scored_independently() {
        let mut snapshot = all(&["A-REG-1", "A-CLS-1", "A-LIC-1"], AssessmentStatus::Compliant);
        snapshot.extend(all(&["B-REC-1", "B-TRN-1"], AssessmentStatus::NonCompliant));
        let s = score_of(&snapshot, true);
        assert_eq!(s.by_regulation[&Reg::Alpha], 100);
        assert_eq!(s.by_regulation[&Reg::Beta], 0);
        // Alpha multipliers 4+3+3 = 10, Beta 2+1 = 3: 100 × 10/13 = 76.9.
        assert_eq!(s.overall, 77);
    }

    #[test]
    fn risk_multiplier_weights_higher_risk() {
        // Only the critical requirement compliant vs only the low one.
        let critical_done = vec![RequirementAssessment::new("A-REG-1", AssessmentStatus::Compliant)];
        let low_done = vec![RequirementAssessment::new("B-TRN-1", AssessmentStatus::Compliant)];
        assert!(score_of(&critical_done, true).overall > score_of(&low_done, true).overall);
    }

    #[test]
    fn mandatory_score_ignores_optional_requirements() {
        // B-TRN-1 is the only optional requirement.
        let mut snapshot = all(
            &["A-REG-1", "A-CLS-1", "A-LIC-1", "B-REC-1"],
            AssessmentStatus::Compliant,
        );
        snapshot.push(RequirementAssessment::new("B-TRN-1", AssessmentStatus::NonCompliant));
        let s = score_of(&snapshot, true);
        assert_eq!(s.mandatory, 100);
        assert!(s.overall < 100);
    }

    #[test]
    fn unknown_and_inapplicable_ids_ignored() {
        let mut snapshot = all(&["A-REG-1", "A-CLS-1", "B-REC-1", "B-TRN-1"], AssessmentStatus::Compliant);
        // A-LIC-1 is inapplicable when not exporting; ZZZ is not in the corpus.
        snapshot.push(RequirementAssessment::new("A-LIC-1", AssessmentStatus::NonCompliant));
        snapshot.push(RequirementAssessment::new("ZZZ", AssessmentStatus::NonCompliant));
        assert_eq!(score_of(&snapshot, false).overall, 100);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(Tally { earned: 1, possible: 8 }.percent(), 13); // 12.5
        assert_eq!(Tally { earned: 1, possible: 3 }.percent(), 33); // 33.3
        assert_eq!(Tally { earned: 2, possible: 3 }.percent(), 67); // 66.7
    }

    #[test]
    fn status_counts() {
        let snapshot = vec![
            RequirementAssessment::new("A-REG-1", AssessmentStatus::Compliant),
            RequirementAssessment::new("A-CLS-1", AssessmentStatus::Partial),
            RequirementAssessment::new("B-REC-1", AssessmentStatus::NonCompliant),
            RequirementAssessment::new("B-TRN-1", AssessmentStatus::NotApplicable),
            RequirementAssessment::new("ZZZ", AssessmentStatus::Compliant),
        ];
        let corpus = corpus();
        let applicable = resolve(&profile(true), &corpus);
        let counts = StatusCounts::tally(&applicable, &StatusIndex::build(&snapshot));
        assert_eq!(
            counts,
            StatusCounts {
                compliant: 1,
                partial: 1,
                non_compliant: 1,
                not_assessed: 1,
                not_applicable: 1,
                total: 5,
            }
        );
    }
}
