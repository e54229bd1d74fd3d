//! # Penalty References
//!
//! Display-only penalty metadata. Penalties never feed back into scores;
//! the gap analyzer renders them as text next to each open gap.

use serde::Serialize;

use spacereg_core::Money;

/// How a maximum civil penalty is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyBasis {
    /// Assessed per violation.
    PerViolation,
    /// Assessed per infringement decision.
    PerInfringement,
    /// A single overall ceiling.
    Aggregate,
}

impl PenaltyBasis {
    fn suffix(self) -> &'static str {
        match self {
            Self::PerViolation => " per violation",
            Self::PerInfringement => " per infringement",
            Self::Aggregate => "",
        }
    }
}

/// Maximum penalties attached to a regulation or a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PenaltyReference {
    /// Maximum civil or administrative penalty.
    pub max_civil: Money,
    /// How the civil maximum is counted.
    pub basis: PenaltyBasis,
    /// Alternative ceiling, e.g. "or 2% of worldwide annual turnover".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<&'static str>,
    /// Maximum criminal fine, where criminal liability exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_criminal_fine: Option<Money>,
    /// Maximum imprisonment term in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_imprisonment_years: Option<u8>,
    /// Statutory citation.
    pub citation: &'static str,
}

impl PenaltyReference {
    /// A civil-only penalty counted per violation.
    pub const fn per_violation(max_civil: Money, citation: &'static str) -> Self {
        Self {
            max_civil,
            basis: PenaltyBasis::PerViolation,
            alternative: None,
            max_criminal_fine: None,
            max_imprisonment_years: None,
            citation,
        }
    }

    /// A single overall ceiling.
    pub const fn aggregate(max_civil: Money, citation: &'static str) -> Self {
        Self {
            max_civil,
            basis: PenaltyBasis::Aggregate,
            alternative: None,
            max_criminal_fine: None,
            max_imprisonment_years: None,
            citation,
        }
    }

    /// Attach an alternative ceiling.
    pub const fn or(mut self, alternative: &'static str) -> Self {
        self.alternative = Some(alternative);
        self
    }

    /// Attach criminal exposure.
    pub const fn with_criminal(mut self, fine: Money, imprisonment_years: u8) -> Self {
        self.max_criminal_fine = Some(fine);
        self.max_imprisonment_years = Some(imprisonment_years);
        self
    }

    /// Render the potential-penalty line shown on a gap.
    ///
    /// `Up to $1,271,078 per violation (22 U.S.C. 2778)`
    pub fn describe(&self) -> String {
        let mut out = format!("Up to {}{}", self.max_civil, self.basis.suffix());
        if let Some(alternative) = self.alternative {
            out.push(' ');
            out.push_str(alternative);
        }
        out.push_str(" (");
        out.push_str(self.citation);
        out.push(')');
        out
    }

    /// Render the criminal exposure, if any.
    pub fn describe_criminal(&self) -> Option<String> {
        match (self.max_criminal_fine, self.max_imprisonment_years) {
            (Some(fine), Some(years)) => Some(format!(
                "Up to {fine} and {years} years imprisonment per violation"
            )),
            (Some(fine), None) => Some(format!("Up to {fine} criminal fine")),
            (None, Some(years)) => Some(format!("Up to {years} years imprisonment")),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITAR: PenaltyReference =
        PenaltyReference::per_violation(Money::usd(1_271_078), "22 U.S.C. 2778")
            .with_criminal(Money::usd(1_000_000), 20);

    #[test]
    fn describe_per_violation() {
        assert_eq!(ITAR.describe(), "Up to $1,271,078 per violation (22 U.S.C. 2778)");
    }

    #[test]
    fn describe_with_alternative() {
        let nis2 = PenaltyReference::aggregate(Money::eur(10_000_000), "NIS2 Art. 34(4)")
            .or("or 2% of worldwide annual turnover");
        assert_eq!(
            nis2.describe(),
            "Up to €10,000,000 or 2% of worldwide annual turnover (NIS2 Art. 34(4))"
        );
    }

    #[test]
    fn criminal_exposure() {
        assert_eq!(
            ITAR.describe_criminal().unwrap(),
            "Up to $1,000,000 and 20 years imprisonment per violation"
        );
        let civil_only = PenaltyReference::aggregate(Money::eur(1), "x");
        assert!(civil_only.describe_criminal().is_none());
    }
}
