//! Export-control regulations and their statutory maxima.

use std::fmt;

use serde::{Deserialize, Serialize};

use spacereg_core::Money;
use spacereg_corpus::{PenaltyReference, RegulationTag};

/// ITAR civil maximum per violation (22 U.S.C. 2778, inflation-adjusted).
pub const ITAR_PENALTY: PenaltyReference =
    PenaltyReference::per_violation(Money::usd(1_271_078), "22 U.S.C. 2778")
        .with_criminal(Money::usd(1_000_000), 20);

/// EAR civil maximum per violation under ECRA.
pub const EAR_PENALTY: PenaltyReference =
    PenaltyReference::per_violation(Money::usd(374_474), "50 U.S.C. 4819")
        .or("or twice the value of the transaction")
        .with_criminal(Money::usd(1_000_000), 20);

/// OFAC civil maximum per violation under IEEPA.
pub const OFAC_PENALTY: PenaltyReference =
    PenaltyReference::per_violation(Money::usd(377_700), "50 U.S.C. 1705")
        .or("or twice the value of the transaction")
        .with_criminal(Money::usd(1_000_000), 20);

/// Export-control regime a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportRegulation {
    /// International Traffic in Arms Regulations (22 CFR 120-130).
    Itar,
    /// Export Administration Regulations (15 CFR 730-774).
    Ear,
    /// OFAC sanctions programs (31 CFR 500-599).
    Ofac,
}

impl ExportRegulation {
    /// Full regulation name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Itar => "International Traffic in Arms Regulations",
            Self::Ear => "Export Administration Regulations",
            Self::Ofac => "OFAC Sanctions Regulations",
        }
    }
}

impl fmt::Display for ExportRegulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RegulationTag for ExportRegulation {
    fn code(self) -> &'static str {
        match self {
            Self::Itar => "ITAR",
            Self::Ear => "EAR",
            Self::Ofac => "OFAC",
        }
    }

    fn penalty(self) -> Option<PenaltyReference> {
        Some(match self {
            Self::Itar => ITAR_PENALTY,
            Self::Ear => EAR_PENALTY,
            Self::Ofac => OFAC_PENALTY,
        })
    }
}
