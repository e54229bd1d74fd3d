//! Technology Control Plan requirements.

use serde::Serialize;

use super::profile::ExportControlProfile;

/// How urgently a Technology Control Plan is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TcpPriority {
    /// Not required.
    NotRequired,
    /// Required and in place; keep it current.
    Standard,
    /// Required for joint-venture exposure and missing.
    High,
    /// Foreign persons have access today and no plan exists.
    Immediate,
}

/// TCP determination for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpRequirements {
    /// A TCP is required.
    pub required: bool,
    /// A TCP is already in place.
    pub in_place: bool,
    /// Urgency.
    pub priority: TcpPriority,
    /// Elements the plan must contain.
    pub elements: Vec<&'static str>,
    /// Why it is required.
    pub reasons: Vec<&'static str>,
}

const CORE_ELEMENTS: &[&str] = &[
    "Physical security controls for areas holding controlled items",
    "Information security controls for controlled technical data",
    "Foreign person identification and access authorization",
    "Employee briefing and non-disclosure acknowledgements",
    "Periodic self-assessment of the plan",
];

const JOINT_VENTURE_ELEMENT: &str = "Partner access boundaries for joint-venture programmes";

/// Determine whether and how urgently a TCP is needed.
pub fn assess(profile: &ExportControlProfile) -> TcpRequirements {
    let mut reasons = Vec::new();
    if profile.has_foreign_nationals {
        reasons.push("foreign persons with potential access to controlled technology");
    }
    if profile.has_joint_ventures {
        reasons.push("joint ventures with foreign partners");
    }
    let required = !reasons.is_empty();

    let priority = match (required, profile.has_tcp) {
        (false, _) => TcpPriority::NotRequired,
        (true, true) => TcpPriority::Standard,
        (true, false) if profile.has_foreign_nationals => TcpPriority::Immediate,
        (true, false) => TcpPriority::High,
    };

    let mut elements = Vec::new();
    if required {
        elements.extend_from_slice(CORE_ELEMENTS);
        if profile.has_joint_ventures {
            elements.push(JOINT_VENTURE_ELEMENT);
        }
    }

    TcpRequirements {
        required,
        in_place: profile.has_tcp,
        priority,
        elements,
        reasons,
    }
}
