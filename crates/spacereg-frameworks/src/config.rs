//! # Engine Configuration
//!
//! Tunable constants of the domain rule tables. Every field has a default,
//! so an empty YAML document is a valid configuration.
//!
//! ```yaml
//! export_control:
//!   high_volume_threshold_usd: 10000000
//!   restricted_countries: [CN, IR, KP]
//! insurance:
//!   default_minimum_tpl_eur: 60000000
//!   minimum_tpl_by_state:
//!     FR: 60000000
//! ```
//!
//! Country codes are normalized to upper case and blank entries dropped.
//! Reading the file is the caller's job; this module only parses text.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use spacereg_core::normalize_country;

use crate::error::{FrameworkError, FrameworkResult};

/// ITAR §126.1 proscribed destinations.
pub const DEFAULT_RESTRICTED_COUNTRIES: &[&str] = &[
    "BY", "MM", "CN", "CU", "IR", "KP", "SY", "VE", "RU", "AF", "CF", "CD", "ER", "HT", "IQ", "LB",
    "LY", "NI", "SO", "SS", "SD", "ZW",
];

/// Annual export value at which screening must be automated and daily.
pub const DEFAULT_HIGH_VOLUME_THRESHOLD_USD: u64 = 10_000_000;

/// Fallback third-party liability minimum when a state has no entry.
pub const DEFAULT_MINIMUM_TPL_EUR: u64 = 60_000_000;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Export-control tunables.
    pub export_control: ExportControlConfig,
    /// Insurance tunables.
    pub insurance: InsuranceConfig,
}

/// Export-control tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportControlConfig {
    /// Automated, daily screening at or above this annual export value.
    pub high_volume_threshold_usd: u64,
    /// Restricted-country set for deemed-export analysis.
    pub restricted_countries: BTreeSet<String>,
}

impl Default for ExportControlConfig {
    fn default() -> Self {
        Self {
            high_volume_threshold_usd: DEFAULT_HIGH_VOLUME_THRESHOLD_USD,
            restricted_countries: DEFAULT_RESTRICTED_COUNTRIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ExportControlConfig {
    /// Whether `country` is in the restricted set. Case-insensitive.
    pub fn is_restricted(&self, country: &str) -> bool {
        self.restricted_countries.contains(&normalize_country(country))
    }
}

/// Insurance tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsuranceConfig {
    /// Minimum third-party liability cover (EUR) per licensing state.
    pub minimum_tpl_by_state: BTreeMap<String, u64>,
    /// Minimum used when the licensing state has no entry.
    pub default_minimum_tpl_eur: u64,
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            minimum_tpl_by_state: [("AT", 60_000_000), ("FI", 60_000_000), ("FR", 60_000_000), ("GB", 60_000_000)]
                .into_iter()
                .map(|(state, eur)| (state.to_string(), eur))
                .collect(),
            default_minimum_tpl_eur: DEFAULT_MINIMUM_TPL_EUR,
        }
    }
}

impl InsuranceConfig {
    /// Governing minimum for a licensing state, with whether it came from
    /// a state-specific entry.
    pub fn minimum_for(&self, state: Option<&str>) -> (u64, bool) {
        state
            .map(normalize_country)
            .and_then(|s| self.minimum_tpl_by_state.get(&s).copied())
            .map(|eur| (eur, true))
            .unwrap_or((self.default_minimum_tpl_eur, false))
    }
}

impl EngineConfig {
    /// Parse YAML and normalize.
    pub fn from_yaml_str(yaml: &str) -> FrameworkResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.normalized()
    }

    /// Upper-case country codes, drop blanks, reject unusable values.
    pub fn normalized(mut self) -> FrameworkResult<Self> {
        if self.export_control.high_volume_threshold_usd == 0 {
            return Err(FrameworkError::Config(
                "export_control.high_volume_threshold_usd must be greater than zero".into(),
            ));
        }

        let raw = std::mem::take(&mut self.export_control.restricted_countries);
        for code in raw {
            let normalized = normalize_country(&code);
            if normalized.is_empty() {
                tracing::warn!("dropping blank entry from export_control.restricted_countries");
                continue;
            }
            if normalized != code {
                tracing::warn!(from = %code, to = %normalized, "normalized restricted country code");
            }
            self.export_control.restricted_countries.insert(normalized);
        }

        let raw = std::mem::take(&mut self.insurance.minimum_tpl_by_state);
        for (state, eur) in raw {
            let normalized = normalize_country(&state);
            if normalized.is_empty() {
                tracing::warn!("dropping blank state from insurance.minimum_tpl_by_state");
                continue;
            }
            if normalized != state {
                tracing::warn!(from = %state, to = %normalized, "normalized insurance state code");
            }
            self.insurance.minimum_tpl_by_state.insert(normalized, eur);
        }

        Ok(self)
    }
}
