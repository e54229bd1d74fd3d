//! # spacereg-frameworks — Domain Instantiations
//!
//! Plugs the six regulatory domains into the generic engine:
//!
//! - **Export control** (`export_control/`): ITAR, EAR and OFAC. The full
//!   exemplar, with deemed-export, screening, Technology Control Plan,
//!   license-exception, documentation and penalty sub-assessors.
//!
//! - **NIS2** (`nis2.rs`): essential/important entity classification,
//!   incident-reporting timeline and fine exposure.
//!
//! - **Debris mitigation** (`debris.rs`): IADC, ISO 24113, FCC and EU Space
//!   Act disposal, passivation and collision-avoidance obligations.
//!
//! - **Cybersecurity** (`cybersecurity.rs`): assurance levels, control
//!   families and space link protection.
//!
//! - **Environmental footprint** (`environmental.rs`): footprint
//!   declarations, REACH hydrazine authorization and CSRD reporting.
//!
//! - **Insurance** (`insurance.rs`): third-party liability minimums and
//!   coverage adequacy.
//!
//! ## Crate Policy
//!
//! - Corpora are built and validated once, in each framework's constructor.
//!   A corpus authoring fault surfaces from [`Frameworks::new`], never from
//!   an assessment.
//! - Tunable thresholds live in [`EngineConfig`]; this crate parses YAML
//!   text but never touches the filesystem.

mod authoring;

pub mod config;
pub mod cybersecurity;
pub mod debris;
pub mod environmental;
pub mod error;
pub mod export_control;
pub mod insurance;
pub mod nis2;
pub mod registry;

pub use config::{EngineConfig, ExportControlConfig, InsuranceConfig};
pub use cybersecurity::Cybersecurity;
pub use debris::Debris;
pub use environmental::Environmental;
pub use error::{FrameworkError, FrameworkResult};
pub use export_control::ExportControl;
pub use insurance::Insurance;
pub use nis2::Nis2;
pub use registry::{CorpusListing, DomainInfo, Frameworks};
