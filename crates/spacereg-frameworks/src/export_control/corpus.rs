//! Export-control requirement corpus.
//!
//! Technology-control requirements apply only where foreign persons are
//! present. Joint-venture exposure without foreign persons on site is
//! carried by the Technical Assistance Agreement requirement instead.

use spacereg_core::{RegulatoryDomain, RequirementCategory as Cat, RiskLevel};
use spacereg_corpus::{Corpus, CorpusResult};

use crate::authoring::{on, req};

use super::profile::ExportControlProfile as P;
use super::regulation::ExportRegulation::{self, Ear, Itar, Ofac};

/// Current corpus version.
pub const VERSION: &str = "2024.2";

fn always(_: &P) -> bool {
    true
}

fn itar(p: &P) -> bool {
    p.has_itar_items
}

fn ear(p: &P) -> bool {
    p.has_ear_items
}

fn itar_exports(p: &P) -> bool {
    p.has_itar_items && p.has_export_activity()
}

fn itar_foreign_partners(p: &P) -> bool {
    p.has_itar_items && (p.has_joint_ventures || p.has_technology_transfer || p.has_manufacturing_abroad)
}

fn itar_foreign_nationals(p: &P) -> bool {
    p.has_itar_items && p.has_foreign_nationals
}

fn ear_exports(p: &P) -> bool {
    p.has_ear_items && p.has_export_activity()
}

fn ear_foreign_nationals(p: &P) -> bool {
    p.has_ear_items && p.has_foreign_nationals
}

fn encryption(p: &P) -> bool {
    p.has_encryption_items
}

fn export_or_ear(p: &P) -> bool {
    p.has_export_activity() || p.has_ear_items
}

fn controlled_activity(p: &P) -> bool {
    p.has_controlled_activity()
}

fn embargoed(p: &P) -> bool {
    p.ships_to_embargoed()
}

/// Build the export-control corpus.
pub fn corpus() -> CorpusResult<Corpus<P, ExportRegulation>> {
    use RiskLevel::{Critical, High, Low, Medium};

    Corpus::new(
        RegulatoryDomain::ExportControl,
        VERSION,
        vec![
            // ── ITAR ────────────────────────────────────────────────────
            req(
                "ITAR-REG-001",
                Itar,
                Cat::Registration,
                "DDTC registration",
                Critical,
                true,
                on("has_itar_items", itar),
                "Register with the Directorate of Defense Trade Controls (DDTC) under 22 CFR 122 and renew annually",
                &["DDTC registration statement (DS-2032)", "DDTC registration confirmation letter"],
            ),
            req(
                "ITAR-CLS-001",
                Itar,
                Cat::Classification,
                "USML jurisdiction and classification",
                High,
                true,
                on("has_itar_items", itar),
                "Determine USML category for every defense article and file commodity jurisdiction requests where uncertain",
                &["USML category determinations", "Commodity jurisdiction determinations"],
            ),
            req(
                "ITAR-LIC-001",
                Itar,
                Cat::Licensing,
                "Permanent export licenses (DSP-5)",
                Critical,
                true,
                on("itar_exports", itar_exports),
                "Obtain DSP-5 licenses before any permanent export of defense articles or technical data",
                &["DSP-5 licenses", "License tracking log"],
            ),
            req(
                "ITAR-LIC-002",
                Itar,
                Cat::Licensing,
                "Technical Assistance and Manufacturing License Agreements",
                High,
                true,
                on("itar_foreign_partners", itar_foreign_partners),
                "Put Technical Assistance Agreements in place before sharing defense services or technical data with foreign partners",
                &["Technical Assistance Agreements", "Manufacturing License Agreements"],
            ),
            req(
                "ITAR-LIC-003",
                Itar,
                Cat::Licensing,
                "Temporary export and import licenses (DSP-73, DSP-61)",
                Medium,
                false,
                on("itar_exports", itar_exports),
                "Use DSP-73/DSP-61 licenses for trade shows, testing and launch campaigns abroad",
                &["DSP-73 licenses", "DSP-61 licenses"],
            ),
            req(
                "ITAR-TCP-001",
                Itar,
                Cat::TechnologyControl,
                "ITAR Technology Control Plan",
                Critical,
                true,
                on("itar_foreign_nationals", itar_foreign_nationals),
                "Adopt a Technology Control Plan restricting foreign-person access to ITAR technical data",
                &["Technology Control Plan", "Foreign person access log"],
            ),
            req(
                "ITAR-GOV-001",
                Itar,
                Cat::Governance,
                "Empowered Official designation",
                High,
                true,
                on("has_itar_items", itar),
                "Designate an Empowered Official with authority to sign license applications and stop shipments",
                &["Empowered Official appointment letter"],
            ),
            req(
                "ITAR-REC-001",
                Itar,
                Cat::Recordkeeping,
                "ITAR five-year recordkeeping",
                Medium,
                true,
                on("has_itar_items", itar),
                "Retain export, license and brokering records for five years per 22 CFR 122.5",
                &["Export records retention policy"],
            ),
            req(
                "ITAR-RPT-001",
                Itar,
                Cat::Reporting,
                "Voluntary disclosure procedure",
                Medium,
                false,
                on("has_itar_items", itar),
                "Document how suspected violations are escalated and voluntarily disclosed to DDTC under 22 CFR 127.12",
                &["Voluntary disclosure procedure"],
            ),
            req(
                "ITAR-TRN-001",
                Itar,
                Cat::Training,
                "ITAR awareness training",
                Low,
                false,
                on("has_itar_items", itar),
                "Train engineering, sales and logistics staff on ITAR obligations annually",
                &["ITAR training records"],
            ),
            // ── EAR ─────────────────────────────────────────────────────
            req(
                "EAR-CLS-001",
                Ear,
                Cat::Classification,
                "ECCN classification",
                High,
                true,
                on("has_ear_items", ear),
                "Classify every item against the Commerce Control List and record its ECCN",
                &["ECCN classification matrix", "Commodity classification (CCATS) rulings"],
            ),
            req(
                "EAR-LIC-001",
                Ear,
                Cat::Licensing,
                "BIS export licenses",
                High,
                true,
                on("ear_exports", ear_exports),
                "Determine license requirements per destination and obtain BIS licenses where no exception applies",
                &["BIS export licenses", "License determination records"],
            ),
            req(
                "EAR-LIC-002",
                Ear,
                Cat::Licensing,
                "License exception documentation",
                Medium,
                false,
                on("ear_exports", ear_exports),
                "Document eligibility for each license exception relied on",
                &["License exception eligibility determinations"],
            ),
            req(
                "EAR-ENC-001",
                Ear,
                Cat::Classification,
                "Encryption classification and reporting",
                High,
                true,
                on("has_encryption_items", encryption),
                "Classify encryption items under Category 5 Part 2 and file the required self-classification reports",
                &["Encryption classification requests", "Annual self-classification report"],
            ),
            req(
                "EAR-TCP-001",
                Ear,
                Cat::TechnologyControl,
                "Deemed export controls",
                High,
                true,
                on("ear_foreign_nationals", ear_foreign_nationals),
                "Obtain deemed export licenses before releasing controlled technology to foreign persons",
                &["Technology Control Plan", "Deemed export license determinations"],
            ),
            req(
                "EAR-AES-001",
                Ear,
                Cat::Reporting,
                "Electronic Export Information filing",
                Medium,
                true,
                on("ear_exports", ear_exports),
                "File Electronic Export Information in AES for every shipment that requires it",
                &["AES filing records"],
            ),
            req(
                "EAR-REC-001",
                Ear,
                Cat::Recordkeeping,
                "EAR five-year recordkeeping",
                Medium,
                true,
                on("has_ear_items", ear),
                "Retain export records for five years per 15 CFR 762",
                &["Export records retention policy"],
            ),
            req(
                "EAR-ECP-001",
                Ear,
                Cat::Governance,
                "Export Compliance Program",
                Medium,
                false,
                on("has_ear_items", ear),
                "Adopt a written Export Compliance Program following the BIS elements",
                &["Export Compliance Program manual"],
            ),
            req(
                "EAR-TRN-001",
                Ear,
                Cat::Training,
                "Export compliance training",
                Low,
                false,
                on("has_ear_items", ear),
                "Train staff handling CCL items on EAR obligations annually",
                &["EAR training records"],
            ),
            // ── Screening ───────────────────────────────────────────────
            req(
                "OFAC-SCR-001",
                Ofac,
                Cat::Screening,
                "Restricted party screening (SDN)",
                High,
                true,
                on("always", always),
                "Screen customers, suppliers and partners against the OFAC SDN list before every transaction",
                &["Restricted party screening procedure", "Screening logs"],
            ),
            req(
                "EAR-SCR-001",
                Ear,
                Cat::Screening,
                "Entity List and BIS list screening",
                High,
                true,
                on("export_or_ear", export_or_ear),
                "Screen against the Entity List, Denied Persons List, Unverified List and Military End-User List",
                &["Restricted party screening procedure", "Screening logs"],
            ),
            req(
                "EAR-SCR-002",
                Ear,
                Cat::Screening,
                "Red-flag and end-use review",
                Medium,
                true,
                on("controlled_activity", controlled_activity),
                "Apply the BIS red-flag indicators and collect end-use statements for controlled transactions",
                &["Red-flag review checklist", "End-use statements"],
            ),
            req(
                "OFAC-SCR-002",
                Ofac,
                Cat::Screening,
                "Comprehensive embargo controls",
                Critical,
                true,
                on("ships_to_embargoed", embargoed),
                "Block shipments to comprehensively embargoed destinations unless an OFAC license is held",
                &["Embargo destination block procedure", "OFAC license determinations"],
            ),
        ],
    )
}
