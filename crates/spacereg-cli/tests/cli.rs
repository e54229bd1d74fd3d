//! End-to-end tests of the `spacereg` binary.

use std::path::Path;
use std::process::Command;

fn spacereg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spacereg"))
}

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn domains_exits_zero() {
    let output = spacereg().arg("domains").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("export_control"));
}

#[test]
fn assess_prints_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write(
        dir.path(),
        "profile.json",
        r#"{"companyTypes": ["component_supplier"], "hasEarItems": true}"#,
    );
    let output = spacereg()
        .args(["assess", "--domain", "export_control", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["domain"], "export_control");
    assert_eq!(report["classification"]["jurisdiction"], "ear_only");
}

#[test]
fn validation_error_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let profile = write(dir.path(), "profile.yaml", "hasItarItems: true\n");
    let output = spacereg()
        .args(["assess", "--domain", "export_control", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("At least one company type is required"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_profile_file_exits_one() {
    let output = spacereg()
        .args(["assess", "--domain", "nis2", "--profile", "/nonexistent/profile.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn config_file_applies() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "spacereg.yaml",
        "insurance:\n  minimum_tpl_by_state:\n    FR: 100000000\n",
    );
    let profile = write(
        dir.path(),
        "profile.yaml",
        "activities: [in_orbit_operations]\nlicensingState: FR\nhasThirdPartyLiability: true\nthirdPartyCoverEur: 60000000\n",
    );
    let output = spacereg()
        .arg("--config")
        .arg(&config)
        .args(["assess", "--domain", "insurance", "--profile"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["classification"]["jurisdiction"], "underinsured");
    assert_eq!(report["findings"]["shortfall"]["amount"], 40_000_000);
}
