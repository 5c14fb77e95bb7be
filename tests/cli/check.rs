use anyhow::Result;

use crate::{CliTest, stderr, stdout};

/// Map data where a placed barracks trains a footman, and an orphan unit
/// is defined but never referenced.
const MAP_WITH_ORPHAN: &str = r#"{
    "placedUnits": [{ "typeId": "hbar" }],
    "objectData": {
        "units": [
            { "id": "hbar", "name": "Barracks", "trained": ["hfoo"] },
            { "id": "hfoo", "name": "Footman" },
            { "id": "zzzz", "name": "Orphan" }
        ],
        "upgrades": [],
        "abilities": []
    }
}"#;

const MAP_FULLY_REACHABLE: &str = r#"{
    "placedUnits": [{ "typeId": "hbar" }],
    "objectData": {
        "units": [
            { "id": "hbar", "name": "Barracks", "trained": ["hfoo"] },
            { "id": "hfoo", "name": "Footman" }
        ]
    }
}"#;

#[test]
fn test_no_issues_exits_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("war3map.json", MAP_FULLY_REACHABLE)?;
    test.write_file("src/Main.cs", "")?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn test_unreachable_unit_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("war3map.json", MAP_WITH_ORPHAN)?;
    test.write_file("src/Main.cs", "")?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("unreachable-unit"));
    assert!(out.contains("zzzz"));
    assert!(out.contains("Orphan"));
    // Reachable objects are not reported
    assert!(!out.contains("hfoo"));
    Ok(())
}

#[test]
fn test_script_reference_counts_as_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "war3map.json",
        r#"{
            "objectData": {
                "upgrades": [{ "id": "R123", "name": "Scripted Research" }]
            }
        }"#,
    )?;
    test.write_file(
        "src/Research.cs",
        "SetPlayerTechResearched(player, FourCC(\"r123\"), 1);",
    )?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}

#[test]
fn test_allowed_entry_is_suppressed() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("war3map.json", MAP_WITH_ORPHAN)?;
    test.write_file("src/Main.cs", "")?;
    test.write_file(".mapcheckrc.json", r#"{ "allowed": ["zzzz"] }"#)?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}

#[test]
fn test_unreachable_ability_is_warning_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "war3map.json",
        r#"{
            "objectData": {
                "abilities": [{ "id": "AHwe", "name": "Water Elemental", "kind": "water-elemental" }]
            }
        }"#,
    )?;
    test.write_file("src/Main.cs", "")?;

    let output = test.run_check()?;
    // Warnings do not fail the check
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("unreachable-ability"));
    Ok(())
}

#[test]
fn test_selected_checks_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("war3map.json", MAP_WITH_ORPHAN)?;
    test.write_file("src/Main.cs", "")?;

    let output = test.command().args(["check", "upgrades"]).output()?;
    // The orphan unit exists, but only the upgrade check ran
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_missing_data_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read map data file"));
    Ok(())
}

#[test]
fn test_malformed_reference_warns_but_passes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "war3map.json",
        r#"{
            "placedUnits": [{ "typeId": "hbar" }],
            "objectData": {
                "units": [{ "id": "hbar", "name": "Barracks", "trained": ["notafourcc"] }]
            }
        }"#,
    )?;
    test.write_file("src/Main.cs", "")?;

    let output = test.run_check()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("data-warning"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("check"));
    assert!(stdout(&output).contains("init"));
    Ok(())
}
