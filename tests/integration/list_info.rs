//! Integration tests for `harukit list` and `harukit info`.

use predicates::prelude::*;

use crate::common::TestProject;

const ALL_COMPONENTS: [&str; 6] = ["accordion", "button", "card", "input", "label", "tooltip"];

#[test]
fn list_enumerates_every_catalog_entry_once() {
    // No config, no manifest: the catalog needs no project state
    let project = TestProject::empty();

    let output = project.harukit().arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    for name in ALL_COMPONENTS {
        assert_eq!(
            stdout.matches(&format!("• {name}\n")).count(),
            1,
            "{name} should appear exactly once"
        );
    }
}

#[test]
fn list_marks_installed_components() {
    let project = TestProject::initialized();
    project.write("harukit.json", r#"{"components": ["button"]}"#);

    project
        .harukit()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("button (installed)"));
}

#[test]
fn list_installed_filters_to_recorded_components() {
    let project = TestProject::initialized();
    project.write("harukit.json", r#"{"components": ["button", "card"]}"#);

    let output = project.harukit().args(["list", "--installed"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("button"));
    assert!(stdout.contains("card"));
    assert!(!stdout.contains("tooltip"));
}

#[test]
fn list_installed_with_empty_project_prints_placeholder() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components installed"));
}

#[test]
fn info_shows_component_metadata() {
    let project = TestProject::empty();

    project
        .harukit()
        .args(["info", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Versatile button"))
        .stdout(predicate::str::contains("@radix-ui/react-slot"))
        .stdout(predicate::str::contains("Not installed"));
}

#[test]
fn info_reports_installed_status_from_config() {
    let project = TestProject::initialized();
    project.write("harukit.json", r#"{"components": ["button"]}"#);

    project
        .harukit()
        .args(["info", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"));
}

#[test]
fn info_unknown_component_lists_alternatives_and_fails() {
    let project = TestProject::empty();

    project
        .harukit()
        .args(["info", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("Available components"));
}

#[test]
fn info_without_component_shows_project_overview() {
    let project = TestProject::initialized();
    project.write(
        "harukit.json",
        r#"{"style": "new-york", "components": ["card"], "dependencies": ["clsx"]}"#,
    );

    project
        .harukit()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("new-york"))
        .stdout(predicate::str::contains("card"))
        .stdout(predicate::str::contains("clsx"))
        .stdout(predicate::str::contains("registry.harukit.dev"));
}
