//! Integration tests for the add/remove lifecycle.
//!
//! Uses dependency-free components (`card`, `input`) so the full install
//! path runs without spawning a package manager.

use predicates::prelude::*;

use crate::common::{component_path, TestProject};

#[test]
fn add_without_config_fails_with_init_guidance() {
    let project = TestProject::with_manifest();

    project
        .harukit()
        .args(["add", "card"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No Harukit configuration"))
        .stderr(predicate::str::contains("harukit init"));
}

#[test]
fn add_unknown_components_reports_all_and_copies_nothing() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["add", "card", "bogus", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bogus"))
        .stderr(predicate::str::contains("nope"))
        .stderr(predicate::str::contains("Available components"));

    // All-or-nothing: the valid name must not have been installed either
    assert!(!project.exists(component_path("card").to_str().unwrap()));
    let config = project.config_json();
    assert_eq!(config["components"].as_array().map(Vec::len), None);
}

#[test]
fn add_suggests_close_names() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["add", "buton"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean"))
        .stderr(predicate::str::contains("button"));
}

#[test]
fn add_installs_file_and_records_component() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["add", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added src/components/card.tsx"));

    assert!(project.exists("src/components/card.tsx"));
    assert!(project.exists("src/lib/utils.ts"));

    let config = project.config_json();
    let components = config["components"].as_array().unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0], "card");
}

#[test]
fn add_multiple_components_at_once() {
    let project = TestProject::initialized();

    project.harukit().args(["add", "card", "input"]).assert().success();

    assert!(project.exists("src/components/card.tsx"));
    assert!(project.exists("src/components/input.tsx"));

    let config = project.config_json();
    let components = config["components"].as_array().unwrap();
    assert_eq!(components.len(), 2);
}

#[test]
fn add_existing_file_skipped_without_overwrite_flag() {
    let project = TestProject::initialized();
    project.write("src/components/card.tsx", "local edits");

    project
        .harukit()
        .args(["add", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(project.read("src/components/card.tsx"), "local edits");

    project.harukit().args(["add", "card", "--overwrite"]).assert().success();
    assert_ne!(project.read("src/components/card.tsx"), "local edits");
}

#[test]
fn add_honors_custom_path() {
    let project = TestProject::initialized();

    project.harukit().args(["add", "card", "--path", "app/ui"]).assert().success();

    assert!(project.exists("app/ui/card.tsx"));
    assert!(!project.exists("src/components/card.tsx"));
}

#[test]
fn add_then_remove_round_trip() {
    let project = TestProject::initialized();

    project.harukit().args(["add", "card"]).assert().success();
    assert!(project.exists("src/components/card.tsx"));

    project.harukit().args(["remove", "card"]).assert().success();
    assert!(!project.exists("src/components/card.tsx"));
    let config = project.config_json();
    assert_eq!(config["components"].as_array().unwrap().len(), 0);

    // Second remove is a no-op that still succeeds
    project
        .harukit()
        .args(["remove", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn remove_without_config_fails() {
    let project = TestProject::with_manifest();

    project.harukit().args(["remove", "card"]).assert().failure().code(1);
}

#[test]
fn remove_without_names_fails() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["remove"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("specify components"));
}
