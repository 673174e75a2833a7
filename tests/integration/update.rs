//! Integration tests for `harukit update`.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn update_without_config_fails() {
    let project = TestProject::with_manifest();

    project
        .harukit()
        .arg("update")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No Harukit configuration"));
}

#[test]
fn update_with_nothing_installed_succeeds() {
    let project = TestProject::initialized();

    project
        .harukit()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to update"));
}

#[test]
fn update_rewrites_existing_files_only() {
    let project = TestProject::initialized();
    project.harukit().args(["add", "card"]).assert().success();

    // Simulate local drift, and a recorded component whose file was deleted
    project.write("src/components/card.tsx", "stale");
    project.write("harukit.json", r#"{"components": ["card", "input"]}"#);

    project
        .harukit()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated src/components/card.tsx"));

    assert_ne!(project.read("src/components/card.tsx"), "stale");
    assert!(!project.exists("src/components/input.tsx"));
}

#[test]
fn update_named_unknown_component_fails() {
    let project = TestProject::initialized();

    project
        .harukit()
        .args(["update", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn update_named_component_refreshes_it() {
    let project = TestProject::initialized();
    project.harukit().args(["add", "card"]).assert().success();
    project.write("src/components/card.tsx", "stale");

    project.harukit().args(["update", "card"]).assert().success();
    assert_ne!(project.read("src/components/card.tsx"), "stale");
}
