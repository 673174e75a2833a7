//! Integration tests for `harukit init`.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn init_fails_without_package_json() {
    let project = TestProject::empty();

    project
        .harukit()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not detect a supported project"));
}

#[test]
fn init_second_run_exits_zero_and_preserves_config() {
    let project = TestProject::with_manifest();
    project.write("harukit.json", r#"{"components": ["button"]}"#);

    project
        .harukit()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    // Byte-identical: the guard must not rewrite the file
    assert_eq!(project.read("harukit.json"), r#"{"components": ["button"]}"#);
}

#[test]
fn init_guidance_mentions_next_commands() {
    let project = TestProject::with_manifest();
    project.write("harukit.json", "{}");

    project
        .harukit()
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("harukit add"))
        .stdout(predicate::str::contains("harukit list"));
}
