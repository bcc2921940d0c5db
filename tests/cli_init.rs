//! CLI contract tests for `provis init`.

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn init_creates_starter_manifest() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--name", "cerebrum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = ctx.read_file("workspace.yml");
    assert!(content.contains("name: cerebrum"));
    assert!(content.contains("additional_dependencies:"));
}

#[test]
fn init_output_passes_check() {
    let ctx = TestContext::new();

    ctx.cli().args(["init", "--name", "cerebrum"]).assert().success();

    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn init_rejects_existing_manifest() {
    let ctx = TestContext::new();

    ctx.cli().args(["init", "--name", "cerebrum"]).assert().success();

    ctx.cli()
        .args(["init", "--name", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let ctx = TestContext::new();

    ctx.cli().args(["init", "--name", "cerebrum"]).assert().success();
    ctx.cli().args(["init", "--name", "other", "--force"]).assert().success();

    assert!(ctx.read_file("workspace.yml").contains("name: other"));
}

#[test]
fn init_rejects_invalid_project_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--name", "bad name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn init_alias_works() {
    let ctx = TestContext::new();

    ctx.cli().args(["i", "--name", "cerebrum"]).assert().success();
}
