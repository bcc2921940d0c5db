//! CLI contract tests for `provis show`.

mod common;

use common::{TestContext, VALID_MANIFEST};
use predicates::prelude::*;

#[test]
fn show_prints_text_summary() {
    let ctx = TestContext::new();
    ctx.write_manifest(VALID_MANIFEST);

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project:   cerebrum"))
        .stdout(predicate::str::contains("4 CPU, 1 GPU, 16384 MiB RAM"))
        .stdout(predicate::str::contains("1 model, 0 data"))
        .stdout(predicate::str::contains("3 conda package(s)"))
        .stdout(predicate::str::contains("Digest:    sha256:"));
}

#[test]
fn show_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.write_manifest(VALID_MANIFEST);

    ctx.cli()
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"cerebrum\""))
        .stdout(predicate::str::contains("\"conda_packages\": 3"))
        .stdout(predicate::str::contains("\"min_mem\": 16384"));
}

#[test]
fn show_fails_on_unparseable_manifest() {
    let ctx = TestContext::new();
    ctx.write_manifest("workspace: only\n");

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse workspace.yml"));
}

#[test]
fn show_fails_without_manifest() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace.yml manifest found"));
}
