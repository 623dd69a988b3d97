use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn primer_runs_catalogue_by_default() {
    let mut cmd = Command::cargo_bin("primer").expect("binary exists");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("we hit a bad error!!"))
        .stdout(predicate::str::contains("aaaaaa"));
}

#[test]
fn primer_run_only_selected() {
    let mut cmd = Command::cargo_bin("primer").expect("binary exists");
    cmd.arg("run").arg("--only").arg("coalescing");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("other thing"))
        .stdout(predicate::str::contains("aaaaaa").not());
}

#[test]
fn primer_list_names_snippets() {
    let mut cmd = Command::cargo_bin("primer").expect("binary exists");
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("repeat-operator"))
        .stdout(predicate::str::contains("downcasting"));
}

#[test]
fn primer_show_unknown_snippet_fails() {
    let mut cmd = Command::cargo_bin("primer").expect("binary exists");
    cmd.arg("show").arg("teleport");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("teleport"));
}
