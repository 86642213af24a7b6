//! End-to-end CLI tests.
//!
//! Exercises the scriptable commands through the real binary. Clipboard-
//! dependent commands are left out since headless CI has no clipboard.

use assert_cmd::Command;
use predicates::prelude::*;

fn glyphpick() -> Command {
    Command::cargo_bin("glyphpick").unwrap()
}

#[test]
fn test_search_finds_beta_by_alias() {
    glyphpick()
        .args(["search", "bet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("β"))
        .stdout(predicate::str::contains("Beta"));
}

#[test]
fn test_search_quiet_prints_glyphs_only() {
    glyphpick()
        .args(["-q", "search", "bet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("β"))
        .stdout(predicate::str::contains("Beta").not());
}

#[test]
fn test_search_json_output_parses() {
    let output = glyphpick()
        .args(["search", "alpha", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let array = records.as_array().unwrap();
    assert!(!array.is_empty());
    assert_eq!(array[0]["symbol"], "α");
}

#[test]
fn test_search_no_match_prints_nothing() {
    glyphpick()
        .args(["search", "no such symbol anywhere"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_categories() {
    glyphpick()
        .args(["list", "--categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("greek"))
        .stdout(predicate::str::contains("arrows"));
}

#[test]
fn test_list_filtered_by_category() {
    glyphpick()
        .args(["list", "--category", "greek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Euro").not());
}

#[test]
fn test_custom_catalog_overrides_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{"symbols":[{"symbol":"☃","name":"Snowman","aliases":["snow"],"category":"weather"}]}"#,
    )
    .unwrap();

    glyphpick()
        .args(["--catalog"])
        .arg(&catalog)
        .args(["search", "snow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("☃"));
}

#[test]
fn test_missing_catalog_fails_with_catalog_exit_code() {
    glyphpick()
        .args(["--catalog", "/nonexistent/catalog.json", "search", "x"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_favorites_add_and_list_with_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["favorites", "--add", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("β"));

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beta"));
}

#[test]
fn test_favorites_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["favorites", "--add", "beta"])
        .assert()
        .success();

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["favorites", "--remove", "beta"])
        .assert()
        .success();

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("β").not());
}

#[test]
fn test_recent_empty_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    glyphpick()
        .args(["--state"])
        .arg(&state)
        .args(["recent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_copy_unknown_symbol_fails_with_not_found() {
    // Resolution fails before any clipboard access, so this is safe headless.
    glyphpick()
        .args(["copy", "no such symbol anywhere"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_copy_ambiguous_query_fails() {
    glyphpick()
        .args(["copy", "greek"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("matches"));
}

#[test]
fn test_completions_bash() {
    glyphpick()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphpick"));
}

#[test]
fn test_version_flag() {
    glyphpick()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphpick"));
}
