//! Tests for error handling, suggestions and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn garden(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("garden");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("GARDEN_CATALOG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn unknown_id_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["show", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found: 99"))
        .stderr(predicate::str::contains("garden list"));
}

#[test]
fn blank_id_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["show", ""])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
    garden(&home).args(["edit", "  ", "--name", "Whatever"]).assert().code(3);
    garden(&home).args(["delete", "", "--yes"]).assert().code(3);
}

#[test]
fn edit_unknown_id_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["edit", "99", "--name", "Whatever"])
        .assert()
        .code(3);
}

#[test]
fn invalid_draft_lists_every_violation() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["new", "--name", "ab", "--description", "short"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Name must be at least 3 characters."))
        .stderr(predicate::str::contains(
            "Description must be at least 10 characters.",
        ))
        .stderr(predicate::str::contains("Please select a category."));
}

#[test]
fn unknown_category_on_new_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args([
            "new",
            "--name",
            "Travel Diary",
            "--description",
            "A blog for travel stories.",
            "--category",
            "travel",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("travel"));
}

#[test]
fn delete_declined_is_cancelled() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["delete", "7"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));
}

#[test]
fn delete_unknown_id_fails_before_prompt() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["delete", "99", "--yes"])
        .assert()
        .code(3);
}

#[test]
fn missing_catalog_dir_is_configuration_error() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["list"])
        .env("GARDEN_CATALOG_DIR", home.path().join("nope"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("catalog unavailable"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn conflicting_publish_flags_are_rejected_by_parser() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["edit", "6", "--publish", "--unpublish"])
        .assert()
        .code(2);
}

#[test]
fn verbose_errors_omit_hint() {
    let home = tempfile::tempdir().unwrap();
    garden(&home)
        .args(["-v", "show", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--verbose").not());
}
