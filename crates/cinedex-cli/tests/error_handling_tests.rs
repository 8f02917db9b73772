//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cinedex(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cinedex").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("OMDB_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn store_args(temp: &TempDir) -> Vec<String> {
    vec![
        "--storage".into(),
        "json".into(),
        "--file".into(),
        temp.path().join("movies.json").display().to_string(),
    ]
}

#[test]
fn no_arguments_shows_help_and_exits_2() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp).assert().failure().code(2);
}

#[test]
fn out_of_range_rating_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(store_args(&temp))
        .args(["add", "X", "--year", "2020", "--rating", "10.5"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("outside the accepted range"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn updating_a_missing_movie_exits_3() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(store_args(&temp))
        .args(["update", "Ghost Film", "5.0"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Movie not found"))
        .stderr(predicate::str::contains("cinedex search"));
}

#[test]
fn deleting_a_missing_movie_exits_3() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(store_args(&temp))
        .args(["delete", "Ghost Film"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Movie not found"));
}

#[test]
fn lookup_add_without_api_key_exits_4() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(store_args(&temp))
        .args(["add", "The Matrix"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("OMDB_API_KEY"));
}

#[test]
fn explicit_missing_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(["--config", "/nonexistent/cinedex.toml", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn corrupt_json_store_is_an_internal_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("movies.json"), "{ not json").unwrap();

    cinedex(&temp)
        .args(store_args(&temp))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn malformed_rating_in_csv_store_is_an_internal_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("movies.csv"),
        "title,rating,year,poster\nBroken,not-a-number,2000,\n",
    )
    .unwrap();

    cinedex(&temp)
        .args([
            "--storage",
            "csv",
            "--file",
            &temp.path().join("movies.csv").display().to_string(),
        ])
        .arg("list")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unknown_storage_flag_value_is_rejected_by_clap() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(["--storage", "sqlite", "list"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn quiet_mode_still_prints_errors() {
    let temp = TempDir::new().unwrap();
    cinedex(&temp)
        .args(store_args(&temp))
        .args(["--quiet", "delete", "Ghost Film"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::is_empty().not());
}
