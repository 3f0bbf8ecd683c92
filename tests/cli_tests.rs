use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bikeshare, fixtures_dir_str, missing_config};

#[test]
fn test_interactive_run_over_stdin() {
    let cfg = missing_config("interactive_run");

    bikeshare()
        .args(["--data-dir", &fixtures_dir_str(), "--config", &cfg])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Clark St & Lake St, Count = 5"))
        .stdout(contains("Total travel time"))
        .stdout(contains("2017-02-06 08:00:00"))
        .stdout(contains("2017-03-01 08:05:00").not());
}

#[test]
fn test_page_size_flag() {
    let cfg = missing_config("page_size_flag");

    bikeshare()
        .args([
            "--data-dir",
            &fixtures_dir_str(),
            "--config",
            &cfg,
            "--page-size",
            "6",
        ])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("2017-03-01 08:05:00"))
        .stdout(contains("2017-03-06 23:50:00").not());
}

#[test]
fn test_legacy_day_filter_flag() {
    let cfg = missing_config("legacy_flag");

    bikeshare()
        .args([
            "--data-dir",
            &fixtures_dir_str(),
            "--config",
            &cfg,
            "--legacy-day-filter",
        ])
        .write_stdin("chicago\nall\nmonday\nno\nno\n")
        .assert()
        .success()
        // the 1st of Mar, May and Jun: one trip each, ties go to the smallest name
        .stdout(contains("Monday, Count = 1"))
        .stdout(contains("Canal St & Adams St, Count = 1"));
}

#[test]
fn test_config_file_sets_data_dir() {
    let mut path = std::env::temp_dir();
    path.push("config_file_data_dir_bikeshare.conf");
    fs::write(
        &path,
        format!("data_dir: \"{}\"\npage_size: 2\n", fixtures_dir_str()),
    )
    .expect("write config");

    let path_str = path.to_string_lossy().to_string();
    bikeshare()
        .args(["--config", &path_str])
        .write_stdin("new york city\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Suffolk St & Stanton St"))
        .stdout(contains("1 Pl & Clinton St").not());

    fs::remove_file(&path).ok();
}

#[test]
fn test_invalid_config_fails() {
    let mut path = std::env::temp_dir();
    path.push("invalid_page_size_bikeshare.conf");
    fs::write(&path, "page_size: 0\n").expect("write config");

    let path_str = path.to_string_lossy().to_string();
    bikeshare()
        .args(["--config", &path_str])
        .assert()
        .failure()
        .stderr(contains("page_size must be at least 1"));

    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_data_dir_fails() {
    let cfg = missing_config("missing_data_dir");

    bikeshare()
        .args(["--data-dir", "/nonexistent/bikeshare", "--config", &cfg])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Error: I/O error"));
}
