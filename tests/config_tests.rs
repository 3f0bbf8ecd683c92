use bikeshare::config::{Config, DayFilterMode};
use bikeshare::errors::AppError;
use std::path::Path;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.data_dir, ".");
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.day_filter, DayFilterMode::Weekday);
    assert!(Config::config_file().ends_with(".bikeshare/bikeshare.conf"));
}

#[test]
fn test_parse_partial_yaml() {
    let cfg = Config::parse("day_filter: day_of_month\n").expect("parse");
    assert_eq!(cfg.day_filter, DayFilterMode::DayOfMonth);
    assert_eq!(cfg.page_size, 5);

    let cfg = Config::parse("").expect("empty file");
    assert_eq!(cfg.data_dir, ".");
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(matches!(
        Config::parse("day_filter: fortnightly\n"),
        Err(AppError::ConfigParse(_))
    ));
    assert!(matches!(
        Config::parse("page_size: 0\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = Config::load_from(Path::new("/nonexistent/bikeshare.conf")).expect("defaults");
    assert_eq!(cfg.page_size, 5);
}

#[test]
fn test_cli_flags_override_config() {
    use bikeshare::cli::parser::Cli;
    use clap::Parser;

    let cli = Cli::try_parse_from([
        "bikeshare",
        "--config",
        "/nonexistent/bikeshare.conf",
        "--data-dir",
        "/srv/bikeshare",
        "--page-size",
        "3",
        "--legacy-day-filter",
    ])
    .expect("valid flags");
    let cfg = bikeshare::resolve_config(&cli).expect("config");

    assert_eq!(cfg.data_dir, "/srv/bikeshare");
    assert_eq!(cfg.page_size, 3);
    assert_eq!(cfg.day_filter, DayFilterMode::DayOfMonth);

    let cli = Cli::try_parse_from(["bikeshare", "--config", "/nonexistent/x.conf", "--page-size", "0"])
        .expect("valid flags");
    assert!(matches!(bikeshare::resolve_config(&cli), Err(AppError::Config(_))));
}
