#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::cli::prompt::Prompter;
use bikeshare::config::Config;
use bikeshare::core::loader::load_from_reader;
use bikeshare::core::session::run_session;
use bikeshare::models::TripTable;
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Directory with chicago.csv, new_york_city.csv and washington.csv
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixtures_dir_str() -> String {
    fixtures_dir().to_string_lossy().to_string()
}

/// Unfiltered table of a fixture file
pub fn load_fixture(file_name: &str) -> TripTable {
    let file = File::open(fixtures_dir().join(file_name)).expect("open fixture");
    load_from_reader(file).expect("parse fixture")
}

/// Config path inside the temp dir that is guaranteed not to exist
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn fixture_config() -> Config {
    Config {
        data_dir: fixtures_dir_str(),
        ..Config::default()
    }
}

/// Drive a whole session from `script` and return everything printed,
/// with ANSI colour codes removed.
pub fn run_script(cfg: &Config, script: &str) -> String {
    let mut prompter = Prompter::new(script.as_bytes(), Vec::new());
    run_session(cfg, &mut prompter).expect("session");
    strip_ansi(&String::from_utf8(prompter.into_output()).expect("utf8 output"))
}

pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip "[...m"
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
