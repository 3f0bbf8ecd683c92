//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the interactive session.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use cli::prompt::Prompter;
use config::{Config, DayFilterMode};
use errors::AppResult;
use std::io;
use std::path::Path;

/// Build the effective configuration: config file first, then CLI overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(n) = cli.page_size {
        cfg.page_size = n;
    }
    if cli.legacy_day_filter {
        cfg.day_filter = DayFilterMode::DayOfMonth;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    log::debug!("effective config: {cfg:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    crate::core::session::run_session(&cfg, &mut prompter)
}
