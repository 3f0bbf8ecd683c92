use clap::Parser;

/// Command-line interface definition for bikeshare.
/// Every flag is optional: with none, the tool reads the three city CSVs
/// from the configured data directory and asks everything interactively.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive exploration of US bike share data: travel times, stations, durations and users",
    long_about = None
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use a custom configuration file instead of ~/.bikeshare/bikeshare.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Rows shown per page of raw data
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Match the day selector against the day of the month (monday = 1st)
    #[arg(long = "legacy-day-filter")]
    pub legacy_day_filter: bool,
}
