//! Dataset loader: resolves a city's CSV, derives the time-part and trip-key
//! columns and applies the month/day filters.

use crate::config::DayFilterMode;
use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, Filters, MonthFilter, Trip, TripRow, TripTable};
use crate::utils::time::parse_column_timestamp;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const REQUIRED_COLUMNS: [&str; 4] = ["Start Time", "End Time", "Start Station", "End Station"];

/// Resolve a city key to the CSV backing it inside `data_dir`.
pub fn source_path(data_dir: &Path, city_key: &str) -> AppResult<PathBuf> {
    let city = City::from_key(city_key)?;
    Ok(data_dir.join(city.file_name()))
}

/// Load the selected city's trips and apply the month/day filters.
pub fn load_data(data_dir: &Path, filters: &Filters, mode: DayFilterMode) -> AppResult<TripTable> {
    let path = source_path(data_dir, filters.city.key())?;
    log::info!("loading {} from {}", filters.city, path.display());

    let file = File::open(&path)?;
    let table = load_from_reader(file)?;
    let loaded = table.len();

    let filtered = filter_trips(table, filters.month, filters.day, mode);
    log::info!(
        "{} of {} trips kept for {}",
        filtered.len(),
        loaded,
        filters
    );

    Ok(filtered)
}

/// Parse a full trip table from CSV data. Optional columns ("Gender",
/// "Birth Year") are detected from the header row.
pub fn load_from_reader<R: Read>(rdr: R) -> AppResult<TripTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h.trim() == name);

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has_column(c)) {
        return Err(AppError::MissingColumn(missing.to_string()));
    }

    let mut table = TripTable {
        trips: Vec::new(),
        has_gender: has_column("Gender"),
        has_birth_year: has_column("Birth Year"),
    };

    for result in reader.deserialize::<TripRow>() {
        let row = result?;
        table.trips.push(trip_from_row(row)?);
    }

    log::debug!(
        "parsed {} trips (gender: {}, birth year: {})",
        table.len(),
        table.has_gender,
        table.has_birth_year
    );

    Ok(table)
}

fn trip_from_row(row: TripRow) -> AppResult<Trip> {
    let start = parse_column_timestamp("Start Time", &row.start_time)?;
    let end = parse_column_timestamp("End Time", &row.end_time)?;

    Ok(Trip::new(
        start,
        end,
        row.trip_duration,
        row.start_station,
        row.end_station,
        row.user_type,
        row.gender,
        row.birth_year.map(|y| y as i32),
    ))
}

/// Keep only the trips matching `month` and `day`. Row order is preserved;
/// rows are never created or duplicated.
pub fn filter_trips(
    table: TripTable,
    month: MonthFilter,
    day: DayFilter,
    mode: DayFilterMode,
) -> TripTable {
    let TripTable {
        trips,
        has_gender,
        has_birth_year,
    } = table;

    let trips = trips
        .into_iter()
        .filter(|t| matches_month(t, month) && matches_day(t, day, mode))
        .collect();

    TripTable {
        trips,
        has_gender,
        has_birth_year,
    }
}

pub fn matches_month(trip: &Trip, month: MonthFilter) -> bool {
    match month {
        MonthFilter::All => true,
        MonthFilter::Month(m) => trip.month == m,
    }
}

pub fn matches_day(trip: &Trip, day: DayFilter, mode: DayFilterMode) -> bool {
    let Some(ordinal) = day.ordinal() else {
        return true;
    };

    match mode {
        DayFilterMode::Weekday => trip.weekday.number_from_monday() == ordinal,
        DayFilterMode::DayOfMonth => trip.day_of_month == ordinal,
    }
}
