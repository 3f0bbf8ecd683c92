//! Console rendering of the four statistics reports. Each report computes
//! its numbers, prints them and finishes with the time it took.

use crate::core::calculator::{self, Mode};
use crate::errors::AppResult;
use crate::models::TripTable;
use crate::ui::messages::{header, no_data, rule, stat};
use crate::utils::colors::{RESET, color_for_span};
use crate::utils::formatting::{format_float, pad_left, pad_right};
use crate::utils::time::format_elapsed;
use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

/// Print "This took N seconds." and the closing rule for a report.
fn finish<W: Write>(out: &mut W, name: &str, started: Instant) -> AppResult<()> {
    let elapsed = started.elapsed();
    log::debug!("{name} report computed in {elapsed:?}");
    writeln!(out, "\nThis took {} seconds.", format_elapsed(elapsed))?;
    rule(out)?;
    Ok(())
}

fn print_mode<W: Write, T: Display>(
    out: &mut W,
    label: &str,
    value: &Option<Mode<T>>,
) -> AppResult<()> {
    match value {
        Some(m) => stat(out, label, format!("{}, Count = {}", m.value, m.count))?,
        None => no_data(out, label)?,
    }
    Ok(())
}

fn print_counts<W: Write>(out: &mut W, title: &str, counts: &[(String, usize)]) -> AppResult<()> {
    if counts.is_empty() {
        no_data(out, title)?;
        return Ok(());
    }

    writeln!(out, "{title}:")?;
    let key_w = counts.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let n_w = counts
        .iter()
        .map(|(_, n)| n.to_string().len())
        .max()
        .unwrap_or(0);
    for (key, n) in counts {
        writeln!(
            out,
            "  {}  {}",
            pad_right(key, key_w),
            pad_left(&n.to_string(), n_w)
        )?;
    }
    Ok(())
}

/// Most frequent times of travel.
pub fn print_time_stats<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    header(out, "Calculating The Most Frequent Times of Travel...")?;
    let started = Instant::now();

    let stats = calculator::time_stats(table);
    print_mode(out, "Most common month", &stats.month)?;
    print_mode(out, "Most common day", &stats.weekday)?;
    print_mode(out, "Most common start hour", &stats.start_hour)?;

    finish(out, "time", started)
}

/// Most popular stations and trip.
pub fn print_station_stats<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    header(out, "Calculating The Most Popular Stations and Trip...")?;
    let started = Instant::now();

    let stats = calculator::station_stats(table);
    print_mode(out, "Most common start station", &stats.start_station)?;
    print_mode(out, "Most common end station", &stats.end_station)?;
    print_mode(out, "Most common trip", &stats.trip)?;

    finish(out, "station", started)
}

/// Total and mean travel time, measured as end hour minus start hour.
pub fn print_trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    header(out, "Calculating Trip Duration...")?;
    let started = Instant::now();

    let stats = calculator::duration_stats(table);
    match stats.mean {
        Some(mean) => {
            let color = color_for_span(stats.total as f64);
            stat(out, "Total travel time", format!("{color}{}{RESET}", stats.total))?;
            stat(out, "Average travel time", format_float(mean))?;
        }
        None => {
            no_data(out, "Total travel time")?;
            no_data(out, "Average travel time")?;
        }
    }

    finish(out, "duration", started)
}

/// User types, and gender / birth year when the dataset has them.
pub fn print_user_stats<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    header(out, "Calculating User Stats...")?;
    let started = Instant::now();

    let stats = calculator::user_stats(table);
    print_counts(out, "User types", &stats.user_types)?;

    match &stats.demographics {
        Some(demo) => {
            print_counts(out, "Gender", &demo.genders)?;
            print_mode(out, "Most common year of birth", &demo.birth_year)?;
            match (demo.latest_birth_year, demo.earliest_birth_year) {
                (Some(latest), Some(earliest)) => {
                    stat(out, "Most recent year of birth", latest)?;
                    stat(out, "Earliest year of birth", earliest)?;
                }
                _ => {
                    no_data(out, "Most recent year of birth")?;
                    no_data(out, "Earliest year of birth")?;
                }
            }
        }
        None => {
            writeln!(out, "Gender data not available")?;
            writeln!(out, "Birth year data not available")?;
        }
    }

    finish(out, "user", started)
}

/// Run the four reports in order.
pub fn print_all<W: Write>(out: &mut W, table: &TripTable) -> AppResult<()> {
    print_time_stats(out, table)?;
    print_station_stats(out, table)?;
    print_trip_duration_stats(out, table)?;
    print_user_stats(out, table)?;
    Ok(())
}
