use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One CSV row as it appears in the source file. Field names are the
/// dataset's column headers.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A trip with its derived columns. Derived values are computed once in
/// `Trip::new` and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: u32,
    pub month_name: String,
    pub weekday: Weekday,
    pub weekday_name: String,
    pub day_of_month: u32,
    pub start_hour: u32,
    pub end_hour: u32,
    pub trip_key: String,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: Option<f64>,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let trip_key = format!("{start_station}{end_station}");
        Self {
            month: start_time.month(),
            month_name: start_time.format("%B").to_string(),
            weekday: start_time.weekday(),
            weekday_name: start_time.format("%A").to_string(),
            day_of_month: start_time.day(),
            start_hour: start_time.hour(),
            end_hour: end_time.hour(),
            trip_key,
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type: non_blank(user_type),
            gender: non_blank(gender),
            birth_year,
        }
    }

    /// End hour minus start hour. Negative for trips that cross midnight.
    pub fn hour_span(&self) -> i64 {
        self.end_hour as i64 - self.start_hour as i64
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// The loaded (and possibly filtered) dataset of one city.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Rows `[start, end)`, clamped to the table length.
    pub fn slice(&self, start: usize, end: usize) -> &[Trip] {
        let len = self.trips.len();
        let start = start.min(len);
        let end = end.clamp(start, len);
        &self.trips[start..end]
    }

    pub fn has_demographics(&self) -> bool {
        self.has_gender && self.has_birth_year
    }
}
