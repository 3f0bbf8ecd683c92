use super::city::City;
use chrono::Weekday;
use std::fmt;

pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Month selector: `All` or a month number (January = 1 .. June = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == s)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(m) => MONTH_NAMES[(*m as usize).saturating_sub(1)],
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day selector: `All` or a day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|d| *d == s)
            .and_then(|i| Weekday::try_from(i as u8).ok())
            .map(DayFilter::Day)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(wd) => DAY_NAMES[wd.num_days_from_monday() as usize],
        }
    }

    /// Monday = 1 .. Sunday = 7
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            DayFilter::All => None,
            DayFilter::Day(wd) => Some(wd.number_from_monday()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection collected once per session pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (month: {}, day: {})", self.city, self.month, self.day)
    }
}
