use super::frequency::{Mode, mode};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<Mode<String>>,
    pub weekday: Option<Mode<String>>,
    pub start_hour: Option<Mode<u32>>,
}

/// Most frequent month, day of week and start hour.
pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = &table.trips;
    TimeStats {
        month: mode(trips.iter().map(|t| t.month_name.as_str())).map(owned),
        weekday: mode(trips.iter().map(|t| t.weekday_name.as_str())).map(owned),
        start_hour: mode(trips.iter().map(|t| t.start_hour)),
    }
}

pub(crate) fn owned(m: Mode<&str>) -> Mode<String> {
    Mode {
        value: m.value.to_string(),
        count: m.count,
    }
}
