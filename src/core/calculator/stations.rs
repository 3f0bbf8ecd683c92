use super::frequency::{Mode, mode};
use super::travel_time::owned;
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<Mode<String>>,
    pub end_station: Option<Mode<String>>,
    pub trip: Option<Mode<String>>,
}

/// Most popular start station, end station and start+end combination.
pub fn station_stats(table: &TripTable) -> StationStats {
    let trips = &table.trips;
    StationStats {
        start_station: mode(trips.iter().map(|t| t.start_station.as_str())).map(owned),
        end_station: mode(trips.iter().map(|t| t.end_station.as_str())).map(owned),
        trip: mode(trips.iter().map(|t| t.trip_key.as_str())).map(owned),
    }
}
