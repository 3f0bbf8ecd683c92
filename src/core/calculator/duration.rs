use crate::models::TripTable;

/// Aggregates of the per-trip hour span (end hour minus start hour).
/// This is an hour-of-day difference, not the elapsed time of the trip:
/// a trip from 23:50 to 00:15 counts as -23.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total: i64,
    pub mean: Option<f64>,
}

pub fn duration_stats(table: &TripTable) -> DurationStats {
    let total: i64 = table.trips.iter().map(|t| t.hour_span()).sum();
    let trips = table.len();
    let mean = (trips > 0).then(|| total as f64 / trips as f64);

    DurationStats { trips, total, mean }
}
