//! Row pager: shows the filtered table a window at a time.

use crate::models::{Trip, TripTable};
use crate::utils::formatting::format_float;
use crate::utils::table::{Column, Table};
use std::ops::Range;

/// Cursor over `[start, end)` windows of `step` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPager {
    start: usize,
    end: usize,
    step: usize,
}

impl RowPager {
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self {
            start: 0,
            end: step,
            step,
        }
    }

    pub fn window(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn advance(&mut self) {
        self.start += self.step;
        self.end += self.step;
    }

    /// Rows of the current window, then move the cursor forward. Past the
    /// end of the table the slice is short or empty.
    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> (usize, &'a [Trip]) {
        let offset = self.start;
        let rows = table.slice(self.start, self.end);
        self.advance();
        (offset, rows)
    }
}

impl Default for RowPager {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Render `rows` (starting at table index `offset`) as an aligned table.
/// Demographic columns only appear when the source has them.
pub fn render_rows(table: &TripTable, offset: usize, rows: &[Trip]) -> String {
    let mut columns = vec![
        Column::right(""),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if table.has_gender {
        columns.push(Column::left("Gender"));
    }
    if table.has_birth_year {
        columns.push(Column::right("Birth Year"));
    }

    let mut out = Table::new(columns);
    for (i, trip) in rows.iter().enumerate() {
        let mut row = vec![
            (offset + i).to_string(),
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.trip_duration.map(format_float).unwrap_or_else(|| "-".into()),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_else(|| "-".into()),
        ];
        if table.has_gender {
            row.push(trip.gender.clone().unwrap_or_else(|| "-".into()));
        }
        if table.has_birth_year {
            row.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()));
        }
        out.add_row(row);
    }

    out.render()
}
