use super::frequency::{Mode, mode, value_counts};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub birth_year: Option<Mode<i32>>,
    pub latest_birth_year: Option<i32>,
    pub earliest_birth_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the source has no gender or no birth year column.
    pub demographics: Option<Demographics>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.trips;

    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.as_deref()))
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();

    let demographics = table.has_demographics().then(|| {
        let genders = value_counts(trips.iter().filter_map(|t| t.gender.as_deref()))
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect();
        let years = || trips.iter().filter_map(|t| t.birth_year);

        Demographics {
            genders,
            birth_year: mode(years()),
            latest_birth_year: years().max(),
            earliest_birth_year: years().min(),
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}
