pub mod duration;
pub mod frequency;
pub mod stations;
pub mod travel_time;
pub mod users;

pub use duration::{DurationStats, duration_stats};
pub use frequency::{Mode, mode, value_counts};
pub use stations::{StationStats, station_stats};
pub use travel_time::{TimeStats, time_stats};
pub use users::{Demographics, UserStats, user_stats};
