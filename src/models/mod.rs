pub mod city;
pub mod filters;
pub mod trip;

pub use city::City;
pub use filters::{DayFilter, Filters, MonthFilter};
pub use trip::{Trip, TripRow, TripTable};
