//! Station departures: the records, the reductions over them, and the shapes
//! the grid, table and map views are built from.

pub mod feed;
pub mod helper;
pub mod pin;
pub mod table;
pub mod types;

pub use helper::{departure_with_most_delay, station_with_most_delay};
pub use types::{Coordinates, Departure, Station, StationList, refresh_avg_delays};
