//! Shaping of raw per-station departure lists into the update events the
//! dashboard consumes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StationDirectory;
use crate::departures::types::{Coordinates, Departure, Station};

/// Upper bound on departures shown per station.
pub const MAX_DEPARTURES: usize = 8;

/// Keeps subway departures (line labels starting with `U`), at most
/// [`MAX_DEPARTURES`] of them, in feed order.
pub fn filter_subway(departures: Vec<Departure>) -> Vec<Departure> {
    departures
        .into_iter()
        .filter(|d| d.label.starts_with('U'))
        .take(MAX_DEPARTURES)
        .collect()
}

/// Update payload for a single station.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationEvent {
    pub station: String,
    pub friendly_name: String,
    pub coordinates: Coordinates,
    pub departures: Vec<Departure>,
}

impl StationEvent {
    pub fn assemble(
        station_id: &str,
        departures: Vec<Departure>,
        directory: &StationDirectory,
    ) -> Self {
        let total = departures.len();
        let departures = filter_subway(departures);
        debug!(station = station_id, total, kept = departures.len(), "Assembled station event");

        Self {
            station: station_id.to_string(),
            friendly_name: directory.friendly_name(station_id).to_string(),
            coordinates: directory.coordinates(station_id),
            departures,
        }
    }

    /// The station as the dashboard holds it, with its average delay.
    pub fn into_station(self) -> (String, Station) {
        let station = Station::new(&self.friendly_name, self.coordinates, self.departures);
        (self.station, station)
    }
}
