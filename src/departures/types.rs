//! Station and departure records as delivered by the departure feed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stats::mean;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    pub planned_departure_time: i64,
    pub realtime_departure_time: i64,
    pub label: String,
    pub delay_in_minutes: i64,
    pub destination: String,
}

/// Position of a station. The feed sends decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    /// `(latitude, longitude)`, or `None` if either part is not a number.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse().ok()?;
        let lon = self.longitude.trim().parse().ok()?;
        Some((lat, lon))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub friendly_name: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub departures: Vec<Departure>,
    #[serde(default)]
    pub avg_delay: f64,
}

impl Station {
    /// Builds a station and derives `avg_delay` from its departures.
    pub fn new(friendly_name: &str, coordinates: Coordinates, departures: Vec<Departure>) -> Self {
        let mut station = Self {
            friendly_name: friendly_name.to_string(),
            coordinates,
            departures,
            avg_delay: 0.0,
        };
        station.refresh_avg_delay();
        station
    }

    pub fn refresh_avg_delay(&mut self) {
        let delays: Vec<f64> = self
            .departures
            .iter()
            .map(|d| d.delay_in_minutes as f64)
            .collect();
        self.avg_delay = mean(&delays);
    }
}

/// Stations keyed by station id.
pub type StationList = BTreeMap<String, Station>;

/// Recomputes every station's `avg_delay`; stations without departures get 0.
pub fn refresh_avg_delays(stations: &mut StationList) {
    for station in stations.values_mut() {
        station.refresh_avg_delay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departure_json_shape() {
        let json = r#"{
            "plannedDepartureTime": 1704085200000,
            "realtimeDepartureTime": 1704085380000,
            "label": "U3",
            "delayInMinutes": 3,
            "destination": "Moosach"
        }"#;
        let d: Departure = serde_json::from_str(json).unwrap();
        assert_eq!(d.label, "U3");
        assert_eq!(d.delay_in_minutes, 3);
    }

    #[test]
    fn test_refresh_overrides_input_avg_delay() {
        let json = r#"{
            "a": { "friendlyName": "Olympiazentrum", "avgDelay": 4.5 },
            "b": { "friendlyName": "Scheidplatz", "avgDelay": 9.0, "departures": [
                { "plannedDepartureTime": 0, "realtimeDepartureTime": 60000,
                  "label": "U3", "delayInMinutes": 1, "destination": "Moosach" }
            ] }
        }"#;
        let mut stations: StationList = serde_json::from_str(json).unwrap();

        refresh_avg_delays(&mut stations);

        assert_eq!(stations["a"].avg_delay, 0.0);
        assert_eq!(stations["b"].avg_delay, 1.0);
    }

    #[test]
    fn test_coordinates_parse() {
        let c = Coordinates {
            latitude: "48.137".to_string(),
            longitude: " 11.575 ".to_string(),
        };
        assert_eq!(c.lat_lon(), Some((48.137, 11.575)));
        assert_eq!(Coordinates::default().lat_lon(), None);
    }
}
