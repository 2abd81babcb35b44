use serde::Serialize;

use crate::departures::helper::departure_with_most_delay;
use crate::departures::types::{Station, StationList};

/// Map pin colour for a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinColor {
    Green,
    Yellow,
    Red,
}

impl PinColor {
    /// `<= 0` min is on time, `<= 5` min is mildly late, anything more is red.
    pub fn for_delay(delay_in_minutes: i64) -> Self {
        match delay_in_minutes {
            d if d <= 0 => PinColor::Green,
            d if d <= 5 => PinColor::Yellow,
            _ => PinColor::Red,
        }
    }

    /// Colour from the station's worst departure; green if it has none.
    pub fn for_station(station: &Station) -> Self {
        departure_with_most_delay(station)
            .map_or(PinColor::Green, |d| Self::for_delay(d.delay_in_minutes))
    }

    pub fn hex(self) -> &'static str {
        match self {
            PinColor::Green => "#31C48D",
            PinColor::Yellow => "#FACA15",
            PinColor::Red => "#F05252",
        }
    }
}

/// A coloured marker ready to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    pub station_id: String,
    pub friendly_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub color: PinColor,
    pub highlighted: bool,
}

/// Pins for every station with usable coordinates. The station matching
/// `updated_station` is flagged for highlighting.
pub fn map_pins(stations: &StationList, updated_station: Option<&str>) -> Vec<MapPin> {
    stations
        .iter()
        .filter_map(|(id, station)| {
            let (latitude, longitude) = station.coordinates.lat_lon()?;
            Some(MapPin {
                station_id: id.clone(),
                friendly_name: station.friendly_name.clone(),
                latitude,
                longitude,
                color: PinColor::for_station(station),
                highlighted: updated_station == Some(id.as_str()),
            })
        })
        .collect()
}
