//! Rows of the sortable station table.

use serde::Serialize;

use crate::departures::types::{Departure, StationList};
use crate::format::format_delay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRow {
    pub friendly_name: String,
    pub avg_delay: String,
    pub departures: String,
}

fn departure_entry(d: &Departure) -> String {
    format!("{} {}", d.label, d.destination)
}

/// One row per station, sorted by friendly name. Equal names keep id order.
pub fn station_rows(stations: &StationList, order: SortOrder) -> Vec<StationRow> {
    let mut rows: Vec<StationRow> = stations
        .values()
        .map(|s| StationRow {
            friendly_name: s.friendly_name.clone(),
            avg_delay: format!("Ø {} Verspätung", format_delay(s.avg_delay)),
            departures: s
                .departures
                .iter()
                .map(departure_entry)
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    rows.sort_by(|a, b| {
        let ord = a.friendly_name.cmp(&b.friendly_name);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::departures::types::{Coordinates, Station};

    fn stations() -> StationList {
        let dep = |label: &str, dest: &str, delay: i64| Departure {
            planned_departure_time: 0,
            realtime_departure_time: 0,
            label: label.to_string(),
            delay_in_minutes: delay,
            destination: dest.to_string(),
        };

        let mut list = StationList::new();
        list.insert(
            "1".into(),
            Station::new(
                "Sendlinger Tor",
                Coordinates::default(),
                vec![dep("U1", "Olympia-Einkaufszentrum", 1), dep("U2", "Feldmoching", 2)],
            ),
        );
        list.insert(
            "2".into(),
            Station::new("Arabellapark", Coordinates::default(), vec![dep("U4", "Westendstraße", 0)]),
        );
        list
    }

    #[test]
    fn test_rows_sorted_ascending() {
        let rows = station_rows(&stations(), SortOrder::Ascending);
        assert_eq!(rows[0].friendly_name, "Arabellapark");
        assert_eq!(rows[1].friendly_name, "Sendlinger Tor");
    }

    #[test]
    fn test_rows_sorted_descending() {
        let rows = station_rows(&stations(), SortOrder::Descending);
        assert_eq!(rows[0].friendly_name, "Sendlinger Tor");
    }

    #[test]
    fn test_row_content() {
        let rows = station_rows(&stations(), SortOrder::Ascending);
        assert_eq!(rows[1].avg_delay, "Ø 1m 30s Verspätung");
        assert_eq!(rows[1].departures, "U1 Olympia-Einkaufszentrum, U2 Feldmoching");
        assert_eq!(rows[0].avg_delay, "Ø 0s Verspätung");
    }
}
