use crate::departures::types::{Departure, Station, StationList};

/// Station with the highest average delay, or `None` for an empty list.
///
/// On a tie the later station (in id order) wins.
pub fn station_with_most_delay(stations: &StationList) -> Option<&Station> {
    stations
        .values()
        .reduce(|prev, cur| if prev.avg_delay > cur.avg_delay { prev } else { cur })
}

/// Departure with the highest delay, or `None` when the station has none.
///
/// On a tie the later departure wins.
pub fn departure_with_most_delay(station: &Station) -> Option<&Departure> {
    station.departures.iter().reduce(|prev, cur| {
        if prev.delay_in_minutes > cur.delay_in_minutes {
            prev
        } else {
            cur
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::departures::types::Coordinates;

    fn departure(label: &str, destination: &str, delay: i64) -> Departure {
        Departure {
            planned_departure_time: 0,
            realtime_departure_time: 0,
            label: label.to_string(),
            delay_in_minutes: delay,
            destination: destination.to_string(),
        }
    }

    fn station(name: &str, delays: &[i64]) -> Station {
        let departures = delays
            .iter()
            .map(|d| departure("U2", "Messestadt Ost", *d))
            .collect();
        Station::new(name, Coordinates::default(), departures)
    }

    #[test]
    fn test_station_with_most_delay_empty() {
        assert!(station_with_most_delay(&StationList::new()).is_none());
    }

    #[test]
    fn test_station_with_most_delay_picks_max() {
        let mut stations = StationList::new();
        stations.insert("1".into(), station("Hauptbahnhof", &[1, 1]));
        stations.insert("2".into(), station("Sendlinger Tor", &[6, 2]));
        stations.insert("3".into(), station("Odeonsplatz", &[0]));

        let max = station_with_most_delay(&stations).unwrap();
        assert_eq!(max.friendly_name, "Sendlinger Tor");
    }

    #[test]
    fn test_station_tie_goes_to_later() {
        let mut stations = StationList::new();
        stations.insert("1".into(), station("First", &[3]));
        stations.insert("2".into(), station("Second", &[3]));

        assert_eq!(station_with_most_delay(&stations).unwrap().friendly_name, "Second");
    }

    #[test]
    fn test_departure_with_most_delay() {
        let s = Station::new(
            "Giselastraße",
            Coordinates::default(),
            vec![
                departure("U3", "Fürstenried West", 2),
                departure("U6", "Garching", 7),
                departure("U6", "Klinikum", 7),
            ],
        );

        let max = departure_with_most_delay(&s).unwrap();
        assert_eq!(max.destination, "Klinikum");
    }

    #[test]
    fn test_departure_with_most_delay_empty() {
        let s = Station::new("Empty", Coordinates::default(), vec![]);
        assert!(departure_with_most_delay(&s).is_none());
    }
}
