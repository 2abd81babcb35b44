use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::departures::helper::station_with_most_delay;
use crate::departures::types::StationList;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Network-wide average: the mean of every station's average delay.
pub fn global_delay(stations: &StationList) -> f64 {
    let avgs: Vec<f64> = stations.values().map(|s| s.avg_delay).collect();
    mean(&avgs)
}

/// One snapshot of the whole station list, written as a CSV row.
#[derive(Debug, Default, Serialize)]
pub struct DelayStats {
    pub timestamp: DateTime<Utc>,
    pub stations: usize,
    pub departures: usize,

    // departures by delay
    pub on_time: usize,
    pub delayed: usize,
    pub heavily_delayed: usize,

    pub global_delay: f64,
    pub max_delay: i64,
    pub most_delayed_station: Option<String>,
}

impl DelayStats {
    pub fn from_stations(stations: &StationList) -> Self {
        let mut s = DelayStats {
            timestamp: Utc::now(),
            stations: stations.len(),
            global_delay: global_delay(stations),
            most_delayed_station: station_with_most_delay(stations)
                .map(|st| st.friendly_name.clone()),
            ..Default::default()
        };

        for station in stations.values() {
            for d in &station.departures {
                s.departures += 1;
                s.max_delay = s.max_delay.max(d.delay_in_minutes);

                match d.delay_in_minutes {
                    m if m <= 0 => s.on_time += 1,
                    m if m <= 5 => s.delayed += 1,
                    _ => s.heavily_delayed += 1,
                }
            }
        }

        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    /// Share of departures running late, in percent.
    pub fn delayed_pct(&self) -> f64 {
        Self::pct(self.delayed + self.heavily_delayed, self.departures)
    }
}
