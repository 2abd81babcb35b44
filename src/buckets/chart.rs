//! Chart-ready view of a reconciled day: the step-area series, its y-axis
//! setup and the hover text for each slot.

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt;

use crate::buckets::reconcile::reconcile;
use crate::buckets::types::{Bucket, Observation};
use crate::buckets::window::Window;
use crate::error::Result;
use crate::format::format_time;

/// Which bucket field the chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    AvgDelay,
    PercentageThreshold,
}

impl Measure {
    pub fn from_show_percentage(show_percentage: bool) -> Self {
        if show_percentage {
            Measure::PercentageThreshold
        } else {
            Measure::AvgDelay
        }
    }

    /// Fixed y-axis range: percent of delayed departures, or minutes.
    pub fn y_domain(self) -> (f64, f64) {
        match self {
            Measure::PercentageThreshold => (0.0, 100.0),
            Measure::AvgDelay => (0.0, 10.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Measure::PercentageThreshold => "% delayed",
            Measure::AvgDelay => "Avg Delay",
        }
    }

    pub fn value(self, bucket: &Bucket) -> Option<f64> {
        match self {
            Measure::PercentageThreshold => bucket.percentage_threshold,
            Measure::AvgDelay => bucket.avg_delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Left,
    Right,
}

/// A single station's delay series for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayChart {
    pub buckets: Vec<Bucket>,
    pub y_domain: (f64, f64),
    pub orientation: Orientation,
    pub measure: Measure,
}

impl DelayChart {
    pub fn for_day<Tz: TimeZone>(
        observations: &[Observation],
        day: NaiveDate,
        interval_minutes: u32,
        orientation: Orientation,
        measure: Measure,
        tz: &Tz,
    ) -> Result<Self> {
        let window = Window::day(day, tz)?;
        let buckets = reconcile(observations, window, interval_minutes, tz)?;

        Ok(Self {
            buckets,
            y_domain: measure.y_domain(),
            orientation,
            measure,
        })
    }

    /// Plotted values in bucket order; `None` renders as a gap.
    pub fn series(&self) -> Vec<(i64, Option<f64>)> {
        self.buckets
            .iter()
            .map(|b| (b.timestamp, self.measure.value(b)))
            .collect()
    }

    /// Hover text for the bucket at `index`, or `None` for gaps.
    pub fn tooltip<Tz: TimeZone>(&self, index: usize, tz: &Tz) -> Option<Vec<String>>
    where
        Tz::Offset: fmt::Display,
    {
        let bucket = self.buckets.get(index)?;
        let value = self.measure.value(bucket)?;
        let departures = bucket
            .num_departures
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        Some(vec![
            format!("Time: {}", format_time(bucket.timestamp, tz)),
            format!("# Departures: {departures}"),
            format!("{}: {value:.2}", self.measure.label()),
        ])
    }

    /// Hover text for every non-gap bucket, keyed by bucket timestamp.
    pub fn tooltips<Tz: TimeZone>(&self, tz: &Tz) -> Vec<(i64, Vec<String>)>
    where
        Tz::Offset: fmt::Display,
    {
        (0..self.buckets.len())
            .filter_map(|i| Some((self.buckets[i].timestamp, self.tooltip(i, tz)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_y_domain_per_measure() {
        assert_eq!(Measure::from_show_percentage(true).y_domain(), (0.0, 100.0));
        assert_eq!(Measure::from_show_percentage(false).y_domain(), (0.0, 10.0));
    }

    #[test]
    fn test_tooltip_avg_delay() {
        let obs = vec![Observation::new("2024-01-01 05:00:00", 3.5, 12)];
        let chart =
            DelayChart::for_day(&obs, day(), 60, Orientation::Right, Measure::AvgDelay, &Utc)
                .unwrap();

        assert_eq!(chart.orientation, Orientation::Right);
        assert_eq!(
            chart.tooltip(5, &Utc).unwrap(),
            vec!["Time: 05:00", "# Departures: 12", "Avg Delay: 3.50"]
        );
        assert_eq!(chart.tooltip(4, &Utc), None);
        assert_eq!(chart.tooltip(99, &Utc), None);
    }

    #[test]
    fn test_percentage_series_uses_threshold_field() {
        let obs = vec![
            Observation::new("2024-01-01 01:00:00", 3.5, 12).with_percentage_threshold(25.0),
            Observation::new("2024-01-01 02:00:00", 1.0, 4),
        ];
        let chart = DelayChart::for_day(
            &obs,
            day(),
            60,
            Orientation::Left,
            Measure::PercentageThreshold,
            &Utc,
        )
        .unwrap();

        let series = chart.series();
        assert_eq!(series.len(), 25);
        assert_eq!(series[1].1, Some(25.0));
        assert_eq!(series[2].1, None);
        assert_eq!(chart.tooltip(1, &Utc).unwrap()[2], "% delayed: 25.00");
    }

    #[test]
    fn test_tooltips_skip_gaps() {
        let obs = vec![
            Observation::new("2024-01-01 05:00:00", 3.5, 12),
            Observation::new("2024-01-01 18:00:00", 0.25, 40),
        ];
        let chart =
            DelayChart::for_day(&obs, day(), 60, Orientation::Left, Measure::AvgDelay, &Utc)
                .unwrap();

        let tips = chart.tooltips(&Utc);

        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].0, chart.buckets[5].timestamp);
        assert_eq!(tips[1].1, vec!["Time: 18:00", "# Departures: 40", "Avg Delay: 0.25"]);
    }
}
