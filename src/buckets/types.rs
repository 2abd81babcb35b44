//! Data types used by the reconciliation pipeline.

use serde::{Deserialize, Serialize};

/// A single delay measurement reported for one time interval.
///
/// `bucket_label` is a local date-time without a time zone, e.g.
/// `"2024-01-01 05:00:00"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(rename = "bucket")]
    pub bucket_label: String,
    pub avg_delay: f64,
    pub num_departures: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_threshold: Option<f64>,
}

impl Observation {
    pub fn new(bucket_label: &str, avg_delay: f64, num_departures: i64) -> Self {
        Self {
            bucket_label: bucket_label.to_string(),
            avg_delay,
            num_departures,
            percentage_threshold: None,
        }
    }

    pub fn with_percentage_threshold(mut self, pct: f64) -> Self {
        self.percentage_threshold = Some(pct);
        self
    }
}

/// One fixed-width slot of the reconciled series.
///
/// The value fields are `None` when no observation exists for the slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub timestamp: i64,
    pub avg_delay: Option<f64>,
    pub num_departures: Option<i64>,
    pub percentage_threshold: Option<f64>,
}

impl Bucket {
    /// Placeholder for an interval without data.
    pub fn empty(timestamp: i64) -> Self {
        Self {
            timestamp,
            avg_delay: None,
            num_departures: None,
            percentage_threshold: None,
        }
    }

    pub fn from_observation(timestamp: i64, obs: &Observation) -> Self {
        Self {
            timestamp,
            avg_delay: Some(obs.avg_delay),
            num_departures: Some(obs.num_departures),
            percentage_threshold: obs.percentage_threshold,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_delay.is_none() && self.num_departures.is_none()
    }
}
