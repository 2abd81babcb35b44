use chrono::TimeZone;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::buckets::label::parse_bucket_label;
use crate::buckets::types::{Bucket, Observation};
use crate::buckets::window::Window;
use crate::error::{Error, Result};

const MINUTE_MS: i64 = 60 * 1000;

/// Converts an interval in minutes to milliseconds, rejecting zero.
pub fn interval_millis(interval_minutes: u32) -> Result<i64> {
    if interval_minutes == 0 {
        return Err(Error::ZeroInterval);
    }
    Ok(i64::from(interval_minutes) * MINUTE_MS)
}

/// Timestamps from `window.start()` in steps of `interval_minutes`, up to and
/// including the last one that does not pass `window.end()`.
pub fn generate_timestamps(window: Window, interval_minutes: u32) -> Result<Vec<i64>> {
    let interval = interval_millis(interval_minutes)?;
    let count = window.slot_count(interval);

    Ok((0..count as i64)
        .map(|i| window.start() + i * interval)
        .collect())
}

/// Indexes observations by parsed timestamp. Later duplicates overwrite
/// earlier ones; unparseable labels are dropped.
pub fn index_observations<'a, Tz: TimeZone>(
    observations: &'a [Observation],
    tz: &Tz,
) -> HashMap<i64, &'a Observation> {
    let mut lookup = HashMap::with_capacity(observations.len());

    for obs in observations {
        match parse_bucket_label(&obs.bucket_label, tz) {
            Ok(ts) => {
                lookup.insert(ts, obs);
            }
            Err(e) => {
                warn!(label = %obs.bucket_label, error = %e, "Dropping observation");
            }
        }
    }

    lookup
}

/// Merges sparse observations into a dense, gap-free bucket series covering
/// `window`.
///
/// Slots without a matching observation become empty buckets. The output has
/// exactly `(end - start) / interval + 1` entries in increasing order.
pub fn reconcile<Tz: TimeZone>(
    observations: &[Observation],
    window: Window,
    interval_minutes: u32,
    tz: &Tz,
) -> Result<Vec<Bucket>> {
    let timestamps = generate_timestamps(window, interval_minutes)?;
    let lookup = index_observations(observations, tz);

    let buckets: Vec<Bucket> = timestamps
        .into_iter()
        .map(|ts| match lookup.get(&ts) {
            Some(obs) => Bucket::from_observation(ts, obs),
            None => Bucket::empty(ts),
        })
        .collect();

    debug!(
        observations = observations.len(),
        indexed = lookup.len(),
        buckets = buckets.len(),
        "Reconciled bucket series"
    );

    Ok(buckets)
}
