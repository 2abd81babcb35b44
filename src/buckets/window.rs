use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::buckets::label::local_to_millis;
use crate::error::{Error, Result};

/// Inclusive `[start, end]` span in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: i64,
    end: i64,
}

impl Window {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvertedWindow { start, end });
        }
        if end.checked_sub(start).is_none() {
            return Err(Error::WindowTooWide { start, end });
        }
        Ok(Self { start, end })
    }

    /// Local midnight of `date` up to local midnight of the next day.
    ///
    /// Spans 23 or 25 hours on DST transition days. Where the clocks skip
    /// midnight, the bound moves to the first instant after the gap.
    pub fn day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<Self> {
        let next = date.succ_opt().unwrap_or(date);
        let start = first_valid_millis(date.and_time(NaiveTime::MIN), tz)?;
        let end = first_valid_millis(next.and_time(NaiveTime::MIN), tz)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of slots of `interval_ms` width, counting both bounds.
    pub fn slot_count(&self, interval_ms: i64) -> usize {
        // span is checked in `new`
        ((self.end - self.start) / interval_ms) as usize + 1
    }
}

/// Resolves `naive`, walking forward a minute at a time (at most a day) while
/// it falls in a DST gap.
fn first_valid_millis<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Result<i64> {
    for minutes in 0..=24 * 60 {
        let Some(candidate) = naive.checked_add_signed(Duration::minutes(minutes)) else {
            break;
        };
        match local_to_millis(candidate, tz) {
            Err(Error::NonexistentLocalTime(_)) => continue,
            resolved => return resolved,
        }
    }
    Err(Error::NonexistentLocalTime(naive))
}
