//! Human-readable formatting for delays and departure times.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// Formats a delay given in (fractional) minutes, e.g. `"5m 30s"`.
///
/// Seconds are rounded; a value that rounds up to a full minute carries over.
pub fn format_delay(minutes: f64) -> String {
    let mut mins = minutes.floor() as i64;
    let mut secs = ((minutes - minutes.floor()) * 60.0).round() as i64;
    if secs == 60 {
        mins += 1;
        secs = 0;
    }

    match (mins, secs) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m {s}s"),
    }
}

/// Time left until a departure, relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// At least a minute away, rounded to whole minutes.
    Minutes(i64),
    /// Less than a minute away.
    Seconds(i64),
    Departed,
}

impl RelativeTime {
    /// Both arguments are epoch milliseconds.
    pub fn between(timestamp: i64, now: i64) -> Self {
        // whole seconds, truncated toward zero
        let diff_secs = (timestamp - now) / 1000;

        if diff_secs >= 60 {
            RelativeTime::Minutes((diff_secs as f64 / 60.0).round() as i64)
        } else if diff_secs < 0 {
            RelativeTime::Departed
        } else {
            RelativeTime::Seconds(diff_secs)
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::Minutes(m) => write!(f, "{m} Min"),
            RelativeTime::Seconds(s) => write!(f, "{s} s"),
            RelativeTime::Departed => write!(f, "Departed"),
        }
    }
}

/// Shorthand for `RelativeTime::between(timestamp, now).to_string()`.
pub fn relative_time(timestamp: i64, now: i64) -> String {
    RelativeTime::between(timestamp, now).to_string()
}

/// Formats an epoch-millisecond timestamp as `HH:mm` in `tz`.
///
/// Out-of-range timestamps render as `--:--`.
pub fn format_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp_millis(timestamp) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
