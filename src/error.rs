//! Error type for the bucket and window computations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("bucket interval must be at least one minute")]
    ZeroInterval,

    #[error("window start {start} is after window end {end}")]
    InvertedWindow { start: i64, end: i64 },

    #[error("window {start}..={end} spans more milliseconds than fit in an i64")]
    WindowTooWide { start: i64, end: i64 },

    #[error("unparseable bucket label: {0:?}")]
    InvalidLabel(String),

    #[error("local time {0} does not exist in the target time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

pub type Result<T> = std::result::Result<T, Error>;
