pub mod buckets;
pub mod config;
pub mod departures;
pub mod error;
pub mod format;
pub mod output;
pub mod stats;

pub use error::{Error, Result};
