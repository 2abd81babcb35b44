//! Output formatting and persistence for buckets, table rows and stats.
//!
//! Supports pretty-printing, JSON serialization, and CSV writes.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use csv::WriterBuilder;
use std::fmt::Debug;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends a record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record<T: Serialize>(path: &str, record: &T) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Writes `records` to a fresh CSV file at `path`, replacing any existing one.
pub fn write_records<T: Serialize>(path: &str, records: &[T]) -> Result<()> {
    debug!(path, rows = records.len(), "Writing CSV file");

    let mut writer = WriterBuilder::new().from_writer(File::create(path)?);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
