use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::departures::types::Coordinates;

/// Static facts about one station.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    pub friendly_name: String,
    pub coordinates: Coordinates,
}

/// Maps station ids to display names and positions.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "de:09162:6": {
///     "friendlyName": "Hauptbahnhof",
///     "coordinates": { "latitude": "48.1402", "longitude": "11.5583" }
///   }
/// }
/// ```
#[derive(Debug, Default)]
pub struct StationDirectory {
    entries: HashMap<String, StationInfo>,
}

impl StationDirectory {
    /// Loads the directory from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read station directory '{path}'"))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, StationInfo> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn get(&self, station_id: &str) -> Option<&StationInfo> {
        self.entries.get(station_id)
    }

    /// Friendly name, or an empty string for unknown stations.
    pub fn friendly_name(&self, station_id: &str) -> &str {
        self.get(station_id)
            .map(|info| info.friendly_name.as_str())
            .unwrap_or("")
    }

    /// Coordinates, or empty ones for unknown stations.
    pub fn coordinates(&self, station_id: &str) -> Coordinates {
        self.get(station_id)
            .map(|info| info.coordinates.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
