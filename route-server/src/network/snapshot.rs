//! Raw network snapshot records.
//!
//! These mirror the `line`, `station`, `station_line` and `connection`
//! tables. Identifiers are kept as raw strings here; they are normalized
//! and validated when the snapshot is built into a [`Network`](super::Network).

use serde::{Deserialize, Serialize};

/// Everything needed to build a network, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub lines: Vec<LineRecord>,

    #[serde(default)]
    pub stations: Vec<StationRecord>,

    #[serde(default)]
    pub station_lines: Vec<StationLineRecord>,

    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

/// A transit line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub line_id: String,
    pub line_name: String,
    #[serde(default)]
    pub line_colour_hex: Option<String>,
}

/// A station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_id: String,
    pub station_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Membership of a station in a line, with its position along the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLineRecord {
    pub station_id: String,
    pub line_id: String,
    pub sequence_on_line: u32,
}

/// A link between two adjacent stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from_station_id: String,
    pub to_station_id: String,
    pub connection_type: String,
}

fn default_active() -> bool {
    true
}
