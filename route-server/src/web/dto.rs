//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Connection, EdgeInfo, LineMembership, Network, StationInfo};
use crate::planner::{AnnotatedRoute, RouteResult, RouteStop};

/// Query for the shortest-path endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ShortestPathQuery {
    /// Origin station id (any case, may be padded)
    #[serde(default)]
    pub from: String,

    /// Destination station id
    #[serde(default)]
    pub to: String,

    /// Optional number of routes; negative values mean none
    pub k: Option<i64>,
}

/// Response for the shortest-path endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathResponse {
    /// Normalized origin id
    pub from: String,

    /// Normalized destination id
    pub to: String,

    /// Number of routes returned
    pub num_paths: usize,

    /// Hop count of the first route; null when none found
    pub distance: Option<usize>,

    /// Routes, each a list of stops
    pub paths: Vec<Vec<PathStopResult>>,
}

impl ShortestPathResponse {
    pub fn from_result(result: &RouteResult) -> Self {
        let paths: Vec<Vec<PathStopResult>> =
            result.routes.iter().map(path_stops).collect();

        Self {
            from: result.from.to_string(),
            to: result.to.to_string(),
            num_paths: paths.len(),
            distance: result.distance(),
            paths,
        }
    }
}

fn path_stops(route: &AnnotatedRoute) -> Vec<PathStopResult> {
    route.stops().iter().map(PathStopResult::from_stop).collect()
}

/// One stop on a returned route.
#[derive(Debug, Serialize)]
pub struct PathStopResult {
    #[serde(rename = "stationID")]
    pub station_id: String,

    /// Line ridden to reach this stop; null for the origin and interchanges
    #[serde(rename = "lineID")]
    pub line_id: Option<String>,

    /// Colour of the hop into this stop; null for the origin
    #[serde(rename = "lineColourHex")]
    pub line_colour_hex: Option<String>,

    /// "ride" or "interchange"; omitted for the origin
    #[serde(rename = "connectionType", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
}

impl PathStopResult {
    pub fn from_stop(stop: &RouteStop) -> Self {
        let edge: Option<&EdgeInfo> = stop.arrived_by.as_ref();
        Self {
            station_id: stop.station.to_string(),
            line_id: edge.and_then(|e| e.line.as_ref()).map(|l| l.to_string()),
            line_colour_hex: edge.map(|e| e.colour.to_string()),
            connection_type: edge.map(|e| e.connection_type.to_string()),
        }
    }
}

/// An active station row, as listed by `/stations/basic`.
#[derive(Debug, Serialize)]
pub struct BasicStationResult {
    #[serde(rename = "stationid")]
    pub station_id: String,

    #[serde(rename = "stationname")]
    pub station_name: String,

    #[serde(rename = "stationlatitude")]
    pub latitude: Option<f64>,

    #[serde(rename = "stationlongitude")]
    pub longitude: Option<f64>,

    #[serde(rename = "isactive")]
    pub is_active: bool,
}

impl BasicStationResult {
    pub fn from_station(station: &StationInfo) -> Self {
        Self {
            station_id: station.id.to_string(),
            station_name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            is_active: station.active,
        }
    }
}

/// A station joined with one of its lines, as listed by `/stations`.
#[derive(Debug, Serialize)]
pub struct StationResult {
    #[serde(rename = "stationid")]
    pub station_id: String,

    #[serde(rename = "stationname")]
    pub station_name: String,

    #[serde(rename = "stationlatitude")]
    pub latitude: Option<f64>,

    #[serde(rename = "stationlongitude")]
    pub longitude: Option<f64>,

    #[serde(rename = "isactive")]
    pub is_active: bool,

    #[serde(rename = "lineid")]
    pub line_id: String,

    #[serde(rename = "sequenceonline")]
    pub sequence_on_line: u32,

    #[serde(rename = "linename")]
    pub line_name: String,

    #[serde(rename = "linecolourhex")]
    pub line_colour_hex: String,
}

impl StationResult {
    /// Join a membership with its station and line data.
    ///
    /// Returns `None` unless both the station and the line are known.
    pub fn from_membership(membership: &LineMembership, network: &Network) -> Option<Self> {
        let station = network.station(&membership.station)?;
        let line = network.line(&membership.line)?;

        Some(Self {
            station_id: station.id.to_string(),
            station_name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            is_active: station.active,
            line_id: line.id.to_string(),
            sequence_on_line: membership.sequence,
            line_name: line.name.clone(),
            line_colour_hex: line.colour.to_string(),
        })
    }
}

/// A connection row, as listed by `/routes/{from}/{to}`.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    #[serde(rename = "fromstationid")]
    pub from_station_id: String,

    #[serde(rename = "tostationid")]
    pub to_station_id: String,

    #[serde(rename = "connectiontype")]
    pub connection_type: String,
}

impl ConnectionResult {
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            from_station_id: connection.from.to_string(),
            to_station_id: connection.to.to_string(),
            connection_type: connection.connection_type.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
