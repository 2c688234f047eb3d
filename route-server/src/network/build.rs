//! Building a validated network from a raw snapshot.

use std::collections::{BTreeMap, HashMap};

use tracing::{info, warn};

use crate::domain::{ConnectionType, LineColour, LineId, StationId};

use super::edges::{EdgeInfo, EdgeInfoMap};
use super::graph::StationGraph;
use super::snapshot::NetworkSnapshot;

/// A validated connection between two stations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub connection_type: ConnectionType,
}

/// A station's descriptive data.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub id: StationId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub active: bool,
}

/// A line's descriptive data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub id: LineId,
    pub name: String,
    pub colour: LineColour,
}

/// A station's position on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMembership {
    pub station: StationId,
    pub line: LineId,
    pub sequence: u32,
}

/// The transit network: adjacency, edge metadata and station registry.
///
/// Built once from a [`NetworkSnapshot`] and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: StationGraph,
    edges: EdgeInfoMap,
    connections: Vec<Connection>,
    stations: HashMap<StationId, StationInfo>,
    lines: BTreeMap<LineId, LineInfo>,
    memberships: Vec<LineMembership>,
}

impl Network {
    /// Build a network from a snapshot.
    ///
    /// Records with invalid identifiers or unknown connection types are
    /// skipped with a warning. For duplicated stations and lines the first
    /// record wins. Connections are sorted by `(from, to)` before being added
    /// to the graph, which fixes the neighbour order used by route search.
    pub fn build(snapshot: NetworkSnapshot) -> Self {
        let mut skipped = 0usize;

        let mut lines = BTreeMap::new();
        for record in snapshot.lines {
            let Ok(id) = LineId::parse_normalized(&record.line_id) else {
                warn!(line_id = %record.line_id, "skipping line with invalid id");
                skipped += 1;
                continue;
            };
            let colour = match record.line_colour_hex.as_deref().map(LineColour::parse) {
                Some(Ok(colour)) => colour,
                Some(Err(e)) => {
                    warn!(line = %id, error = %e, "invalid line colour, using neutral");
                    LineColour::NEUTRAL
                }
                None => LineColour::NEUTRAL,
            };
            lines.entry(id.clone()).or_insert(LineInfo {
                id,
                name: record.line_name,
                colour,
            });
        }

        let mut stations = HashMap::new();
        for record in snapshot.stations {
            let Ok(id) = StationId::parse_normalized(&record.station_id) else {
                warn!(station_id = %record.station_id, "skipping station with invalid id");
                skipped += 1;
                continue;
            };
            stations.entry(id.clone()).or_insert(StationInfo {
                id,
                name: record.station_name,
                latitude: record.latitude,
                longitude: record.longitude,
                active: record.is_active,
            });
        }

        let mut memberships = Vec::new();
        let mut lines_by_station: HashMap<StationId, Vec<LineId>> = HashMap::new();
        for record in snapshot.station_lines {
            let (Ok(station), Ok(line)) = (
                StationId::parse_normalized(&record.station_id),
                LineId::parse_normalized(&record.line_id),
            ) else {
                warn!(
                    station_id = %record.station_id,
                    line_id = %record.line_id,
                    "skipping station/line membership with invalid id"
                );
                skipped += 1;
                continue;
            };
            let station_lines = lines_by_station.entry(station.clone()).or_default();
            if !station_lines.contains(&line) {
                station_lines.push(line.clone());
            }
            memberships.push(LineMembership {
                station,
                line,
                sequence: record.sequence_on_line,
            });
        }
        memberships.sort_by(|a, b| (&a.line, a.sequence).cmp(&(&b.line, b.sequence)));

        let mut connections = Vec::with_capacity(snapshot.connections.len());
        for record in snapshot.connections {
            let parsed = (
                StationId::parse_normalized(&record.from_station_id),
                StationId::parse_normalized(&record.to_station_id),
                record.connection_type.parse::<ConnectionType>(),
            );
            match parsed {
                (Ok(from), Ok(to), Ok(connection_type)) => connections.push(Connection {
                    from,
                    to,
                    connection_type,
                }),
                (from, to, kind) => {
                    let error = [from.err(), to.err(), kind.err()]
                        .into_iter()
                        .flatten()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("; ");
                    warn!(
                        from = %record.from_station_id,
                        to = %record.to_station_id,
                        error = %error,
                        "skipping connection"
                    );
                    skipped += 1;
                }
            }
        }
        connections.sort();
        connections.dedup();

        let mut graph = StationGraph::new();
        let mut edges = EdgeInfoMap::new();
        for connection in &connections {
            graph.connect(&connection.from, &connection.to);
            let info = edge_info(connection, &lines_by_station, &lines);
            edges.insert(&connection.from, &connection.to, info);
        }

        if graph.is_empty() {
            warn!("network has no usable connections");
        }

        info!(
            stations = graph.station_count(),
            connections = connections.len(),
            lines = lines.len(),
            skipped,
            "network built"
        );

        Self {
            graph,
            edges,
            connections,
            stations,
            lines,
            memberships,
        }
    }

    /// The adjacency graph used for route search.
    pub fn graph(&self) -> &StationGraph {
        &self.graph
    }

    /// Per-hop line and colour metadata.
    pub fn edges(&self) -> &EdgeInfoMap {
        &self.edges
    }

    /// All connections, sorted by `(from, to)`.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Connections recorded from `from` to `to`, in that direction only.
    pub fn connections_between<'a>(
        &'a self,
        from: &'a StationId,
        to: &'a StationId,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .iter()
            .filter(move |c| &c.from == from && &c.to == to)
    }

    /// Look up a station's descriptive data.
    pub fn station(&self, id: &StationId) -> Option<&StationInfo> {
        self.stations.get(id)
    }

    /// Look up a line's descriptive data.
    pub fn line(&self, id: &LineId) -> Option<&LineInfo> {
        self.lines.get(id)
    }

    /// Line memberships of active stations, ordered by line then sequence.
    pub fn active_memberships(&self) -> impl Iterator<Item = &LineMembership> {
        self.memberships.iter().filter(|m| {
            self.stations
                .get(&m.station)
                .is_some_and(|station| station.active)
        })
    }

    /// Active stations, ordered by id.
    pub fn active_stations(&self) -> Vec<&StationInfo> {
        let mut stations: Vec<&StationInfo> =
            self.stations.values().filter(|s| s.active).collect();
        stations.sort_by(|a, b| a.id.cmp(&b.id));
        stations
    }
}

/// Work out what a connection should be drawn as.
///
/// Rides take the line both stations share, preferring the lowest line id.
/// Without a shared line, the from-station's first line is used.
fn edge_info(
    connection: &Connection,
    lines_by_station: &HashMap<StationId, Vec<LineId>>,
    lines: &BTreeMap<LineId, LineInfo>,
) -> EdgeInfo {
    if connection.connection_type.is_interchange() {
        return EdgeInfo::interchange();
    }

    let from_lines = lines_by_station
        .get(&connection.from)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let to_lines = lines_by_station
        .get(&connection.to)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let line = from_lines
        .iter()
        .filter(|line| to_lines.contains(line))
        .min()
        .or_else(|| from_lines.first())
        .cloned();

    let colour = line
        .as_ref()
        .and_then(|id| lines.get(id))
        .map_or(LineColour::NEUTRAL, |info| info.colour);

    EdgeInfo::ride(line, colour)
}
