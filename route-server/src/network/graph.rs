//! Station adjacency graph.

use std::collections::HashMap;

use crate::domain::StationId;
use crate::planner::Adjacency;

/// Undirected adjacency between stations.
///
/// Connections are symmetric: linking A to B also links B to A. Each
/// neighbour list keeps insertion order and holds no duplicates, so the
/// order in which connections are added decides the order routes are
/// explored in.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    adjacency: HashMap<StationId, Vec<StationId>>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a station has an entry, even with no neighbours.
    pub fn add_station(&mut self, station: StationId) {
        self.adjacency.entry(station).or_default();
    }

    /// Link two stations in both directions.
    ///
    /// A self-link registers the station but adds no edge.
    pub fn connect(&mut self, a: &StationId, b: &StationId) {
        if a == b {
            self.add_station(a.clone());
            return;
        }
        push_unique(self.adjacency.entry(a.clone()).or_default(), b);
        push_unique(self.adjacency.entry(b.clone()).or_default(), a);
    }

    /// Neighbours of a station in insertion order.
    ///
    /// Returns an empty slice for unknown stations.
    pub fn neighbours_of(&self, station: &StationId) -> &[StationId] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check if a station is present.
    pub fn contains_station(&self, station: &StationId) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn push_unique(list: &mut Vec<StationId>, station: &StationId) {
    if !list.contains(station) {
        list.push(station.clone());
    }
}

impl Adjacency for StationGraph {
    type Node = StationId;

    fn neighbours(&self, node: &StationId) -> Option<&[StationId]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }
}
