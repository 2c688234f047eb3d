//! Per-edge line and colour metadata.

use std::collections::HashMap;

use crate::domain::{ConnectionType, LineColour, LineId, StationId};

/// What a route shows for one hop between adjacent stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeInfo {
    /// Line ridden over this hop; `None` for interchanges.
    pub line: Option<LineId>,

    /// Colour used to draw the hop.
    pub colour: LineColour,

    /// Ride or interchange.
    pub connection_type: ConnectionType,
}

impl EdgeInfo {
    /// A ride along `line`, drawn in `colour`.
    pub fn ride(line: Option<LineId>, colour: LineColour) -> Self {
        Self {
            line,
            colour,
            connection_type: ConnectionType::Ride,
        }
    }

    /// An interchange: no line, neutral colour.
    pub fn interchange() -> Self {
        Self {
            line: None,
            colour: LineColour::NEUTRAL,
            connection_type: ConnectionType::Interchange,
        }
    }
}

/// Edge metadata keyed by ordered station pair.
///
/// Entries are stored for both directions. The first entry recorded for a
/// pair wins; later entries for the same pair are ignored.
#[derive(Debug, Clone, Default)]
pub struct EdgeInfoMap {
    edges: HashMap<(StationId, StationId), EdgeInfo>,
}

impl EdgeInfoMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metadata for the edge between `a` and `b`, in both directions,
    /// unless the pair already has an entry.
    pub fn insert(&mut self, a: &StationId, b: &StationId, info: EdgeInfo) {
        self.edges
            .entry((b.clone(), a.clone()))
            .or_insert_with(|| info.clone());
        self.edges.entry((a.clone(), b.clone())).or_insert(info);
    }

    /// Metadata for the hop from `from` to `to`, if recorded.
    pub fn get(&self, from: &StationId, to: &StationId) -> Option<&EdgeInfo> {
        self.edges.get(&(from.clone(), to.clone()))
    }

    /// Metadata for the hop, falling back to an interchange when unknown.
    pub fn get_or_interchange(&self, from: &StationId, to: &StationId) -> EdgeInfo {
        self.get(from, to)
            .cloned()
            .unwrap_or_else(EdgeInfo::interchange)
    }
}
