//! Labelling routes with line and colour information.

use crate::domain::StationId;
use crate::network::{EdgeInfo, EdgeInfoMap};

/// One stop along an annotated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStop {
    pub station: StationId,

    /// How this stop was reached from the previous one.
    /// `None` for the first stop.
    pub arrived_by: Option<EdgeInfo>,
}

/// A route with per-hop line metadata attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRoute {
    stops: Vec<RouteStop>,
}

impl AnnotatedRoute {
    /// All stops, origin first.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Number of hops (edges) in the route.
    pub fn distance(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Station ids in travel order.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.stops.iter().map(|stop| &stop.station)
    }
}

/// Attach edge metadata to each hop of `route`.
///
/// Hops with no recorded metadata are treated as interchanges.
pub fn annotate_route(route: &[StationId], edges: &EdgeInfoMap) -> AnnotatedRoute {
    let stops = route
        .iter()
        .enumerate()
        .map(|(idx, station)| RouteStop {
            station: station.clone(),
            arrived_by: idx
                .checked_sub(1)
                .map(|prev| edges.get_or_interchange(&route[prev], station)),
        })
        .collect();

    AnnotatedRoute { stops }
}
