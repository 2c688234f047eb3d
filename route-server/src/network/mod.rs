//! Transit network loading and representation.
//!
//! A network is built from a snapshot of the line, station, membership and
//! connection records. Building produces the station adjacency graph that
//! route search runs over, plus the per-hop metadata used to label routes.

mod build;
mod cache;
mod edges;
mod error;
mod graph;
mod snapshot;
mod source;

pub use build::{Connection, LineInfo, LineMembership, Network, StationInfo};
pub use cache::{NetworkCache, NetworkCacheConfig};
pub use edges::{EdgeInfo, EdgeInfoMap};
pub use error::NetworkError;
pub use graph::StationGraph;
pub use snapshot::{
    ConnectionRecord, LineRecord, NetworkSnapshot, StationLineRecord, StationRecord,
};
pub use source::{JsonFileSource, MemorySource, NetworkSource};
