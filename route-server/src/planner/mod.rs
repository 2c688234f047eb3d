//! Route planner using BFS search.
//!
//! This module implements the core route finding algorithm that answers:
//! "what are the fewest-stop ways to get from this station to that one?"
//!
//! The search returns the shortest route plus any alternatives of exactly
//! the same hop count, up to a requested number.

mod annotate;
mod bfs;
mod config;
mod search;

pub use annotate::{AnnotatedRoute, RouteStop, annotate_route};
pub use bfs::{Adjacency, find_k_shortest_routes};
pub use config::RouteConfig;
pub use search::{RouteFinder, RouteRequest, RouteResult, SearchError, search_with_timeout};
