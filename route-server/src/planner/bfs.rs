//! K-shortest-routes breadth-first search.
//!
//! Finds up to `k` simple paths of minimal hop count between two stations.
//! The first route to reach the goal fixes the shortest length; after that
//! only routes of exactly that length are accepted, and anything longer is
//! dropped from the queue without being expanded.
//!
//! Partial paths are kept in an arena of nodes with parent back-references,
//! so extending a path is a single push. Full station sequences are only
//! materialised when a path reaches the goal.

use std::collections::hash_map::HashMap;
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use tracing::{debug, trace};

/// Read-only adjacency lookup used by the route search.
///
/// A node is considered part of the graph exactly when `neighbours` returns
/// `Some`, even if its neighbour list is empty.
pub trait Adjacency {
    type Node: Clone + Eq + Hash + Debug;

    /// Neighbours of `node` in traversal order, or `None` if the node is unknown.
    fn neighbours(&self, node: &Self::Node) -> Option<&[Self::Node]>;

    /// Returns true if the node has an entry in the graph.
    fn contains(&self, node: &Self::Node) -> bool {
        self.neighbours(node).is_some()
    }
}

impl<N, S> Adjacency for HashMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash + Debug,
    S: BuildHasher,
{
    type Node = N;

    fn neighbours(&self, node: &N) -> Option<&[N]> {
        self.get(node).map(Vec::as_slice)
    }
}

/// One step of a partial path.
struct PathNode<N> {
    station: N,
    parent: Option<usize>,
    /// Number of stations from the start up to and including this one.
    len: usize,
}

/// Arena holding every partial path created during a search.
struct PathArena<N> {
    nodes: Vec<PathNode<N>>,
}

impl<N: Clone + Eq> PathArena<N> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, station: N, parent: Option<usize>) -> usize {
        let len = parent.map_or(1, |p| self.nodes[p].len + 1);
        self.nodes.push(PathNode {
            station,
            parent,
            len,
        });
        self.nodes.len() - 1
    }

    fn node(&self, idx: usize) -> &PathNode<N> {
        &self.nodes[idx]
    }

    /// Walk the parent chain from `tip` looking for `station`.
    fn contains(&self, tip: usize, station: &N) -> bool {
        let mut cursor = Some(tip);
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if &node.station == station {
                return true;
            }
            cursor = node.parent;
        }
        false
    }

    /// Rebuild the full start-to-tip sequence.
    fn collect(&self, tip: usize) -> Vec<N> {
        let mut route = Vec::with_capacity(self.nodes[tip].len);
        let mut cursor = Some(tip);
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            route.push(node.station.clone());
            cursor = node.parent;
        }
        route.reverse();
        route
    }
}

/// Find up to `k` shortest simple routes from `start` to `goal`.
///
/// Routes are returned in discovery order. Every route has the same number of
/// stations as the first one found, no route repeats a station, and no two
/// routes are identical. `max_depth` caps the number of stations in any
/// candidate path.
///
/// Returns an empty list when either endpoint is missing from the graph,
/// when no route exists within `max_depth`, or when `k` is zero. When
/// `start == goal` the single one-station route `[start]` is returned, even
/// for a `max_depth` of zero.
pub fn find_k_shortest_routes<G: Adjacency>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    k: usize,
    max_depth: usize,
) -> Vec<Vec<G::Node>> {
    if k == 0 || !graph.contains(start) || !graph.contains(goal) {
        return Vec::new();
    }

    let mut arena = PathArena::new();
    let mut queue = VecDeque::from([arena.push(start.clone(), None)]);
    let mut seen: HashSet<Vec<G::Node>> = HashSet::new();
    let mut results: Vec<Vec<G::Node>> = Vec::new();
    let mut shortest_len: Option<usize> = None;
    let mut expanded = 0usize;

    while results.len() < k {
        let Some(tip) = queue.pop_front() else {
            break;
        };
        let node = arena.node(tip);
        let len = node.len;

        if shortest_len.is_some_and(|shortest| len > shortest) {
            continue;
        }

        if &node.station == goal {
            let route = arena.collect(tip);
            if seen.insert(route.clone()) {
                if shortest_len.is_none() {
                    shortest_len = Some(len);
                }
                trace!(route = ?route, found = results.len() + 1, "shortest route found");
                results.push(route);
            }
            continue;
        }

        if len >= max_depth {
            continue;
        }

        let last = node.station.clone();
        expanded += 1;
        for neighbour in graph.neighbours(&last).unwrap_or_default() {
            if !arena.contains(tip, neighbour) {
                let next = arena.push(neighbour.clone(), Some(tip));
                queue.push_back(next);
            }
        }
    }

    debug!(
        start = ?start,
        goal = ?goal,
        routes = results.len(),
        expanded,
        "k-shortest search complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a symmetric graph from undirected edges, preserving edge order.
    fn graph(edges: &[(&'static str, &'static str)]) -> HashMap<&'static str, Vec<&'static str>> {
        let mut g: HashMap<&str, Vec<&str>> = HashMap::new();
        for &(a, b) in edges {
            g.entry(a).or_default().push(b);
            g.entry(b).or_default().push(a);
        }
        g
    }

    /// Three two-edge routes from A to C, via B, D and E.
    fn three_way() -> HashMap<&'static str, Vec<&'static str>> {
        graph(&[
            ("A", "B"),
            ("B", "C"),
            ("A", "D"),
            ("D", "C"),
            ("A", "E"),
            ("E", "C"),
        ])
    }

    #[test]
    fn returns_all_tied_routes() {
        let routes = find_k_shortest_routes(&three_way(), &"A", &"C", 3, 50);

        assert_eq!(
            routes,
            vec![vec!["A", "B", "C"], vec!["A", "D", "C"], vec!["A", "E", "C"]]
        );
    }

    #[test]
    fn k_caps_result_count() {
        let routes = find_k_shortest_routes(&three_way(), &"A", &"C", 1, 50);

        assert_eq!(routes, vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn zero_k_returns_nothing() {
        let routes = find_k_shortest_routes(&three_way(), &"A", &"C", 0, 50);
        assert!(routes.is_empty());
    }

    #[test]
    fn unknown_goal_returns_nothing() {
        let routes = find_k_shortest_routes(&three_way(), &"A", &"Z", 3, 50);
        assert!(routes.is_empty());
    }

    #[test]
    fn unknown_start_returns_nothing() {
        let routes = find_k_shortest_routes(&three_way(), &"Z", &"A", 3, 50);
        assert!(routes.is_empty());
    }

    #[test]
    fn start_equals_goal_is_single_station_route() {
        let routes = find_k_shortest_routes(&three_way(), &"A", &"A", 3, 50);
        assert_eq!(routes, vec![vec!["A"]]);
    }

    #[test]
    fn start_equals_goal_on_isolated_node() {
        let mut g = three_way();
        g.insert("Q", Vec::new());

        let routes = find_k_shortest_routes(&g, &"Q", &"Q", 3, 50);
        assert_eq!(routes, vec![vec!["Q"]]);
    }

    #[test]
    fn start_equals_goal_ignores_zero_depth() {
        let g = graph(&[("A", "B")]);

        assert_eq!(find_k_shortest_routes(&g, &"A", &"A", 3, 0), vec![vec!["A"]]);
        assert!(find_k_shortest_routes(&g, &"A", &"B", 3, 0).is_empty());
    }

    #[test]
    fn single_chain_yields_one_route_despite_k() {
        let g = graph(&[("A", "B"), ("B", "C")]);

        let routes = find_k_shortest_routes(&g, &"A", &"C", 3, 50);
        assert_eq!(routes, vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn longer_detours_are_never_returned() {
        // A-B-C and A-D-C are shortest; A-B-E-C is a three-edge detour.
        let g = graph(&[
            ("A", "B"),
            ("B", "C"),
            ("A", "D"),
            ("D", "C"),
            ("B", "E"),
            ("E", "C"),
        ]);

        let routes = find_k_shortest_routes(&g, &"A", &"C", 3, 50);
        assert_eq!(routes, vec![vec!["A", "B", "C"], vec!["A", "D", "C"]]);
    }

    #[test]
    fn disconnected_components_return_nothing() {
        let g = graph(&[("A", "B"), ("C", "D")]);

        let routes = find_k_shortest_routes(&g, &"A", &"D", 3, 50);
        assert!(routes.is_empty());
    }

    #[test]
    fn depth_guard_blocks_long_routes() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D")]);

        // A-B-C-D has four stations.
        assert!(find_k_shortest_routes(&g, &"A", &"D", 3, 3).is_empty());
        assert_eq!(
            find_k_shortest_routes(&g, &"A", &"D", 3, 4),
            vec![vec!["A", "B", "C", "D"]]
        );
    }

    #[test]
    fn cycles_terminate() {
        // Dense ring with chords; goal unreachable so the whole space is walked.
        let mut g = graph(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "A"),
            ("A", "C"),
            ("B", "D"),
        ]);
        g.insert("Z", Vec::new());

        assert!(find_k_shortest_routes(&g, &"A", &"Z", 3, 50).is_empty());
    }

    #[test]
    fn neighbour_order_drives_tie_break() {
        let mut g = three_way();
        g.insert("A", vec!["E", "D", "B"]);

        let routes = find_k_shortest_routes(&g, &"A", &"C", 2, 50);
        assert_eq!(routes, vec![vec!["A", "E", "C"], vec!["A", "D", "C"]]);
    }

    #[test]
    fn directed_adjacency_is_followed_as_given() {
        let mut g: HashMap<&str, Vec<&str>> = HashMap::new();
        g.insert("A", vec!["B"]);
        g.insert("B", vec!["C"]);
        g.insert("C", vec![]);

        assert_eq!(
            find_k_shortest_routes(&g, &"A", &"C", 3, 50),
            vec![vec!["A", "B", "C"]]
        );
        assert!(find_k_shortest_routes(&g, &"C", &"A", 3, 50).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let g = three_way();
        let first = find_k_shortest_routes(&g, &"A", &"C", 3, 50);
        let second = find_k_shortest_routes(&g, &"A", &"C", 3, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_neighbour_entries_do_not_duplicate_routes() {
        let mut g = graph(&[("A", "B"), ("B", "C")]);
        g.insert("A", vec!["B", "B"]);

        let routes = find_k_shortest_routes(&g, &"A", &"C", 3, 50);
        assert_eq!(routes, vec![vec!["A", "B", "C"]]);
    }
}
