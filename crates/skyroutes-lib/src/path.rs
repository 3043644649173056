//! Shortest-path queries over a built [`RouteGraph`].
//!
//! Both entry points run Dijkstra's algorithm with a binary-heap frontier.
//! All edge weights are great-circle distances and therefore non-negative,
//! so the standard correctness argument holds.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{AirportCode, RouteGraph};

/// Result of a single-pair shortest-path query.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath {
    /// Total distance along the path in kilometres.
    pub distance: f64,
    /// Visited airport codes in order, origin first and destination last.
    pub steps: Vec<AirportCode>,
}

impl ShortestPath {
    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Find the shortest route between two airports.
///
/// Returns [`Error::UnknownAirport`] when either endpoint is absent from the
/// graph and [`Error::NoRoute`] when the destination is unreachable. Asking
/// for a route from an airport to itself yields a zero-length single-node
/// path, never an error.
pub fn shortest_path(
    graph: &RouteGraph,
    origin: &str,
    destination: &str,
) -> Result<ShortestPath> {
    ensure_known(graph, origin)?;
    ensure_known(graph, destination)?;

    if origin == destination {
        return Ok(ShortestPath {
            distance: 0.0,
            steps: vec![origin.to_string()],
        });
    }

    let search = dijkstra(graph, origin, Some(destination));
    match search.distances.get(destination) {
        Some(&distance) => Ok(ShortestPath {
            distance,
            steps: reconstruct_path(&search.parents, origin, destination),
        }),
        None => Err(Error::NoRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }),
    }
}

/// Shortest distance from `origin` to every reachable airport.
///
/// The origin itself appears with distance zero. Unreachable airports are
/// simply absent from the mapping; infinity is never reported. Returns
/// [`Error::UnknownAirport`] when the origin is absent from the graph.
pub fn shortest_distances_from(
    graph: &RouteGraph,
    origin: &str,
) -> Result<HashMap<AirportCode, f64>> {
    ensure_known(graph, origin)?;
    Ok(dijkstra(graph, origin, None).distances)
}

fn ensure_known(graph: &RouteGraph, code: &str) -> Result<()> {
    if graph.contains(code) {
        Ok(())
    } else {
        Err(Error::UnknownAirport {
            code: code.to_string(),
        })
    }
}

struct Search {
    distances: HashMap<AirportCode, f64>,
    parents: HashMap<AirportCode, Option<AirportCode>>,
}

/// Dijkstra over the whole reachable set, stopping early once `goal` is
/// settled. Equal-cost frontier entries pop in insertion order, tracked by a
/// monotonic sequence number.
fn dijkstra(graph: &RouteGraph, origin: &str, goal: Option<&str>) -> Search {
    let mut distances: HashMap<AirportCode, f64> = HashMap::new();
    let mut parents: HashMap<AirportCode, Option<AirportCode>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    distances.insert(origin.to_string(), 0.0);
    parents.insert(origin.to_string(), None);
    queue.push(QueueEntry::new(origin.to_string(), 0.0, sequence));

    while let Some(entry) = queue.pop() {
        let settled = match distances.get(&entry.node) {
            Some(&distance) if distance < entry.cost.0 => continue,
            Some(&distance) => distance,
            None => continue,
        };

        if goal == Some(entry.node.as_str()) {
            break;
        }

        for (next, &weight) in graph.neighbours(&entry.node) {
            let candidate = settled + weight;
            if candidate < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next.clone(), candidate);
                parents.insert(next.clone(), Some(entry.node.clone()));
                sequence += 1;
                queue.push(QueueEntry::new(next.clone(), candidate, sequence));
            }
        }
    }

    Search { distances, parents }
}

fn reconstruct_path(
    parents: &HashMap<AirportCode, Option<AirportCode>>,
    origin: &str,
    destination: &str,
) -> Vec<AirportCode> {
    let mut path = Vec::new();
    let mut current = Some(destination.to_string());
    while let Some(node) = current {
        current = parents.get(&node).cloned().flatten();
        let done = node == origin;
        path.push(node);
        if done {
            break;
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportCode,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: AirportCode, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; lower
        // sequence numbers win ties so earlier insertions pop first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
