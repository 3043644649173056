//! Weighted directed route graph keyed by airport code.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::geo::haversine_km;

/// Identifier for a graph node. Codes are treated as opaque strings; the raw
/// data may carry duplicate attribute rows for the same code.
pub type AirportCode = String;

/// Raw route row supplied by the ingestion layer: a directed connection plus
/// the coordinates of both endpoints in signed degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub source_code: AirportCode,
    pub dest_code: AirportCode,
    pub source_lat: f64,
    pub source_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
}

static NO_NEIGHBOURS: BTreeMap<AirportCode, f64> = BTreeMap::new();

/// Graph structure used by the pathfinding algorithms.
///
/// Built exactly once from the full record set and read-only afterwards. The
/// adjacency lives behind an `Arc`, so clones are cheap and concurrent
/// queries against the same graph need no synchronization. Outgoing edges
/// are kept in a `BTreeMap` so neighbour iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Arc<HashMap<AirportCode, BTreeMap<AirportCode, f64>>>,
}

impl RouteGraph {
    /// Outgoing edges for a code as a destination→weight mapping. A node
    /// without outgoing edges yields an empty mapping, not an error.
    pub fn neighbours(&self, code: &str) -> &BTreeMap<AirportCode, f64> {
        self.adjacency.get(code).unwrap_or(&NO_NEIGHBOURS)
    }

    /// Whether the code appeared as a source or destination in the input.
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Iterate over every node code in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Iterate over every directed edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, &weight)| (from.as_str(), to.as_str(), weight))
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }
}

/// Build the route graph from raw route records.
///
/// Each record contributes one directed edge weighted by the great-circle
/// distance between its endpoints. A repeated (source, destination) pair
/// overwrites the earlier weight, so the last row wins. Self-loops are kept
/// with their computed weight. Every code seen on either side of a record
/// becomes a node.
pub fn build_route_graph(records: &[RouteRecord]) -> RouteGraph {
    let mut adjacency: HashMap<AirportCode, BTreeMap<AirportCode, f64>> = HashMap::new();

    for record in records {
        let weight = haversine_km(
            record.source_lat,
            record.source_lon,
            record.dest_lat,
            record.dest_lon,
        );
        adjacency
            .entry(record.source_code.clone())
            .or_default()
            .insert(record.dest_code.clone(), weight);
        adjacency.entry(record.dest_code.clone()).or_default();
    }

    let graph = RouteGraph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built route graph"
    );
    graph
}
