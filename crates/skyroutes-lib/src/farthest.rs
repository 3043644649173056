//! Top-K farthest reachable airports from a given origin.

use serde::Serialize;

use crate::error::Result;
use crate::graph::{AirportCode, RouteGraph};
use crate::path::{shortest_distances_from, shortest_path};

/// One entry of a farthest-airports query: a reachable airport, its
/// shortest-path distance from the origin, and the path itself.
#[derive(Debug, Clone, Serialize)]
pub struct FarthestAirport {
    pub code: AirportCode,
    /// Shortest-path distance from the origin in kilometres.
    pub distance: f64,
    /// Visited airport codes in order, origin first.
    pub steps: Vec<AirportCode>,
}

/// The `k` reachable airports with the greatest shortest-path distance from
/// `origin`, sorted descending by distance with ascending code as the tie
/// break. The origin itself is excluded, so the result holds at most
/// `min(k, reachable - 1)` entries. `k == 0` or an origin with no reachable
/// neighbours yields an empty vector. Returns
/// [`Error::UnknownAirport`](crate::Error::UnknownAirport) when the origin
/// is absent from the graph.
pub fn top_farthest(graph: &RouteGraph, origin: &str, k: usize) -> Result<Vec<FarthestAirport>> {
    let distances = shortest_distances_from(graph, origin)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<(AirportCode, f64)> = distances
        .into_iter()
        .filter(|(code, _)| code != origin)
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(k);

    let mut farthest = Vec::with_capacity(ranked.len());
    for (code, distance) in ranked {
        // Recomputing the pair query returns the same underlying path, so
        // its distance matches the single-source result.
        let path = shortest_path(graph, origin, &code)?;
        farthest.push(FarthestAirport {
            code,
            distance,
            steps: path.steps,
        });
    }
    Ok(farthest)
}
