//! Skyroutes library entry points.
//!
//! This crate exposes the route-graph engine for airport networks: build a
//! weighted directed graph from raw route records, compute great-circle edge
//! weights, and run shortest-path and farthest-airport queries against the
//! built graph. Higher-level consumers (CLI, dashboards, map renderers)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod airports;
pub mod error;
pub mod farthest;
pub mod geo;
pub mod graph;
pub mod path;

pub use airports::{AirportDirectory, AirportRecord};
pub use error::{Error, Result};
pub use farthest::{top_farthest, FarthestAirport};
pub use geo::haversine_km;
pub use graph::{build_route_graph, AirportCode, RouteGraph, RouteRecord};
pub use path::{shortest_distances_from, shortest_path, ShortestPath};
