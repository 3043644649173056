// Shared fixtures for `skyroutes-lib` integration tests.
#![allow(dead_code)]

use skyroutes_lib::{build_route_graph, RouteGraph, RouteRecord};

/// Positions on the equator used by the detour fixture, as (lat, lon).
pub const ALPHA: (f64, f64) = (0.0, 0.0);
pub const BRAVO: (f64, f64) = (0.0, 4.5);
pub const CHARLIE: (f64, f64) = (0.0, 7.2);
/// Duplicate-row position for CCC used by the direct edge, placed farther
/// out so the direct hop costs more than the two-hop route.
pub const CHARLIE_FAR: (f64, f64) = (0.0, 9.0);

/// Route record between two named points given as (lat, lon) in degrees.
pub fn leg(from: &str, from_pos: (f64, f64), to: &str, to_pos: (f64, f64)) -> RouteRecord {
    RouteRecord {
        source_code: from.to_string(),
        dest_code: to.to_string(),
        source_lat: from_pos.0,
        source_lon: from_pos.1,
        dest_lat: to_pos.0,
        dest_lon: to_pos.1,
    }
}

/// Fixture graph where the two-hop AAA→BBB→CCC route beats a direct AAA→CCC
/// edge. The direct row reuses code CCC with coordinates farther out, which
/// raw route data is allowed to do. DDD→EEE is an island unreachable from
/// the rest.
pub fn detour_graph() -> RouteGraph {
    build_route_graph(&[
        leg("AAA", ALPHA, "BBB", BRAVO),
        leg("BBB", BRAVO, "CCC", CHARLIE),
        leg("AAA", ALPHA, "CCC", CHARLIE_FAR),
        leg("DDD", (40.0, 40.0), "EEE", (41.0, 41.0)),
    ])
}

/// Assert two distances agree to within a millimetre.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
