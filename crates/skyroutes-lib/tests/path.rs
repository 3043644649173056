mod common;

use common::{assert_close, detour_graph, ALPHA, BRAVO, CHARLIE};
use skyroutes_lib::{haversine_km, shortest_distances_from, shortest_path, Error};

#[test]
fn two_hop_route_beats_direct_edge() {
    let graph = detour_graph();

    let route = shortest_path(&graph, "AAA", "CCC").expect("route exists");
    assert_eq!(route.steps, vec!["AAA", "BBB", "CCC"]);
    assert_eq!(route.hop_count(), 2);

    let expected = haversine_km(ALPHA.0, ALPHA.1, BRAVO.0, BRAVO.1)
        + haversine_km(BRAVO.0, BRAVO.1, CHARLIE.0, CHARLIE.1);
    assert_close(route.distance, expected);

    let direct = graph.neighbours("AAA")["CCC"];
    assert!(route.distance < direct);
}

#[test]
fn route_to_self_is_zero_length() {
    let graph = detour_graph();

    let route = shortest_path(&graph, "AAA", "AAA").expect("trivial route");
    assert_eq!(route.distance, 0.0);
    assert_eq!(route.steps, vec!["AAA"]);
    assert_eq!(route.hop_count(), 0);
}

#[test]
fn unknown_origin_is_reported_as_unknown_airport() {
    let graph = detour_graph();

    let error = shortest_path(&graph, "ZZZ", "CCC").expect_err("origin absent");
    assert!(matches!(error, Error::UnknownAirport { code } if code == "ZZZ"));
}

#[test]
fn unknown_destination_is_reported_as_unknown_airport() {
    let graph = detour_graph();

    let error = shortest_path(&graph, "AAA", "ZZZ").expect_err("destination absent");
    assert!(matches!(error, Error::UnknownAirport { code } if code == "ZZZ"));
}

#[test]
fn unreachable_destination_is_no_route() {
    let graph = detour_graph();

    let error = shortest_path(&graph, "AAA", "DDD").expect_err("island unreachable");
    assert!(matches!(error, Error::NoRoute { .. }));

    // Terminal node with no outgoing edges cannot reach anything either.
    let error = shortest_path(&graph, "CCC", "AAA").expect_err("no outgoing edges");
    assert!(matches!(error, Error::NoRoute { .. }));
}

#[test]
fn single_source_distances_include_origin_and_skip_unreachable() {
    let graph = detour_graph();

    let distances = shortest_distances_from(&graph, "AAA").expect("origin known");
    assert_eq!(distances.len(), 3);
    assert_eq!(distances["AAA"], 0.0);
    assert!(distances.contains_key("BBB"));
    assert!(distances.contains_key("CCC"));
    assert!(!distances.contains_key("DDD"));
    assert!(!distances.contains_key("EEE"));
}

#[test]
fn single_source_distances_match_pair_queries() {
    let graph = detour_graph();

    let distances = shortest_distances_from(&graph, "AAA").expect("origin known");
    for (code, &distance) in &distances {
        let route = shortest_path(&graph, "AAA", code).expect("reachable");
        assert_close(route.distance, distance);
    }
}

#[test]
fn unknown_origin_fails_single_source_query() {
    let graph = detour_graph();

    let error = shortest_distances_from(&graph, "ZZZ").expect_err("origin absent");
    assert!(matches!(error, Error::UnknownAirport { code } if code == "ZZZ"));
}

#[test]
fn shortest_path_serializes_for_presentation_layers() {
    let graph = detour_graph();

    let route = shortest_path(&graph, "AAA", "CCC").expect("route exists");
    let value = serde_json::to_value(&route).expect("serializable");
    assert!(value["distance"].is_number());
    assert_eq!(value["steps"][0], "AAA");
    assert_eq!(value["steps"][2], "CCC");
}
