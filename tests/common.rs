//! Shared fixtures for end-to-end matching tests.

#![allow(dead_code)]

use rekha_route::{GeoPoint, MemoryGraph, NodeId, NormalizedSymbol, ShapePoint};

/// The square test symbol: 4 points, normalized to unit length.
pub fn square_symbol() -> NormalizedSymbol {
    NormalizedSymbol::from_points(
        "square",
        "square.svg",
        &[
            ShapePoint::new(0.0, 0.0),
            ShapePoint::new(1.0, 0.0),
            ShapePoint::new(1.0, 1.0),
            ShapePoint::new(0.0, 1.0),
        ],
    )
    .unwrap()
}

/// Side length in degrees of the square symbol transformed at a 2 km
/// target and 1.0x scale.
///
/// The normalized square has vertices at ±1/6, so after scaling by the
/// base scale (2 km / 111) each side spans 2/6 of it.
pub fn square_side_degrees() -> f64 {
    2.0 * (2.0 / 111.0) / 6.0
}

/// Geographic positions of the transformed square's 4 vertices, with the
/// first vertex anchored at `start`.
pub fn square_vertex_positions(start: GeoPoint) -> [GeoPoint; 4] {
    let side = square_side_degrees();
    [
        start,
        GeoPoint::new(start.lat + side, start.lon),
        GeoPoint::new(start.lat + side, start.lon + side),
        GeoPoint::new(start.lat, start.lon + side),
    ]
}

/// 4-node graph with one node on each square vertex and no edges.
pub fn square_nodes_graph(start: GeoPoint) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for (i, pos) in square_vertex_positions(start).iter().enumerate() {
        graph.add_node(NodeId(i as u64), *pos);
    }
    graph
}

/// Fully-connected 4-node square graph with 100 m edges.
pub fn square_full_graph(start: GeoPoint) -> MemoryGraph {
    let mut graph = square_nodes_graph(start);
    for a in 0..4u64 {
        for b in (a + 1)..4u64 {
            graph.add_edge(NodeId(a), NodeId(b), 100.0);
        }
    }
    graph
}

/// 4-node ring graph (edges along the square's sides only) with a
/// configurable edge length.
pub fn square_ring_graph(start: GeoPoint, edge_len_m: f64) -> MemoryGraph {
    let mut graph = square_nodes_graph(start);
    graph.add_edge(NodeId(0), NodeId(1), edge_len_m);
    graph.add_edge(NodeId(1), NodeId(2), edge_len_m);
    graph.add_edge(NodeId(2), NodeId(3), edge_len_m);
    graph.add_edge(NodeId(3), NodeId(0), edge_len_m);
    graph
}
