//! Street graph abstraction.
//!
//! The matching engine never touches a concrete road-network
//! implementation: it consumes the [`StreetGraph`] capability trait, so
//! any backing store (an in-memory graph built from downloaded OSM data,
//! a test double, a remote service adapter) can be substituted without the
//! engine depending on a concrete type. Graph acquisition sits behind the
//! separate [`GraphProvider`] seam and is entirely the provider's concern,
//! including caching and persistence.

mod memory;

pub use memory::MemoryGraph;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::GeoPoint;
use crate::error::Result;

/// Opaque handle to a street graph node.
///
/// Carries equality and hashing only; the numeric value has no arithmetic
/// meaning (for OSM-backed graphs it is the OSM node id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only street network queries consumed by the matching engine.
///
/// Implementations must be safe for concurrent reads (`Send + Sync`); the
/// engine never mutates a graph.
pub trait StreetGraph: Send + Sync {
    /// Find the graph node nearest to a geographic point.
    ///
    /// Fails with [`Error::NoNodeFound`](crate::Error::NoNodeFound) if the
    /// graph is empty or the point is outside its indexed area.
    fn nearest_node(&self, point: GeoPoint) -> Result<NodeId>;

    /// Shortest path between two nodes, weighted by edge length.
    ///
    /// On success the returned sequence starts with `from` and ends with
    /// `to`. Fails with [`Error::NoPath`](crate::Error::NoPath) if the
    /// nodes are disconnected.
    fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>>;

    /// Geographic coordinate of a node.
    fn node_coordinate(&self, node: NodeId) -> Result<GeoPoint>;

    /// Length in meters of the direct edge between two nodes, or `0.0` if
    /// no direct edge exists.
    fn edge_length(&self, a: NodeId, b: NodeId) -> f64;
}

/// Street graph acquisition seam.
///
/// Implemented by the external provider layer (OSM downloader, fixture
/// loader). A failed `load_around` is fatal to the request and propagates
/// upward; the engine never retries acquisition.
pub trait GraphProvider {
    /// Load a street graph covering `radius_km` around a center point.
    fn load_around(&self, center: GeoPoint, radius_km: f64) -> Result<Box<dyn StreetGraph>>;
}

/// Total length in meters of a node sequence, summing direct edge lengths.
///
/// Pairs without a direct edge (synthetic jumps recorded by the stitcher)
/// contribute zero.
pub fn path_length_meters(graph: &dyn StreetGraph, nodes: &[NodeId]) -> f64 {
    nodes.windows(2).map(|w| graph.edge_length(w[0], w[1])).sum()
}

/// Resolve a node sequence to geographic coordinates.
pub fn nodes_to_coordinates(graph: &dyn StreetGraph, nodes: &[NodeId]) -> Result<Vec<GeoPoint>> {
    nodes.iter().map(|n| graph.node_coordinate(*n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(42).to_string(), "42");
    }

    #[test]
    fn test_path_length_sums_edges() {
        let mut graph = MemoryGraph::new();
        graph.add_node(NodeId(1), GeoPoint::new(50.0, 8.0));
        graph.add_node(NodeId(2), GeoPoint::new(50.001, 8.0));
        graph.add_node(NodeId(3), GeoPoint::new(50.002, 8.0));
        graph.add_edge(NodeId(1), NodeId(2), 110.0);
        graph.add_edge(NodeId(2), NodeId(3), 115.0);

        let nodes = [NodeId(1), NodeId(2), NodeId(3)];
        assert!((path_length_meters(&graph, &nodes) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_length_missing_edge_is_zero() {
        let mut graph = MemoryGraph::new();
        graph.add_node(NodeId(1), GeoPoint::new(50.0, 8.0));
        graph.add_node(NodeId(2), GeoPoint::new(50.001, 8.0));

        let nodes = [NodeId(1), NodeId(2)];
        assert_eq!(path_length_meters(&graph, &nodes), 0.0);
    }
}
