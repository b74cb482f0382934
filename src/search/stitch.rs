//! Route stitching.
//!
//! Connects consecutive snapped waypoints with shortest paths and
//! concatenates them into one continuous route. A disconnected pair never
//! aborts the candidate: the pair is recorded as a direct zero-cost "jump"
//! (no real edge exists, so it contributes nothing to the distance) and
//! the candidate is flagged as partial so the scorer can still consider
//! it.

use crate::graph::{path_length_meters, NodeId, StreetGraph};

/// A stitched route through the street graph.
#[derive(Clone, Debug)]
pub struct RouteCandidate {
    /// Complete node sequence forming the route
    pub nodes: Vec<NodeId>,
    /// Total route length in meters (zero-cost for synthetic jumps)
    pub distance_m: f64,
    /// Whether any waypoint pair had no connecting path
    pub has_jumps: bool,
}

/// Build a continuous route visiting `waypoints` in order.
///
/// Callers should deduplicate consecutive repeats first (see
/// [`dedup_consecutive`](crate::core::polyline::dedup_consecutive));
/// identical adjacent waypoints are skipped here as well and contribute
/// zero length. Each subsequent segment is appended without its first node
/// (it duplicates the previous segment's last node).
pub fn build_route(graph: &dyn StreetGraph, waypoints: &[NodeId]) -> RouteCandidate {
    let mut nodes: Vec<NodeId> = Vec::new();
    let mut has_jumps = false;

    for pair in waypoints.windows(2) {
        let (from, to) = (pair[0], pair[1]);

        if from == to {
            if nodes.is_empty() {
                nodes.push(from);
            }
            continue;
        }

        match graph.shortest_path(from, to) {
            Ok(path) => {
                if nodes.is_empty() {
                    nodes.extend(path);
                } else {
                    nodes.extend(path.into_iter().skip(1));
                }
            }
            Err(e) => {
                log::debug!("recording jump {} -> {}: {}", from, to, e);
                has_jumps = true;
                if nodes.is_empty() {
                    nodes.push(from);
                }
                nodes.push(to);
            }
        }
    }

    // A single waypoint is a valid (zero-length) route
    if nodes.is_empty() {
        if let Some(&only) = waypoints.first() {
            nodes.push(only);
        }
    }

    let distance_m = path_length_meters(graph, &nodes);

    RouteCandidate {
        nodes,
        distance_m,
        has_jumps,
    }
}
