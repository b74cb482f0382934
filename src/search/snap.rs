//! Graph snapping.
//!
//! Maps each candidate vertex to its nearest street-graph node and tracks
//! how many vertices landed within the snap tolerance. Vertices whose
//! nearest node is farther than the tolerance still contribute that node
//! to the output (the stitcher can often bridge them), they just don't
//! count towards the success rate. A vertex whose lookup fails outright is
//! dropped from the output and logged; downstream stages tolerate the
//! shorter sequence.

use crate::core::math::approx_distance_meters;
use crate::core::GeoPoint;
use crate::graph::{NodeId, StreetGraph};

/// Result of snapping a polyline to the graph.
#[derive(Clone, Debug)]
pub struct SnapResult {
    /// One nearest node per input vertex, minus dropped lookup failures
    pub nodes: Vec<NodeId>,
    /// Fraction of input vertices within the snap tolerance, in [0, 1]
    pub success_rate: f64,
}

/// Snap each vertex of a geographic polyline to its nearest graph node.
///
/// `success_rate` is counted against the input vertex count, so dropped
/// vertices and out-of-tolerance snaps both lower it. An empty polyline
/// yields an empty node list and a success rate of 0.
pub fn snap_polyline(
    graph: &dyn StreetGraph,
    polyline: &[GeoPoint],
    max_snap_distance_m: f64,
) -> SnapResult {
    let mut nodes = Vec::with_capacity(polyline.len());
    let mut successful = 0usize;

    for point in polyline {
        let node = match graph.nearest_node(*point) {
            Ok(node) => node,
            Err(e) => {
                log::warn!(
                    "dropping vertex ({:.5}, {:.5}): {}",
                    point.lat,
                    point.lon,
                    e
                );
                continue;
            }
        };

        match graph.node_coordinate(node) {
            Ok(coord) => {
                if approx_distance_meters(*point, coord) <= max_snap_distance_m {
                    successful += 1;
                }
                nodes.push(node);
            }
            Err(e) => {
                log::warn!("dropping vertex: node {} has no coordinate: {}", node, e);
            }
        }
    }

    let success_rate = if polyline.is_empty() {
        0.0
    } else {
        successful as f64 / polyline.len() as f64
    };

    SnapResult {
        nodes,
        success_rate,
    }
}
