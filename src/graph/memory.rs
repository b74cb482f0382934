//! In-memory street graph.
//!
//! Backs tests and any provider that materializes downloaded road data.
//! Nearest-node lookup uses a k-d tree over (lat, lon); shortest paths use
//! Dijkstra over length-weighted undirected edges.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use kiddo::{KdTree, SquaredEuclidean};

use super::{NodeId, StreetGraph};
use crate::core::GeoPoint;
use crate::error::{Error, Result};

/// An in-memory weighted street graph.
///
/// Edges are undirected (walkable in both directions), weighted by length
/// in meters.
pub struct MemoryGraph {
    coords: HashMap<NodeId, GeoPoint>,
    adjacency: HashMap<NodeId, Vec<(NodeId, f64)>>,
    index: KdTree<f64, 2>,
}

impl MemoryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            coords: HashMap::new(),
            adjacency: HashMap::new(),
            index: KdTree::new(),
        }
    }

    /// Add a node at a geographic coordinate.
    ///
    /// Re-adding an existing id updates its coordinate in the map but the
    /// spatial index keeps the original position, so callers should treat
    /// node ids as insert-once.
    pub fn add_node(&mut self, id: NodeId, coordinate: GeoPoint) {
        if self.coords.insert(id, coordinate).is_none() {
            self.index.add(&[coordinate.lat, coordinate.lon], id.0);
        }
    }

    /// Add an undirected edge with a length in meters.
    ///
    /// Both endpoints must already exist; unknown endpoints are ignored
    /// with a warning rather than creating dangling adjacency.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, length_m: f64) {
        if !self.coords.contains_key(&a) || !self.coords.contains_key(&b) {
            log::warn!("ignoring edge {}-{}: unknown endpoint", a, b);
            return;
        }
        self.adjacency.entry(a).or_default().push((b, length_m));
        self.adjacency.entry(b).or_default().push((a, length_m));
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of undirected edges in the graph
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Dijkstra frontier entry, ordered as a min-heap on cost.
struct QueueEntry {
    cost: f64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower cost = higher priority),
        // with node id as a deterministic tie-breaker.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl StreetGraph for MemoryGraph {
    fn nearest_node(&self, point: GeoPoint) -> Result<NodeId> {
        if self.coords.is_empty() {
            return Err(Error::NoNodeFound {
                lat: point.lat,
                lon: point.lon,
            });
        }
        let nearest = self
            .index
            .nearest_one::<SquaredEuclidean>(&[point.lat, point.lon]);
        Ok(NodeId(nearest.item))
    }

    fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        if !self.coords.contains_key(&from) {
            return Err(Error::UnknownNode(from));
        }
        if !self.coords.contains_key(&to) {
            return Err(Error::UnknownNode(to));
        }
        if from == to {
            return Ok(vec![from]);
        }

        let mut dist: HashMap<NodeId, f64> = HashMap::new();
        let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        dist.insert(from, 0.0);
        frontier.push(QueueEntry {
            cost: 0.0,
            node: from,
        });

        while let Some(QueueEntry { cost, node }) = frontier.pop() {
            if node == to {
                // Reconstruct path back to the origin
                let mut path = vec![to];
                let mut current = to;
                while let Some(&prev) = came_from.get(&current) {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return Ok(path);
            }

            // Stale entry: a shorter route to this node was already settled
            if cost > *dist.get(&node).unwrap_or(&f64::INFINITY) {
                continue;
            }

            if let Some(neighbors) = self.adjacency.get(&node) {
                for &(next, length) in neighbors {
                    let next_cost = cost + length;
                    if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                        dist.insert(next, next_cost);
                        came_from.insert(next, node);
                        frontier.push(QueueEntry {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }

        Err(Error::NoPath { from, to })
    }

    fn node_coordinate(&self, node: NodeId) -> Result<GeoPoint> {
        self.coords
            .get(&node)
            .copied()
            .ok_or(Error::UnknownNode(node))
    }

    fn edge_length(&self, a: NodeId, b: NodeId) -> f64 {
        self.adjacency
            .get(&a)
            .and_then(|neighbors| {
                neighbors
                    .iter()
                    .find(|(n, _)| *n == b)
                    .map(|(_, length)| *length)
            })
            .unwrap_or(0.0)
    }
}
