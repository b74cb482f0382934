//! Shape-to-route search.
//!
//! Iterates the (rotation × scale) candidate grid through the pipeline
//! generate → snap → dedup → stitch → score, keeping the best-scoring
//! route. The loop is synchronous and single-threaded; candidate
//! evaluations are independent, so callers wanting parallelism can split
//! the grid across workers with a reduction over [`BestCandidate`]
//! (treating early stop as a pruning hint rather than a strict cutoff).
//!
//! ```text
//!  NormalizedSymbol ──► generate (rotation, scale) ──► simplify
//!                                                        │
//!                         snap to graph nodes ◄──────────┘
//!                                │
//!                 dedup ──► stitch shortest paths ──► score
//!                                                        │
//!                              best-so-far accumulator ◄─┘
//! ```

pub mod candidate;
pub mod score;
pub mod snap;
pub mod stitch;

pub use candidate::Candidate;
pub use score::{BestCandidate, ScoredCandidate};
pub use snap::SnapResult;
pub use stitch::RouteCandidate;

use crate::config::MatchConfig;
use crate::core::polyline::dedup_consecutive;
use crate::core::GeoPoint;
use crate::error::{Error, Result};
use crate::graph::{nodes_to_coordinates, StreetGraph};
use crate::symbol::NormalizedSymbol;

/// Result of a shape match.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// Route coordinates in geographic space
    pub coordinates: Vec<GeoPoint>,
    /// Total route distance in meters
    pub distance_m: f64,
    /// Snap success rate of the winning candidate (0 for fallback)
    pub success_rate: f64,
    /// Score of the winning candidate (0 for fallback)
    pub score: f64,
    /// Number of candidates evaluated
    pub attempts: usize,
    /// True when no candidate was acceptable and the degenerate
    /// single-point fallback was returned
    pub fallback: bool,
}

impl MatchOutcome {
    fn fallback(start: GeoPoint, attempts: usize) -> Self {
        Self {
            coordinates: vec![start],
            distance_m: 0.0,
            success_rate: 0.0,
            score: 0.0,
            attempts,
            fallback: true,
        }
    }
}

/// Match a normalized symbol onto the street graph.
///
/// Searches the configured rotation × scale grid for the route that best
/// resembles the symbol at approximately `target_distance_km`, anchored at
/// `start`. When no candidate passes the acceptance gates the result is
/// the defined fallback: a single-point route at `start` with distance 0
/// and `fallback == true`. That means "no shape match found", not an error.
///
/// Fails fast on invalid input: a non-positive target distance or a
/// symbol with fewer than 2 points.
pub fn match_shape(
    symbol: &NormalizedSymbol,
    start: GeoPoint,
    target_distance_km: f64,
    graph: &dyn StreetGraph,
    config: &MatchConfig,
) -> Result<MatchOutcome> {
    if target_distance_km <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "target distance must be positive, got {} km",
            target_distance_km
        )));
    }
    if symbol.polyline.len() < 2 {
        return Err(Error::DegenerateShape(format!(
            "symbol '{}' has {} points",
            symbol.meta.id,
            symbol.polyline.len()
        )));
    }

    log::info!(
        "matching symbol '{}' at ({:.5}, {:.5}), target {:.2} km, {} rotations x {} scales",
        symbol.meta.id,
        start.lat,
        start.lon,
        target_distance_km,
        config.rotations_deg.len(),
        config.scale_factors.len(),
    );

    let mut best = BestCandidate::new();
    let mut attempts = 0usize;

    'rotations: for &rotation_deg in &config.rotations_deg {
        for &scale_factor in &config.scale_factors {
            attempts += 1;

            let cand = candidate::generate(
                &symbol.polyline,
                start,
                target_distance_km,
                rotation_deg,
                scale_factor,
                config.simplify_points,
            );

            let snapped = snap::snap_polyline(graph, &cand.polyline, config.max_snap_distance_m);
            log::debug!(
                "attempt {}: rotation {:.0}°, scale {:.1}x, snap rate {:.0}%",
                attempts,
                rotation_deg,
                scale_factor,
                snapped.success_rate * 100.0
            );

            if snapped.success_rate < config.min_snap_rate {
                continue;
            }

            let waypoints = dedup_consecutive(&snapped.nodes);
            let route = stitch::build_route(graph, &waypoints);

            match score::evaluate(
                route,
                snapped.success_rate,
                rotation_deg,
                scale_factor,
                target_distance_km,
                config,
            ) {
                Ok(scored) => {
                    let snap_rate = scored.success_rate;
                    let distance_km = scored.route.distance_m / 1000.0;
                    if best.offer(scored) && best.should_stop_early(config) {
                        log::info!(
                            "early stop: snap rate {:.0}%, distance {:.2} km",
                            snap_rate * 100.0,
                            distance_km
                        );
                        break 'rotations;
                    }
                }
                Err(reason) => {
                    log::debug!("attempt {} rejected: {:?}", attempts, reason);
                }
            }
        }
    }

    match best.into_inner() {
        Some(winner) => {
            log::info!(
                "best route: {:.2} km over {} nodes (snap {:.0}%, rotation {:.0}°, scale {:.1}x)",
                winner.route.distance_m / 1000.0,
                winner.route.nodes.len(),
                winner.success_rate * 100.0,
                winner.rotation_deg,
                winner.scale_factor
            );
            let coordinates = nodes_to_coordinates(graph, &winner.route.nodes)?;
            Ok(MatchOutcome {
                coordinates,
                distance_m: winner.route.distance_m,
                success_rate: winner.success_rate,
                score: winner.score,
                attempts,
                fallback: false,
            })
        }
        None => {
            log::warn!(
                "no acceptable route after {} attempts, returning single-point fallback",
                attempts
            );
            Ok(MatchOutcome::fallback(start, attempts))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShapePoint;
    use crate::graph::MemoryGraph;
    use crate::symbol::NormalizedSymbol;

    fn square_symbol() -> NormalizedSymbol {
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

    #[test]
    fn test_rejects_nonpositive_target() {
        let graph = MemoryGraph::new();
        let err = match_shape(
            &square_symbol(),
            GeoPoint::new(50.0, 8.0),
            0.0,
            &graph,
            &MatchConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_rejects_degenerate_symbol() {
        let graph = MemoryGraph::new();
        let mut symbol = square_symbol();
        symbol.polyline.truncate(1);
        let err = match_shape(
            &symbol,
            GeoPoint::new(50.0, 8.0),
            2.0,
            &graph,
            &MatchConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateShape(_)));
    }

    #[test]
    fn test_empty_graph_falls_back() {
        let graph = MemoryGraph::new();
        let outcome = match_shape(
            &square_symbol(),
            GeoPoint::new(50.0, 8.0),
            2.0,
            &graph,
            &MatchConfig::default(),
        )
        .unwrap();

        assert!(outcome.fallback);
        assert_eq!(outcome.coordinates, vec![GeoPoint::new(50.0, 8.0)]);
        assert_eq!(outcome.distance_m, 0.0);
        assert_eq!(outcome.attempts, 32); // 4 rotations x 8 scales
    }
}
