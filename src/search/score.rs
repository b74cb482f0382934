//! Candidate scoring and best-so-far selection.
//!
//! Each stitched route is gated on snap success and distance accuracy,
//! then scored with snap rate dominating:
//!
//! ```text
//! score = success_rate × (1 − distance_error × distance_weight)
//! ```
//!
//! The running best lives in an explicit [`BestCandidate`] accumulator
//! owned by the search loop (no shared mutable state), replaced only on a
//! strictly greater score so the first-found candidate wins ties.

use crate::config::MatchConfig;

use super::stitch::RouteCandidate;

/// A route candidate that passed both acceptance gates.
#[derive(Clone, Debug)]
pub struct ScoredCandidate {
    /// The stitched route
    pub route: RouteCandidate,
    /// Combined shape/distance score
    pub score: f64,
    /// Snap success rate of the generating candidate
    pub success_rate: f64,
    /// Relative distance error: |actual − target| / target
    pub distance_error: f64,
    /// Rotation of the generating candidate (degrees)
    pub rotation_deg: f64,
    /// Scale factor of the generating candidate
    pub scale_factor: f64,
}

/// Why a candidate was rejected (for logging and stats).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Snap success rate below `min_snap_rate`
    LowSnapRate,
    /// Distance error beyond `distance_tolerance`
    DistanceOutOfRange,
}

/// Gate and score a stitched route.
///
/// Returns the rejection reason when the candidate fails either gate.
pub fn evaluate(
    route: RouteCandidate,
    success_rate: f64,
    rotation_deg: f64,
    scale_factor: f64,
    target_distance_km: f64,
    config: &MatchConfig,
) -> Result<ScoredCandidate, Rejection> {
    if success_rate < config.min_snap_rate {
        return Err(Rejection::LowSnapRate);
    }

    let actual_km = route.distance_m / 1000.0;
    let distance_error = (actual_km - target_distance_km).abs() / target_distance_km;
    if distance_error > config.distance_tolerance {
        return Err(Rejection::DistanceOutOfRange);
    }

    let score = success_rate * (1.0 - distance_error * config.distance_weight);

    Ok(ScoredCandidate {
        route,
        score,
        success_rate,
        distance_error,
        rotation_deg,
        scale_factor,
    })
}

/// Explicit best-so-far accumulator for the search loop.
#[derive(Debug, Default)]
pub struct BestCandidate {
    best: Option<ScoredCandidate>,
}

impl BestCandidate {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate; it replaces the incumbent only on a strictly
    /// greater score. Returns true if it became the new best.
    pub fn offer(&mut self, candidate: ScoredCandidate) -> bool {
        let improved = match &self.best {
            Some(best) => candidate.score > best.score,
            None => true,
        };
        if improved {
            self.best = Some(candidate);
        }
        improved
    }

    /// Whether the current best is good enough to stop the search early.
    ///
    /// A performance/quality trade-off, not a correctness requirement:
    /// both grid loops terminate once a best exceeds the snap-rate floor
    /// and stays under the distance-error ceiling.
    pub fn should_stop_early(&self, config: &MatchConfig) -> bool {
        self.best.as_ref().is_some_and(|b| {
            b.success_rate > config.early_stop_snap_rate
                && b.distance_error < config.early_stop_distance_error
        })
    }

    /// Peek at the current best
    pub fn current(&self) -> Option<&ScoredCandidate> {
        self.best.as_ref()
    }

    /// Consume the accumulator, yielding the final best candidate
    pub fn into_inner(self) -> Option<ScoredCandidate> {
        self.best
    }
}
