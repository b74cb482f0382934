//! Matching engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the shape-to-route search.
///
/// Defaults follow the shape-favoring reference variant: snap quality
/// dominates the score (`distance_weight = 0.2`) and candidates with as
/// little as 20% snap success are still considered.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Rotation angles to try, in degrees (CCW positive)
    pub rotations_deg: Vec<f64>,

    /// Scale multipliers applied to the base scale
    pub scale_factors: Vec<f64>,

    /// Target vertex count for candidate simplification before snapping
    pub simplify_points: usize,

    /// Maximum vertex-to-node distance for a snap to count as successful
    /// (meters)
    pub max_snap_distance_m: f64,

    /// Minimum snap success rate for a candidate to be scored
    pub min_snap_rate: f64,

    /// Maximum relative distance error (|actual − target| / target)
    pub distance_tolerance: f64,

    /// Weight of the distance error in the score.
    ///
    /// `score = snap_rate × (1 − error × weight)`. 0.2 prioritizes shape
    /// fidelity; 0.5 weights shape and distance equally.
    pub distance_weight: f64,

    /// Snap rate above which a new best candidate stops the search early
    pub early_stop_snap_rate: f64,

    /// Distance error below which a new best candidate stops the search
    /// early
    pub early_stop_distance_error: f64,

    /// Number of points sampled along an uploaded SVG path
    pub sample_points: usize,

    /// Graph radius as a fraction of the target distance (for callers
    /// acquiring graphs)
    pub graph_radius_factor: f64,

    /// Upper bound on the graph radius (km)
    pub max_graph_radius_km: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rotations_deg: vec![0.0, 90.0, 180.0, 270.0],
            scale_factors: vec![0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3],
            simplify_points: 25,
            max_snap_distance_m: 300.0,
            min_snap_rate: 0.2,
            distance_tolerance: 0.3,
            distance_weight: 0.2,
            early_stop_snap_rate: 0.6,
            early_stop_distance_error: 0.25,
            sample_points: 100,
            graph_radius_factor: 0.6,
            max_graph_radius_km: 3.0,
        }
    }
}

impl MatchConfig {
    /// Radius heuristic for graph acquisition: proportional to the target
    /// distance, capped to keep downloads small.
    pub fn graph_radius_km(&self, target_distance_km: f64) -> f64 {
        (target_distance_km * self.graph_radius_factor).min(self.max_graph_radius_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.rotations_deg.len(), 4);
        assert_eq!(config.scale_factors.len(), 8);
        assert_eq!(config.simplify_points, 25);
        assert_eq!(config.max_snap_distance_m, 300.0);
        assert_eq!(config.min_snap_rate, 0.2);
        assert_eq!(config.distance_weight, 0.2);
    }

    #[test]
    fn test_graph_radius_capped() {
        let config = MatchConfig::default();
        assert!((config.graph_radius_km(2.0) - 1.2).abs() < 1e-12);
        assert!((config.graph_radius_km(10.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"min_snap_rate": 0.3}"#).unwrap();
        assert_eq!(config.min_snap_rate, 0.3);
        assert_eq!(config.simplify_points, 25);
    }
}
