//! Candidate transform generation.
//!
//! For each (rotation, scale) pair the normalized symbol is scaled,
//! rotated and anchored to the requested start coordinate, producing a
//! geographic-space polyline ready for snapping. This is the only place
//! where shape space is converted to geographic space.
//!
//! Anchor policy: the transformed vertex closest to the origin is pinned
//! to the start coordinate (first such vertex wins on exact ties). The
//! alternative of anchoring the centroid at the start would center the
//! shape on the runner instead of starting the run on its outline.

use crate::core::math::km_to_degrees;
use crate::core::polyline::resample;
use crate::core::{GeoPoint, ShapePoint};

/// A transformed, anchored, simplified candidate polyline.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Rotation applied, in degrees
    pub rotation_deg: f64,
    /// Scale multiplier applied on top of the base scale
    pub scale_factor: f64,
    /// Geographic position of the anchor vertex. Always equal to the
    /// requested start coordinate; kept so callers need not re-derive it
    /// (simplification may drop the anchor vertex from `polyline`).
    pub anchor: GeoPoint,
    /// Transformed polyline in geographic space
    pub polyline: Vec<GeoPoint>,
}

/// Base scale in angular degrees for a target distance.
///
/// The symbol has unit path length, so scaling by the target distance
/// converted to degrees makes the drawn route roughly that long.
#[inline]
pub fn base_scale_degrees(target_distance_km: f64) -> f64 {
    km_to_degrees(target_distance_km)
}

/// Generate one candidate for a (rotation, scale) pair.
///
/// Steps: uniform scale by `base × scale_factor`, CCW rotation, anchor
/// translation onto `start`, then simplification to `simplify_points`
/// vertices to suppress snapping zigzag.
pub fn generate(
    symbol_polyline: &[ShapePoint],
    start: GeoPoint,
    target_distance_km: f64,
    rotation_deg: f64,
    scale_factor: f64,
    simplify_points: usize,
) -> Candidate {
    let scale = base_scale_degrees(target_distance_km) * scale_factor;
    let angle = rotation_deg.to_radians();

    let transformed: Vec<ShapePoint> = symbol_polyline
        .iter()
        .map(|p| (*p * scale).rotate(angle))
        .collect();

    // Vertex closest to the origin becomes the anchor; strict comparison
    // keeps the first vertex on ties for deterministic output.
    let mut anchor_index = 0;
    let mut anchor_dist = f64::INFINITY;
    for (i, p) in transformed.iter().enumerate() {
        let d = p.length();
        if d < anchor_dist {
            anchor_dist = d;
            anchor_index = i;
        }
    }
    let anchor = transformed
        .get(anchor_index)
        .copied()
        .unwrap_or(ShapePoint::ZERO);

    // Shape x maps to latitude, y to longitude
    let geographic: Vec<GeoPoint> = transformed
        .iter()
        .map(|p| GeoPoint::new(start.lat + (p.x - anchor.x), start.lon + (p.y - anchor.y)))
        .collect();

    Candidate {
        rotation_deg,
        scale_factor,
        anchor: start,
        polyline: resample(&geographic, simplify_points),
    }
}
