//! Geographic math helpers.
//!
//! All degree/meter conversions use the flat-earth approximation
//! (1° ≈ 111 km), which is adequate at walking-route scale away from
//! the poles. The constants live here so the approximation can be
//! upgraded to haversine in one place without touching search logic.

use super::point::{GeoPoint, ShapePoint};

/// Approximate meters per degree of latitude (and of longitude near the
/// equator). Intentionally not haversine.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Approximate kilometers per degree.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Convert a distance in kilometers to angular degrees.
#[inline]
pub fn km_to_degrees(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// Approximate planar distance in meters between two geographic points.
///
/// Computes the Euclidean delta in degrees scaled by [`METERS_PER_DEGREE`].
#[inline]
pub fn approx_distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    (dlat * dlat + dlon * dlon).sqrt() * METERS_PER_DEGREE
}

/// Arithmetic-mean centroid of a point sequence.
///
/// Returns the origin for an empty sequence.
pub fn centroid(points: &[ShapePoint]) -> ShapePoint {
    if points.is_empty() {
        return ShapePoint::ZERO;
    }
    let mut sum = ShapePoint::ZERO;
    for p in points {
        sum = sum + *p;
    }
    sum * (1.0 / points.len() as f64)
}

/// Total length of a polyline (sum of consecutive segment lengths).
pub fn path_length(points: &[ShapePoint]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
