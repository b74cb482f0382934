//! Point types for the two coordinate spaces.
//!
//! The matching pipeline works in two distinct spaces that must never be
//! silently mixed:
//!
//! - **Shape space** ([`ShapePoint`]): abstract 2-D coordinates of a
//!   normalized symbol, origin-centered with unit path length
//! - **Geographic space** ([`GeoPoint`]): degrees latitude/longitude used
//!   by the street graph
//!
//! Conversion between the two happens only inside the candidate generator.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in shape space (abstract 2-D coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapePoint {
    /// X coordinate (maps to latitude offset when placed geographically)
    pub x: f64,
    /// Y coordinate (maps to longitude offset when placed geographically)
    pub y: f64,
}

impl ShapePoint {
    /// Create a new shape-space point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: ShapePoint = ShapePoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &ShapePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length (magnitude) of this point as a vector from the origin
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate this point around the origin by angle (radians, CCW positive)
    #[inline]
    pub fn rotate(&self, angle: f64) -> ShapePoint {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        ShapePoint::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }
}

impl Add for ShapePoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        ShapePoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for ShapePoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        ShapePoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for ShapePoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        ShapePoint::new(self.x * scalar, self.y * scalar)
    }
}

/// A point in geographic space (degrees latitude/longitude).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
