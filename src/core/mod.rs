//! Fundamental geometry types and helpers.

pub mod math;
pub mod point;
pub mod polyline;

pub use point::{GeoPoint, ShapePoint};
