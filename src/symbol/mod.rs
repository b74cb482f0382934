//! Symbol ingestion and normalization.
//!
//! A symbol is a user-drawn shape reduced to a canonical polyline:
//! origin-centered (centroid at the origin) and unit path length. The
//! candidate generator relies on both invariants: the base scale math in
//! the search assumes the symbol's total length is exactly 1.0.

pub mod store;
pub mod svg;

use serde::{Deserialize, Serialize};

use crate::core::math::{centroid, path_length};
use crate::core::ShapePoint;
use crate::error::{Error, Result};

/// Metadata for an uploaded symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymbolMeta {
    /// Unique symbol identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Original uploaded filename
    pub original_filename: String,
    /// Number of points in the normalized polyline
    pub num_points: usize,
    /// Total path length after normalization (1.0 by construction)
    pub normalized_length: f64,
}

/// A normalized symbol: metadata plus its shape-space polyline.
///
/// Created once at upload time and never mutated afterwards; route
/// requests reload it by id from the [`store`](crate::symbol::store).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalizedSymbol {
    /// Symbol metadata
    pub meta: SymbolMeta,
    /// Normalized polyline in shape space
    pub polyline: Vec<ShapePoint>,
}

impl NormalizedSymbol {
    /// Normalize a raw point sequence and wrap it with metadata.
    pub fn from_points(
        id: impl Into<String>,
        original_filename: impl Into<String>,
        points: &[ShapePoint],
    ) -> Result<Self> {
        let polyline = normalize(points)?;
        let id = id.into();
        Ok(Self {
            meta: SymbolMeta {
                name: id.clone(),
                id,
                original_filename: original_filename.into(),
                num_points: polyline.len(),
                normalized_length: 1.0,
            },
            polyline,
        })
    }
}

/// Normalize a polyline: translate its centroid to the origin, then scale
/// so the total path length is exactly 1.0.
///
/// Fails with [`Error::DegenerateShape`] when fewer than 2 points are
/// given or the total length is zero (all points coincide).
pub fn normalize(points: &[ShapePoint]) -> Result<Vec<ShapePoint>> {
    if points.len() < 2 {
        return Err(Error::DegenerateShape(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }

    let center = centroid(points);
    let centered: Vec<ShapePoint> = points.iter().map(|p| *p - center).collect();

    let total_length = path_length(&centered);
    if total_length == 0.0 {
        return Err(Error::DegenerateShape(
            "polyline has zero length".to_string(),
        ));
    }

    Ok(centered
        .into_iter()
        .map(|p| p * (1.0 / total_length))
        .collect())
}
