//! # Rekha-Route: Shape-to-Route Matching Engine
//!
//! Given a hand-drawn shape and a target travel distance, find a
//! walkable route on a real street network that both resembles the shape
//! and has approximately the target length, anchored at a start
//! coordinate.
//!
//! ## Pipeline
//!
//! ```text
//! SVG upload ──► sample ──► normalize ──► NormalizedSymbol (stored)
//!
//! route request:
//!   for each (rotation, scale) in the candidate grid:
//!     transform + anchor ──► simplify ──► snap to graph ──► stitch ──► score
//!   keep best ──► route coordinates  (or single-point fallback)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha_route::{match_shape, GeoPoint, MatchConfig, MemoryGraph, NodeId, NormalizedSymbol, ShapePoint};
//!
//! // A normalized symbol (normally parsed from an uploaded SVG)
//! let symbol = NormalizedSymbol::from_points(
//!     "square",
//!     "square.svg",
//!     &[
//!         ShapePoint::new(0.0, 0.0),
//!         ShapePoint::new(1.0, 0.0),
//!         ShapePoint::new(1.0, 1.0),
//!         ShapePoint::new(0.0, 1.0),
//!     ],
//! )
//! .unwrap();
//!
//! // A street graph (normally loaded through a GraphProvider)
//! let mut graph = MemoryGraph::new();
//! graph.add_node(NodeId(1), GeoPoint::new(52.52, 13.40));
//!
//! let outcome = match_shape(
//!     &symbol,
//!     GeoPoint::new(52.52, 13.40),
//!     2.0,
//!     &graph,
//!     &MatchConfig::default(),
//! )
//! .unwrap();
//!
//! // A fallback outcome (single point, zero distance) means "no shape
//! // match found". It is a defined terminal state, never an error.
//! assert!(outcome.fallback);
//! ```
//!
//! ## Coordinate Spaces
//!
//! Shape space ([`ShapePoint`], origin-centered, unit path length) and
//! geographic space ([`GeoPoint`], degrees lat/lon) are separate types;
//! the candidate generator is the only conversion point. All meter
//! conversions use the deliberate flat-earth approximation in
//! [`core::math`].
//!
//! ## Graph Seam
//!
//! The engine consumes the [`StreetGraph`] trait (nearest node, shortest
//! path, node coordinate, edge length), so any provider (OSM-backed,
//! fixture, in-memory [`MemoryGraph`]) can be substituted. Acquisition
//! and caching live behind [`GraphProvider`] and are not the engine's
//! concern.

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod graph;
pub mod search;
pub mod symbol;

pub use config::MatchConfig;
pub use core::{GeoPoint, ShapePoint};
pub use error::{Error, Result};
pub use graph::{GraphProvider, MemoryGraph, NodeId, StreetGraph};
pub use search::{match_shape, MatchOutcome};
pub use symbol::store::SymbolStore;
pub use symbol::svg::parse_svg_to_points;
pub use symbol::{normalize, NormalizedSymbol, SymbolMeta};
