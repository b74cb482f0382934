//! Route export formats.

pub mod gpx;

pub use gpx::{gpx_for_route, write_gpx};
