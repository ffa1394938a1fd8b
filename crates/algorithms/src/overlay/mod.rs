//! Boolean overlay of MultiPolygon geometries.
//!
//! The overlay itself is delegated to a pluggable [`GeometryEngine`];
//! this module owns the marshaling between GeoJSON text and the
//! engine-side geometry values.

mod engine;
mod intersection;

pub use engine::{GeoEngine, GeometryEngine};
pub use intersection::{intersect, intersect_with};
