//! # TerraKit Algorithms
//!
//! Geometric operations on vector data for TerraKit.
//!
//! ## Available Algorithm Categories
//!
//! - **overlay**: Boolean overlay of MultiPolygon geometries

pub mod overlay;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::overlay::{intersect, intersect_with, GeoEngine, GeometryEngine};
    pub use terrakit_core::prelude::*;
}
