//! # TerraKit Core
//!
//! Core types, coordinate conversion and GeoJSON I/O for the TerraKit
//! geospatial utilities.
//!
//! This crate provides:
//! - DMS coordinate parsing and decimal-degree conversion
//! - Ring/polygon coordinate model with automatic ring closure
//! - GeoJSON MultiPolygon codec
//! - Distance-ring HTML map writer
//! - Numeric helpers (Gini coefficient, lenient integer parsing)

pub mod dms;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod io;
pub mod stats;

pub use dms::{convert, Dms, Hemisphere};
pub use error::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::dms::{convert, parse_pair, Dms, Hemisphere};
    pub use crate::error::{Error, Result};
    pub use crate::geojson::{parse_multi_polygon, write_multi_polygon};
    pub use crate::geometry::{build_multi_polygon, multi_polygon_coords, MultiPolygonCoords};
}
