//! Geometry engine seam.

use geo::BooleanOps;
use geo_types::MultiPolygon;
use terrakit_core::Result;

/// Narrow interface over the polygon-clipping backend.
///
/// Implementations receive geometries whose rings are already closed and
/// validated, and return the boolean intersection. Keeping the seam this
/// small lets the marshaling layer be exercised against a stub backend.
pub trait GeometryEngine {
    /// Compute the boolean intersection of two MultiPolygons
    fn intersection(
        &self,
        a: &MultiPolygon<f64>,
        b: &MultiPolygon<f64>,
    ) -> Result<MultiPolygon<f64>>;
}

/// Default engine backed by the `geo` crate's clipping implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEngine;

impl GeometryEngine for GeoEngine {
    fn intersection(
        &self,
        a: &MultiPolygon<f64>,
        b: &MultiPolygon<f64>,
    ) -> Result<MultiPolygon<f64>> {
        Ok(a.intersection(b))
    }
}
