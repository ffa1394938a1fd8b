//! MultiPolygon intersection over GeoJSON text.
//!
//! Marshaling pipeline: GeoJSON text -> nested coordinates -> closed
//! geo-types rings -> engine intersection -> nested coordinates ->
//! GeoJSON text. Open rings are repaired on the way in; an empty
//! intersection serializes with an empty coordinates array.

use crate::overlay::engine::{GeoEngine, GeometryEngine};
use terrakit_core::geojson::{parse_multi_polygon, write_multi_polygon};
use terrakit_core::geometry::{build_multi_polygon, multi_polygon_coords};
use terrakit_core::Result;

/// Intersect two GeoJSON MultiPolygon documents with the default engine.
pub fn intersect(a: &str, b: &str) -> Result<String> {
    intersect_with(&GeoEngine, a, b)
}

/// Intersect two GeoJSON MultiPolygon documents with a caller-supplied
/// engine.
pub fn intersect_with<E: GeometryEngine>(engine: &E, a: &str, b: &str) -> Result<String> {
    let left = build_multi_polygon(parse_multi_polygon(a)?)?;
    let right = build_multi_polygon(parse_multi_polygon(b)?)?;
    let result = engine.intersection(&left, &right)?;
    write_multi_polygon(&multi_polygon_coords(&result))
}
