//! Ring and polygon coordinate handling.
//!
//! GeoJSON carries MultiPolygon geometry as nested position arrays:
//! `coordinates = Polygon[]`, `Polygon = Ring[]`, `Ring = [x, y][]`.
//! This module converts that nested form to and from `geo-types` values,
//! repairing open rings on the way in. The clipping backend requires
//! closed rings, and an unclosed ring is a valid GeoJSON edge case, so
//! closure is mandatory rather than best effort. Rings with fewer than
//! three distinct points carry no area and are rejected instead.

use crate::error::{Error, Result};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

/// A single `[x, y]` position
pub type Position = [f64; 2];
/// Ring as an ordered position list, first == last once closed
pub type RingCoords = Vec<Position>;
/// Exterior ring followed by hole rings
pub type PolygonCoords = Vec<RingCoords>;
/// Nested coordinate form of a GeoJSON MultiPolygon
pub type MultiPolygonCoords = Vec<PolygonCoords>;

/// Close a ring in place by appending its first position when the ring
/// does not already end where it starts.
pub fn close_ring(ring: &mut RingCoords) {
    if ring.first() != ring.last() {
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
    }
}

fn distinct_points(ring: &RingCoords) -> usize {
    let mut seen: Vec<Position> = Vec::with_capacity(ring.len());
    for position in ring {
        if !seen.contains(position) {
            seen.push(*position);
        }
    }
    seen.len()
}

/// Build a closed ring, repairing an open one.
///
/// Fails with a geometry error when the ring has fewer than three
/// distinct points.
pub fn build_ring(mut ring: RingCoords) -> Result<LineString<f64>> {
    close_ring(&mut ring);
    let distinct = distinct_points(&ring);
    if distinct < 3 {
        return Err(Error::Geometry(format!(
            "ring needs at least 3 distinct points, got {}",
            distinct
        )));
    }
    Ok(LineString::new(
        ring.into_iter().map(|[x, y]| Coord { x, y }).collect(),
    ))
}

/// Build a polygon from its rings: first is the exterior, the rest holes.
pub fn build_polygon(rings: PolygonCoords) -> Result<Polygon<f64>> {
    let mut rings = rings.into_iter();
    let exterior = rings
        .next()
        .ok_or_else(|| Error::Geometry("polygon has no exterior ring".to_string()))?;
    let exterior = build_ring(exterior)?;
    let holes = rings.map(build_ring).collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, holes))
}

/// Build a MultiPolygon from nested coordinates, closing every ring.
pub fn build_multi_polygon(coords: MultiPolygonCoords) -> Result<MultiPolygon<f64>> {
    let polygons = coords
        .into_iter()
        .map(build_polygon)
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiPolygon::new(polygons))
}

/// Flatten a ring back into its position list
pub fn ring_coords(ring: &LineString<f64>) -> RingCoords {
    ring.0.iter().map(|c| [c.x, c.y]).collect()
}

/// Flatten a polygon back into its ring list
pub fn polygon_coords(polygon: &Polygon<f64>) -> PolygonCoords {
    let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
    rings.push(ring_coords(polygon.exterior()));
    rings.extend(polygon.interiors().iter().map(ring_coords));
    rings
}

/// Flatten a MultiPolygon back into the nested coordinate form
pub fn multi_polygon_coords(multi: &MultiPolygon<f64>) -> MultiPolygonCoords {
    multi.0.iter().map(polygon_coords).collect()
}
