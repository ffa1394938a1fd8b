//! GeoJSON MultiPolygon codec.
//!
//! Reading goes through a `serde_json::Value` walk rather than a typed
//! deserialize so that text which is not JSON at all reports a parse
//! error, while well-formed JSON with the wrong geometry type or the
//! wrong coordinate nesting reports a structure error.

use crate::error::{Error, Result};
use crate::geometry::{MultiPolygonCoords, PolygonCoords, Position, RingCoords};
use serde::Serialize;
use serde_json::Value;

const MULTI_POLYGON: &str = "MultiPolygon";

#[derive(Serialize)]
struct MultiPolygonDocument<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: &'a MultiPolygonCoords,
}

/// Parse GeoJSON MultiPolygon text into nested coordinates.
pub fn parse_multi_polygon(text: &str) -> Result<MultiPolygonCoords> {
    let document: Value = serde_json::from_str(text)?;
    let object = document
        .as_object()
        .ok_or_else(|| Error::Structure("expected a GeoJSON geometry object".to_string()))?;

    match object.get("type").and_then(Value::as_str) {
        Some(MULTI_POLYGON) => {}
        Some(other) => {
            return Err(Error::Structure(format!(
                "expected geometry type {:?}, got {:?}",
                MULTI_POLYGON, other
            )))
        }
        None => return Err(Error::Structure("missing \"type\" member".to_string())),
    }

    let coordinates = object
        .get("coordinates")
        .ok_or_else(|| Error::Structure("missing \"coordinates\" member".to_string()))?;

    as_array(coordinates, "coordinates")?
        .iter()
        .map(parse_polygon)
        .collect()
}

/// Serialize nested coordinates as GeoJSON MultiPolygon text.
///
/// An empty collection serializes with an empty coordinates array,
/// never null.
pub fn write_multi_polygon(coords: &MultiPolygonCoords) -> Result<String> {
    let document = MultiPolygonDocument {
        kind: MULTI_POLYGON,
        coordinates: coords,
    };
    Ok(serde_json::to_string(&document)?)
}

fn as_array<'a>(value: &'a Value, context: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::Structure(format!("{} must be an array", context)))
}

fn parse_polygon(value: &Value) -> Result<PolygonCoords> {
    as_array(value, "polygon")?.iter().map(parse_ring).collect()
}

fn parse_ring(value: &Value) -> Result<RingCoords> {
    as_array(value, "ring")?.iter().map(parse_position).collect()
}

fn parse_position(value: &Value) -> Result<Position> {
    let members = as_array(value, "position")?;
    // GeoJSON allows a third (elevation) member; anything beyond x/y is
    // dropped.
    if members.len() < 2 {
        return Err(Error::Structure(format!(
            "position needs 2 members, got {}",
            members.len()
        )));
    }
    let x = members[0]
        .as_f64()
        .ok_or_else(|| Error::Structure("position members must be numbers".to_string()))?;
    let y = members[1]
        .as_f64()
        .ok_or_else(|| Error::Structure("position members must be numbers".to_string()))?;
    Ok([x, y])
}
