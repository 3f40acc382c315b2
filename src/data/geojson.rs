//! GeoJSON intake
//!
//! Turns a `FeatureCollection`, a single `Feature` or a bare geometry into
//! [`GeographyFeature`]s backed by `geo_types` geometries.

use crate::data::feature::GeographyFeature;
use crate::{MapError, Result};
use geo_types::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON position; extra ordinates such as elevation are ignored
pub type Position = Vec<f64>;

/// GeoJSON geometry objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with optional geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

fn coord(position: &Position) -> Result<Coord<f64>> {
    match position.as_slice() {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
        _ => Err(MapError::InvalidCoordinates(format!(
            "position {:?} needs two finite ordinates",
            position
        ))),
    }
}

fn line(positions: &[Position]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(coord)
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn polygon(rings: &[Vec<Position>]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| line(ring));
    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => LineString::new(vec![]),
    };
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

impl GeoJsonGeometry {
    /// Converts to a `geo_types` geometry, rejecting malformed positions
    pub fn to_geometry(&self) -> Result<Geometry<f64>> {
        Ok(match self {
            GeoJsonGeometry::Point { coordinates } => Point::from(coord(coordinates)?).into(),
            GeoJsonGeometry::LineString { coordinates } => line(coordinates)?.into(),
            GeoJsonGeometry::Polygon { coordinates } => polygon(coordinates)?.into(),
            GeoJsonGeometry::MultiPoint { coordinates } => MultiPoint::new(
                coordinates
                    .iter()
                    .map(|p| coord(p).map(Point::from))
                    .collect::<Result<_>>()?,
            )
            .into(),
            GeoJsonGeometry::MultiLineString { coordinates } => MultiLineString::new(
                coordinates
                    .iter()
                    .map(|l| line(l))
                    .collect::<Result<_>>()?,
            )
            .into(),
            GeoJsonGeometry::MultiPolygon { coordinates } => MultiPolygon::new(
                coordinates
                    .iter()
                    .map(|p| polygon(p))
                    .collect::<Result<_>>()?,
            )
            .into(),
            GeoJsonGeometry::GeometryCollection { geometries } => {
                Geometry::GeometryCollection(GeometryCollection::new_from(
                    geometries
                        .iter()
                        .map(GeoJsonGeometry::to_geometry)
                        .collect::<Result<_>>()?,
                ))
            }
        })
    }
}

/// Parses a GeoJSON document into features.
///
/// Features without geometry are skipped; positional keys keep the index the
/// feature had in the source collection.
pub fn parse_features(json: &str) -> Result<Vec<GeographyFeature>> {
    let document: Value = serde_json::from_str(json)?;
    features_from_value(document)
}

pub fn features_from_value(document: Value) -> Result<Vec<GeographyFeature>> {
    let kind = document
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| MapError::ParseError("GeoJSON object has no \"type\"".to_string()))?;

    match kind {
        "FeatureCollection" => {
            let features = match document.get("features") {
                Some(Value::Array(items)) => items.clone(),
                _ => {
                    return Err(MapError::ParseError(
                        "FeatureCollection without a \"features\" array".to_string(),
                    ))
                }
            };
            let mut parsed = Vec::with_capacity(features.len());
            for (index, item) in features.into_iter().enumerate() {
                let feature: GeoJsonFeature = serde_json::from_value(item)?;
                if let Some(feature) = convert_feature(feature, index)? {
                    parsed.push(feature);
                }
            }
            log::debug!("parsed {} geographies", parsed.len());
            Ok(parsed)
        }
        "Feature" => {
            let feature: GeoJsonFeature = serde_json::from_value(document)?;
            Ok(convert_feature(feature, 0)?.into_iter().collect())
        }
        _ => {
            let geometry: GeoJsonGeometry = serde_json::from_value(document)?;
            Ok(vec![GeographyFeature::new(
                geometry.to_geometry()?,
                Map::new(),
                None,
                0,
            )])
        }
    }
}

fn convert_feature(feature: GeoJsonFeature, index: usize) -> Result<Option<GeographyFeature>> {
    let Some(geometry) = feature.geometry else {
        log::debug!("skipping feature {} without geometry", index);
        return Ok(None);
    };
    Ok(Some(GeographyFeature::new(
        geometry.to_geometry()?,
        feature.properties.unwrap_or_default(),
        feature.id,
        index,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "FRA",
                    "properties": { "name": "France" },
                    "geometry": { "type": "Point", "coordinates": [2.35, 48.85, 35.0] }
                },
                { "type": "Feature", "properties": { "name": "Nowhere" }, "geometry": null },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
                    }
                }
            ]
        }"#;

        let features = parse_features(json).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].key, "FRA");
        assert_eq!(features[1].key, "geography-2");
        assert!(matches!(features[1].geometry, Geometry::Polygon(_)));
    }

    #[test]
    fn test_parse_bare_geometry() {
        let features =
            parse_features(r#"{ "type": "LineString", "coordinates": [[0, 0], [10, 5]] }"#)
                .unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].key, "geography-0");
    }

    #[test]
    fn test_parse_geometry_collection() {
        let json = r#"{
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [1, 2] },
                { "type": "LineString", "coordinates": [[0, 0], [10, 5]] }
            ]
        }"#;
        let features = parse_features(json).unwrap();
        assert_eq!(features.len(), 1);
        match &features[0].geometry {
            Geometry::GeometryCollection(collection) => {
                assert_eq!(collection.len(), 2);
                assert!(matches!(collection.0[0], Geometry::Point(_)));
            }
            other => panic!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            parse_features(r#"{ "type": "Point", "coordinates": [1] }"#),
            Err(MapError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            parse_features(r#"{ "features": [] }"#),
            Err(MapError::ParseError(_))
        ));
        assert!(parse_features("[1, 2").is_err());
    }
}
