use std::path::Path;

use anyhow::{anyhow, Context, Result};
use geo::Coord;
use serde_json::Value;

use crate::types::{BoundaryFeature, BoundaryGeometry, Ring};

/// Property holding the province code in the common province boundary files.
pub const DEFAULT_ID_PROPERTY: &str = "code";

/// Read boundary features from a GeoJSON file.
pub fn read_boundaries_from_geojson(path: &Path, id_property: &str) -> Result<Vec<BoundaryFeature>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[io::geojson] Failed to read {}", path.display()))?;
    read_boundaries_from_geojson_bytes(&bytes, id_property)
        .with_context(|| format!("[io::geojson] Failed to load boundaries from {}", path.display()))
}

/// Read boundary features from GeoJSON FeatureCollection bytes.
///
/// The province id is taken from `properties[id_property]` (strings as-is, numbers rendered).
/// Features without an id are skipped. Geometry kinds other than Polygon and MultiPolygon
/// are kept as [`BoundaryGeometry::Unsupported`] so aggregation can account for them.
pub fn read_boundaries_from_geojson_bytes(bytes: &[u8], id_property: &str) -> Result<Vec<BoundaryFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;

    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson] Expected a FeatureCollection with a `features` array"))?;

    let mut out = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let Some(province_id) = property_as_id(&feature["properties"][id_property]) else {
            tracing::debug!(index = idx, property = id_property, "[io::geojson] feature has no province id, skipped");
            continue;
        };

        let geometry = parse_geometry(&feature["geometry"]);

        out.push(BoundaryFeature::new(province_id, geometry));
    }

    tracing::debug!(features = out.len(), "[io::geojson] boundaries loaded");
    Ok(out)
}

fn property_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a GeoJSON geometry object. Malformed coordinate arrays degrade to empty ring lists
/// so a bad feature never costs the rest of the collection.
fn parse_geometry(geometry: &Value) -> BoundaryGeometry {
    let kind = geometry["type"].as_str().unwrap_or("null");
    let coords = &geometry["coordinates"];

    match kind {
        "Polygon" => BoundaryGeometry::Polygon(parse_polygon_coords(coords)),
        "MultiPolygon" => {
            let polygons = match coords.as_array() {
                Some(polygons) => polygons.iter().map(parse_polygon_coords).collect(),
                None => {
                    tracing::debug!("[io::geojson] MultiPolygon coordinates are not an array");
                    Vec::new()
                }
            };
            BoundaryGeometry::MultiPolygon(polygons)
        }
        other => BoundaryGeometry::Unsupported(other.to_string()),
    }
}

/// Parse the rings of one polygon: `[[[lon, lat], ...], ...]`. Non-array rings are skipped.
fn parse_polygon_coords(rings: &Value) -> Vec<Ring> {
    let Some(rings) = rings.as_array() else {
        tracing::debug!("[io::geojson] polygon coordinates are not an array of rings");
        return Vec::new();
    };

    rings.iter()
        .filter_map(|ring| ring.as_array().map(|points| parse_ring_coords(points)))
        .collect()
}

/// Parse a ring of `[lon, lat]` positions. Positions without two numbers are skipped;
/// the ring is otherwise kept exactly as written (no closing point is added or removed).
fn parse_ring_coords(points: &[Value]) -> Ring {
    let mut ring = Vec::with_capacity(points.len());

    for position in points {
        let Some(pair) = position.as_array() else { continue };
        let (Some(x), Some(y)) = (pair.first().and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) else {
            tracing::debug!(position = %position, "[io::geojson] invalid position skipped");
            continue;
        };
        ring.push(Coord { x, y });
    }

    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "code": "11", "name": "서울특별시", "name_eng": "Seoul" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[126.8, 37.4], [127.2, 37.4], [127.2, 37.7], [126.8, 37.7], [126.8, 37.4]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "code": 39, "name_eng": "Jeju-do" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[126.1, 33.2], [126.9, 33.2], [126.9, 33.6]]],
                        [[[126.2, 33.1], [126.3, 33.1], [126.3, 33.2]], [[126.22, 33.12], [126.25, 33.12], [126.25, 33.15]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "code": "32" },
                "geometry": { "type": "LineString", "coordinates": [[128.0, 37.0], [129.0, 38.0]] }
            },
            {
                "type": "Feature",
                "properties": { "name": "nameless" },
                "geometry": { "type": "Polygon", "coordinates": [] }
            }
        ]
    }"#;

    #[test]
    fn reads_polygons_and_multipolygons() {
        let features = read_boundaries_from_geojson_bytes(SAMPLE.as_bytes(), DEFAULT_ID_PROPERTY).unwrap();
        assert_eq!(features.len(), 3);

        assert_eq!(&*features[0].province_id, "11");
        match &features[0].geometry {
            BoundaryGeometry::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 5);
                assert_eq!(rings[0][1], Coord { x: 127.2, y: 37.4 });
            }
            other => panic!("expected polygon, got {other:?}"),
        }

        assert_eq!(&*features[1].province_id, "39");
        assert_eq!(features[1].geometry.kind(), "MultiPolygon");
        assert_eq!(features[1].geometry.num_rings(), 3);

        assert_eq!(features[2].geometry, BoundaryGeometry::Unsupported("LineString".into()));
    }

    #[test]
    fn alternate_id_property() {
        let features = read_boundaries_from_geojson_bytes(SAMPLE.as_bytes(), "name_eng").unwrap();
        let ids = features.iter().map(|f| &*f.province_id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["Seoul", "Jeju-do"]);
    }

    #[test]
    fn rejects_non_collections() {
        assert!(read_boundaries_from_geojson_bytes(b"not json", DEFAULT_ID_PROPERTY).is_err());
        assert!(read_boundaries_from_geojson_bytes(br#"{"type": "Feature"}"#, DEFAULT_ID_PROPERTY).is_err());
    }

    #[test]
    fn invalid_positions_are_skipped() {
        let collection = r#"{"features": [
            {"properties": {"code": "11"},
             "geometry": {"type": "Polygon", "coordinates": [[[126.8, 37.4], [127.2, 37.4], [127.2, 37.7]]]}},
            {"properties": {"code": "39"},
             "geometry": {"type": "Polygon", "coordinates": [[["x", 33.2], [126.9, 33.2], [126.9], [126.9, 33.6]]]}}
        ]}"#;
        let features = read_boundaries_from_geojson_bytes(collection.as_bytes(), DEFAULT_ID_PROPERTY).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].geometry.num_rings(), 1);
        match &features[1].geometry {
            BoundaryGeometry::Polygon(rings) => {
                assert_eq!(rings[0], vec![Coord { x: 126.9, y: 33.2 }, Coord { x: 126.9, y: 33.6 }]);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn non_array_coordinates_degrade_to_empty() {
        let collection = r#"{"features": [
            {"properties": {"code": "11"},
             "geometry": {"type": "Polygon", "coordinates": [[[126.8, 37.4], [127.2, 37.4], [127.2, 37.7]]]}},
            {"properties": {"code": "39"}, "geometry": {"type": "Polygon", "coordinates": null}},
            {"properties": {"code": "38"}, "geometry": {"type": "MultiPolygon", "coordinates": [null, [[[128.0, 35.0]]]]}}
        ]}"#;
        let features = read_boundaries_from_geojson_bytes(collection.as_bytes(), DEFAULT_ID_PROPERTY).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].geometry.num_rings(), 1);
        assert_eq!(features[1].geometry, BoundaryGeometry::Polygon(Vec::new()));
        assert_eq!(features[2].geometry, BoundaryGeometry::MultiPolygon(vec![Vec::new(), vec![vec![Coord { x: 128.0, y: 35.0 }]]]));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provinces.geojson");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(read_boundaries_from_geojson(&path, DEFAULT_ID_PROPERTY).unwrap().len(), 3);
    }
}
