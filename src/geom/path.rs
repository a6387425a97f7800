use std::fmt::Write;

use geo::Coord;

use crate::types::{BoundaryFeature, BoundaryGeometry};

use super::project_coord;

/// One projected ring: the canvas points it passes through and the SVG path data built from them.
///
/// Points are kept next to the serialized path so consumers (e.g. centroid estimation)
/// never have to parse coordinates back out of the string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedPath {
    points: Vec<Coord<f64>>,
    data: String,
}

impl ProjectedPath {
    /// Canvas-space points, in ring order.
    #[inline]
    pub fn points(&self) -> &[Coord<f64>] { &self.points }

    /// SVG path data: `M x,y L x,y ... Z`.
    #[inline]
    pub fn data(&self) -> &str { &self.data }

    #[inline]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Project a lon/lat ring and build its closed subpath: move to the first point,
/// line to each following point, then close.
pub fn ring_to_path(ring: &[Coord<f64>]) -> ProjectedPath {
    let points = ring.iter().map(project_coord).collect::<Vec<_>>();

    let mut data = String::with_capacity(points.len() * 16);
    if let Some((first, rest)) = points.split_first() {
        let _ = write!(data, "M{:.2},{:.2}", first.x, first.y);
        for p in rest {
            let _ = write!(data, " L{:.2},{:.2}", p.x, p.y);
        }
        data.push_str(" Z");
    }

    ProjectedPath { points, data }
}

/// One path per ring. Holes are emitted as separate outlines, not subtracted.
/// Unsupported geometry kinds yield nothing.
pub fn geometry_to_paths(geometry: &BoundaryGeometry) -> Vec<ProjectedPath> {
    match geometry {
        BoundaryGeometry::Polygon(rings) => rings.iter()
            .map(|ring| ring_to_path(ring))
            .collect(),
        BoundaryGeometry::MultiPolygon(polygons) => polygons.iter()
            .flat_map(|rings| rings.iter().map(|ring| ring_to_path(ring)))
            .collect(),
        BoundaryGeometry::Unsupported(_) => Vec::new(),
    }
}

/// Build the paths for a single feature.
#[inline]
pub fn feature_to_paths(feature: &BoundaryFeature) -> Vec<ProjectedPath> {
    geometry_to_paths(&feature.geometry)
}
