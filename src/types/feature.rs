use std::sync::Arc;

use geo::Coord;

/// Ordered (lon, lat) points of one outline. Closure is implicit: the first
/// and last point need not coincide.
pub type Ring = Vec<Coord<f64>>;

/// Geometry of one administrative unit.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    /// Rings of a single polygon; the first ring is the outer boundary, the rest are holes.
    Polygon(Vec<Ring>),
    /// One ring list per member polygon.
    MultiPolygon(Vec<Vec<Ring>>),
    /// Any other geometry kind, carrying the source type name. Draws nothing.
    Unsupported(String),
}

impl BoundaryGeometry {
    pub fn kind(&self) -> &str {
        match self {
            BoundaryGeometry::Polygon(_) => "Polygon",
            BoundaryGeometry::MultiPolygon(_) => "MultiPolygon",
            BoundaryGeometry::Unsupported(kind) => kind.as_str(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, BoundaryGeometry::Unsupported(_))
    }

    /// Number of rings across all member polygons.
    pub fn num_rings(&self) -> usize {
        match self {
            BoundaryGeometry::Polygon(rings) => rings.len(),
            BoundaryGeometry::MultiPolygon(polygons) => polygons.iter().map(Vec::len).sum(),
            BoundaryGeometry::Unsupported(_) => 0,
        }
    }
}

/// One province-level shape, keyed by its province id.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub province_id: Arc<str>, // e.g. "11", "Seoul", "서울특별시"
    pub geometry: BoundaryGeometry,
}

impl BoundaryFeature {
    pub fn new(province_id: impl Into<Arc<str>>, geometry: BoundaryGeometry) -> Self {
        Self { province_id: province_id.into(), geometry }
    }

    pub fn polygon(province_id: impl Into<Arc<str>>, rings: Vec<Ring>) -> Self {
        Self::new(province_id, BoundaryGeometry::Polygon(rings))
    }

    pub fn multi_polygon(province_id: impl Into<Arc<str>>, polygons: Vec<Vec<Ring>>) -> Self {
        Self::new(province_id, BoundaryGeometry::MultiPolygon(polygons))
    }
}
