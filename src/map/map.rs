use geo::Coord;

use crate::{geom::ProjectedPath, region::MacroRegion, types::BoundaryFeature};

use super::{aggregate, centroid_of, AggregateReport, RegionPaths};

/// Everything the region map needs to draw: outlines and a label anchor per macro-region.
///
/// Built once from a snapshot of boundary features; holds no reference to them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMap {
    paths: RegionPaths,
    centroids: [Coord<f64>; MacroRegion::COUNT],
    report: AggregateReport,
}

impl RegionMap {
    /// Aggregate features by region and compute one centroid per region.
    pub fn build(features: &[BoundaryFeature]) -> Self {
        let aggregation = aggregate(features);

        let centroids = MacroRegion::ALL.map(|region| centroid_of(aggregation.paths.get(region)));

        tracing::debug!(
            features = features.len(),
            paths = aggregation.paths.num_paths(),
            "[region_map] built"
        );

        Self { paths: aggregation.paths, centroids, report: aggregation.report }
    }

    #[inline]
    pub fn paths(&self, region: MacroRegion) -> &[ProjectedPath] { self.paths.get(region) }

    #[inline]
    pub fn region_paths(&self) -> &RegionPaths { &self.paths }

    /// Label anchor in canvas coordinates. Regions without features get the canvas centre.
    #[inline]
    pub fn centroid(&self, region: MacroRegion) -> Coord<f64> { self.centroids[region.index()] }

    /// Features dropped while building.
    #[inline]
    pub fn report(&self) -> &AggregateReport { &self.report }

    /// Regions that received at least one outline, in display order.
    pub fn drawn_regions(&self) -> impl Iterator<Item = MacroRegion> + '_ {
        self.paths.iter()
            .filter(|(_, paths)| paths.iter().any(|p| !p.is_empty()))
            .map(|(region, _)| region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::FALLBACK_ANCHOR;

    fn ring(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
        points.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn regions_without_features_use_fallback() {
        let map = RegionMap::build(&[
            BoundaryFeature::polygon("39", vec![ring(&[(126.2, 33.3), (126.9, 33.3), (126.9, 33.6), (126.2, 33.6)])]),
        ]);

        assert_eq!(map.drawn_regions().collect::<Vec<_>>(), vec![MacroRegion::Jeju]);
        assert_ne!(map.centroid(MacroRegion::Jeju), FALLBACK_ANCHOR);
        for region in MacroRegion::ALL.into_iter().filter(|r| *r != MacroRegion::Jeju) {
            assert!(map.paths(region).is_empty());
            assert_eq!(map.centroid(region), FALLBACK_ANCHOR);
        }
    }

    #[test]
    fn empty_rings_are_not_drawn() {
        let map = RegionMap::build(&[
            BoundaryFeature::polygon("32", vec![Vec::new()]),
            BoundaryFeature::polygon("11", vec![ring(&[(126.9, 37.5), (127.1, 37.5), (127.1, 37.6)])]),
        ]);

        assert_eq!(map.paths(MacroRegion::Gangwon).len(), 1);
        assert_eq!(map.drawn_regions().collect::<Vec<_>>(), vec![MacroRegion::Capital]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let features = vec![
            BoundaryFeature::polygon("Daejeon", vec![ring(&[(127.3, 36.2), (127.5, 36.2), (127.5, 36.5)])]),
            BoundaryFeature::polygon("Sejong", vec![ring(&[(127.2, 36.5), (127.3, 36.5), (127.3, 36.7)])]),
        ];
        assert_eq!(RegionMap::build(&features), RegionMap::build(&features));
    }
}
