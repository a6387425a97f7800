use std::sync::Arc;

use crate::{geom::{feature_to_paths, ProjectedPath}, region::{region_of, MacroRegion}, types::BoundaryFeature};

/// Projected outlines grouped by macro-region, in input feature order within each region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionPaths {
    paths: [Vec<ProjectedPath>; MacroRegion::COUNT],
}

impl RegionPaths {
    #[inline]
    pub fn get(&self, region: MacroRegion) -> &[ProjectedPath] { &self.paths[region.index()] }

    /// Regions in display order, including regions with no paths.
    pub fn iter(&self) -> impl Iterator<Item = (MacroRegion, &[ProjectedPath])> {
        MacroRegion::ALL.into_iter().zip(self.paths.iter().map(Vec::as_slice))
    }

    /// SVG path data for every ring of a region.
    pub fn data(&self, region: MacroRegion) -> Vec<&str> {
        self.get(region).iter().map(ProjectedPath::data).collect()
    }

    pub fn num_paths(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }
}

/// Features left off the map during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateReport {
    /// Features whose province id resolved to a region.
    pub kept: usize,
    /// Province ids that resolved to no region, in input order.
    pub unresolved_provinces: Vec<Arc<str>>,
    /// Features with a resolvable province but an unsupported geometry kind.
    pub unsupported_geometries: usize,
}

impl AggregateReport {
    #[inline]
    pub fn dropped(&self) -> usize { self.unresolved_provinces.len() + self.unsupported_geometries }

    #[inline]
    pub fn is_clean(&self) -> bool { self.dropped() == 0 }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregation {
    pub paths: RegionPaths,
    pub report: AggregateReport,
}

/// Group features by macro-region and append each feature's ring paths to its region.
///
/// Features with an unknown province are dropped; unsupported geometry contributes no paths.
/// Both cases are counted in the report rather than treated as errors.
pub fn aggregate(features: &[BoundaryFeature]) -> Aggregation {
    let mut out = Aggregation::default();

    for feature in features {
        let Some(region) = region_of(&feature.province_id) else {
            tracing::debug!(province = %feature.province_id, "[aggregate] unknown province, feature dropped");
            out.report.unresolved_provinces.push(feature.province_id.clone());
            continue;
        };

        if !feature.geometry.is_supported() {
            tracing::debug!(
                province = %feature.province_id,
                kind = feature.geometry.kind(),
                "[aggregate] unsupported geometry, feature skipped"
            );
            out.report.unsupported_geometries += 1;
            continue;
        }

        out.report.kept += 1;
        out.paths.paths[region.index()].extend(feature_to_paths(feature));
    }

    if !out.report.is_clean() {
        tracing::warn!(
            dropped = out.report.dropped(),
            unresolved = out.report.unresolved_provinces.len(),
            unsupported = out.report.unsupported_geometries,
            "[aggregate] some boundary features were left off the map"
        );
    }

    out
}
