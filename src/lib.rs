#![doc = "Regional store map: province outlines projected onto a fixed canvas, merged into macro-regions, with per-region storage statistics"]
pub mod geom;
pub mod io;
pub mod map;
pub mod region;
pub mod stats;
pub mod types;

#[doc(inline)]
pub use geom::{project, ring_to_path, geometry_to_paths, ProjectedPath};

#[doc(inline)]
pub use map::{aggregate, centroid_of, AggregateReport, RegionMap, RegionPaths};

#[doc(inline)]
pub use region::{classify, region_of, AddressClass, MacroRegion, Province};

#[doc(inline)]
pub use stats::{compute_stats, RegionStats, RegionStatsTable};

#[doc(inline)]
pub use types::{ApprovalStatus, BoundaryFeature, BoundaryGeometry, BusinessRecord, Ring};
