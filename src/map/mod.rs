mod aggregation;
mod centroid;
mod io;
mod map;

pub use aggregation::{aggregate, AggregateReport, Aggregation, RegionPaths};
pub use centroid::{centroid_of, mean_point};
pub use map::RegionMap;
