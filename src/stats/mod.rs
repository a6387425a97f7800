mod stats;

pub use stats::{compute_stats, RegionStats, RegionStatsTable};
