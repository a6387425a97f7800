use std::ops::AddAssign;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{region::{classify, AddressClass, MacroRegion}, types::BusinessRecord};

/// Business count and summed storage capacity for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegionStats {
    pub count: u64,
    pub small: u64,
    pub medium: u64,
    pub large: u64,
}

impl RegionStats {
    #[inline]
    pub fn capacity(&self) -> u64 { self.small + self.medium + self.large }

    #[inline]
    pub fn is_empty(&self) -> bool { self.count == 0 }
}

impl AddAssign<&BusinessRecord> for RegionStats {
    fn add_assign(&mut self, record: &BusinessRecord) {
        self.count += 1;
        self.small += record.small_capacity as u64;
        self.medium += record.medium_capacity as u64;
        self.large += record.large_capacity as u64;
    }
}

impl AddAssign<RegionStats> for RegionStats {
    fn add_assign(&mut self, other: RegionStats) {
        self.count += other.count;
        self.small += other.small;
        self.medium += other.medium;
        self.large += other.large;
    }
}

/// Per-region statistics. Every macro-region is always present, zeroed when no record
/// was classified into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionStatsTable {
    regions: [RegionStats; MacroRegion::COUNT],
    unclassified: RegionStats,
}

impl RegionStatsTable {
    #[inline]
    pub fn get(&self, region: MacroRegion) -> &RegionStats { &self.regions[region.index()] }

    /// Regions in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MacroRegion, &RegionStats)> {
        MacroRegion::ALL.into_iter().zip(self.regions.iter())
    }

    /// Records whose address matched no region.
    #[inline]
    pub fn unclassified(&self) -> &RegionStats { &self.unclassified }

    /// All records, classified or not.
    pub fn total(&self) -> RegionStats {
        let mut total = self.unclassified;
        for stats in &self.regions { total += *stats }
        total
    }
}

impl Serialize for RegionStatsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MacroRegion::COUNT + 2))?;
        for (region, stats) in self.iter() {
            map.serialize_entry(region.id(), stats)?;
        }
        map.serialize_entry("unclassified", &self.unclassified)?;
        map.serialize_entry("total", &self.total())?;
        map.end()
    }
}

/// Classify every record by its address and sum counts and capacities per region.
///
/// Location fields are ignored; approval filtering is the caller's job.
pub fn compute_stats(records: &[BusinessRecord]) -> RegionStatsTable {
    let mut table = RegionStatsTable::default();

    for record in records {
        match classify(&record.address) {
            AddressClass::Region(region) => table.regions[region.index()] += record,
            AddressClass::Unclassified => {
                tracing::debug!(id = %record.id, address = %record.address, "[stats] address matched no region");
                table.unclassified += record;
            }
        }
    }

    if !table.unclassified.is_empty() {
        tracing::info!(count = table.unclassified.count, "[stats] businesses left unclassified");
    }

    table
}
