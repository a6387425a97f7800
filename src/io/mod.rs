//! Format-specific reading and writing.
//!
//! - `geojson` - boundary features from a GeoJSON FeatureCollection
//! - `json` - business directory records
//! - `svg` - SVG writer and colors for map export
//! - `fs` - atomic output files

mod fs;
mod geojson;
mod json;
pub(crate) mod svg;

pub use fs::{assert_not_stdout, open_for_write, PendingWrite};
pub use geojson::{read_boundaries_from_geojson, read_boundaries_from_geojson_bytes, DEFAULT_ID_PROPERTY};
pub use json::{approved_only, read_businesses_from_json, read_businesses_from_json_bytes};
