pub mod render;
pub mod stats;

use std::path::Path;

use anyhow::Result;
use storemap::{io, BusinessRecord};

/// Load the business directory, keeping only approved records unless told otherwise.
pub(crate) fn load_businesses(path: &Path, include_unapproved: bool) -> Result<Vec<BusinessRecord>> {
    let records = io::read_businesses_from_json(path)?;
    Ok(if include_unapproved { records } else { io::approved_only(records) })
}
