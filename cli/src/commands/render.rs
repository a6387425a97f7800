use anyhow::Result;
use storemap::{compute_stats, io, RegionMap};

use super::load_businesses;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    tracing::info!(path = %args.boundaries.display(), "[render] loading boundaries");
    let features = io::read_boundaries_from_geojson(&args.boundaries, &args.id_property)?;

    let map = RegionMap::build(&features);
    let report = map.report();
    tracing::info!(
        kept = report.kept,
        dropped = report.dropped(),
        regions = map.drawn_regions().count(),
        "[render] regions aggregated"
    );

    let stats = match &args.businesses {
        Some(path) => {
            tracing::info!(path = %path.display(), "[render] loading businesses");
            Some(compute_stats(&load_businesses(path, args.include_unapproved)?))
        }
        None => None,
    };

    tracing::info!(path = %args.output.display(), "[render] writing svg");
    map.to_svg(&args.output, stats.as_ref(), args.force)?;

    Ok(())
}
