use anyhow::{Context, Result};
use storemap::compute_stats;

use super::load_businesses;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::StatsArgs) -> Result<()> {
    let records = load_businesses(&args.businesses, args.include_unapproved)?;
    let table = compute_stats(&records);

    let json = serde_json::to_string_pretty(&table).context("[stats] Failed to serialize statistics")?;
    println!("{json}");

    Ok(())
}
