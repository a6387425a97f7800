use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Regional store map CLI
#[derive(Parser, Debug)]
#[command(name = "storemap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the macro-region map to SVG
    Render(RenderArgs),

    /// Print per-region business statistics as JSON
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Province boundaries (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Output SVG file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Business directory (JSON array) used to label regions with statistics
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub businesses: Option<PathBuf>,

    /// Feature property holding the province id
    #[arg(long, default_value = storemap::io::DEFAULT_ID_PROPERTY)]
    pub id_property: String,

    /// Count businesses that are not yet approved
    #[arg(long)]
    pub include_unapproved: bool,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Business directory (JSON array)
    #[arg(value_hint = ValueHint::FilePath)]
    pub businesses: PathBuf,

    /// Count businesses that are not yet approved
    #[arg(long)]
    pub include_unapproved: bool,
}
