//! Module describing all possible commands and sub-commands to the `fairwayctl` main driver
//!
//! Every command works on a snapshot file, a CSV dump of the vessel tracks table:
//!
//! - `view` prints what the dashboard would show for a time window
//! - `export` writes the positions of the selected vessels as CSV
//! - `project` shows the details and projected path of one vessel
//! - `list` gives the sources and vessels present in the file
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// debug mode (hierarchical traces).
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Also log into this directory.
    #[clap(short = 'L', long)]
    pub log_dir: Option<String>,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `view [--hours N] [-S source]... [-g geojson] [-s vessel]... [--now epoch] FILE`
/// `export -V vessel... [-o FILE] FILE`
/// `project [-m minutes] FILE VESSEL`
/// `list (sources|vessels) FILE`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Summary and table of the vessels in view
    View(ViewOpts),
    /// CSV export of the selected vessels
    Export(ExportOpts),
    /// Details and projected path of one vessel
    Project(ProjectOpts),
    /// List sources or vessels
    List(ListOpts),
    /// List all package versions
    Version,
}

// ------

/// Which snapshot and which part of it.
///
#[derive(Clone, Debug, Parser)]
pub struct SnapshotOpts {
    /// How many hours back from `--now`.
    #[clap(short = 'H', long)]
    pub hours: Option<f64>,
    /// End of the window as an epoch, default is the latest report in the file.
    #[clap(long)]
    pub now: Option<i64>,
    /// Keep only this source, can be repeated.
    #[clap(short = 'S', long = "source")]
    pub sources: Vec<String>,
    /// Snapshot file (CSV).
    pub file: PathBuf,
}

#[derive(Debug, Parser)]
pub struct ViewOpts {
    #[clap(flatten)]
    pub snapshot: SnapshotOpts,
    /// Geofence as a GeoJSON polygon.
    #[clap(short = 'g', long)]
    pub geofence: Option<PathBuf>,
    /// Draw only these vessels, in this order.
    #[clap(short = 's', long = "select")]
    pub selection: Vec<String>,
    /// Dump the drawable tracks as JSON instead of the table.
    #[clap(short = 'j', long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct ExportOpts {
    #[clap(flatten)]
    pub snapshot: SnapshotOpts,
    /// Vessels to export, in this order.
    #[clap(short = 'V', long = "vessel", required = true)]
    pub vessels: Vec<String>,
    /// Output file, default is stdout.
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ProjectOpts {
    #[clap(flatten)]
    pub snapshot: SnapshotOpts,
    /// Projection horizon.
    #[clap(short = 'm', long)]
    pub minutes: Option<f64>,
    /// Vessel name.
    pub vessel: String,
}

// ------

#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(subcommand)]
    pub cmd: ListSubCommand,
}

#[derive(Debug, Parser)]
pub enum ListSubCommand {
    /// List the sources in the file
    Sources(ListFileOpts),
    /// List the vessels seen during the window
    Vessels(SnapshotOpts),
}

#[derive(Debug, Parser)]
pub struct ListFileOpts {
    /// Snapshot file (CSV).
    pub file: PathBuf,
}
