use std::fs::File;
use std::io;

use eyre::Result;
use tracing::info;

use fairway_engine::{refresh, RefreshRequest};
use fairway_formats::write_csv;

use crate::{load_snapshot, Config, ExportOpts};

/// Write the CSV export into `--output` or stdout.
///
#[tracing::instrument(skip(cfg))]
pub fn export_vessels(opts: &ExportOpts, cfg: &Config) -> Result<()> {
    let (_, sources, snapshot) = load_snapshot(&opts.snapshot, cfg)?;

    let request = RefreshRequest {
        sources,
        selection: opts.vessels.clone(),
        ..RefreshRequest::default()
    };
    let res = refresh(&snapshot, &request)?;
    info!("exporting {} rows", res.export.len());

    match &opts.output {
        Some(fname) => write_csv(&res.export, File::create(fname)?),
        None => write_csv(&res.export, io::stdout()),
    }
}
