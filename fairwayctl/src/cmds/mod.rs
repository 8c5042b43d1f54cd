//! Implementation of the sub-commands.
//!
//! All of them read the snapshot through a `CsvStore` then hand it to the engine.
//!

use eyre::Result;
use tracing::{debug, trace};

use fairway_common::TimeWindow;
use fairway_engine::{fetch_snapshot, time_bounds, CsvStore, Snapshot, SourceFilter};

use crate::{Config, SnapshotOpts};

pub use export::*;
pub use list::*;
pub use project::*;
pub use view::*;

mod export;
mod list;
mod project;
mod view;

/// Window ending at `--now`, or at the latest report of the file when the file is a frozen table.
///
/// A file without any valid report gives a window ending now.
///
#[tracing::instrument(skip(cfg))]
pub fn resolve_window(store: &CsvStore, opts: &SnapshotOpts, cfg: &Config) -> Result<TimeWindow> {
    let hours = opts.hours.unwrap_or(cfg.window_hours);
    trace!("now = {:?}, hours = {hours}", opts.now);

    let window = match opts.now {
        Some(now) => TimeWindow::last_hours(now, hours),
        None => match time_bounds(&store.read_all()?) {
            Some((_, last)) => TimeWindow::last_hours(last, hours),
            None => TimeWindow::since_hours(hours),
        },
    };
    Ok(window)
}

/// Everything a command needs from the file.
///
pub fn load_snapshot(opts: &SnapshotOpts, cfg: &Config) -> Result<(TimeWindow, SourceFilter, Snapshot)> {
    let store = CsvStore::new(&opts.file);

    let window = resolve_window(&store, opts, cfg)?;
    let sources = cfg.source_filter(&opts.sources);
    let snapshot = fetch_snapshot(&store, &window, &sources);
    debug!("{} reports in {}", snapshot.reports.len(), window.describe());

    Ok((window, sources, snapshot))
}
